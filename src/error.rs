/// Errors raised by distance, intersection and bounding box calculations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Origins of both bearing lines are identical (you're already at the intersection)")]
    CoincidentOrigins,

    #[error("Origins of both bearing lines are antipodal, the intersection is undefined")]
    AntipodalOrigins,

    #[error("Bearing lines are parallel or lie on the same great circle and never cross ahead")]
    Parallel,

    #[error(
        "Bearing lines probably diverge (intersection is {distance_a_km:.1} km and \
         {distance_b_km:.1} km away, more than a quarter of the Earth's circumference)"
    )]
    ProbableDivergence {
        distance_a_km: f64,
        distance_b_km: f64,
    },

    #[error("No points available to compute a bounding box")]
    EmptyInput,
}

impl Error {
    /// Whether this error comes from degenerate geometry of the input lines
    ///
    /// These are the errors that `IntersectOptions::ignore_errors` turns into
    /// a suppressed result.
    pub fn is_degenerate_geometry(&self) -> bool {
        matches!(
            self,
            Error::CoincidentOrigins | Error::AntipodalOrigins | Error::Parallel
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
