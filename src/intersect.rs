//! Great-circle intersection of two bearing lines
//!
//! The construction follows the "intersecting radials" formula of Ed
//! Williams' Aviation Formulary: solve the spherical triangle formed by the
//! two origins and the intersection, then project forward from the first
//! origin. Results are only as accurate as the spherical Earth model.

use crate::distance::{QUARTER_CIRCUMFERENCE_KM, central_angle, haversine_distance};
use crate::error::{Error, Result};
use crate::types::{BearingLine, GeoPoint};
use crate::utils::trig::{acos_clamped, asin_clamped, wrap_pi};
use log::{debug, trace};
use std::f64::consts::PI;

/// Angles (radians) and sines below this are treated as zero
const ANGLE_EPSILON: f64 = 1e-12;

/// What to do when an intersection looks like the lines actually diverge
///
/// An intersection is a probable divergence when it lies more than a quarter
/// of the Earth's circumference from both origins while the origins
/// themselves are at most that far apart. This usually means the computed
/// point is "behind" both observers. The heuristic is approximate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivergencePolicy {
    /// Fail with [`Error::ProbableDivergence`]
    #[default]
    Warn,
    /// Return `None` instead of the far away intersection
    Suppress,
    /// Return the intersection regardless
    Ignore,
}

/// Options controlling which intersections are returned, suppressed or
/// reported as errors
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntersectOptions {
    /// Handling of probably diverging lines
    pub divergence: DivergencePolicy,
    /// Suppress intersections farther than this many kilometers from both
    /// origins
    pub suppress_greater_than: Option<f64>,
    /// Return `None` instead of failing on coincident origins, antipodal
    /// origins and parallel lines
    pub ignore_errors: bool,
}

impl IntersectOptions {
    pub fn with_divergence(mut self, divergence: DivergencePolicy) -> Self {
        self.divergence = divergence;
        self
    }

    pub fn with_suppress_greater_than(mut self, km: f64) -> Self {
        self.suppress_greater_than = Some(km);
        self
    }

    pub fn with_ignore_errors(mut self, ignore_errors: bool) -> Self {
        self.ignore_errors = ignore_errors;
        self
    }
}

/// Intersect two bearing lines
///
/// Returns `Ok(Some(point))` for a valid intersection and `Ok(None)` when the
/// result was suppressed by `options`. Otherwise fails with:
///
/// - [`Error::CoincidentOrigins`] if both lines start at the same point
/// - [`Error::AntipodalOrigins`] if the lines start at antipodal points
/// - [`Error::Parallel`] if the lines never converge ahead of their origins
/// - [`Error::ProbableDivergence`] if the divergence heuristic triggers under
///   [`DivergencePolicy::Warn`]
///
/// The first three are turned into `Ok(None)` by
/// [`IntersectOptions::ignore_errors`].
pub fn intersect(
    a: &BearingLine,
    b: &BearingLine,
    options: &IntersectOptions,
) -> Result<Option<GeoPoint>> {
    let point = match great_circle_intersection(a, b) {
        Ok(point) => point,
        Err(error) if options.ignore_errors && error.is_degenerate_geometry() => {
            debug!("Ignoring intersection error for {a} and {b}: {error}");
            return Ok(None);
        }
        Err(error) => return Err(error),
    };

    let distance_a_km = haversine_distance(a.origin, point);
    let distance_b_km = haversine_distance(b.origin, point);

    if let Some(threshold) = options.suppress_greater_than
        && distance_a_km > threshold
        && distance_b_km > threshold
    {
        debug!(
            "Suppressing intersection {point}: {distance_a_km:.3} km and {distance_b_km:.3} km \
             from origins exceed {threshold} km"
        );
        return Ok(None);
    }

    if is_probable_divergence(a, b, distance_a_km, distance_b_km) {
        match options.divergence {
            DivergencePolicy::Warn => {
                return Err(Error::ProbableDivergence {
                    distance_a_km,
                    distance_b_km,
                });
            }
            DivergencePolicy::Suppress => {
                debug!("Suppressing probably diverging intersection {point} of {a} and {b}");
                return Ok(None);
            }
            DivergencePolicy::Ignore => {
                debug!("Keeping probably diverging intersection {point} of {a} and {b}");
            }
        }
    }

    Ok(Some(point))
}

/// Intersect every unordered pair of `lines`
///
/// Pairs are visited in input order (`(0, 1), (0, 2), …, (1, 2), …`) and
/// suppressed results are dropped. The first error aborts the whole batch,
/// so batch callers usually enable [`IntersectOptions::ignore_errors`] and
/// [`DivergencePolicy::Suppress`].
pub fn pairwise_intersections(
    lines: &[BearingLine],
    options: &IntersectOptions,
) -> Result<Vec<GeoPoint>> {
    let mut points = Vec::new();

    for (i, a) in lines.iter().enumerate() {
        for b in &lines[i + 1..] {
            if let Some(point) = intersect(a, b, options)? {
                points.push(point);
            }
        }
    }

    debug!(
        "Found {} intersections among {} bearing lines",
        points.len(),
        lines.len()
    );

    Ok(points)
}

fn is_probable_divergence(
    a: &BearingLine,
    b: &BearingLine,
    distance_a_km: f64,
    distance_b_km: f64,
) -> bool {
    distance_a_km > QUARTER_CIRCUMFERENCE_KM
        && distance_b_km > QUARTER_CIRCUMFERENCE_KM
        && a.haversine_distance(*b) <= QUARTER_CIRCUMFERENCE_KM
}

/// Solve the spherical triangle and project to the intersection point
fn great_circle_intersection(a: &BearingLine, b: &BearingLine) -> Result<GeoPoint> {
    // The projection below uses west-positive longitudes, as in the formulary
    let lat1 = a.lat_radians();
    let lon1 = -a.lon_radians();
    let crs13 = a.true_bearing_radians();
    let crs23 = b.true_bearing_radians();

    let dst12 = central_angle(a.origin, b.origin);
    if dst12 < ANGLE_EPSILON {
        return Err(Error::CoincidentOrigins);
    }
    if PI - dst12 < ANGLE_EPSILON {
        return Err(Error::AntipodalOrigins);
    }

    let crs12 = initial_course(a.origin, b.origin);
    let crs21 = initial_course(b.origin, a.origin);

    let ang1 = wrap_pi(crs13 - crs12);
    let ang2 = wrap_pi(crs21 - crs23);
    trace!("dst12={dst12} crs12={crs12} crs21={crs21} ang1={ang1} ang2={ang2}");

    let (sin1, sin2) = (ang1.sin(), ang2.sin());
    match (sin1.abs() < ANGLE_EPSILON, sin2.abs() < ANGLE_EPSILON) {
        // Both lines lie on the great circle through the two origins
        (true, true) => return Err(Error::Parallel),
        // One line runs through the other origin, either ahead of it or, when
        // pointing away, the two great circles meet again at the antipode
        (true, false) if ang1.cos() > 0.0 => return Ok(b.origin),
        (true, false) => return Ok(b.origin.antipode()),
        (false, true) if ang2.cos() > 0.0 => return Ok(a.origin),
        (false, true) => return Ok(a.origin.antipode()),
        (false, false) if sin1 * sin2 < 0.0 => return Err(Error::Parallel),
        (false, false) => {}
    }

    let ang1 = ang1.abs();
    let ang2 = ang2.abs();
    let ang3 = acos_clamped(-ang1.cos() * ang2.cos() + ang1.sin() * ang2.sin() * dst12.cos());
    let dst13 = f64::atan2(
        dst12.sin() * ang1.sin() * ang2.sin(),
        ang2.cos() + ang1.cos() * ang3.cos(),
    );
    trace!("ang3={ang3} dst13={dst13}");

    let lat3 = asin_clamped(lat1.sin() * dst13.cos() + lat1.cos() * dst13.sin() * crs13.cos());
    let dlon = f64::atan2(
        crs13.sin() * dst13.sin() * lat1.cos(),
        dst13.cos() - lat1.sin() * lat3.sin(),
    );
    let lon3 = wrap_pi(lon1 - dlon);

    Ok(GeoPoint::new(lat3.to_degrees(), -lon3.to_degrees()))
}

/// Initial great-circle course from `from` towards `to`, in radians
/// clockwise from north
fn initial_course(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.lat_radians();
    let lat2 = to.lat_radians();
    let d_lon = to.lon_radians() - from.lon_radians();

    f64::atan2(
        d_lon.sin() * lat2.cos(),
        lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos(),
    )
}
