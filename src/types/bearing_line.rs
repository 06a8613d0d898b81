use crate::distance::haversine_distance;
use crate::error::{Error, Result};
use crate::intersect::{IntersectOptions, intersect};
use crate::types::GeoPoint;
use std::fmt;

/// A line of bearing: an observation point plus the direction observed from it
///
/// The bearing is measured in degrees clockwise from north. When the bearing
/// was taken relative to magnetic north, the local magnetic declination
/// converts it to a true bearing (see [`BearingLine::true_bearing`]).
///
/// Input values are stored as given; neither the bearing nor the declination
/// is validated or wrapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BearingLine {
    /// Observation point the line starts from
    pub origin: GeoPoint,
    /// Observed bearing in degrees
    pub bearing: f64,
    /// Magnetic declination in degrees, positive east
    pub declination: f64,
}

/// What to measure the distance from a bearing line's origin to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceTarget {
    /// An explicit geographic point
    Point(GeoPoint),
    /// The origin of another bearing line
    Line(BearingLine),
}

impl DistanceTarget {
    fn point(&self) -> GeoPoint {
        match self {
            DistanceTarget::Point(point) => *point,
            DistanceTarget::Line(line) => line.origin,
        }
    }
}

impl From<GeoPoint> for DistanceTarget {
    fn from(point: GeoPoint) -> Self {
        DistanceTarget::Point(point)
    }
}

impl From<BearingLine> for DistanceTarget {
    fn from(line: BearingLine) -> Self {
        DistanceTarget::Line(line)
    }
}

impl BearingLine {
    /// Create a bearing line from a true bearing (declination of zero)
    pub fn new(lat: f64, lon: f64, bearing: f64) -> Self {
        Self::with_declination(lat, lon, bearing, 0.0)
    }

    /// Create a bearing line from a magnetic bearing and the local declination
    pub fn with_declination(lat: f64, lon: f64, bearing: f64, declination: f64) -> Self {
        Self {
            origin: GeoPoint::new(lat, lon),
            bearing,
            declination,
        }
    }

    pub fn lat(&self) -> f64 {
        self.origin.lat
    }

    pub fn lon(&self) -> f64 {
        self.origin.lon
    }

    pub fn lat_radians(&self) -> f64 {
        self.origin.lat_radians()
    }

    pub fn lon_radians(&self) -> f64 {
        self.origin.lon_radians()
    }

    /// True bearing in degrees: `bearing + declination`
    ///
    /// The sum is not normalized, so e.g. a bearing of 350° with a declination
    /// of 20° yields 370°. All consumers only use it through trigonometric
    /// functions, where the two are equivalent.
    pub fn true_bearing(&self) -> f64 {
        self.bearing + self.declination
    }

    pub fn true_bearing_radians(&self) -> f64 {
        self.true_bearing().to_radians()
    }

    /// Great-circle distance in kilometers from this line's origin to `target`
    pub fn haversine_distance(&self, target: impl Into<DistanceTarget>) -> f64 {
        haversine_distance(self.origin, target.into().point())
    }

    /// Distance to either an explicit `lat`/`lon` pair or another line's origin
    ///
    /// Exactly one of the two forms must be supplied. Passing neither, both,
    /// or only half of the coordinate pair fails with
    /// [`Error::InvalidArgument`]. Prefer [`BearingLine::haversine_distance`]
    /// when the target is known statically.
    pub fn distance_from_parts(
        &self,
        lat: Option<f64>,
        lon: Option<f64>,
        other: Option<&BearingLine>,
    ) -> Result<f64> {
        let target = match (lat, lon, other) {
            (Some(lat), Some(lon), None) => DistanceTarget::Point(GeoPoint::new(lat, lon)),
            (None, None, Some(other)) => DistanceTarget::Line(*other),
            (None, None, None) => {
                return Err(Error::InvalidArgument(
                    "no distance target given, pass either a lat/lon pair or another bearing line"
                        .into(),
                ));
            }
            (_, _, Some(_)) => {
                return Err(Error::InvalidArgument(
                    "too many distance targets given, pass either a lat/lon pair or another \
                     bearing line, not both"
                        .into(),
                ));
            }
            (_, _, None) => {
                return Err(Error::InvalidArgument(
                    "both latitude and longitude are required for a point target".into(),
                ));
            }
        };

        Ok(self.haversine_distance(target))
    }

    /// Intersection of this bearing line with `other`
    ///
    /// See [`intersect`] for the algorithm and how `options` shape the result.
    pub fn get_intersect(
        &self,
        other: &BearingLine,
        options: &IntersectOptions,
    ) -> Result<Option<GeoPoint>> {
        intersect(self, other, options)
    }
}

impl fmt::Display for BearingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BearingLine: {} at {}° true",
            self.origin,
            self.true_bearing()
        )
    }
}
