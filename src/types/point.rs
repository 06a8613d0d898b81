use std::fmt;

/// A geographic point on the sphere
///
/// Coordinates are stored in decimal degrees. No range validation happens on
/// construction: out-of-range values pass through unchanged and it is the
/// caller's responsibility to supply sensible input (see [`GeoPoint::is_valid`]).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn lat_radians(&self) -> f64 {
        self.lat.to_radians()
    }

    pub fn lon_radians(&self) -> f64 {
        self.lon.to_radians()
    }

    /// The point on the opposite side of the sphere
    ///
    /// Longitude is wrapped into `[-180, 180)`.
    pub fn antipode(&self) -> Self {
        Self::new(-self.lat, (self.lon + 360.0).rem_euclid(360.0) - 180.0)
    }

    /// Check if coordinates are within valid geographic ranges
    ///
    /// Returns `true` if latitude is in `[-90, 90]` and longitude is in
    /// `[-180, 180]`. `NaN` coordinates are never valid.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl From<(f64, f64)> for GeoPoint {
    /// Build a point from a `(lat, lon)` tuple
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}
