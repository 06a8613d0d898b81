use crate::types::GeoPoint;
use crate::utils::trig::asin_clamped;
use std::f64::consts::PI;

/// Mean radius of the Earth in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// One quarter of the Earth's circumference in kilometers (about 10 007.5 km)
pub const QUARTER_CIRCUMFERENCE_KM: f64 = PI * EARTH_RADIUS_KM / 2.0;

/// Central angle between two points on the unit sphere, in radians
///
/// Uses the haversine formula. The intermediate haversine value is clamped
/// to at most 1 since rounding error occasionally pushes it above.
pub fn central_angle(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat_radians();
    let lat2 = b.lat_radians();
    let d_lat = lat2 - lat1;
    let d_lon = b.lon_radians() - a.lon_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * asin_clamped(h.min(1.0).sqrt())
}

/// Great-circle distance between two points in kilometers
///
/// The Earth is approximated as a sphere of radius [`EARTH_RADIUS_KM`]. Errors
/// compared to the ellipsoidal distance can reach about 0.5%.
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    EARTH_RADIUS_KM * central_angle(a, b)
}
