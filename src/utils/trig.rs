use std::f64::consts::PI;

/// `asin` with the argument clamped to `[-1, 1]`
///
/// Rounding error can push values computed from products of sines and
/// cosines slightly outside the domain, which would otherwise yield `NaN`.
pub fn asin_clamped(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}

/// `acos` with the argument clamped to `[-1, 1]`
pub fn acos_clamped(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}

/// Wrap an angle in radians into `[-π, π)`
///
/// Uses a Euclidean remainder so the result follows the sign of the divisor,
/// unlike the `%` operator which follows the sign of the dividend.
pub fn wrap_pi(angle: f64) -> f64 {
    (angle + PI).rem_euclid(2.0 * PI) - PI
}
