#![doc = include_str!("../README.md")]

pub use crate::distance::{
    EARTH_RADIUS_KM, QUARTER_CIRCUMFERENCE_KM, central_angle, haversine_distance,
};
pub use crate::error::{Error, Result};
pub use crate::intersect::{DivergencePolicy, IntersectOptions, intersect, pairwise_intersections};
pub use crate::types::*;

mod distance;
mod error;
mod intersect;
mod types;
mod utils;
