mod bearing_line;
mod bounding_box;
mod point;

pub use bearing_line::*;
pub use bounding_box::*;
pub use point::*;
