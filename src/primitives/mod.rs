//! Integer geometric primitives.

mod line;
mod point;
mod polyline;

pub use line::{Line, Lines};
pub use point::{orient, Point};
pub use polyline::{Polyline, Polylines};
