//! Bounding volume computation.

mod bounding_box;

pub use bounding_box::BoundingBox;
