//! slicering - Closed integer polygons for slicing pipelines
//!
//! Polygons live on a fixed-point integer grid (see [`units`]) so that
//! orientation, area and containment are exact. Floating point only appears
//! where a result is inherently real-valued: lengths, angles, centroids and
//! rotations, which round back onto the grid.

pub mod bounds;
pub mod concept;
pub mod error;
pub mod polygon;
pub mod primitives;
pub mod simplify;
pub mod units;

pub use bounds::BoundingBox;
pub use error::PolygonError;
pub use polygon::{Polygon, Polygons};
pub use primitives::{Line, Point, Polyline};
pub use units::Coord;
