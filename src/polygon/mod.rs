//! Closed integer polygons and their orientation-sensitive algorithms.
//!
//! This module provides:
//! - Signed area, orientation tests and winding normalization
//! - Point containment testing
//! - Douglas-Peucker simplification with self-intersection splitting
//! - Splitting a ring into an open path and resampling its boundary
//! - Bounding boxes, optionally under rotation
//! - Stick, degenerate and small-area cleanup of collections
//!
//! # Example
//!
//! ```
//! use slicering::polygon::{remove_small, Polygon};
//! use slicering::Point;
//!
//! let mut square = Polygon::from_coords(&[(0, 0), (0, 10), (10, 10), (10, 0)]);
//! assert!(square.is_clockwise());
//! assert!(square.make_counter_clockwise());
//! assert_eq!(square.area(), 100.0);
//! assert!(square.contains(Point::new(5, 5)));
//!
//! let mut polygons = vec![square, Polygon::from_coords(&[(0, 0), (1, 0), (0, 1)])];
//! remove_small(&mut polygons, 1.0);
//! assert_eq!(polygons.len(), 1);
//! ```

mod cleanup;
mod collection;
mod core;
mod extents;
mod simplify;
mod split;
mod vertices;


pub use cleanup::{remove_degenerate, remove_small, remove_sticks, remove_sticks_polygons};
pub use collection::{
    into_polylines, polygons_append, polygons_rotate, to_lines, to_lines_polygons, to_polylines,
    total_area,
};
pub use core::{Polygon, Polygons};
pub use extents::{
    get_extents, get_extents_polygons, get_extents_rotated, get_extents_rotated_polygons,
};
pub use simplify::{first_crossing, split_self_intersections, Crossing};
