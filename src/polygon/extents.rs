//! Bounding boxes of polygons and polygon collections.

use super::core::Polygon;
use crate::bounds::BoundingBox;

/// Axis-aligned bounding box of a polygon's vertices.
///
/// An empty polygon yields the undefined `BoundingBox::default()`.
pub fn get_extents(polygon: &Polygon) -> BoundingBox {
    polygon.bounding_box()
}

/// Axis-aligned bounding box of every vertex in a collection.
///
/// Empty members are skipped; an empty collection yields the undefined
/// `BoundingBox::default()`.
pub fn get_extents_polygons(polygons: &[Polygon]) -> BoundingBox {
    polygons.iter().fold(BoundingBox::default(), |mut bb, p| {
        bb.merge(&get_extents(p));
        bb
    })
}

/// Bounding box of the polygon's vertices after rotating them by `angle` about the origin.
///
/// The polygon itself is left untouched.
///
/// # Example
///
/// ```
/// use slicering::polygon::get_extents_rotated;
/// use slicering::{Point, Polygon};
///
/// let bar = Polygon::from_coords(&[(0, 0), (100, 0), (100, 10), (0, 10)]);
/// let bb = get_extents_rotated(&bar, std::f64::consts::FRAC_PI_2);
/// assert_eq!(bb.min, Point::new(-10, 0));
/// assert_eq!(bb.max, Point::new(0, 100));
/// ```
pub fn get_extents_rotated(polygon: &Polygon, angle: f64) -> BoundingBox {
    BoundingBox::from_points(polygon.points.iter().map(|p| p.rotated(angle)))
}

/// Rotated bounding box over every polygon of a collection.
pub fn get_extents_rotated_polygons(polygons: &[Polygon], angle: f64) -> BoundingBox {
    polygons.iter().fold(BoundingBox::default(), |mut bb, p| {
        bb.merge(&get_extents_rotated(p, angle));
        bb
    })
}
