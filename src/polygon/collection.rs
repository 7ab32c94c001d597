//! Free functions over polygon collections.

use super::core::{Polygon, Polygons};
use crate::primitives::{Lines, Polyline, Polylines};

/// Moves every polygon of `src` to the end of `dst`.
///
/// When `dst` is empty it takes over `src`'s allocation.
pub fn polygons_append(dst: &mut Polygons, mut src: Polygons) {
    if dst.is_empty() {
        *dst = src;
    } else {
        dst.append(&mut src);
    }
}

/// Rotates every polygon about the origin by `angle` radians.
pub fn polygons_rotate(polygons: &mut [Polygon], angle: f64) {
    for polygon in polygons {
        polygon.rotate(angle);
    }
}

/// Every edge of a polygon, including the closing one.
#[inline]
pub fn to_lines(polygon: &Polygon) -> Lines {
    polygon.lines()
}

/// Every edge of every polygon, in collection order.
pub fn to_lines_polygons(polygons: &[Polygon]) -> Lines {
    let mut lines = Vec::with_capacity(polygons.iter().map(Polygon::len).sum());
    for polygon in polygons {
        lines.extend(polygon.lines());
    }
    lines
}

/// Opens every polygon at its first point into a closed path.
pub fn to_polylines(polygons: &[Polygon]) -> Polylines {
    polygons.iter().map(Polyline::from).collect()
}

/// Like [`to_polylines`], reusing each polygon's point storage.
pub fn into_polylines(polygons: Polygons) -> Polylines {
    polygons
        .into_iter()
        .map(|polygon| {
            let mut points = polygon.into_points();
            if let Some(&first) = points.first() {
                points.push(first);
            }
            Polyline::new(points)
        })
        .collect()
}

/// Sum of the signed areas; clockwise holes subtract from their contours.
pub fn total_area(polygons: &[Polygon]) -> f64 {
    polygons.iter().map(Polygon::area).sum()
}
