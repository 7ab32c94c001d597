//! Vertex classification and fan triangulation.

use super::core::{Polygon, Polygons};
use crate::primitives::Point;
use std::f64::consts::PI;

impl Polygon {
    /// Returns the vertices whose corner angle marks them as concave.
    ///
    /// The angle at each vertex is [`Point::ccw_angle`] from its predecessor
    /// to its successor. A vertex is concave when that angle is at most
    /// `2π - angle`. With `angle = π`, the reflex vertices of a
    /// counter-clockwise ring are returned. Rings with fewer than three
    /// points have no concave vertices.
    pub fn concave_points(&self, angle: f64) -> Vec<Point> {
        let threshold = 2.0 * PI - angle;
        self.vertices_where(|corner| corner <= threshold)
    }

    /// Returns the vertices whose corner angle is at least `2π - angle`.
    ///
    /// With `angle = π`, the convex vertices of a counter-clockwise ring are
    /// returned.
    pub fn convex_points(&self, angle: f64) -> Vec<Point> {
        let threshold = 2.0 * PI - angle;
        self.vertices_where(|corner| corner >= threshold)
    }

    fn vertices_where(&self, keep: impl Fn(f64) -> bool) -> Vec<Point> {
        let n = self.points.len();
        if n < 3 {
            return Vec::new();
        }
        (0..n)
            .filter_map(|i| {
                let prev = self.points[(i + n - 1) % n];
                let next = self.points[(i + 1) % n];
                let p = self.points[i];
                keep(p.ccw_angle(prev, next)).then_some(p)
            })
            .collect()
    }

    /// Splits a convex counter-clockwise ring into a fan of triangles.
    ///
    /// Every triangle shares the first vertex. Triangles without positive
    /// area (collinear runs, or any triangle of a clockwise ring) are skipped.
    pub fn triangulate_convex(&self) -> Polygons {
        let Some(apex) = self.first_point() else {
            return Vec::new();
        };
        self.points
            .windows(2)
            .skip(1)
            .map(|w| Polygon::new(vec![apex, w[0], w[1]]))
            .filter(|tri| tri.area() > 0.0)
            .collect()
    }
}
