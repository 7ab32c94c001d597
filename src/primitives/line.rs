//! Integer line segment type.

use super::Point;

/// A segment between two grid points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    /// Creates a new segment from two points.
    #[inline]
    pub const fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.a.distance_to(self.b)
    }

    /// Returns the midpoint, rounded to the grid.
    #[inline]
    pub fn midpoint(&self) -> Point {
        Point::from_f64(
            (self.a.x as f64 + self.b.x as f64) / 2.0,
            (self.a.y as f64 + self.b.y as f64) / 2.0,
        )
    }

    /// Returns the point `distance` along the segment from `a`.
    ///
    /// Distances beyond the segment extrapolate along its direction. A
    /// zero-length segment always yields `a`.
    pub fn point_at(&self, distance: f64) -> Point {
        let len = self.length();
        if len == 0.0 {
            return self.a;
        }
        let t = distance / len;
        Point::from_f64(
            self.a.x as f64 + (self.b.x as f64 - self.a.x as f64) * t,
            self.a.y as f64 + (self.b.y as f64 - self.a.y as f64) * t,
        )
    }

    /// Distance from `point` to this segment.
    #[inline]
    pub fn distance_to(&self, point: Point) -> f64 {
        point.distance_to_line(self)
    }

    /// Swaps the endpoints in place.
    #[inline]
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.a, &mut self.b);
    }

    /// Returns the direction vector `b - a`.
    #[inline]
    pub fn vector(&self) -> Point {
        self.b - self.a
    }
}

impl From<(Point, Point)> for Line {
    fn from((a, b): (Point, Point)) -> Self {
        Self::new(a, b)
    }
}

/// A list of segments.
pub type Lines = Vec<Line>;
