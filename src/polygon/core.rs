//! Core polygon type and basic operations.

use crate::bounds::BoundingBox;
use crate::primitives::{Line, Lines, Point, Polyline};
use crate::units::Coord;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A closed ring of grid points.
///
/// The last point implicitly connects back to the first; that closing point
/// is never stored twice. Orientation is not stored either: it follows from
/// the sign of [`Polygon::area`] for the current point order. Counter-clockwise
/// rings are contours, clockwise rings are holes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Polygon {
    /// The ring's vertices in traversal order.
    pub points: Vec<Point>,
}

/// A list of polygons. Ordering is a convention between producer and consumer.
pub type Polygons = Vec<Polygon>;

impl Polygon {
    /// Creates a polygon from points.
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Creates a polygon from coordinate pairs.
    pub fn from_coords(coords: &[(Coord, Coord)]) -> Self {
        Self {
            points: coords.iter().map(|&c| Point::from(c)).collect(),
        }
    }

    /// Returns the number of stored points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the polygon has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the polygon and returns its points.
    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Returns true if the ring has at least three points.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 3
    }

    /// Returns the first stored vertex, or `None` for an empty ring.
    #[inline]
    pub fn first_point(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// The point a traversal of the closed ring ends at, which is the first point.
    #[inline]
    pub fn last_point(&self) -> Option<Point> {
        self.first_point()
    }

    /// Iterates over `(start, end)` pairs of every edge, including the closing one.
    pub(crate) fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Returns every edge as a line, including the closing one.
    ///
    /// Rings with fewer than two points have no edges.
    pub fn lines(&self) -> Lines {
        if self.points.len() < 2 {
            return Vec::new();
        }
        self.edges().map(|(a, b)| Line::new(a, b)).collect()
    }

    /// Returns the signed area using the shoelace formula.
    ///
    /// Positive for counter-clockwise rings, negative for clockwise rings,
    /// zero for rings with fewer than three points or no enclosed area.
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let twice: i128 = self.edges().map(|(a, b)| a.cross(b)).sum();
        twice as f64 / 2.0
    }

    /// Returns true if the signed area is positive.
    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.area() > 0.0
    }

    /// Returns true if the signed area is negative.
    ///
    /// Rings with zero area are neither clockwise nor counter-clockwise.
    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.area() < 0.0
    }

    /// Reverses the ring if it is clockwise. Returns whether it was reversed.
    pub fn make_counter_clockwise(&mut self) -> bool {
        if self.is_clockwise() {
            self.reverse();
            true
        } else {
            false
        }
    }

    /// Reverses the ring if it is counter-clockwise. Returns whether it was reversed.
    pub fn make_clockwise(&mut self) -> bool {
        if self.is_counter_clockwise() {
            self.reverse();
            true
        } else {
            false
        }
    }

    /// Reverses the traversal direction in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Tests whether the ring encloses `point`, regardless of orientation.
    ///
    /// Counts crossings of a ray cast from `point` towards +X. Edges with both
    /// endpoints on the same side of the ray are skipped, which excludes
    /// horizontal edges. An edge is crossed only when `point` lies strictly
    /// to its left, so boundary points are classified half-open: for an
    /// axis-aligned rectangle the left and bottom sides test inside and the
    /// right and top sides test outside.
    pub fn contains(&self, point: Point) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let pi = self.points[i];
            let pj = self.points[j];
            if (pi.y > point.y) != (pj.y > point.y) {
                // point.x < x-intercept of the edge at point.y, without dividing.
                let dy = pj.y as i128 - pi.y as i128;
                let lhs = (point.x as i128 - pi.x as i128) * dy;
                let rhs = (pj.x as i128 - pi.x as i128) * (point.y as i128 - pi.y as i128);
                let left_of_edge = if dy > 0 { lhs < rhs } else { lhs > rhs };
                if left_of_edge {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Returns the area-weighted centroid, rounded to the grid.
    ///
    /// Returns `None` for rings with fewer than three points or zero area.
    pub fn centroid(&self) -> Option<Point> {
        let area = self.area();
        if area == 0.0 {
            return None;
        }

        let mut cx = 0.0;
        let mut cy = 0.0;
        for (a, b) in self.edges() {
            let cross = a.cross(b) as f64;
            cx += (a.x as f64 + b.x as f64) * cross;
            cy += (a.y as f64 + b.y as f64) * cross;
        }
        Some(Point::from_f64(cx / (6.0 * area), cy / (6.0 * area)))
    }

    /// Returns the length of the closed boundary.
    pub fn perimeter(&self) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.edges().map(|(a, b)| a.distance_to(b)).sum()
    }

    /// Returns the axis-aligned bounding box of the vertices.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.points.iter().copied())
    }

    /// Moves every vertex by `(dx, dy)`.
    pub fn translate(&mut self, dx: Coord, dy: Coord) {
        for p in &mut self.points {
            p.translate(dx, dy);
        }
    }

    /// Rotates every vertex about the origin by `angle` radians.
    pub fn rotate(&mut self, angle: f64) {
        for p in &mut self.points {
            p.rotate(angle);
        }
    }

    /// Rotates every vertex about `center` by `angle` radians.
    pub fn rotate_around(&mut self, angle: f64, center: Point) {
        for p in &mut self.points {
            p.rotate_around(angle, center);
        }
    }

    /// Returns true if any two consecutive vertices (including last and first) coincide.
    pub fn has_duplicate_points(&self) -> bool {
        self.points.len() >= 2 && self.edges().any(|(a, b)| a == b)
    }

    /// Removes consecutive duplicate vertices, including a last point equal to the first.
    ///
    /// Returns whether any point was removed.
    pub fn remove_duplicate_points(&mut self) -> bool {
        let before = self.points.len();
        self.points.dedup();
        while self.points.len() > 1 && self.points.first() == self.points.last() {
            self.points.pop();
        }
        self.points.len() != before
    }

    /// Renders the ring as well-known text, repeating the first vertex at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use slicering::Polygon;
    ///
    /// let tri = Polygon::from_coords(&[(0, 0), (10, 0), (0, 10)]);
    /// assert_eq!(tri.wkt(), "POLYGON((0 0,10 0,0 10,0 0))");
    /// ```
    pub fn wkt(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("POLYGON((")?;
        for (i, p) in self.points.iter().chain(self.points.first()).enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{} {}", p.x, p.y)?;
        }
        f.write_str("))")
    }
}

impl Index<usize> for Polygon {
    type Output = Point;

    #[inline]
    fn index(&self, idx: usize) -> &Point {
        &self.points[idx]
    }
}

impl IndexMut<usize> for Polygon {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Point {
        &mut self.points[idx]
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

/// Closes an open path. A last point equal to the first is dropped.
impl From<Polyline> for Polygon {
    fn from(polyline: Polyline) -> Self {
        let mut points = polyline.points;
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        Self { points }
    }
}

/// Opens the ring at its first point; the first point is repeated at the end.
impl From<&Polygon> for Polyline {
    fn from(polygon: &Polygon) -> Self {
        let mut points = Vec::with_capacity(polygon.points.len() + 1);
        points.extend_from_slice(&polygon.points);
        points.extend(polygon.first_point());
        Polyline::new(points)
    }
}

impl From<Polygon> for Polygons {
    fn from(polygon: Polygon) -> Self {
        vec![polygon]
    }
}
