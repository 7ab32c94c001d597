//! Opening a ring into a path, and resampling its boundary.

use super::core::Polygon;
use crate::error::{PolygonError, Result};
use crate::primitives::{Point, Polyline};

impl Polygon {
    /// Opens the ring at the first vertex equal to `point`.
    ///
    /// The returned path starts and ends at that vertex and follows the
    /// stored order.
    ///
    /// # Errors
    ///
    /// [`PolygonError::VertexNotFound`] if `point` is not a stored vertex.
    /// There is no nearest-vertex fallback.
    pub fn split_at_vertex(&self, point: Point) -> Result<Polyline> {
        let index = self
            .points
            .iter()
            .position(|&p| p == point)
            .ok_or(PolygonError::VertexNotFound(point))?;
        self.split_at_index(index)
    }

    /// Opens the ring at vertex `index`, duplicating it at both ends of the path.
    ///
    /// # Errors
    ///
    /// [`PolygonError::IndexOutOfRange`] if `index >= self.len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use slicering::{Point, Polygon};
    ///
    /// let tri = Polygon::from_coords(&[(0, 0), (10, 0), (0, 10)]);
    /// let path = tri.split_at_index(1).unwrap();
    /// assert_eq!(
    ///     path.points,
    ///     vec![Point::new(10, 0), Point::new(0, 10), Point::new(0, 0), Point::new(10, 0)]
    /// );
    /// ```
    pub fn split_at_index(&self, index: usize) -> Result<Polyline> {
        let len = self.points.len();
        if index >= len {
            return Err(PolygonError::IndexOutOfRange { index, len });
        }
        let mut points = Vec::with_capacity(len + 1);
        points.extend_from_slice(&self.points[index..]);
        points.extend_from_slice(&self.points[..=index]);
        Ok(Polyline::new(points))
    }

    /// Opens the ring at its first vertex. Same as `split_at_index(0)`.
    #[inline]
    pub fn split_at_first_point(&self) -> Result<Polyline> {
        self.split_at_index(0)
    }

    /// Samples the closed boundary every `distance` units, starting at the first vertex.
    ///
    /// A sample that lands back on the first vertex is not repeated. A
    /// boundary shorter than `distance` yields only the first vertex. A
    /// non-positive `distance` yields the stored vertices, and an empty ring
    /// yields nothing.
    pub fn equally_spaced_points(&self, distance: f64) -> Vec<Point> {
        let Ok(path) = self.split_at_first_point() else {
            return Vec::new();
        };
        let mut samples = path.equally_spaced_points(distance);
        if samples.len() > 1 && samples.first() == samples.last() {
            samples.pop();
        }
        samples
    }
}
