//! Open polyline type.

use super::{Line, Lines, Point};

/// An open path through a sequence of grid points.
///
/// Unlike a polygon, no edge joins the last point back to the first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    /// Creates a polyline from points.
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the polyline has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first point, if any.
    #[inline]
    pub fn first_point(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Returns the last point, if any.
    #[inline]
    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Returns the segments between consecutive points.
    pub fn lines(&self) -> Lines {
        self.points
            .windows(2)
            .map(|w| Line::new(w[0], w[1]))
            .collect()
    }

    /// Returns the total length of the path.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].distance_to(w[1]))
            .sum()
    }

    /// Samples the path every `distance` units of arc length.
    ///
    /// The first point is always included. The last point is included only
    /// when a sample lands on it exactly. A non-positive `distance` returns
    /// the points unchanged.
    pub fn equally_spaced_points(&self, distance: f64) -> Vec<Point> {
        let Some(first) = self.first_point() else {
            return Vec::new();
        };
        if distance <= 0.0 || distance.is_nan() {
            return self.points.clone();
        }

        let mut out = vec![first];
        // Arc length travelled since the last sample, measured up to points[i].
        let mut len = 0.0;
        let mut i = 1;
        while i < self.points.len() {
            let prev = self.points[i - 1];
            let cur = self.points[i];
            let segment_length = prev.distance_to(cur);
            len += segment_length;

            if len < distance {
                i += 1;
                continue;
            }
            if len == distance {
                out.push(cur);
                len = 0.0;
                i += 1;
                continue;
            }

            // Sample inside this segment, then measure it again from the sample.
            let take = segment_length - (len - distance);
            out.push(Line::new(prev, cur).point_at(take));
            len = -take;
        }
        out
    }
}

impl From<Vec<Point>> for Polyline {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

/// A list of polylines.
pub type Polylines = Vec<Polyline>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn path() -> Polyline {
        Polyline::new(vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
        ])
    }

    #[test]
    fn test_length_and_lines() {
        let pl = path();
        assert_relative_eq!(pl.length(), 20.0);
        assert_eq!(pl.lines().len(), 2);
        assert_eq!(pl.first_point(), Some(Point::new(0, 0)));
        assert_eq!(pl.last_point(), Some(Point::new(10, 10)));
    }

    #[test]
    fn test_equally_spaced_points() {
        let samples = path().equally_spaced_points(4.0);
        assert_eq!(
            samples,
            vec![
                Point::new(0, 0),
                Point::new(4, 0),
                Point::new(8, 0),
                Point::new(10, 2),
                Point::new(10, 6),
                Point::new(10, 10),
            ]
        );
    }

    #[test]
    fn test_equally_spaced_points_exact_vertex() {
        let samples = path().equally_spaced_points(10.0);
        assert_eq!(
            samples,
            vec![Point::new(0, 0), Point::new(10, 0), Point::new(10, 10)]
        );
    }

    #[test]
    fn test_equally_spaced_points_short_path() {
        let samples = path().equally_spaced_points(100.0);
        assert_eq!(samples, vec![Point::new(0, 0)]);
    }

    #[test]
    fn test_equally_spaced_points_degenerate() {
        assert!(Polyline::default().equally_spaced_points(1.0).is_empty());
        assert_eq!(path().equally_spaced_points(0.0), path().points);
    }
}
