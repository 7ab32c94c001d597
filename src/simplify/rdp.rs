//! Ramer-Douglas-Peucker simplification on the integer grid.
//!
//! The algorithm recursively keeps the point farthest from the segment
//! joining the current endpoints while that distance exceeds the tolerance.
//!
//! Time complexity: O(n²) worst case, O(n log n) typical.

use crate::primitives::{Line, Point};

/// Simplifies a point sequence using the Ramer-Douglas-Peucker algorithm.
///
/// The first and last points are always kept. Passing a closed sequence
/// (last point equal to the first) works: distances to the degenerate
/// first-to-last segment become distances to that point.
///
/// # Example
///
/// ```
/// use slicering::simplify::douglas_peucker;
/// use slicering::Point;
///
/// let points = vec![
///     Point::new(0, 0),
///     Point::new(10, 1),  // Close to the line, will be removed
///     Point::new(20, 0),
///     Point::new(30, 20), // Far from the line, will be kept
///     Point::new(40, 0),
/// ];
///
/// let simplified = douglas_peucker(&points, 5.0);
/// assert_eq!(simplified.len(), 4);
/// ```
pub fn douglas_peucker(points: &[Point], tolerance: f64) -> Vec<Point> {
    douglas_peucker_indices(points, tolerance)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Simplifies a point sequence and returns the indices of retained points.
///
/// Indices are in increasing order. Always includes index 0 and the last
/// index if the input has at least 2 points.
pub fn douglas_peucker_indices(points: &[Point], tolerance: f64) -> Vec<usize> {
    let n = points.len();
    if n < 3 {
        return (0..n).collect();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    // Explicit stack instead of recursion: rings of many thousand points are common.
    let mut stack = vec![(0, n - 1)];
    while let Some((start, end)) = stack.pop() {
        if end <= start + 1 {
            continue;
        }

        let segment = Line::new(points[start], points[end]);
        let mut max_dist = 0.0;
        let mut max_idx = start;
        for (i, p) in points.iter().enumerate().take(end).skip(start + 1) {
            let dist = p.distance_to_line(&segment);
            if dist > max_dist {
                max_dist = dist;
                max_idx = i;
            }
        }

        if max_dist > tolerance {
            keep[max_idx] = true;
            stack.push((max_idx, end));
            stack.push((start, max_idx));
        }
    }

    keep.iter()
        .enumerate()
        .filter_map(|(i, &k)| if k { Some(i) } else { None })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_short() {
        assert!(douglas_peucker(&[], 1.0).is_empty());
        let two = vec![Point::new(0, 0), Point::new(10, 10)];
        assert_eq!(douglas_peucker(&two, 1.0), two);
    }

    #[test]
    fn test_straight_line() {
        let points: Vec<Point> = (0..5).map(|i| Point::new(i * 10, i * 10)).collect();
        let result = douglas_peucker(&points, 0.1);
        assert_eq!(result, vec![Point::new(0, 0), Point::new(40, 40)]);
    }

    #[test]
    fn test_l_shape_keeps_corner() {
        let points = vec![Point::new(0, 0), Point::new(50, 0), Point::new(50, 50)];
        assert_eq!(douglas_peucker(&points, 0.1).len(), 3);
    }

    #[test]
    fn test_zero_tolerance_drops_only_collinear() {
        let points = vec![
            Point::new(0, 0),
            Point::new(5, 0),
            Point::new(10, 0),
            Point::new(10, 1),
        ];
        let result = douglas_peucker(&points, 0.0);
        assert_eq!(
            result,
            vec![Point::new(0, 0), Point::new(10, 0), Point::new(10, 1)]
        );
    }

    #[test]
    fn test_large_tolerance() {
        let points = vec![
            Point::new(0, 0),
            Point::new(10, 1000),
            Point::new(20, -1000),
            Point::new(30, 500),
            Point::new(40, 0),
        ];
        assert_eq!(douglas_peucker(&points, 1e9).len(), 2);
    }

    #[test]
    fn test_closed_sequence() {
        // Square with its first point repeated at the end.
        let points = vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
            Point::new(0, 0),
        ];
        assert_eq!(douglas_peucker(&points, 1.0), points);
    }

    #[test]
    fn test_indices() {
        let points = vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(20, 0),
            Point::new(30, 50),
            Point::new(40, 0),
            Point::new(50, 0),
        ];
        let indices = douglas_peucker_indices(&points, 5.0);
        assert!(indices.contains(&0));
        assert!(indices.contains(&3));
        assert!(indices.contains(&5));
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }
}
