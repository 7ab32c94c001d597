//! Ring simplification and self-intersection splitting.
//!
//! Decimating a ring can make non-adjacent edges cross. Such a ring is cut
//! at each proper crossing into simple loops, which is why simplification
//! returns a collection.

use super::core::{Polygon, Polygons};
use crate::primitives::{orient, Point};
use crate::simplify::douglas_peucker;
use tracing::{debug, trace};

/// A proper crossing between edge `edge1` and a later edge `edge2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossing {
    /// Index of the first edge (from vertex `edge1` to `edge1 + 1`).
    pub edge1: usize,
    /// Index of the second edge.
    pub edge2: usize,
    /// Crossing point, rounded to the grid.
    pub point: Point,
}

impl Polygon {
    /// Simplifies the ring with Douglas-Peucker at `tolerance`.
    ///
    /// The result may hold several rings if decimation made the boundary
    /// cross itself, or none if the ring collapses below three points or to
    /// zero area. Each output ring keeps the traversal direction of the loop
    /// it was cut from.
    ///
    /// # Example
    ///
    /// ```
    /// use slicering::Polygon;
    ///
    /// // A square with a slight bump on its bottom edge.
    /// let bumpy = Polygon::from_coords(&[(0, 0), (50, 1), (100, 0), (100, 100), (0, 100)]);
    /// let simplified = bumpy.simplify(5.0);
    /// assert_eq!(simplified.len(), 1);
    /// assert_eq!(simplified[0].len(), 4);
    /// ```
    pub fn simplify(&self, tolerance: f64) -> Polygons {
        let mut polygons = Vec::new();
        self.simplify_into(tolerance, &mut polygons);
        polygons
    }

    /// Like [`Polygon::simplify`], appending the resulting rings to `polygons`.
    pub fn simplify_into(&self, tolerance: f64, polygons: &mut Polygons) {
        let Some(first) = self.first_point() else {
            return;
        };

        // Repeat the first point so the closing edge is simplified too.
        let mut closed = Vec::with_capacity(self.points.len() + 1);
        closed.extend_from_slice(&self.points);
        closed.push(first);
        let mut points = douglas_peucker(&closed, tolerance);
        points.pop();

        let before = polygons.len();
        let kept = points.len();
        split_self_intersections(Polygon::new(points), polygons);
        debug!(
            tolerance,
            input = self.points.len(),
            kept,
            rings = polygons.len() - before,
            "simplified polygon"
        );
    }

    /// Returns true if any two non-adjacent edges cross properly.
    pub fn has_self_intersection(&self) -> bool {
        first_crossing(&self.points).is_some()
    }
}

/// Finds the first proper crossing between non-adjacent edges, in edge order.
///
/// Edges that merely touch at an endpoint or overlap collinearly do not count.
/// Only edges whose bounding boxes overlap are tested: edges are swept by
/// their left end, and an edge is compared with the still-open edges whose
/// x range reaches it.
pub fn first_crossing(points: &[Point]) -> Option<Crossing> {
    let n = points.len();
    if n < 4 {
        return None;
    }

    let edge = |i: usize| (points[i], points[(i + 1) % n]);
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_unstable_by_key(|&i| {
        let (a, b) = edge(i);
        a.x.min(b.x)
    });

    let mut open: Vec<usize> = Vec::new();
    let mut best: Option<(usize, usize)> = None;
    for &i in &order {
        let (a1, a2) = edge(i);
        let (min_x, min_y, max_y) = (a1.x.min(a2.x), a1.y.min(a2.y), a1.y.max(a2.y));
        open.retain(|&j| {
            let (b1, b2) = edge(j);
            b1.x.max(b2.x) >= min_x
        });

        for &j in &open {
            let (e1, e2) = if i < j { (i, j) } else { (j, i) };
            // Adjacent edges share a vertex, including across the seam
            if e2 == e1 + 1 || (e1 == 0 && e2 == n - 1) {
                continue;
            }
            if best.is_some_and(|found| found <= (e1, e2)) {
                continue;
            }
            let (b1, b2) = edge(j);
            if b1.y.max(b2.y) < min_y || b1.y.min(b2.y) > max_y {
                continue;
            }
            if properly_intersect(a1, a2, b1, b2) {
                best = Some((e1, e2));
            }
        }
        open.push(i);
    }

    best.map(|(e1, e2)| {
        let (a1, a2) = edge(e1);
        let (b1, b2) = edge(e2);
        Crossing {
            edge1: e1,
            edge2: e2,
            point: crossing_point(a1, a2, b1, b2),
        }
    })
}

/// Cuts `ring` at proper crossings until every piece is simple.
///
/// Simple pieces with at least three points and non-zero area are appended
/// to `out`; the rest are dropped.
pub fn split_self_intersections(ring: Polygon, out: &mut Polygons) {
    let mut pending = vec![ring];
    while let Some(mut ring) = pending.pop() {
        ring.remove_duplicate_points();
        if ring.len() < 3 {
            trace!(points = ring.len(), "dropping collapsed loop");
            continue;
        }

        match first_crossing(&ring.points) {
            Some(crossing) => {
                let (a, b) = split_at_crossing(&ring.points, &crossing);
                trace!(
                    edge1 = crossing.edge1,
                    edge2 = crossing.edge2,
                    x = crossing.point.x,
                    y = crossing.point.y,
                    "splitting self-intersecting loop"
                );
                // Both loops are strictly shorter than `ring`, so this terminates.
                pending.push(b);
                pending.push(a);
            }
            None if ring.area() != 0.0 => out.push(ring),
            None => trace!(points = ring.len(), "dropping zero-area loop"),
        }
    }
}

/// Cuts a ring at a crossing into the loop between the two edges and the loop around the seam.
fn split_at_crossing(points: &[Point], crossing: &Crossing) -> (Polygon, Polygon) {
    let (e1, e2) = (crossing.edge1, crossing.edge2);

    let mut inner = Vec::with_capacity(e2 - e1 + 1);
    inner.extend_from_slice(&points[e1 + 1..=e2]);
    inner.push(crossing.point);

    let mut outer = Vec::with_capacity(points.len() - (e2 - e1) + 1);
    outer.extend_from_slice(&points[e2 + 1..]);
    outer.extend_from_slice(&points[..=e1]);
    outer.push(crossing.point);

    (Polygon::new(inner), Polygon::new(outer))
}

/// Checks if two segments cross at a point interior to both.
fn properly_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let d1 = orient(b1, b2, a1).signum();
    let d2 = orient(b1, b2, a2).signum();
    let d3 = orient(a1, a2, b1).signum();
    let d4 = orient(a1, a2, b2).signum();
    d1 * d2 < 0 && d3 * d4 < 0
}

/// Intersection point of two properly crossing segments.
fn crossing_point(a1: Point, a2: Point, b1: Point, b2: Point) -> Point {
    let d1 = a2 - a1;
    let d2 = b2 - b1;
    let denom = d1.cross(d2) as f64;
    let t = (b1 - a1).cross(d2) as f64 / denom;
    Point::from_f64(
        a1.x as f64 + t * d1.x as f64,
        a1.y as f64 + t * d1.y as f64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bowtie() -> Polygon {
        Polygon::from_coords(&[(0, 0), (20, 20), (20, 0), (0, 20)])
    }

    #[test]
    fn test_simplify_removes_noise() {
        let bumpy = Polygon::from_coords(&[(0, 0), (50, 1), (100, 0), (100, 100), (0, 100)]);
        let out = bumpy.simplify(5.0);
        assert_eq!(
            out,
            vec![Polygon::from_coords(&[(0, 0), (100, 0), (100, 100), (0, 100)])]
        );
    }

    #[test]
    fn test_simplify_zero_tolerance_drops_only_collinear() {
        let sq = Polygon::from_coords(&[(0, 0), (5, 0), (10, 0), (10, 10), (0, 10)]);
        let out = sq.simplify(0.0);
        assert_eq!(
            out,
            vec![Polygon::from_coords(&[(0, 0), (10, 0), (10, 10), (0, 10)])]
        );
        assert_eq!(out[0].area(), sq.area());
    }

    #[test]
    fn test_simplify_huge_tolerance_collapses() {
        let sq = Polygon::from_coords(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        assert!(sq.simplify(1e9).is_empty());
    }

    #[test]
    fn test_simplify_degenerate_input() {
        assert!(Polygon::default().simplify(1.0).is_empty());
        assert!(Polygon::from_coords(&[(0, 0), (10, 10)]).simplify(0.0).is_empty());
        assert!(Polygon::from_coords(&[(0, 0), (5, 5), (10, 10)])
            .simplify(0.0)
            .is_empty());
    }

    #[test]
    fn test_simplify_keeps_orientation() {
        let mut sq = Polygon::from_coords(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        sq.reverse();
        let out = sq.simplify(0.5);
        assert_eq!(out.len(), 1);
        assert!(out[0].is_clockwise());
    }

    #[test]
    fn test_simplify_splits_bowtie() {
        let out = bowtie().simplify(0.0);
        assert_eq!(out.len(), 2);
        assert_eq!(
            out[0],
            Polygon::from_coords(&[(20, 20), (20, 0), (10, 10)])
        );
        assert_eq!(out[1], Polygon::from_coords(&[(0, 20), (0, 0), (10, 10)]));
        assert_eq!(out[0].area(), -100.0);
        assert_eq!(out[1].area(), 100.0);
    }

    #[test]
    fn test_simplify_into_appends() {
        let mut polys = vec![Polygon::from_coords(&[(0, 0), (1, 0), (0, 1)])];
        bowtie().simplify_into(0.0, &mut polys);
        assert_eq!(polys.len(), 3);
    }

    #[test]
    fn test_decimation_crossing_splits_ring() {
        // A deep notch from the top reaches below y = 0 while the bottom edge
        // sags to y = -5 underneath it. Dropping the sag leaves the straight
        // bottom edge cutting through the notch tip.
        let ring = Polygon::from_coords(&[
            (0, 0),
            (40, -5),
            (60, -5),
            (100, 0),
            (100, 100),
            (55, 100),
            (50, -2),
            (45, 100),
            (0, 100),
        ]);
        assert!(!ring.has_self_intersection());

        let out = ring.simplify(6.0);
        assert_eq!(
            out,
            vec![
                Polygon::from_coords(&[(100, 0), (100, 100), (55, 100), (50, 0)]),
                Polygon::from_coords(&[(45, 100), (0, 100), (0, 0), (50, 0)]),
            ]
        );
        for piece in &out {
            assert!(!piece.has_self_intersection());
            assert!(piece.is_counter_clockwise());
        }
    }

    #[test]
    fn test_first_crossing() {
        let crossing = first_crossing(&bowtie().points).unwrap();
        assert_eq!(crossing.edge1, 0);
        assert_eq!(crossing.edge2, 2);
        assert_eq!(crossing.point, Point::new(10, 10));

        let sq = Polygon::from_coords(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        assert!(first_crossing(&sq.points).is_none());
    }

    #[test]
    fn test_first_crossing_picks_lowest_edge_pair() {
        // Edges 1 and 3 cross on the right near x = 95. The loop on the left
        // crosses itself too, with higher edge indices, and is swept first.
        let zigzag = Polygon::from_coords(&[
            (10, 0),
            (100, 0),
            (90, 10),
            (90, 0),
            (100, 10),
            (40, 10),
            (30, 0),
            (30, 10),
            (40, 0),
            (10, 10),
        ]);
        let crossing = first_crossing(&zigzag.points).unwrap();
        assert_eq!((crossing.edge1, crossing.edge2), (1, 3));
        assert_eq!(crossing.point, Point::new(95, 5));
    }

    #[test]
    fn test_first_crossing_skips_disjoint_edges() {
        // Neighbouring teeth share x ranges but never cross.
        let mut coords = vec![(0, 0)];
        for k in 0..50 {
            coords.push((k * 10 + 5, 100));
            coords.push((k * 10 + 10, 0));
        }
        coords.push((500, -10));
        coords.push((0, -10));
        let comb = Polygon::from_coords(&coords);
        assert!(first_crossing(&comb.points).is_none());
    }

    #[test]
    fn test_touching_vertices_are_not_crossings() {
        // Two triangles meeting at (10, 10)
        let touching = Polygon::from_coords(&[
            (0, 0),
            (10, 10),
            (20, 0),
            (20, 20),
            (10, 10),
            (0, 20),
        ]);
        assert!(!touching.has_self_intersection());
    }

    #[test]
    fn test_split_drops_zero_area_loops() {
        let mut out = Vec::new();
        split_self_intersections(Polygon::from_coords(&[(0, 0), (10, 0), (20, 0)]), &mut out);
        assert!(out.is_empty());
    }
}
