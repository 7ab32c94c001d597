//! Structural contract for generic polygon-set boolean engines.
//!
//! A union/intersection/difference/offset engine written against these
//! traits can read and rebuild [`Polygon`] and [`Polygons`] without this
//! crate knowing anything about the engine. The traits are kept apart from
//! the polygon type itself; they only describe how to walk and rebuild it.
//!
//! The contract is deliberately weak:
//! - vertex iteration never yields a closing duplicate,
//! - rebuilding drops a trailing point equal to the first, since engines
//!   close their rings themselves,
//! - winding is always reported as unknown, so the engine infers it,
//! - collections are neither clean nor sorted.

use crate::polygon::{Polygon, Polygons};
use crate::primitives::Point;

/// Traversal direction a polygon declares for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindingDirection {
    Clockwise,
    CounterClockwise,
    Unknown,
}

/// Read access to a single ring.
pub trait PolygonConcept {
    type Point: Copy;
    type Vertices<'a>: Iterator<Item = &'a Self::Point>
    where
        Self: 'a;

    /// Stored vertices in order, without repeating the first at the end.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Number of stored vertices.
    fn size(&self) -> usize;

    /// Declared winding; engines must infer it when this is `Unknown`.
    fn winding(&self) -> WindingDirection {
        WindingDirection::Unknown
    }
}

/// Rebuilding a ring from an engine's output.
pub trait PolygonMutConcept: PolygonConcept {
    /// Replaces the vertices with `input`, converting each item.
    ///
    /// A last point equal to the first is dropped.
    fn set_points<I, P>(&mut self, input: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Self::Point>;
}

/// Read access to a collection of rings.
pub trait PolygonSetConcept {
    type Polygon: PolygonConcept;
    type Polygons<'a>: Iterator<Item = &'a Self::Polygon>
    where
        Self: 'a;

    /// Member polygons in storage order. No ordering is implied.
    fn polygons(&self) -> Self::Polygons<'_>;

    /// Whether members are known to be free of overlaps and degeneracies.
    fn clean(&self) -> bool {
        false
    }

    /// Whether members are known to be in the engine's canonical order.
    fn sorted(&self) -> bool {
        false
    }
}

/// Rebuilding a collection from an engine's output.
pub trait PolygonSetMutConcept: PolygonSetConcept {
    fn set<I>(&mut self, input: I)
    where
        I: IntoIterator<Item = Self::Polygon>;
}

impl PolygonConcept for Polygon {
    type Point = Point;
    type Vertices<'a> = std::slice::Iter<'a, Point>;

    #[inline]
    fn vertices(&self) -> Self::Vertices<'_> {
        self.points.iter()
    }

    #[inline]
    fn size(&self) -> usize {
        self.points.len()
    }
}

impl PolygonMutConcept for Polygon {
    fn set_points<I, P>(&mut self, input: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        self.points.clear();
        self.points.extend(input.into_iter().map(Into::into));
        if self.points.len() > 1 && self.points.first() == self.points.last() {
            self.points.pop();
        }
        self
    }
}

impl PolygonSetConcept for Polygons {
    type Polygon = Polygon;
    type Polygons<'a> = std::slice::Iter<'a, Polygon>;

    #[inline]
    fn polygons(&self) -> Self::Polygons<'_> {
        self.iter()
    }
}

impl PolygonSetMutConcept for Polygons {
    fn set<I>(&mut self, input: I)
    where
        I: IntoIterator<Item = Polygon>,
    {
        self.clear();
        self.extend(input);
    }
}

/// Winding of any ring, computed from its vertices when it does not declare one.
///
/// This is how an engine consuming [`PolygonConcept`] resolves
/// [`WindingDirection::Unknown`]. Rings without area report `Unknown`.
pub fn infer_winding<P>(polygon: &P) -> WindingDirection
where
    P: PolygonConcept<Point = Point>,
{
    match polygon.winding() {
        WindingDirection::Unknown => {}
        declared => return declared,
    }
    if polygon.size() < 3 {
        return WindingDirection::Unknown;
    }

    let first = polygon.vertices().next().copied();
    let twice: i128 = polygon
        .vertices()
        .zip(polygon.vertices().skip(1).chain(first.as_ref()))
        .map(|(a, b)| a.cross(*b))
        .sum();
    match twice.signum() {
        1 => WindingDirection::CounterClockwise,
        -1 => WindingDirection::Clockwise,
        _ => WindingDirection::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Coord;

    fn square() -> Polygon {
        Polygon::from_coords(&[(0, 0), (10, 0), (10, 10), (0, 10)])
    }

    /// Minimal stand-in for an engine pass: reads every ring, closes it the
    /// way engines do, and writes the rings back.
    fn engine_roundtrip<S>(set: &S) -> Vec<Vec<(Coord, Coord)>>
    where
        S: PolygonSetConcept<Polygon = Polygon>,
    {
        set.polygons()
            .map(|poly| {
                let mut ring: Vec<(Coord, Coord)> =
                    poly.vertices().map(|&p| p.into()).collect();
                if let Some(&first) = ring.first() {
                    ring.push(first);
                }
                ring
            })
            .collect()
    }

    #[test]
    fn test_vertices_have_no_closing_duplicate() {
        let sq = square();
        let verts: Vec<Point> = sq.vertices().copied().collect();
        assert_eq!(verts, sq.points);
        assert_eq!(sq.size(), 4);
    }

    #[test]
    fn test_winding_is_unknown() {
        let mut sq = square();
        assert_eq!(sq.winding(), WindingDirection::Unknown);
        sq.reverse();
        assert_eq!(sq.winding(), WindingDirection::Unknown);
    }

    #[test]
    fn test_infer_winding() {
        let mut sq = square();
        assert_eq!(infer_winding(&sq), WindingDirection::CounterClockwise);
        sq.reverse();
        assert_eq!(infer_winding(&sq), WindingDirection::Clockwise);
        let line = Polygon::from_coords(&[(0, 0), (5, 0), (10, 0)]);
        assert_eq!(infer_winding(&line), WindingDirection::Unknown);
        assert_eq!(infer_winding(&Polygon::default()), WindingDirection::Unknown);
    }

    #[test]
    fn test_set_points_drops_closing_point() {
        let mut poly = Polygon::default();
        poly.set_points([(0, 0), (10, 0), (10, 10), (0, 10), (0, 0)]);
        assert_eq!(poly, square());
    }

    #[test]
    fn test_set_points_keeps_open_input() {
        let mut poly = square();
        poly.set_points(vec![Point::new(1, 1), Point::new(2, 1), Point::new(1, 2)]);
        assert_eq!(poly.size(), 3);
        poly.set_points(std::iter::once(Point::new(3, 3)));
        assert_eq!(poly.points, vec![Point::new(3, 3)]);
        poly.set_points(Vec::<Point>::new());
        assert!(poly.is_empty());
    }

    #[test]
    fn test_polygon_set_roundtrip() {
        let mut hole = Polygon::from_coords(&[(2, 2), (4, 2), (4, 4), (2, 4)]);
        hole.reverse();
        let set: Polygons = vec![square(), hole.clone()];
        assert!(!set.clean());
        assert!(!set.sorted());
        assert_eq!(set.polygons().count(), 2);

        let rings = engine_roundtrip(&set);
        assert_eq!(rings[0].len(), 5);

        let mut rebuilt: Polygons = Vec::new();
        rebuilt.set(rings.into_iter().map(|ring| {
            let mut p = Polygon::default();
            p.set_points(ring);
            p
        }));
        assert_eq!(rebuilt, vec![square(), hole]);
    }
}
