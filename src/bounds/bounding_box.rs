//! Integer axis-aligned bounding box.

use crate::primitives::Point;

/// A 2D axis-aligned bounding box on the integer grid.
///
/// A box built from no points is *undefined*: `defined` is false and both
/// corners sit at the origin. Merging anything into an undefined box replaces
/// it outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundingBox {
    /// Minimum corner (smallest x and y values).
    pub min: Point,
    /// Maximum corner (largest x and y values).
    pub max: Point,
    /// False for the empty sentinel.
    pub defined: bool,
}

impl BoundingBox {
    /// Creates a box from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point, max: Point) -> Self {
        Self {
            min,
            max,
            defined: true,
        }
    }

    /// Creates a box containing a single point.
    #[inline]
    pub fn from_point(p: Point) -> Self {
        Self::new(p, p)
    }

    /// Creates a box from an iterator of points.
    ///
    /// Returns the undefined sentinel if the iterator is empty.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut bb = Self::default();
        for p in points {
            bb.merge_point(p);
        }
        bb
    }

    /// Grows the box to include `p`.
    #[inline]
    pub fn merge_point(&mut self, p: Point) {
        if self.defined {
            self.min = Point::new(self.min.x.min(p.x), self.min.y.min(p.y));
            self.max = Point::new(self.max.x.max(p.x), self.max.y.max(p.y));
        } else {
            *self = Self::from_point(p);
        }
    }

    /// Grows the box to include `other`. Undefined boxes are ignored.
    #[inline]
    pub fn merge(&mut self, other: &Self) {
        if !other.defined {
            return;
        }
        if self.defined {
            self.merge_point(other.min);
            self.merge_point(other.max);
        } else {
            *self = *other;
        }
    }

    /// Returns the extent along each axis as a point.
    #[inline]
    pub fn size(&self) -> Point {
        self.max - self.min
    }

    /// Returns the center, rounded toward negative infinity.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.min.x + (self.max.x - self.min.x).div_euclid(2),
            self.min.y + (self.max.y - self.min.y).div_euclid(2),
        )
    }

    /// Returns `true` if the box contains the point, boundary included.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.defined
            && p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
    }
}
