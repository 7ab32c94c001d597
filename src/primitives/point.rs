//! Integer 2D point type.

use super::Line;
use crate::units::{round_coord, Coord};
use std::f64::consts::PI;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A point (or offset) on the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    /// Creates a new point.
    #[inline]
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// Creates a point from float coordinates, rounding to the grid.
    #[inline]
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self {
            x: round_coord(x),
            y: round_coord(y),
        }
    }

    /// 2D cross product of `self` and `other` treated as vectors.
    ///
    /// Computed in `i128` so it cannot overflow for any pair of coordinates
    /// whose differences fit in `i64`.
    #[inline]
    pub fn cross(self, other: Self) -> i128 {
        self.x as i128 * other.y as i128 - self.y as i128 * other.x as i128
    }

    /// Dot product of `self` and `other` treated as vectors.
    #[inline]
    pub fn dot(self, other: Self) -> i128 {
        self.x as i128 * other.x as i128 + self.y as i128 * other.y as i128
    }

    /// Returns the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        dx * dx + dy * dy
    }

    /// Returns the Euclidean distance to another point.
    #[inline]
    pub fn distance_to(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Returns the distance to the closest point of `line`, treated as a segment.
    pub fn distance_to_line(self, line: &Line) -> f64 {
        let (ax, ay) = (line.a.x as f64, line.a.y as f64);
        let dx = line.b.x as f64 - ax;
        let dy = line.b.y as f64 - ay;
        let len_sq = dx * dx + dy * dy;

        // Degenerate segment
        if len_sq == 0.0 {
            return self.distance_to(line.a);
        }

        let t = ((self.x as f64 - ax) * dx + (self.y as f64 - ay) * dy) / len_sq;
        let t = t.clamp(0.0, 1.0);
        let px = ax + t * dx - self.x as f64;
        let py = ay + t * dy - self.y as f64;
        (px * px + py * py).sqrt()
    }

    /// Translates the point in place.
    #[inline]
    pub fn translate(&mut self, dx: Coord, dy: Coord) {
        self.x += dx;
        self.y += dy;
    }

    /// Rotates the point about the origin by `angle` radians, rounding to the grid.
    pub fn rotate(&mut self, angle: f64) {
        let (s, c) = angle.sin_cos();
        let (x, y) = (self.x as f64, self.y as f64);
        self.x = round_coord(c * x - s * y);
        self.y = round_coord(c * y + s * x);
    }

    /// Rotates the point about `center` by `angle` radians.
    pub fn rotate_around(&mut self, angle: f64, center: Point) {
        let (s, c) = angle.sin_cos();
        let dx = self.x as f64 - center.x as f64;
        let dy = self.y as f64 - center.y as f64;
        self.x = round_coord(center.x as f64 + c * dx - s * dy);
        self.y = round_coord(center.y as f64 + c * dy + s * dx);
    }

    /// Returns a rotated copy of the point.
    #[inline]
    pub fn rotated(mut self, angle: f64) -> Self {
        self.rotate(angle);
        self
    }

    /// Angle swept at `self` going from `p1` to `p2`, in `(0, 2π]`.
    ///
    /// For a vertex of a counter-clockwise ring with `p1` the previous and
    /// `p2` the next vertex, a convex corner yields an angle above π and a
    /// reflex corner one below π.
    pub fn ccw_angle(self, p1: Point, p2: Point) -> f64 {
        let a1 = (p1.x as f64 - self.x as f64).atan2(p1.y as f64 - self.y as f64);
        let a2 = (p2.x as f64 - self.x as f64).atan2(p2.y as f64 - self.y as f64);
        let angle = a1 - a2;
        if angle <= 0.0 {
            angle + 2.0 * PI
        } else {
            angle
        }
    }
}

/// Orientation of `c` relative to the directed line `a -> b`.
///
/// Positive when `c` is to the left, negative to the right, zero when collinear.
#[inline]
pub fn orient(a: Point, b: Point, c: Point) -> i128 {
    let abx = b.x as i128 - a.x as i128;
    let aby = b.y as i128 - a.y as i128;
    let acx = c.x as i128 - a.x as i128;
    let acy = c.y as i128 - a.y as i128;
    abx * acy - aby * acx
}

impl From<(Coord, Coord)> for Point {
    #[inline]
    fn from((x, y): (Coord, Coord)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (Coord, Coord) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Neg for Point {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
