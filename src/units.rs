//! Fixed-precision coordinate units.
//!
//! All geometry in this crate lives on an integer grid. Real-world distances
//! (millimetres) are multiplied by `1 / SCALING_FACTOR` and rounded, so one
//! grid unit is one nanometre.

use num_traits::{Float, NumCast};

/// Integer coordinate type for all stored points.
pub type Coord = i64;

/// Size of one grid unit in millimetres.
pub const SCALING_FACTOR: f64 = 0.000_001;

/// Real-world epsilon (millimetres).
pub const EPSILON: f64 = 1e-4;

/// `EPSILON` expressed in grid units.
pub const SCALED_EPSILON: Coord = 100;

/// Converts a real-world length to grid units, rounding to nearest.
///
/// # Example
///
/// ```
/// use slicering::units::scale_;
///
/// assert_eq!(scale_(1.5_f64), 1_500_000);
/// ```
#[inline]
pub fn scale_<F: Float>(value: F) -> Coord {
    let factor = F::from(SCALING_FACTOR).unwrap_or_else(F::epsilon);
    round_coord(value / factor)
}

/// Converts grid units back to a real-world length.
#[inline]
pub fn unscale<F: Float>(value: Coord) -> F {
    let factor = F::from(SCALING_FACTOR).unwrap_or_else(F::epsilon);
    F::from(value).unwrap_or_else(F::zero) * factor
}

/// Rounds a float to the nearest grid coordinate.
///
/// Values outside the coordinate range saturate; NaN maps to zero.
#[inline]
pub fn round_coord<F: Float>(value: F) -> Coord {
    if value.is_nan() {
        return 0;
    }
    <Coord as NumCast>::from(value.round()).unwrap_or(if value > F::zero() {
        Coord::MAX
    } else {
        Coord::MIN
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scale_roundtrip() {
        let c = scale_(12.345_f64);
        assert_eq!(c, 12_345_000);
        assert_relative_eq!(unscale::<f64>(c), 12.345, epsilon = 1e-9);
    }

    #[test]
    fn test_scale_f32() {
        assert_eq!(scale_(2.0_f32), 2_000_000);
    }

    #[test]
    fn test_scaled_epsilon_matches_epsilon() {
        assert_eq!(scale_(EPSILON), SCALED_EPSILON);
        assert_relative_eq!(unscale::<f64>(SCALED_EPSILON), EPSILON, epsilon = 1e-12);
    }

    #[test]
    fn test_round_coord_saturates() {
        assert_eq!(round_coord(1e30_f64), Coord::MAX);
        assert_eq!(round_coord(-1e30_f64), Coord::MIN);
        assert_eq!(round_coord(f64::NAN), 0);
        assert_eq!(round_coord(-2.5_f64), -3);
        assert_eq!(round_coord(2.4_f64), 2);
    }
}
