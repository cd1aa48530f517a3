//! Angle utilities.
//!
//! Planar rotations are periodic in their angle, so every angle leaving this
//! crate is reduced to the principal representative in `(-π, π]`. The upper
//! bound is inclusive: `-π` and `π` describe the same rotation, and `π` is the
//! one that is kept.

use crate::types::{constants, Scalar};
use num_traits::Float;

/// Wraps an angle into the principal interval `(-π, π]`.
///
/// Non-finite inputs are returned unchanged.
pub fn wrap_angle<T: Scalar>(angle: T) -> T {
    if !<T as Float>::is_finite(angle) {
        return angle;
    }

    let pi = constants::pi::<T>();
    let two_pi = constants::two_pi::<T>();
    if angle > -pi && angle <= pi {
        return angle;
    }

    let mut wrapped = angle - two_pi * <T as Float>::floor((angle + pi) / two_pi);
    // Rounding in the floor above can land one ulp outside the interval.
    if wrapped <= -pi {
        wrapped += two_pi;
    } else if wrapped > pi {
        wrapped -= two_pi;
    }
    wrapped
}

/// Signed shortest rotation taking `from` onto `to`, in `(-π, π]`.
pub fn shortest_angular_distance<T: Scalar>(from: T, to: T) -> T {
    wrap_angle(to - from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    #[test]
    fn test_wrap_inside_interval_is_identity() {
        for &a in &[0.0, 0.1, -0.1, 1.5, -3.0, 3.0] {
            assert_relative_eq!(wrap_angle(a), a, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_wrap_boundaries() {
        assert_relative_eq!(wrap_angle(PI), PI, epsilon = 1e-15);
        assert_relative_eq!(wrap_angle(-PI), PI, epsilon = 1e-15);
        assert_relative_eq!(wrap_angle(3.0 * PI), PI, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(-3.0 * PI), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_wrap_full_turns() {
        assert_relative_eq!(wrap_angle(2.0 * PI + 0.1), 0.1, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(-2.0 * PI - 0.1), -0.1, epsilon = 1e-12);
        assert_relative_eq!(wrap_angle(20.0 * PI + 0.5), 0.5, epsilon = 1e-10);
        assert_relative_eq!(wrap_angle(2.0 * PI), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wrap_f32() {
        let wrapped = wrap_angle(3.0_f32 * std::f32::consts::PI / 2.0);
        assert_relative_eq!(wrapped, -std::f32::consts::PI / 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_wrap_non_finite() {
        assert!(wrap_angle(f64::NAN).is_nan());
        assert_eq!(wrap_angle(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_shortest_angular_distance() {
        assert_relative_eq!(shortest_angular_distance(0.0, 0.5), 0.5, epsilon = 1e-15);
        assert_relative_eq!(shortest_angular_distance(0.5, 0.0), -0.5, epsilon = 1e-15);

        // Crossing the ±π seam takes the short way round.
        let d = shortest_angular_distance(PI - 0.1, -PI + 0.1);
        assert_relative_eq!(d, 0.2, epsilon = 1e-12);
        let d = shortest_angular_distance(-PI + 0.1, PI - 0.1);
        assert_relative_eq!(d, -0.2, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_wrap_lands_in_principal_interval(a in -1.0e3f64..1.0e3) {
            let w = wrap_angle(a);
            prop_assert!(w > -PI && w <= PI);
        }

        #[test]
        fn prop_wrap_preserves_rotation(a in -1.0e3f64..1.0e3) {
            let w = wrap_angle(a);
            prop_assert!((w.cos() - a.cos()).abs() < 1e-9);
            prop_assert!((w.sin() - a.sin()).abs() < 1e-9);
        }

        #[test]
        fn prop_wrap_is_idempotent(a in -1.0e3f64..1.0e3) {
            let w = wrap_angle(a);
            prop_assert_eq!(wrap_angle(w), w);
        }

        #[test]
        fn prop_shortest_distance_is_antisymmetric(a in -10.0f64..10.0, b in -10.0f64..10.0) {
            let forward = shortest_angular_distance(a, b);
            let backward = shortest_angular_distance(b, a);
            // At exactly π both directions report +π.
            if forward.abs() < PI - 1e-9 {
                prop_assert!((forward + backward).abs() < 1e-9);
            }
        }
    }
}
