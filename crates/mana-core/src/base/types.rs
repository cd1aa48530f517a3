//! Scalar trait and tolerance provider.
//!
//! Every element type in this crate is parameterized by a floating-point
//! scalar. The [`Scalar`] trait bundles the numeric traits needed by the
//! closed-form maps and carries the default closeness threshold for each
//! precision, so that comparisons never fall back to exact equality.

use nalgebra::{RealField, Scalar as NalgebraScalar};
use num_traits::Float;
use std::fmt::{Debug, Display};

/// Trait for scalar types used by manifold and group elements (f32 or f64).
pub trait Scalar:
    NalgebraScalar + RealField + Float + Display + Debug + Default + Copy + Send + Sync + 'static
{
    /// Default closeness threshold used wherever a caller omits a tolerance.
    const EPSILON: Self;

    /// Convert from f64 (for constants).
    ///
    /// Goes through nalgebra's subset conversion, which is total for the
    /// supported precisions.
    fn from_f64(v: f64) -> Self {
        nalgebra::convert(v)
    }

    /// Convert to f64 (for logging/display).
    fn to_f64(self) -> f64 {
        <Self as num_traits::ToPrimitive>::to_f64(&self).unwrap_or(f64::NAN)
    }
}

impl Scalar for f32 {
    const EPSILON: Self = 1e-5;
}

impl Scalar for f64 {
    const EPSILON: Self = 1e-10;
}

/// Numerical constants for different precision levels.
pub mod constants {
    use super::Scalar;

    /// Default closeness threshold for the given scalar type.
    pub fn epsilon<T: Scalar>() -> T {
        T::EPSILON
    }

    /// Pi constant.
    pub fn pi<T: Scalar>() -> T {
        <T as Scalar>::from_f64(std::f64::consts::PI)
    }

    /// Two pi, the period of planar rotations.
    pub fn two_pi<T: Scalar>() -> T {
        <T as Scalar>::from_f64(std::f64::consts::TAU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_epsilon_per_precision() {
        assert!(<f32 as Scalar>::EPSILON > 0.0);
        assert!(<f64 as Scalar>::EPSILON > 0.0);
        assert!(f64::from(<f32 as Scalar>::EPSILON) > <f64 as Scalar>::EPSILON);

        assert_eq!(constants::epsilon::<f32>(), <f32 as Scalar>::EPSILON);
        assert_eq!(constants::epsilon::<f64>(), <f64 as Scalar>::EPSILON);
    }

    #[test]
    fn test_epsilon_above_machine_precision() {
        assert!(<f32 as Scalar>::EPSILON > f32::EPSILON);
        assert!(<f64 as Scalar>::EPSILON > f64::EPSILON);
    }

    #[test]
    fn test_scalar_conversions() {
        let val_f64 = 3.14159;
        let val_f32 = <f32 as Scalar>::from_f64(val_f64);
        assert_relative_eq!(f64::from(val_f32), val_f64, epsilon = 1e-6);

        let back_f64 = Scalar::to_f64(val_f32);
        assert_relative_eq!(back_f64, f64::from(val_f32));
    }

    #[test]
    fn test_constants() {
        assert_relative_eq!(constants::pi::<f32>(), std::f32::consts::PI, epsilon = 1e-6);
        assert_relative_eq!(constants::pi::<f64>(), std::f64::consts::PI, epsilon = 1e-12);
        assert_relative_eq!(
            constants::two_pi::<f64>(),
            2.0 * std::f64::consts::PI,
            epsilon = 1e-12
        );
    }
}
