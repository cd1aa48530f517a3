//! Checks that the umbrella crate exposes a usable surface.

use approx::assert_relative_eq;
use mana::prelude::*;
use mana::nalgebra::{Matrix2, Vector1};
use pretty_assertions::assert_eq;
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn test_rotation_workflow() {
    let heading = So2::from_angle(FRAC_PI_2);
    let turn = So2::<f64>::exp(&Vector1::new(FRAC_PI_2));

    let result = heading.compose(&turn);
    assert_relative_eq!(result.angle(), PI, epsilon = 1e-12);
    assert_relative_eq!(result, So2::from_angle(PI), epsilon = 1e-12);
}

#[test]
fn test_checked_construction_reports_invalid_point() {
    let scaled = Matrix2::identity() * 1.1;

    let err = So2::<f64>::try_from_point(&scaled, 1e-10).unwrap_err();
    assert!(matches!(err, ManifoldError::InvalidPoint { .. }));

    let projected = So2::<f64>::from_point_projected(&scaled);
    assert_eq!(projected, So2::identity());
}

#[test]
fn test_algebra_round_trip() {
    let omega = So2Algebra::new(0.25_f64);
    let generator = omega.hat();

    assert_eq!(So2Algebra::<f64>::from_generator(&generator), omega);
    assert_eq!(
        So2Algebra::from_slice(&[1.0, 2.0]).unwrap_err(),
        ManifoldError::DimensionMismatch {
            expected: "1".to_string(),
            actual: "2".to_string(),
        }
    );
}
