//! Serialization tests, run with `--features serde`.
#![cfg(feature = "serde")]

use mana_core::prelude::*;
use mana_groups::{So2, So2Algebra};

#[test]
fn test_rotation_survives_json() {
    let rotation = So2::from_angle(1.25_f64);

    let json = serde_json::to_string(&rotation).unwrap();
    let back: So2<f64> = serde_json::from_str(&json).unwrap();

    assert!(back.approx_eq(&rotation));
    assert!((back.angle() - 1.25).abs() < 1e-12);
}

#[test]
fn test_algebra_element_survives_json() {
    let omega = So2Algebra::new(-0.4_f64);

    let json = serde_json::to_string(&omega).unwrap();
    let back: So2Algebra<f64> = serde_json::from_str(&json).unwrap();

    assert_eq!(back, omega);
}
