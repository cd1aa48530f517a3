//! Core traits for Lie groups, Lie algebras and differentiable manifolds.
//!
//! This crate provides the algebraic primitives used to represent geometric
//! state (rotations, poses) in state estimation. It defines the contracts a
//! concrete group must satisfy and the generic code written once against
//! them.
//!
//! # Key Concepts
//!
//! - **Manifold elements**: points of a smooth manifold, stored through an
//!   embedding into a larger ambient space
//! - **Group elements**: composition, inverse, identity and action
//! - **Algebra elements**: vector-space operations and the bracket
//! - **Lie groups**: groups that are manifolds, bridged to their algebra by
//!   the exponential and logarithm maps
//!
//! # Modules
//!
//! - [`algebra`]: Algebra and Lie algebra element traits
//! - [`angle`]: Angle wrapping utilities
//! - [`chart`]: Local charts around an origin element
//! - [`error`]: Error types for checked construction
//! - [`geodesic`]: Geodesic curves between two elements
//! - [`group`]: Group element trait
//! - [`lie_group`]: Lie group element trait
//! - [`manifold`]: Manifold element trait
//! - [`types`]: Scalar trait and default tolerances

pub mod algebra;
pub mod angle;
pub mod base;
pub mod chart;
pub mod geodesic;
pub mod group;
pub mod lie_group;

pub use crate::base::{error, manifold, types};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_fixtures;

// Re-export commonly used items at the crate root
pub use error::{ManifoldError, Result};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use mana_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algebra::{AlgebraElement, LieAlgebraElement};
    pub use crate::angle::{shortest_angular_distance, wrap_angle};
    pub use crate::chart::ManifoldChart;
    pub use crate::error::{ManifoldError, Result};
    pub use crate::geodesic::ManifoldGeodesic;
    pub use crate::group::GroupElement;
    pub use crate::lie_group::LieGroupElement;
    pub use crate::manifold::ManifoldElement;
    pub use crate::types::{constants, Scalar};
}
