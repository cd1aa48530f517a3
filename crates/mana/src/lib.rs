//! # mana
//!
//! Lie groups, Lie algebras and differentiable manifolds for representing
//! geometric state in estimation problems.
//!
//! The generic contracts live in [`mana_core`] and the concrete groups in
//! [`mana_groups`]. Most users only need the prelude:
//!
//! ```
//! use mana::prelude::*;
//!
//! let a = So2::from_angle(0.5_f64);
//! let b = So2::from_angle(1.0_f64);
//!
//! let midpoint = a.interpolate(&b, 0.5);
//! assert!((midpoint.angle() - 0.75).abs() < 1e-12);
//!
//! let chart = a.local_chart();
//! let v = chart.to_tangent(&b);
//! assert!(chart.to_manifold(&v).approx_eq(&b));
//! ```

pub use mana_core;
pub use mana_groups;

pub use nalgebra;

pub use mana_core::{ManifoldError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use mana_core::prelude::*;
    pub use mana_groups::{So2, So2Algebra};
}
