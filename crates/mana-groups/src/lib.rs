//! mana groups - concrete Lie group realizations.
//!
//! Each realization implements the full set of `mana-core` contracts
//! (manifold, group, Lie group, and the matching Lie algebra), so the generic
//! charts, geodesics and property testers apply to it unchanged.

pub mod so2;

pub use so2::{So2, So2Algebra};
