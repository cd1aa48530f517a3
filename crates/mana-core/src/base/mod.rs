//! Core traits and types shared by every manifold realization.

pub mod error;
pub mod manifold;
pub mod types;

// Re-export core types
pub use error::*;
pub use manifold::*;
pub use types::*;
