//! Error types for manifold and group operations.
//!
//! Almost every operation in this crate is a total, pure computation. Errors
//! only arise on the checked construction paths, where a caller asks for an
//! embedding point to be validated instead of trusting it.

use thiserror::Error;

/// Errors that can occur during manifold operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ManifoldError {
    /// Point is not on the manifold.
    ///
    /// This error occurs when a point fails to satisfy the manifold constraints
    /// within the requested tolerance.
    #[error("Point is not on the manifold: {reason}")]
    InvalidPoint {
        /// Description of why the point is invalid
        reason: String,
    },

    /// Dimension mismatch between a coefficient slice and a tangent space.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions
        expected: String,
        /// Actual dimensions
        actual: String,
    },

    /// Numerical instability detected.
    ///
    /// This error occurs when an input contains non-finite values that no
    /// closed-form map can recover from.
    #[error("Numerical instability detected: {reason}")]
    NumericalError {
        /// Description of the numerical issue
        reason: String,
    },
}

impl ManifoldError {
    /// Create an InvalidPoint error with a custom reason.
    pub fn invalid_point<S: Into<String>>(reason: S) -> Self {
        Self::InvalidPoint {
            reason: reason.into(),
        }
    }

    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a NumericalError with a custom reason.
    pub fn numerical_error<S: Into<String>>(reason: S) -> Self {
        Self::NumericalError {
            reason: reason.into(),
        }
    }
}

/// Result type alias for manifold operations.
pub type Result<T> = std::result::Result<T, ManifoldError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display() {
        let err = ManifoldError::invalid_point("det(R) = -1");
        assert_eq!(err.to_string(), "Point is not on the manifold: det(R) = -1");

        let err = ManifoldError::dimension_mismatch(1, 3);
        assert_eq!(err.to_string(), "Dimension mismatch: expected 1, got 3");

        let err = ManifoldError::numerical_error("NaN in embedding point");
        assert_eq!(
            err.to_string(),
            "Numerical instability detected: NaN in embedding point"
        );
    }

    #[test]
    fn test_error_matching() {
        let err = ManifoldError::invalid_point("not orthonormal");
        match err {
            ManifoldError::InvalidPoint { reason } => assert_eq!(reason, "not orthonormal"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
