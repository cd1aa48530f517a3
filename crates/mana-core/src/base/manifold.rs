//! Core manifold trait.
//!
//! Manifolds are expressed extrinsically: every element is a point of a
//! larger ambient space (the *embedding space*) that happens to satisfy the
//! manifold's defining constraint. For instance, elements of the rotation
//! group SO(n) are stored as n×n matrices with `RᵀR = I` and `det R = 1`.
//!
//! # Mathematical Background
//!
//! - **Embedding point**: the ambient representation of an element. Ambient
//!   points may lie off the manifold; [`ManifoldElement::project`] maps them
//!   back and [`ManifoldElement::is_valid`] tells them apart.
//! - **Geodesic**: the natural shortest path between two elements, used for
//!   both [`ManifoldElement::distance_to`] and
//!   [`ManifoldElement::interpolate`].
//! - **Chart**: a local linearization around an origin element, mapping
//!   elements to tangent vectors and back (see [`ManifoldChart`]).
//!
//! Elements are immutable values. Equality is always approximate: two
//! elements are equal when their geodesic distance is below a tolerance.

use crate::{
    chart::ManifoldChart,
    error::{ManifoldError, Result},
    geodesic::ManifoldGeodesic,
    types::Scalar,
};
use std::fmt::Debug;

/// Trait for elements of a differentiable manifold.
///
/// Implementors provide the realization-specific pieces (construction from
/// an embedding point, projection, validity, distance, interpolation); the
/// remaining operations are written once here in terms of those.
///
/// # Mathematical Properties
///
/// Every implementation must guarantee:
///
/// 1. **Projection validity**: `is_valid(project(p))` for every ambient `p`
/// 2. **Projection idempotency**: `project(project(p)) = project(p)`
/// 3. **Unchecked construction**: `from_point(p).point() = p` for valid `p`
/// 4. **Metric**: `distance_to` is symmetric, non-negative and zero only
///    for tolerance-equal elements
/// 5. **Interpolation endpoints**: `a.interpolate(b, 0) ≈ a` and
///    `a.interpolate(b, 1) ≈ b`
///
/// # Examples
///
/// ```rust
/// use mana_core::prelude::*;
///
/// fn midpoint<M: ManifoldElement>(a: &M, b: &M) -> M {
///     a.geodesic_to(b).interpolate(<M::Scalar as Scalar>::from_f64(0.5))
/// }
/// ```
pub trait ManifoldElement: Clone + Debug + Sized {
    /// The scalar type used to represent distances and tolerances.
    type Scalar: Scalar;

    /// A vector in a tangent space of this manifold.
    type TangentVector: Clone + Debug;

    /// A point in the embedding space. Not necessarily a vector: points in the
    /// embedding space of rotation groups are square matrices.
    type EmbeddingPoint: Clone + Debug;

    /// The intrinsic dimension of the manifold.
    const DIMENSION: usize;

    /// The dimension of the embedding space. Never smaller than
    /// [`Self::DIMENSION`].
    const EMBEDDING_DIMENSION: usize;

    /// Constructs an element from a point of the embedding space.
    ///
    /// No validation is performed: the point is assumed to lie on the
    /// manifold. Use [`Self::try_from_point`] or
    /// [`Self::from_point_projected`] for untrusted input.
    fn from_point(point: &Self::EmbeddingPoint) -> Self;

    /// Projects a point of the embedding space onto the manifold.
    fn project(point: &Self::EmbeddingPoint) -> Self::EmbeddingPoint;

    /// Checks if a point of the embedding space lies on the manifold within
    /// `tolerance`.
    fn is_valid(point: &Self::EmbeddingPoint, tolerance: Self::Scalar) -> bool;

    /// Returns this element's point in the embedding space.
    fn point(&self) -> Self::EmbeddingPoint;

    /// Geodesic distance between two elements.
    fn distance_to(&self, rhs: &Self) -> Self::Scalar;

    /// Moves along the geodesic from `self` towards `rhs`.
    ///
    /// Fractions in `[0, 1]` interpolate; fractions outside that range
    /// extrapolate along the same geodesic.
    fn interpolate(&self, rhs: &Self, fraction: Self::Scalar) -> Self;

    /// A basis of the tangent space at this element, in tangent coordinates.
    ///
    /// Holds exactly [`Self::DIMENSION`] linearly independent vectors.
    fn tangent_space_basis(&self) -> Vec<Self::TangentVector>;

    /// [`Self::is_valid`] with the default tolerance of the scalar type.
    fn is_valid_default(point: &Self::EmbeddingPoint) -> bool {
        Self::is_valid(point, Self::Scalar::EPSILON)
    }

    /// Checked construction from a point of the embedding space.
    ///
    /// # Errors
    ///
    /// Returns [`ManifoldError::InvalidPoint`] if the point is not on the
    /// manifold within `tolerance`.
    fn try_from_point(point: &Self::EmbeddingPoint, tolerance: Self::Scalar) -> Result<Self> {
        if Self::is_valid(point, tolerance) {
            Ok(Self::from_point(point))
        } else {
            log::trace!("rejected embedding point {point:?} (tolerance {tolerance})");
            Err(ManifoldError::invalid_point(format!(
                "{point:?} violates the manifold constraint at tolerance {tolerance}"
            )))
        }
    }

    /// Constructs an element from an arbitrary ambient point by projecting it
    /// onto the manifold first.
    fn from_point_projected(point: &Self::EmbeddingPoint) -> Self {
        Self::from_point(&Self::project(point))
    }

    /// Builds a geodesic curve from `self` to `rhs`.
    fn geodesic_to(&self, rhs: &Self) -> ManifoldGeodesic<Self> {
        ManifoldGeodesic::new(self.clone(), rhs.clone())
    }

    /// Builds a chart with `self` as its origin.
    fn local_chart(&self) -> ManifoldChart<Self> {
        ManifoldChart::new(self.clone())
    }

    /// Checks if this element is within `tolerance` of `rhs`.
    fn equal_to(&self, rhs: &Self, tolerance: Self::Scalar) -> bool {
        self.distance_to(rhs) < tolerance
    }

    /// [`Self::equal_to`] with the default tolerance of the scalar type.
    fn approx_eq(&self, rhs: &Self) -> bool {
        self.equal_to(rhs, Self::Scalar::EPSILON)
    }
}
