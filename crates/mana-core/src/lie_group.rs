//! Lie group element trait.
//!
//! A Lie group is a group whose underlying set is a smooth manifold. The
//! exponential and logarithm maps bridge the group and its Lie algebra (the
//! tangent space at the identity), and give every generic manifold operation
//! a canonical form:
//!
//! - chart: `x ↦ log(origin⁻¹ ∘ x)` and `v ↦ origin ∘ exp(v)`
//! - geodesic interpolation: `a ∘ exp(t · log(a⁻¹ ∘ b))`
//! - box-plus / box-minus: `g ⊕ v = g ∘ exp(v)` and `g ⊖ h = log(h⁻¹ ∘ g)`

use crate::{
    algebra::{AlgebraElement, LieAlgebraElement},
    group::GroupElement,
    manifold::ManifoldElement,
};
use std::fmt::Debug;
use std::ops::Mul;

/// Trait for elements of a Lie group.
///
/// # Mathematical Properties
///
/// 1. **Exp/log**: `exp(log(g)) ≈ g` for every `g`, and `log(exp(v)) ≈ v`
///    for `v` inside the injectivity radius
/// 2. **Identity**: `exp(0) = e` and `log(e) = 0`
/// 3. **Adjoint**: `g ∘ exp(v) = exp(Ad_g · v) ∘ g`
///
/// `exp` is total. `log` returns a canonical representative when the
/// preimage is not unique (e.g. the principal angle for rotations).
pub trait LieGroupElement: GroupElement + ManifoldElement {
    /// The Lie algebra of the group, sharing the group's tangent coordinates.
    type Algebra: LieAlgebraElement<
        Scalar = <Self as ManifoldElement>::Scalar,
        TangentVector = <Self as ManifoldElement>::TangentVector,
    >;

    /// Matrix of the adjoint map acting on tangent coordinates.
    type AdjointMatrix: Clone
        + Debug
        + Mul<<Self as ManifoldElement>::TangentVector, Output = <Self as ManifoldElement>::TangentVector>;

    /// Exponential map from tangent coordinates at the identity to the group.
    fn exp(tangent: &Self::TangentVector) -> Self;

    /// Logarithm map from the group to tangent coordinates at the identity.
    fn log(&self) -> Self::TangentVector;

    /// The adjoint map `Ad_g`.
    fn adjoint(&self) -> Self::AdjointMatrix;

    /// Applies the adjoint map to a tangent vector.
    fn adjoint_act(&self, tangent: &Self::TangentVector) -> Self::TangentVector {
        self.adjoint() * tangent.clone()
    }

    /// Exponential of an algebra element.
    fn exp_algebra(element: &Self::Algebra) -> Self {
        Self::exp(&element.tangent())
    }

    /// Logarithm as an algebra element.
    fn log_algebra(&self) -> Self::Algebra {
        Self::Algebra::from_tangent(&self.log())
    }

    /// Box-plus: `self ∘ exp(tangent)`.
    fn plus(&self, tangent: &Self::TangentVector) -> Self {
        self.compose(&Self::exp(tangent))
    }

    /// Box-minus: `log(other⁻¹ ∘ self)`, the tangent vector at `other`
    /// pointing to `self`.
    fn minus(&self, other: &Self) -> Self::TangentVector {
        other.between(self).log()
    }

    /// Geodesic interpolation `self ∘ exp(fraction · log(self⁻¹ ∘ rhs))`.
    ///
    /// Realizations can use this as their [`ManifoldElement::interpolate`].
    fn geodesic_interpolate(&self, rhs: &Self, fraction: Self::Scalar) -> Self {
        let delta = Self::Algebra::from_tangent(&rhs.minus(self)).scale(fraction);
        self.plus(&delta.tangent())
    }
}
