//! Charts: local linear parameterizations of a manifold.

use crate::{lie_group::LieGroupElement, manifold::ManifoldElement};

/// A chart on a manifold, mapping between elements near an origin and
/// tangent vectors at that origin.
///
/// The zero tangent vector maps to the origin. For Lie groups the forward map
/// is `x ↦ log(origin⁻¹ ∘ x)` and the reverse map is `v ↦ origin ∘ exp(v)`.
/// The two are mutual inverses for tangent vectors inside the injectivity
/// radius (angles below π for planar rotations).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManifoldChart<M> {
    /// The point forming the origin of this chart.
    origin: M,
}

impl<M: ManifoldElement> ManifoldChart<M> {
    /// Creates a chart centered at `origin`.
    pub fn new(origin: M) -> Self {
        Self { origin }
    }

    /// The origin of this chart.
    pub fn origin(&self) -> &M {
        &self.origin
    }
}

impl<G: LieGroupElement> ManifoldChart<G> {
    /// Forward map: element to tangent vector at the origin.
    pub fn to_tangent(&self, element: &G) -> G::TangentVector {
        element.minus(&self.origin)
    }

    /// Reverse map: tangent vector at the origin to element.
    pub fn to_manifold(&self, tangent: &G::TangentVector) -> G {
        self.origin.plus(tangent)
    }
}
