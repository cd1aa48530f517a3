//! Algebra and Lie algebra element traits.
//!
//! An algebra element is a vector-space element equipped with a bilinear,
//! antisymmetric bracket. A Lie algebra element is additionally the tangent
//! space at a Lie group's identity, with the hat/vee pair converting between
//! tangent coordinates and the group's native generator representation.

use crate::types::Scalar;
use num_traits::One;
use std::fmt::Debug;

/// Trait for elements of an algebra.
///
/// # Mathematical Properties
///
/// 1. **Vector space**: `add` is commutative and associative with `zero` as
///    neutral element; `scale` distributes over `add`
/// 2. **Antisymmetry**: `[a, b] = -[b, a]`
/// 3. **Bilinearity**: `[αa + βb, c] = α[a, c] + β[b, c]`
/// 4. **Jacobi identity**: `[a, [b, c]] + [b, [c, a]] + [c, [a, b]] = 0`
///
/// The bracket is identically zero for abelian algebras.
pub trait AlgebraElement: Clone + Debug + Sized {
    /// The scalar field of the algebra.
    type Scalar: Scalar;

    /// The additive identity.
    fn zero() -> Self;

    /// Sum of two elements.
    fn add(&self, rhs: &Self) -> Self;

    /// Product with a scalar.
    fn scale(&self, scalar: Self::Scalar) -> Self;

    /// The bracket `[self, rhs]`.
    fn bracket(&self, rhs: &Self) -> Self;

    /// Additive inverse.
    fn negate(&self) -> Self {
        self.scale(-<Self::Scalar as One>::one())
    }

    /// Difference of two elements.
    fn sub(&self, rhs: &Self) -> Self {
        self.add(&rhs.negate())
    }
}

/// Trait for elements of the Lie algebra of a Lie group.
///
/// Coordinates of the algebra with respect to its canonical basis form a
/// tangent vector; [`Self::hat`] maps them to the generator (e.g. a
/// skew-symmetric matrix for rotation groups) and [`Self::vee`] maps back.
/// The two are mutually inverse linear maps.
pub trait LieAlgebraElement: AlgebraElement {
    /// Coordinates of an algebra element.
    type TangentVector: Clone + Debug;

    /// The group's native representation of an algebra element.
    type Generator: Clone + Debug;

    /// Builds an algebra element from its coordinates.
    fn from_tangent(tangent: &Self::TangentVector) -> Self;

    /// Coordinates of this algebra element.
    fn tangent(&self) -> Self::TangentVector;

    /// Maps this element to its generator.
    fn hat(&self) -> Self::Generator;

    /// Maps a generator back to coordinates.
    fn vee(generator: &Self::Generator) -> Self::TangentVector;

    /// Builds an algebra element from a generator.
    fn from_generator(generator: &Self::Generator) -> Self {
        Self::from_tangent(&Self::vee(generator))
    }
}
