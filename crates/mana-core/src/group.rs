//! Group element trait.

use std::fmt::Debug;

/// Trait for elements of an algebraic group.
///
/// # Mathematical Properties
///
/// 1. **Associativity**: `(a ∘ b) ∘ c = a ∘ (b ∘ c)`
/// 2. **Identity**: `e ∘ g = g ∘ e = g`
/// 3. **Inverse**: `g ∘ g⁻¹ = g⁻¹ ∘ g = e`
/// 4. **Action**: `act(a ∘ b, p) = act(a, act(b, p))` and `act(e, p) = p`
///
/// Composition is not assumed to be commutative.
pub trait GroupElement: Clone + Debug + Sized {
    /// The type of points the group acts on (e.g. vectors for rotations).
    type Point;

    /// The identity element.
    fn identity() -> Self;

    /// Composition `self ∘ rhs`.
    fn compose(&self, rhs: &Self) -> Self;

    /// The unique inverse element.
    fn inverse(&self) -> Self;

    /// Applies this element to a point.
    fn act(&self, point: &Self::Point) -> Self::Point;

    /// The relative element `self⁻¹ ∘ rhs`, taking `self` onto `rhs`.
    fn between(&self, rhs: &Self) -> Self {
        self.inverse().compose(rhs)
    }
}
