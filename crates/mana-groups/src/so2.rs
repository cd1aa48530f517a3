//! Planar rotation group SO(2) = {R ∈ R^{2×2} : RᵀR = I, det R = 1}
//!
//! SO(2) is the simplest nontrivial Lie group. It is one-dimensional and
//! abelian, and every map has a closed form:
//!
//! - **Exponential map**: exp(θ) = [[cos θ, -sin θ], [sin θ, cos θ]]
//! - **Logarithmic map**: log(R) = atan2(R₁₀, R₀₀), wrapped to (-π, π]
//! - **Distance**: |wrap(θ₂ - θ₁)|, the shortest arc, never above π
//! - **Adjoint**: the identity, since composition commutes
//!
//! Unlike SO(3), no small-angle series is needed: exp is a direct
//! trigonometric evaluation and log a single atan2, both well behaved at
//! zero. The only degenerate spot is the antipode θ = ±π, where log picks +π.

use approx::{AbsDiffEq, RelativeEq};
use mana_core::{
    algebra::{AlgebraElement, LieAlgebraElement},
    angle::{shortest_angular_distance, wrap_angle},
    error::{ManifoldError, Result},
    group::GroupElement,
    lie_group::LieGroupElement,
    manifold::ManifoldElement,
    types::{constants, Scalar},
};
use nalgebra::{Matrix1, Matrix2, Vector1, Vector2};
use num_traits::Float;
use rand::Rng;
use std::fmt;
use std::ops::Mul;

/// An element of SO(2), a rotation of the plane.
///
/// The rotation is stored as its 2×2 matrix, which is also its embedding
/// point. Elements are immutable and `Copy`.
///
/// # Examples
///
/// ```
/// use mana_core::prelude::*;
/// use mana_groups::So2;
/// use std::f64::consts::FRAC_PI_2;
///
/// let a = So2::from_angle(0.0);
/// let b = So2::from_angle(FRAC_PI_2);
/// let mid = a.interpolate(&b, 0.5);
/// assert!(mid.approx_eq(&So2::from_angle(FRAC_PI_2 / 2.0)));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: Scalar + serde::Serialize",
        deserialize = "T: Scalar + serde::Deserialize<'de>"
    ))
)]
pub struct So2<T> {
    matrix: Matrix2<T>,
}

impl<T: Scalar> So2<T> {
    /// Rotation by `angle` radians (counter-clockwise).
    pub fn from_angle(angle: T) -> Self {
        let (sin, cos) = <T as Float>::sin_cos(angle);
        Self {
            matrix: Matrix2::new(cos, -sin, sin, cos),
        }
    }

    /// Rotation whose first column points along `(cos, sin)`.
    ///
    /// The pair is normalized, so any non-zero direction is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ManifoldError::NumericalError`] if the pair has zero or
    /// non-finite length.
    pub fn from_cos_sin(cos: T, sin: T) -> Result<Self> {
        let norm = <T as Float>::hypot(cos, sin);
        if !<T as Float>::is_finite(norm) || norm <= T::zero() {
            return Err(ManifoldError::numerical_error(format!(
                "cannot build a rotation from (cos, sin) = ({cos}, {sin})"
            )));
        }
        let (cos, sin) = (cos / norm, sin / norm);
        Ok(Self {
            matrix: Matrix2::new(cos, -sin, sin, cos),
        })
    }

    /// Uniformly distributed random rotation.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let pi = std::f64::consts::PI;
        Self::from_angle(<T as Scalar>::from_f64(rng.gen_range(-pi..pi)))
    }

    /// Rotation angle in `(-π, π]`.
    pub fn angle(&self) -> T {
        wrap_angle(<T as Float>::atan2(self.matrix[(1, 0)], self.matrix[(0, 0)]))
    }

    /// The rotation matrix.
    pub fn matrix(&self) -> &Matrix2<T> {
        &self.matrix
    }
}

impl<T: Scalar> ManifoldElement for So2<T> {
    type Scalar = T;
    type TangentVector = Vector1<T>;
    type EmbeddingPoint = Matrix2<T>;

    const DIMENSION: usize = 1;
    const EMBEDDING_DIMENSION: usize = 2;

    fn from_point(point: &Matrix2<T>) -> Self {
        Self { matrix: *point }
    }

    /// Normalizes the first column and completes it with its orthogonal
    /// complement. A degenerate first column falls back to the second one,
    /// and a fully degenerate matrix to the identity.
    fn project(point: &Matrix2<T>) -> Matrix2<T> {
        let tiny = <T as Float>::min_positive_value();

        let first = Vector2::new(point[(0, 0)], point[(1, 0)]);
        let norm = <T as Float>::hypot(first.x, first.y);
        if <T as Float>::is_finite(norm) && norm > tiny {
            let (cos, sin) = (first.x / norm, first.y / norm);
            return Matrix2::new(cos, -sin, sin, cos);
        }

        let second = Vector2::new(point[(0, 1)], point[(1, 1)]);
        let norm = <T as Float>::hypot(second.x, second.y);
        if <T as Float>::is_finite(norm) && norm > tiny {
            log::debug!("projecting {point:?} onto SO(2) from its second column");
            let (cos, sin) = (second.y / norm, -second.x / norm);
            return Matrix2::new(cos, -sin, sin, cos);
        }

        log::debug!("projecting degenerate {point:?} onto SO(2) identity");
        Matrix2::identity()
    }

    fn is_valid(point: &Matrix2<T>, tolerance: T) -> bool {
        let orthogonality = (point.transpose() * point - Matrix2::identity()).norm();
        let determinant = <T as Float>::abs(point.determinant() - T::one());
        orthogonality < tolerance && determinant < tolerance
    }

    fn point(&self) -> Matrix2<T> {
        self.matrix
    }

    fn distance_to(&self, rhs: &Self) -> T {
        <T as Float>::abs(shortest_angular_distance(self.angle(), rhs.angle()))
    }

    fn interpolate(&self, rhs: &Self, fraction: T) -> Self {
        self.geodesic_interpolate(rhs, fraction)
    }

    /// The single generator direction, `[1]`, at every element.
    fn tangent_space_basis(&self) -> Vec<Vector1<T>> {
        vec![Vector1::new(T::one())]
    }
}

impl<T: Scalar> GroupElement for So2<T> {
    type Point = Vector2<T>;

    fn identity() -> Self {
        Self {
            matrix: Matrix2::identity(),
        }
    }

    fn compose(&self, rhs: &Self) -> Self {
        Self {
            matrix: self.matrix * rhs.matrix,
        }
    }

    fn inverse(&self) -> Self {
        Self {
            matrix: self.matrix.transpose(),
        }
    }

    fn act(&self, point: &Vector2<T>) -> Vector2<T> {
        self.matrix * point
    }
}

impl<T: Scalar> LieGroupElement for So2<T> {
    type Algebra = So2Algebra<T>;
    type AdjointMatrix = Matrix1<T>;

    fn exp(tangent: &Vector1<T>) -> Self {
        Self::from_angle(tangent[0])
    }

    fn log(&self) -> Vector1<T> {
        Vector1::new(self.angle())
    }

    fn adjoint(&self) -> Matrix1<T> {
        Matrix1::identity()
    }
}

impl<T: Scalar> Default for So2<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> PartialEq for So2<T> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl<T: Scalar> Mul for So2<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl<T: Scalar> Mul<Vector2<T>> for So2<T> {
    type Output = Vector2<T>;

    fn mul(self, rhs: Vector2<T>) -> Vector2<T> {
        self.act(&rhs)
    }
}

impl<T: Scalar> fmt::Display for So2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SO2({} rad)", self.angle())
    }
}

impl<T: Scalar> AbsDiffEq for So2<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.distance_to(other) <= epsilon
    }
}

impl<T: Scalar> RelativeEq for So2<T> {
    fn default_max_relative() -> T {
        T::EPSILON
    }

    /// Angles live on a bounded circle, so the relative bound is taken
    /// against π, the largest possible distance.
    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        let distance = self.distance_to(other);
        distance <= epsilon || distance <= max_relative * constants::pi::<T>()
    }
}

/// An element of so(2), the Lie algebra of SO(2): an angular rate `ω`.
///
/// Its generator is the skew-symmetric matrix `[[0, -ω], [ω, 0]]`. The
/// algebra is abelian, so the bracket is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct So2Algebra<T> {
    omega: T,
}

impl<T: Scalar> So2Algebra<T> {
    /// Algebra element with angular coordinate `omega`.
    pub fn new(omega: T) -> Self {
        Self { omega }
    }

    /// Builds an element from a coefficient slice of length one.
    ///
    /// # Errors
    ///
    /// Returns [`ManifoldError::DimensionMismatch`] for any other length.
    pub fn from_slice(coefficients: &[T]) -> Result<Self> {
        match coefficients {
            [omega] => Ok(Self::new(*omega)),
            _ => Err(ManifoldError::dimension_mismatch(1, coefficients.len())),
        }
    }

    /// The angular coordinate.
    pub fn omega(&self) -> T {
        self.omega
    }
}

impl<T: Scalar> AlgebraElement for So2Algebra<T> {
    type Scalar = T;

    fn zero() -> Self {
        Self::new(T::zero())
    }

    fn add(&self, rhs: &Self) -> Self {
        Self::new(self.omega + rhs.omega)
    }

    fn scale(&self, scalar: T) -> Self {
        Self::new(self.omega * scalar)
    }

    fn bracket(&self, _rhs: &Self) -> Self {
        Self::zero()
    }

    fn negate(&self) -> Self {
        Self::new(-self.omega)
    }
}

impl<T: Scalar> LieAlgebraElement for So2Algebra<T> {
    type TangentVector = Vector1<T>;
    type Generator = Matrix2<T>;

    fn from_tangent(tangent: &Vector1<T>) -> Self {
        Self::new(tangent[0])
    }

    fn tangent(&self) -> Vector1<T> {
        Vector1::new(self.omega)
    }

    fn hat(&self) -> Matrix2<T> {
        Matrix2::new(T::zero(), -self.omega, self.omega, T::zero())
    }

    /// Reads the angular rate from the skew-symmetric part of `generator`.
    fn vee(generator: &Matrix2<T>) -> Vector1<T> {
        let half = <T as Scalar>::from_f64(0.5);
        Vector1::new((generator[(1, 0)] - generator[(0, 1)]) * half)
    }
}
