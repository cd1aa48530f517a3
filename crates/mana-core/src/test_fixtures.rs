//! Minimal realizations of the core traits, used to exercise the generic
//! code in this crate without depending on a concrete group crate.
//!
//! - [`Translation2`]: the plane under vector addition, the simplest
//!   (abelian, flat) Lie group.
//! - [`CrossAlgebra`]: `R³` with the cross product as bracket, a
//!   non-abelian Lie algebra for bracket identity checks.

use crate::{
    algebra::{AlgebraElement, LieAlgebraElement},
    group::GroupElement,
    lie_group::LieGroupElement,
    manifold::ManifoldElement,
};
use nalgebra::{Matrix2, Matrix3, Vector2, Vector3};
use num_traits::Float;

/// The translation group of the plane.
#[derive(Debug, Clone, Copy)]
pub struct Translation2 {
    offset: Vector2<f64>,
}

impl Translation2 {
    /// Creates a translation by `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            offset: Vector2::new(x, y),
        }
    }
}

impl PartialEq for Translation2 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl ManifoldElement for Translation2 {
    type Scalar = f64;
    type TangentVector = Vector2<f64>;
    type EmbeddingPoint = Vector2<f64>;

    const DIMENSION: usize = 2;
    const EMBEDDING_DIMENSION: usize = 2;

    fn from_point(point: &Vector2<f64>) -> Self {
        Self { offset: *point }
    }

    fn project(point: &Vector2<f64>) -> Vector2<f64> {
        *point
    }

    fn is_valid(point: &Vector2<f64>, _tolerance: f64) -> bool {
        point.iter().all(|x| Float::is_finite(*x))
    }

    fn point(&self) -> Vector2<f64> {
        self.offset
    }

    fn distance_to(&self, rhs: &Self) -> f64 {
        (rhs.offset - self.offset).norm()
    }

    fn interpolate(&self, rhs: &Self, fraction: f64) -> Self {
        self.geodesic_interpolate(rhs, fraction)
    }

    fn tangent_space_basis(&self) -> Vec<Vector2<f64>> {
        vec![Vector2::x(), Vector2::y()]
    }
}

impl GroupElement for Translation2 {
    type Point = Vector2<f64>;

    fn identity() -> Self {
        Self::new(0.0, 0.0)
    }

    fn compose(&self, rhs: &Self) -> Self {
        Self {
            offset: self.offset + rhs.offset,
        }
    }

    fn inverse(&self) -> Self {
        Self {
            offset: -self.offset,
        }
    }

    fn act(&self, point: &Vector2<f64>) -> Vector2<f64> {
        point + self.offset
    }
}

impl LieGroupElement for Translation2 {
    type Algebra = Translation2Algebra;
    type AdjointMatrix = Matrix2<f64>;

    fn exp(tangent: &Vector2<f64>) -> Self {
        Self { offset: *tangent }
    }

    fn log(&self) -> Vector2<f64> {
        self.offset
    }

    fn adjoint(&self) -> Matrix2<f64> {
        Matrix2::identity()
    }
}

/// Lie algebra of [`Translation2`]: the plane with a zero bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translation2Algebra(pub Vector2<f64>);

impl AlgebraElement for Translation2Algebra {
    type Scalar = f64;

    fn zero() -> Self {
        Self(Vector2::zeros())
    }

    fn add(&self, rhs: &Self) -> Self {
        Self(self.0 + rhs.0)
    }

    fn scale(&self, scalar: f64) -> Self {
        Self(self.0 * scalar)
    }

    fn bracket(&self, _rhs: &Self) -> Self {
        Self::zero()
    }
}

impl LieAlgebraElement for Translation2Algebra {
    type TangentVector = Vector2<f64>;
    type Generator = Vector2<f64>;

    fn from_tangent(tangent: &Vector2<f64>) -> Self {
        Self(*tangent)
    }

    fn tangent(&self) -> Vector2<f64> {
        self.0
    }

    fn hat(&self) -> Vector2<f64> {
        self.0
    }

    fn vee(generator: &Vector2<f64>) -> Vector2<f64> {
        *generator
    }
}

/// `R³` with the cross product, isomorphic to the rotation algebra so(3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossAlgebra(pub Vector3<f64>);

impl CrossAlgebra {
    /// Creates an element from its three coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
    }
}

impl AlgebraElement for CrossAlgebra {
    type Scalar = f64;

    fn zero() -> Self {
        Self(Vector3::zeros())
    }

    fn add(&self, rhs: &Self) -> Self {
        Self(self.0 + rhs.0)
    }

    fn scale(&self, scalar: f64) -> Self {
        Self(self.0 * scalar)
    }

    fn bracket(&self, rhs: &Self) -> Self {
        Self(self.0.cross(&rhs.0))
    }
}

impl LieAlgebraElement for CrossAlgebra {
    type TangentVector = Vector3<f64>;
    type Generator = Matrix3<f64>;

    fn from_tangent(tangent: &Vector3<f64>) -> Self {
        Self(*tangent)
    }

    fn tangent(&self) -> Vector3<f64> {
        self.0
    }

    fn hat(&self) -> Matrix3<f64> {
        self.0.cross_matrix()
    }

    fn vee(generator: &Matrix3<f64>) -> Vector3<f64> {
        Vector3::new(generator[(2, 1)], generator[(0, 2)], generator[(1, 0)])
    }
}
