//! Test utilities for property-based testing of manifold, group and algebra
//! realizations.
//!
//! Each tester takes a caller-supplied set of samples (typically generated
//! with `proptest` or `rand` in the realization's own tests) and checks one
//! family of identities on it, collecting every violation instead of
//! stopping at the first one.

use crate::{
    algebra::LieAlgebraElement,
    lie_group::LieGroupElement,
    manifold::ManifoldElement,
    types::Scalar,
};
use nalgebra::{DMatrix, SVector};
use num_traits::{Float, One, Zero};

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropertyTestConfig<T> {
    /// Tolerance for numerical comparisons
    pub tolerance: T,
}

impl<T: Scalar> Default for PropertyTestConfig<T> {
    fn default() -> Self {
        Self {
            tolerance: T::EPSILON,
        }
    }
}

/// Results from property tests.
#[derive(Debug)]
pub struct PropertyTestResult<T> {
    /// Whether all tests passed
    pub passed: bool,
    /// Maximum error observed
    pub max_error: T,
    /// Number of tests performed
    pub num_tests: usize,
    /// Detailed error messages
    pub errors: Vec<String>,
}

impl<T: Scalar> PropertyTestResult<T> {
    fn new() -> Self {
        Self {
            passed: true,
            max_error: T::zero(),
            num_tests: 0,
            errors: Vec::new(),
        }
    }

    /// Records one measured error against the tolerance.
    fn record(&mut self, name: &str, error: T, tolerance: T) {
        self.num_tests += 1;
        self.max_error = <T as Float>::max(self.max_error, error);
        // NaN must fail, so compare in the accepting direction.
        if !(error < tolerance) {
            self.passed = false;
            self.errors.push(format!(
                "{name} failed: error = {error} > tolerance = {tolerance}"
            ));
        }
    }
}

/// Property-based tests for manifold and Lie group elements.
pub struct LiePropertyTester;

impl LiePropertyTester {
    /// Tests identity, inverse and associativity on every sample (and every
    /// consecutive triple of samples).
    pub fn test_group_axioms<G>(
        samples: &[G],
        config: &PropertyTestConfig<G::Scalar>,
    ) -> PropertyTestResult<G::Scalar>
    where
        G: LieGroupElement,
    {
        let mut result = PropertyTestResult::new();
        let identity = G::identity();

        for g in samples {
            result.record(
                "left identity",
                identity.compose(g).distance_to(g),
                config.tolerance,
            );
            result.record(
                "right identity",
                g.compose(&identity).distance_to(g),
                config.tolerance,
            );
            result.record(
                "right inverse",
                g.compose(&g.inverse()).distance_to(&identity),
                config.tolerance,
            );
            result.record(
                "left inverse",
                g.inverse().compose(g).distance_to(&identity),
                config.tolerance,
            );
        }

        for window in samples.windows(3) {
            let (a, b, c) = (&window[0], &window[1], &window[2]);
            let left = a.compose(b).compose(c);
            let right = a.compose(&b.compose(c));
            result.record("associativity", left.distance_to(&right), config.tolerance);
        }

        result
    }

    /// Tests `exp(log(g)) ≈ g` on group samples and `log(exp(v)) ≈ v` on
    /// tangent samples. Tangent samples must lie inside the injectivity
    /// radius.
    pub fn test_exp_log<G, S, const D: usize>(
        samples: &[G],
        tangents: &[SVector<S, D>],
        config: &PropertyTestConfig<S>,
    ) -> PropertyTestResult<S>
    where
        S: Scalar,
        G: LieGroupElement + ManifoldElement<Scalar = S, TangentVector = SVector<S, D>>,
    {
        let mut result = PropertyTestResult::new();

        result.record(
            "log(identity) = 0",
            G::identity().log().norm(),
            config.tolerance,
        );

        for g in samples {
            let round_trip = G::exp(&g.log());
            result.record("exp(log(g))", round_trip.distance_to(g), config.tolerance);
        }

        for v in tangents {
            let round_trip = G::exp(v).log();
            result.record("log(exp(v))", (round_trip - v).norm(), config.tolerance);
        }

        result
    }

    /// Tests `g ∘ exp(v) ≈ exp(Ad_g · v) ∘ g`.
    pub fn test_adjoint<G, S, const D: usize>(
        samples: &[G],
        tangents: &[SVector<S, D>],
        config: &PropertyTestConfig<S>,
    ) -> PropertyTestResult<S>
    where
        S: Scalar,
        G: LieGroupElement + ManifoldElement<Scalar = S, TangentVector = SVector<S, D>>,
    {
        let mut result = PropertyTestResult::new();

        for g in samples {
            for v in tangents {
                let left = g.compose(&G::exp(v));
                let right = G::exp(&g.adjoint_act(v)).compose(g);
                result.record("adjoint", left.distance_to(&right), config.tolerance);
            }
        }

        result
    }

    /// Tests that the chart at each origin maps tangent vectors to elements
    /// and back, and maps the origin itself to zero.
    pub fn test_chart<G, S, const D: usize>(
        origins: &[G],
        tangents: &[SVector<S, D>],
        config: &PropertyTestConfig<S>,
    ) -> PropertyTestResult<S>
    where
        S: Scalar,
        G: LieGroupElement + ManifoldElement<Scalar = S, TangentVector = SVector<S, D>>,
    {
        let mut result = PropertyTestResult::new();

        for origin in origins {
            let chart = origin.local_chart();
            result.record(
                "chart origin",
                chart.to_tangent(origin).norm(),
                config.tolerance,
            );

            for v in tangents {
                let element = chart.to_manifold(v);
                let back = chart.to_tangent(&element);
                result.record("chart round trip", (back - v).norm(), config.tolerance);
            }
        }

        result
    }

    /// Tests that distance is symmetric, non-negative and zero on the
    /// diagonal.
    pub fn test_metric<M>(
        samples: &[M],
        config: &PropertyTestConfig<M::Scalar>,
    ) -> PropertyTestResult<M::Scalar>
    where
        M: ManifoldElement,
    {
        let mut result = PropertyTestResult::new();

        for a in samples {
            result.record("self distance", a.distance_to(a), config.tolerance);
            for b in samples {
                let ab = a.distance_to(b);
                let ba = b.distance_to(a);
                result.record(
                    "symmetry",
                    <M::Scalar as Float>::abs(ab - ba),
                    config.tolerance,
                );
                // A negative distance shows up as a positive error.
                result.record(
                    "non-negativity",
                    <M::Scalar as Float>::max(-ab, M::Scalar::zero()),
                    config.tolerance,
                );
            }
        }

        result
    }

    /// Tests interpolation endpoints for every pair of samples.
    pub fn test_interpolation<M>(
        samples: &[M],
        config: &PropertyTestConfig<M::Scalar>,
    ) -> PropertyTestResult<M::Scalar>
    where
        M: ManifoldElement,
    {
        let mut result = PropertyTestResult::new();

        for a in samples {
            for b in samples {
                let start = a.interpolate(b, M::Scalar::zero());
                let end = a.interpolate(b, M::Scalar::one());
                result.record("interpolate(0)", start.distance_to(a), config.tolerance);
                result.record("interpolate(1)", end.distance_to(b), config.tolerance);
            }
        }

        result
    }

    /// Tests that projection lands on the manifold and is idempotent.
    pub fn test_projection<M>(
        points: &[M::EmbeddingPoint],
        config: &PropertyTestConfig<M::Scalar>,
    ) -> PropertyTestResult<M::Scalar>
    where
        M: ManifoldElement,
    {
        let mut result = PropertyTestResult::new();

        for p in points {
            let projected = M::project(p);
            result.num_tests += 1;
            if !M::is_valid(&projected, config.tolerance) {
                result.passed = false;
                result.errors.push(format!("project({p:?}) = {projected:?} is not valid"));
            }

            let twice = M::from_point(&M::project(&projected));
            let once = M::from_point(&projected);
            result.record("idempotency", twice.distance_to(&once), config.tolerance);
        }

        result
    }

    /// Tests that the tangent basis at each sample has `DIMENSION` linearly
    /// independent vectors.
    pub fn test_tangent_basis<M, S, const D: usize>(
        samples: &[M],
        config: &PropertyTestConfig<S>,
    ) -> PropertyTestResult<S>
    where
        S: Scalar,
        M: ManifoldElement<Scalar = S, TangentVector = SVector<S, D>>,
    {
        let mut result = PropertyTestResult::new();

        for m in samples {
            let basis = m.tangent_space_basis();
            result.num_tests += 1;
            if basis.len() != M::DIMENSION {
                result.passed = false;
                result.errors.push(format!(
                    "basis at {m:?} has {} vectors, expected {}",
                    basis.len(),
                    M::DIMENSION
                ));
                continue;
            }

            let columns = DMatrix::from_fn(D, basis.len(), |row, col| basis[col][row]);
            let rank = columns.rank(config.tolerance);
            result.num_tests += 1;
            if rank != M::DIMENSION {
                result.passed = false;
                result.errors.push(format!("basis at {m:?} has rank {rank}"));
            }
        }

        result
    }
}

/// Property-based tests for Lie algebra elements.
pub struct AlgebraPropertyTester;

impl AlgebraPropertyTester {
    /// Tests antisymmetry and bilinearity of the bracket on every pair, and
    /// the Jacobi identity on every consecutive triple.
    pub fn test_bracket<A, S, const D: usize>(
        samples: &[A],
        config: &PropertyTestConfig<S>,
    ) -> PropertyTestResult<S>
    where
        S: Scalar,
        A: LieAlgebraElement<Scalar = S, TangentVector = SVector<S, D>>,
    {
        let mut result = PropertyTestResult::new();
        let alpha = <S as Scalar>::from_f64(1.5);
        let beta = <S as Scalar>::from_f64(-0.75);

        for a in samples {
            for b in samples {
                let ab = a.bracket(b);
                let ba = b.bracket(a);
                result.record(
                    "antisymmetry",
                    ab.add(&ba).tangent().norm(),
                    config.tolerance,
                );

                for c in samples {
                    let lhs = a.scale(alpha).add(&b.scale(beta)).bracket(c);
                    let rhs = a.bracket(c).scale(alpha).add(&b.bracket(c).scale(beta));
                    result.record(
                        "bilinearity",
                        lhs.sub(&rhs).tangent().norm(),
                        config.tolerance,
                    );
                }
            }
        }

        for window in samples.windows(3) {
            let (a, b, c) = (&window[0], &window[1], &window[2]);
            let jacobi = a
                .bracket(&b.bracket(c))
                .add(&b.bracket(&c.bracket(a)))
                .add(&c.bracket(&a.bracket(b)));
            result.record("jacobi", jacobi.tangent().norm(), config.tolerance);
        }

        result
    }

    /// Tests that hat and vee are mutually inverse and that the vector-space
    /// operations act on coordinates.
    pub fn test_hat_vee<A, S, const D: usize>(
        samples: &[A],
        config: &PropertyTestConfig<S>,
    ) -> PropertyTestResult<S>
    where
        S: Scalar,
        A: LieAlgebraElement<Scalar = S, TangentVector = SVector<S, D>>,
    {
        let mut result = PropertyTestResult::new();

        for a in samples {
            let v = a.tangent();
            result.record("vee(hat(v))", (A::vee(&a.hat()) - v).norm(), config.tolerance);
            result.record(
                "from_generator(hat(a))",
                (A::from_generator(&a.hat()).tangent() - v).norm(),
                config.tolerance,
            );
            result.record(
                "a + (-a) = 0",
                a.add(&a.negate()).tangent().norm(),
                config.tolerance,
            );
            result.record(
                "a + 0 = a",
                (a.add(&A::zero()).tangent() - v).norm(),
                config.tolerance,
            );
        }

        result
    }
}
