//! Geodesic curves between two manifold elements.

use crate::{manifold::ManifoldElement, types::Scalar};

/// A geodesic parameterized between two points of a manifold.
///
/// The geodesic owns copies of its endpoints and is immutable. All
/// evaluation is delegated to the begin element, so a geodesic is exactly
/// as accurate as the realization's own interpolation and distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManifoldGeodesic<M> {
    beg: M,
    end: M,
}

impl<M: ManifoldElement> ManifoldGeodesic<M> {
    /// Creates a geodesic from `beg` to `end`.
    pub fn new(beg: M, end: M) -> Self {
        Self { beg, end }
    }

    /// The geodesic's begin point.
    pub fn beg(&self) -> &M {
        &self.beg
    }

    /// The geodesic's end point.
    pub fn end(&self) -> &M {
        &self.end
    }

    /// Point at `fraction` along the geodesic. Values in `[0, 1]` interpolate,
    /// values outside of that range extrapolate.
    pub fn interpolate(&self, fraction: M::Scalar) -> M {
        self.beg.interpolate(&self.end, fraction)
    }

    /// Length of the geodesic.
    pub fn length(&self) -> M::Scalar {
        self.beg.distance_to(&self.end)
    }

    /// `count` evenly spaced points from begin to end, both included.
    ///
    /// A single sample is the begin point; zero samples yield nothing.
    pub fn sample(&self, count: usize) -> impl Iterator<Item = M> + '_ {
        let last = count.saturating_sub(1).max(1);
        (0..count).map(move |i| {
            let fraction = <M::Scalar as Scalar>::from_f64(i as f64 / last as f64);
            self.interpolate(fraction)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::Translation2;
    use approx::assert_relative_eq;

    #[test]
    fn test_endpoints() {
        let a = Translation2::new(0.0, 0.0);
        let b = Translation2::new(3.0, 4.0);
        let geodesic = a.geodesic_to(&b);

        assert_eq!(geodesic.beg(), &a);
        assert_eq!(geodesic.end(), &b);
        assert!(geodesic.interpolate(0.0).approx_eq(&a));
        assert!(geodesic.interpolate(1.0).approx_eq(&b));
    }

    #[test]
    fn test_length_matches_distance() {
        let a = Translation2::new(1.0, 1.0);
        let b = Translation2::new(4.0, 5.0);
        let geodesic = ManifoldGeodesic::new(a, b);
        assert_relative_eq!(geodesic.length(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(geodesic.length(), a.distance_to(&b), epsilon = 1e-12);
    }

    #[test]
    fn test_extrapolation() {
        let geodesic = ManifoldGeodesic::new(Translation2::new(0.0, 0.0), Translation2::new(1.0, 0.0));
        assert!(geodesic.interpolate(2.0).approx_eq(&Translation2::new(2.0, 0.0)));
        assert!(geodesic.interpolate(-1.0).approx_eq(&Translation2::new(-1.0, 0.0)));
    }

    #[test]
    fn test_sample() {
        let geodesic = ManifoldGeodesic::new(Translation2::new(0.0, 0.0), Translation2::new(4.0, 0.0));

        let points: Vec<_> = geodesic.sample(5).collect();
        assert_eq!(points.len(), 5);
        for (i, p) in points.iter().enumerate() {
            assert!(p.approx_eq(&Translation2::new(i as f64, 0.0)));
        }

        assert_eq!(geodesic.sample(0).count(), 0);
        let single: Vec<_> = geodesic.sample(1).collect();
        assert_eq!(single.len(), 1);
        assert!(single[0].approx_eq(geodesic.beg()));
    }
}
