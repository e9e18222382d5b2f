//! Riemann sums over explicit sample points.

use crate::common::evaluate;
use crate::error::{SumError, SumResult};
use crate::partition::Partition;

/// Result of a Riemann sum.
///
/// Carries the scalar value together with the per-interval `widths` and
/// `heights` so the visualization adapter can draw the rectangles without
/// recomputing them. Immutable once computed; recompute after any change to
/// the domain, partition or integrand.
#[derive(Debug, Clone, PartialEq)]
pub struct RiemannSum {
    /// The approximation: dot product of widths and heights
    pub value: f64,
    /// Sub-interval widths, `p[k+1] - p[k]`
    pub widths: Vec<f64>,
    /// Integrand values at the sample points
    pub heights: Vec<f64>,
}

/// Compute the Riemann sum of `f` over a partition with explicit samples.
///
/// For each sub-interval `k`: `width[k] = p[k+1] - p[k]` and
/// `height[k] = f(samples[k])`; the sum is the dot product of the two.
/// Obtain the samples from [`crate::select_samples`].
///
/// # Errors
///
/// Returns [`SumError::InvalidInput`] when the number of samples does not
/// match the number of sub-intervals.
///
/// # Example
///
/// ```
/// use sumr::{Domain, Partition, SamplePoint, riemann_sum, select_samples};
///
/// // Midpoint Riemann sum of f(x) = x over [0, 1] with a single interval.
/// let partition = Partition::uniform(&Domain::new(0.0, 1.0, 2)?)?;
/// let samples = select_samples(&partition, SamplePoint::Mid, &mut rand::rng());
/// let sum = riemann_sum(|x| x, &partition, &samples)?;
/// assert_eq!(sum.value, 0.5);
/// # Ok::<(), sumr::SumError>(())
/// ```
pub fn riemann_sum<F>(f: F, partition: &Partition, samples: &[f64]) -> SumResult<RiemannSum>
where
    F: Fn(f64) -> f64,
{
    let intervals = partition.num_intervals();
    if samples.len() != intervals {
        return Err(SumError::InvalidInput {
            context: format!(
                "riemann_sum: expected {} samples for {} sub-intervals (got {})",
                intervals,
                intervals,
                samples.len()
            ),
        });
    }

    let widths = partition.widths();
    let heights = evaluate(&f, samples);
    let value = widths.iter().zip(&heights).map(|(w, h)| w * h).sum();

    Ok(RiemannSum {
        value,
        widths,
        heights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;
    use crate::sample::{SamplePoint, select_samples};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn partition(a: f64, b: f64, n: usize) -> Partition {
        Partition::uniform(&Domain::new(a, b, n).unwrap()).unwrap()
    }

    #[test]
    fn test_left_sum_identity_single_interval() {
        // f(x) = x over [0, 1] with n = 2: one interval, left height 0.
        let p = partition(0.0, 1.0, 2);
        let mut rng = StdRng::seed_from_u64(0);
        let samples = select_samples(&p, SamplePoint::Left, &mut rng);
        let sum = riemann_sum(|x| x, &p, &samples).unwrap();
        assert_eq!(sum.value, 0.0);
    }

    #[test]
    fn test_mid_sum_identity_single_interval() {
        let p = partition(0.0, 1.0, 2);
        let mut rng = StdRng::seed_from_u64(0);
        let samples = select_samples(&p, SamplePoint::Mid, &mut rng);
        let sum = riemann_sum(|x| x, &p, &samples).unwrap();
        assert_eq!(sum.value, 0.5);
    }

    #[test]
    fn test_right_sum_identity_single_interval() {
        let p = partition(0.0, 1.0, 2);
        let mut rng = StdRng::seed_from_u64(0);
        let samples = select_samples(&p, SamplePoint::Right, &mut rng);
        let sum = riemann_sum(|x| x, &p, &samples).unwrap();
        assert_eq!(sum.value, 1.0);
    }

    #[test]
    fn test_constant_exact_on_random_partition() {
        // Any sample mode integrates a constant exactly: the heights are
        // all c and the widths sum to b - a.
        let domain = Domain::new(-1.0, 3.0, 12).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let p = Partition::random(&domain, &mut rng).unwrap();
        let samples = select_samples(&p, SamplePoint::Random, &mut rng);
        let sum = riemann_sum(|_| 2.5, &p, &samples).unwrap();
        assert!((sum.value - 2.5 * 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_mid_sum_converges_to_integral() {
        // Integral of sin(x) over [0, pi] = 2.
        let p = partition(0.0, std::f64::consts::PI, 1001);
        let mut rng = StdRng::seed_from_u64(0);
        let samples = select_samples(&p, SamplePoint::Mid, &mut rng);
        let sum = riemann_sum(f64::sin, &p, &samples).unwrap();
        assert!((sum.value - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_widths_and_heights_retained() {
        let p = partition(0.0, 1.0, 5);
        let mut rng = StdRng::seed_from_u64(0);
        let samples = select_samples(&p, SamplePoint::Left, &mut rng);
        let sum = riemann_sum(|x| x * x, &p, &samples).unwrap();

        assert_eq!(sum.widths.len(), 4);
        assert_eq!(sum.heights.len(), 4);
        for w in &sum.widths {
            assert!((w - 0.25).abs() < 1e-12);
        }
        for (s, h) in samples.iter().zip(&sum.heights) {
            assert_eq!(*h, s * s);
        }
    }

    #[test]
    fn test_sample_count_mismatch() {
        let p = partition(0.0, 1.0, 5);
        let err = riemann_sum(|x| x, &p, &[0.1, 0.2]).unwrap_err();
        assert!(matches!(err, SumError::InvalidInput { .. }));
        assert!(err.to_string().contains("riemann_sum"));
    }
}
