//! Trapezoidal rule over a partition.
//!
//! Approximates each sub-interval by the trapezoid through the integrand
//! values at its endpoints. Exact for linear integrands on any partition,
//! O(h²) for smooth ones.

use crate::partition::Partition;

/// Compute the trapezoidal sum of `f` over a partition.
///
/// Sums `width[k] * (f(p[k]) + f(p[k+1])) / 2` over the sub-intervals. The
/// rule reads only the partition nodes; it is independent of the
/// sample-point strategy used for Riemann sums.
///
/// # Example
///
/// ```
/// use sumr::{Domain, Partition, trapezoid_sum};
///
/// // The trapezoid rule is exact for linear functions.
/// let partition = Partition::uniform(&Domain::new(0.0, 1.0, 7)?)?;
/// let sum = trapezoid_sum(|x| x, &partition);
/// assert!((sum - 0.5).abs() < 1e-12);
/// # Ok::<(), sumr::SumError>(())
/// ```
pub fn trapezoid_sum<F>(f: F, partition: &Partition) -> f64
where
    F: Fn(f64) -> f64,
{
    partition
        .points()
        .windows(2)
        .map(|w| 0.5 * (w[1] - w[0]) * (f(w[0]) + f(w[1])))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::f64::consts::PI;

    fn uniform(a: f64, b: f64, n: usize) -> Partition {
        Partition::uniform(&Domain::new(a, b, n).unwrap()).unwrap()
    }

    #[test]
    fn test_constant() {
        let p = uniform(0.0, 4.0, 5);
        let sum = trapezoid_sum(|_| 5.0, &p);
        assert!((sum - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_linear_exact_any_node_count() {
        // Exact value of the integral of x over [0, 1] is 0.5 for every n.
        for n in [2, 3, 11, 100] {
            let p = uniform(0.0, 1.0, n);
            let sum = trapezoid_sum(|x| x, &p);
            assert!((sum - 0.5).abs() < 1e-12, "n = {n}: got {sum}");
        }
    }

    #[test]
    fn test_linear_exact_on_random_partition() {
        // Linear exactness holds per sub-interval, so spacing is irrelevant.
        let domain = Domain::new(0.0, 1.0, 40).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let p = Partition::random(&domain, &mut rng).unwrap();
        let sum = trapezoid_sum(|x| 3.0 * x - 1.0, &p);
        assert!((sum - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_quadratic() {
        // Integral of x^2 over [0, 1] = 1/3.
        let p = uniform(0.0, 1.0, 1001);
        let sum = trapezoid_sum(|x| x * x, &p);
        assert!((sum - 1.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_sin() {
        // Integral of sin(x) over [0, pi] = 2.
        let p = uniform(0.0, PI, 1001);
        let sum = trapezoid_sum(f64::sin, &p);
        assert!((sum - 2.0).abs() < 1e-5);
    }
}
