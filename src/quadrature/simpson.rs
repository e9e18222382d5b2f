//! Simpson's rule over a partition.
//!
//! Fits a parabola through the endpoints and geometric midpoint of each
//! sub-interval. Because the rule is applied per sub-interval it needs no
//! uniform spacing and no even interval count; it is exact for polynomials
//! up to degree three on any partition.

use crate::partition::Partition;

/// Compute the Simpson sum of `f` over a partition.
///
/// Sums `half_width * (f(left) + 4 * f(mid) + f(right)) / 3` over the
/// sub-intervals, where `mid` is the geometric midpoint of each
/// sub-interval. The midpoint here is part of the rule itself and is not
/// affected by the sample-point strategy used for Riemann sums.
///
/// # Example
///
/// ```
/// use sumr::{Domain, Partition, simpson_sum};
///
/// // Exact for x^2 even on the coarsest partition.
/// let partition = Partition::uniform(&Domain::new(0.0, 1.0, 2)?)?;
/// let sum = simpson_sum(|x| x * x, &partition);
/// assert!((sum - 1.0 / 3.0).abs() < 1e-15);
/// # Ok::<(), sumr::SumError>(())
/// ```
pub fn simpson_sum<F>(f: F, partition: &Partition) -> f64
where
    F: Fn(f64) -> f64,
{
    partition
        .points()
        .windows(2)
        .map(|w| {
            let mid = 0.5 * (w[0] + w[1]);
            0.5 * (w[1] - w[0]) * (f(w[0]) + 4.0 * f(mid) + f(w[1])) / 3.0
        })
        .sum()
}
