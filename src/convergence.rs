//! Convergence studies over a growing number of partition points.
//!
//! A sweep evaluates one summation rule on uniform partitions of
//! increasing resolution and records the partition norm together with the
//! error against a known integral value. The output pairs directly with
//! the log-log rendering in [`crate::plot`] for reading off convergence
//! rates.

use std::fmt;

use rand::Rng;

use crate::domain::Domain;
use crate::error::SumResult;
use crate::partition::Partition;
use crate::quadrature::{riemann_sum, simpson_sum, trapezoid_sum};
use crate::sample::{SamplePoint, select_samples};

/// The summation rule exercised by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Riemann sum with the given sample-point strategy.
    Riemann(SamplePoint),
    /// Trapezoidal sum.
    Trapezoid,
    /// Simpson sum.
    Simpson,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Riemann(mode) => write!(f, "Riemann sum with {}", mode.label()),
            Self::Trapezoid => write!(f, "Trapezoidal sum"),
            Self::Simpson => write!(f, "Simpson sum"),
        }
    }
}

/// One resolution step of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergencePoint {
    /// Number of partition points used.
    pub num_points: usize,
    /// Norm of the uniform partition, `(b - a) / (num_points - 1)`.
    pub norm: f64,
    /// The computed sum.
    pub value: f64,
    /// Absolute error against the reference integral value.
    pub error: f64,
}

/// Evaluate a rule on uniform partitions of `[a, b]` for each point count
/// in `nums`, recording the error against `exact`.
///
/// The random source is consulted only by
/// [`Method::Riemann`]`(`[`SamplePoint::Random`]`)`; the other rules
/// ignore it.
///
/// # Errors
///
/// Returns [`crate::SumError::InvalidDomain`] when the endpoints are out
/// of order or any entry of `nums` is below 2.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sumr::{Method, SamplePoint, sweep};
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let points = sweep(
///     |x| x * x,
///     0.0,
///     1.0,
///     &[2, 4, 8],
///     1.0 / 3.0,
///     Method::Riemann(SamplePoint::Mid),
///     &mut rng,
/// )?;
/// assert!(points[2].error < points[0].error);
/// # Ok::<(), sumr::SumError>(())
/// ```
pub fn sweep<F, R>(
    f: F,
    left_endpoint: f64,
    right_endpoint: f64,
    nums: &[usize],
    exact: f64,
    method: Method,
    rng: &mut R,
) -> SumResult<Vec<ConvergencePoint>>
where
    F: Fn(f64) -> f64,
    R: Rng + ?Sized,
{
    let mut points = Vec::with_capacity(nums.len());
    for &num_points in nums {
        let domain = Domain::new(left_endpoint, right_endpoint, num_points)?;
        let partition = Partition::uniform(&domain)?;
        let value = match method {
            Method::Riemann(mode) => {
                let samples = select_samples(&partition, mode, rng);
                riemann_sum(&f, &partition, &samples)?.value
            }
            Method::Trapezoid => trapezoid_sum(&f, &partition),
            Method::Simpson => simpson_sum(&f, &partition),
        };
        points.push(ConvergencePoint {
            num_points,
            norm: partition.norm(),
            value,
            error: (value - exact).abs(),
        });
    }
    Ok(points)
}
