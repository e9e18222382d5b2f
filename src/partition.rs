//! Finite partitions of an integration domain.
//!
//! A partition is the ordered collection of nodes subdividing [a, b] into
//! sub-intervals. Nodes are either evenly spaced or drawn uniformly at
//! random (with the endpoints pinned); every summation rule in
//! [`crate::quadrature`] consumes a partition.

use std::fmt;

use rand::Rng;

use crate::common::linspace;
use crate::domain::Domain;
use crate::error::SumResult;

/// How a partition's nodes were placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartitionKind {
    /// Evenly spaced nodes (default).
    #[default]
    Uniform,
    /// Uniform random draws, sorted ascending, endpoints re-pinned.
    Random,
}

impl fmt::Display for PartitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Uniform => "Uniform",
            Self::Random => "Random",
        };
        write!(f, "{s}")
    }
}

/// Ordered nodes subdividing `[left_endpoint, right_endpoint]`.
///
/// Invariants held by construction: at least two nodes, non-decreasing
/// order, first node equal to the left endpoint and last node equal to the
/// right endpoint. A partition is an immutable value; when the domain
/// changes, generate a new one.
///
/// # Example
///
/// ```
/// use sumr::{Domain, Partition};
///
/// let domain = Domain::new(0.0, 1.0, 5)?;
/// let partition = Partition::uniform(&domain)?;
/// assert_eq!(partition.points(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert_eq!(partition.num_intervals(), 4);
/// # Ok::<(), sumr::SumError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    points: Vec<f64>,
    kind: PartitionKind,
}

impl Default for Partition {
    /// The coarsest partition of the default domain `[0, 1]`: its two
    /// endpoints and nothing in between.
    fn default() -> Self {
        Self {
            points: vec![0.0, 1.0],
            kind: PartitionKind::Uniform,
        }
    }
}

impl Partition {
    /// Generate the uniform partition of a domain.
    ///
    /// Produces `num_points` nodes evenly spaced between the endpoints
    /// inclusive; the spacing is `(b - a) / (n - 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SumError::InvalidDomain`] when `num_points < 2` or
    /// the endpoints are out of order.
    pub fn uniform(domain: &Domain) -> SumResult<Self> {
        domain.validate("Partition::uniform")?;
        Ok(Self {
            points: linspace(
                domain.left_endpoint,
                domain.right_endpoint,
                domain.num_points,
            ),
            kind: PartitionKind::Uniform,
        })
    }

    /// Generate a random partition of a domain.
    ///
    /// Draws `num_points` independent uniform values in `[a, b)`, sorts
    /// them ascending, then forcibly overwrites the first and last entries
    /// with `a` and `b`. A draw landing very close to an endpoint therefore
    /// leaves a near-zero first or last sub-interval width; this is the
    /// intended behavior, kept for reproducibility of demonstrations.
    ///
    /// The random source is supplied by the caller; pass a seeded rng for
    /// reproducible partitions.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SumError::InvalidDomain`] when `num_points < 2` or
    /// the endpoints are out of order.
    pub fn random<R: Rng + ?Sized>(domain: &Domain, rng: &mut R) -> SumResult<Self> {
        domain.validate("Partition::random")?;
        let mut points: Vec<f64> = (0..domain.num_points)
            .map(|_| rng.random_range(domain.left_endpoint..domain.right_endpoint))
            .collect();
        points.sort_by(f64::total_cmp);
        // Endpoints are pinned after sorting.
        points[0] = domain.left_endpoint;
        let last = points.len() - 1;
        points[last] = domain.right_endpoint;
        Ok(Self {
            points,
            kind: PartitionKind::Random,
        })
    }

    /// The partition nodes, in non-decreasing order.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// How the nodes were placed.
    pub fn kind(&self) -> PartitionKind {
        self.kind
    }

    /// Number of nodes.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Number of sub-intervals (one fewer than the node count).
    pub fn num_intervals(&self) -> usize {
        self.points.len() - 1
    }

    /// Left endpoint of the partition (first node).
    pub fn left_endpoint(&self) -> f64 {
        self.points[0]
    }

    /// Right endpoint of the partition (last node).
    pub fn right_endpoint(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    /// Per-sub-interval widths, `points[k+1] - points[k]`.
    pub fn widths(&self) -> Vec<f64> {
        self.points.windows(2).map(|w| w[1] - w[0]).collect()
    }

    /// Norm of the partition: the largest sub-interval width.
    ///
    /// For a uniform partition this equals the node spacing
    /// `(b - a) / (n - 1)`. The norm is the usual convergence diagnostic as
    /// `num_points` grows.
    ///
    /// # Example
    ///
    /// ```
    /// use sumr::{Domain, Partition};
    ///
    /// let partition = Partition::uniform(&Domain::new(0.0, 1.0, 11)?)?;
    /// assert!((partition.norm() - 0.1).abs() < 1e-12);
    /// # Ok::<(), sumr::SumError>(())
    /// ```
    pub fn norm(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[1] - w[0])
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_is_coarsest_uniform() {
        let partition = Partition::default();
        assert_eq!(partition.points(), &[0.0, 1.0]);
        assert_eq!(partition.num_intervals(), 1);
        assert_eq!(partition.kind(), PartitionKind::Uniform);
    }

    #[test]
    fn test_uniform_endpoints_and_spacing() {
        let domain = Domain::new(-1.0, 2.0, 31).unwrap();
        let partition = Partition::uniform(&domain).unwrap();
        let points = partition.points();

        assert_eq!(points.len(), 31);
        assert_eq!(points[0], -1.0);
        assert_eq!(points[30], 2.0);
        assert_eq!(partition.kind(), PartitionKind::Uniform);

        let spacing = domain.spacing();
        for w in points.windows(2) {
            assert!((w[1] - w[0] - spacing).abs() < 1e-12);
        }
    }

    #[test]
    fn test_uniform_norm_equals_spacing() {
        let domain = Domain::new(0.0, 1.0, 11).unwrap();
        let partition = Partition::uniform(&domain).unwrap();
        assert!((partition.norm() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_random_sorted_and_pinned() {
        let domain = Domain::new(0.0, 1.0, 50).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let partition = Partition::random(&domain, &mut rng).unwrap();
        let points = partition.points();

        assert_eq!(points.len(), 50);
        assert_eq!(points[0], 0.0);
        assert_eq!(points[49], 1.0);
        assert_eq!(partition.kind(), PartitionKind::Random);

        for w in points.windows(2) {
            assert!(w[1] >= w[0], "partition must be non-decreasing");
        }
        for &p in points {
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let domain = Domain::new(-3.0, 4.0, 20).unwrap();
        let a = Partition::random(&domain, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = Partition::random(&domain, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_widths_sum_to_domain_width() {
        let domain = Domain::new(0.0, 2.0, 17).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for partition in [
            Partition::uniform(&domain).unwrap(),
            Partition::random(&domain, &mut rng).unwrap(),
        ] {
            let total: f64 = partition.widths().iter().sum();
            assert!((total - domain.width()).abs() < 1e-10);
            assert_eq!(partition.widths().len(), partition.num_intervals());
        }
    }

    #[test]
    fn test_generators_reject_invalid_domain() {
        let too_few = Domain {
            left_endpoint: 0.0,
            right_endpoint: 1.0,
            num_points: 1,
        };
        assert!(Partition::uniform(&too_few).is_err());

        let mut rng = StdRng::seed_from_u64(0);
        assert!(Partition::random(&too_few, &mut rng).is_err());

        let reversed = Domain {
            left_endpoint: 1.0,
            right_endpoint: 0.0,
            num_points: 10,
        };
        assert!(Partition::uniform(&reversed).is_err());
        assert!(Partition::random(&reversed, &mut rng).is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(PartitionKind::Uniform.to_string(), "Uniform");
        assert_eq!(PartitionKind::Random.to_string(), "Random");
    }
}
