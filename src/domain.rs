//! Integration domain: the interval [a, b] and the partition node count.

use crate::error::{SumError, SumResult};

/// Domain of a definite integral.
///
/// Describes the interval `[left_endpoint, right_endpoint]` together with
/// the number of partition nodes that will subdivide it. The fields are
/// public so a domain can be built as a plain literal; the operations that
/// consume a domain (the partition generators) validate it and reject
/// `num_points < 2` or `left_endpoint >= right_endpoint`.
///
/// # Example
///
/// ```
/// use sumr::Domain;
///
/// let domain = Domain::new(0.0, 2.0, 5)?;
/// assert_eq!(domain.num_intervals(), 4);
/// assert!((domain.spacing() - 0.5).abs() < 1e-12);
/// # Ok::<(), sumr::SumError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    /// Lower limit of integration
    pub left_endpoint: f64,
    /// Upper limit of integration
    pub right_endpoint: f64,
    /// Number of partition nodes, endpoints included (must be >= 2)
    pub num_points: usize,
}

impl Default for Domain {
    /// The unit interval with the minimal two-node partition.
    fn default() -> Self {
        Self {
            left_endpoint: 0.0,
            right_endpoint: 1.0,
            num_points: 2,
        }
    }
}

impl Domain {
    /// Create a validated domain.
    ///
    /// # Errors
    ///
    /// Returns [`SumError::InvalidDomain`] when `num_points < 2` or the
    /// endpoints are out of order.
    pub fn new(left_endpoint: f64, right_endpoint: f64, num_points: usize) -> SumResult<Self> {
        let domain = Self {
            left_endpoint,
            right_endpoint,
            num_points,
        };
        domain.validate("Domain::new")?;
        Ok(domain)
    }

    /// Check the domain invariants: `left < right` and at least two nodes.
    pub(crate) fn validate(&self, context: &str) -> SumResult<()> {
        if self.num_points < 2 || self.left_endpoint >= self.right_endpoint {
            return Err(SumError::InvalidDomain {
                left_endpoint: self.left_endpoint,
                right_endpoint: self.right_endpoint,
                num_points: self.num_points,
                context: context.to_string(),
            });
        }
        Ok(())
    }

    /// Interval length `right_endpoint - left_endpoint`.
    pub fn width(&self) -> f64 {
        self.right_endpoint - self.left_endpoint
    }

    /// Number of sub-intervals induced by the partition nodes.
    pub fn num_intervals(&self) -> usize {
        self.num_points.saturating_sub(1)
    }

    /// Node spacing of the uniform partition, `(b - a) / (n - 1)`.
    pub fn spacing(&self) -> f64 {
        self.width() / self.num_intervals() as f64
    }
}
