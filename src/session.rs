//! Stateful Riemann-sum workflow.
//!
//! [`RiemannSession`] bundles an integrand, a domain, a sample-point
//! strategy and the current partition, so that a sequence of experiments
//! (change the partition, recompute, compare rules, render) reads the way
//! the classroom workflow does. Everything it computes is also available
//! through the free functions in [`crate::quadrature`]; the session only
//! adds bookkeeping.

use rand::Rng;

use crate::domain::Domain;
use crate::error::SumResult;
use crate::partition::{Partition, PartitionKind};
use crate::quadrature::{self, RiemannSum};
use crate::sample::{SamplePoint, select_samples};

/// A Riemann-sum experiment with mutable state.
///
/// A fresh session integrates the identity function over `[0, 1]` with the
/// coarsest uniform partition and midpoint samples. Setters replace one
/// ingredient at a time and drop any cached samples or sums that the change
/// invalidates.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sumr::{Domain, RiemannSession, SamplePoint};
///
/// let mut session = RiemannSession::new();
/// session.set_function(|x: f64| x.sin());
/// session.set_domain(Domain::new(0.0, std::f64::consts::PI, 101)?)?;
/// session.set_sample_point(SamplePoint::Mid);
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let sum = session.riemann_sum(&mut rng)?;
/// assert!((sum - 2.0).abs() < 1e-3);
/// # Ok::<(), sumr::SumError>(())
/// ```
pub struct RiemannSession {
    function: Box<dyn Fn(f64) -> f64>,
    domain: Domain,
    sample_point: SamplePoint,
    partition: Partition,
    samples: Option<Vec<f64>>,
    result: Option<RiemannSum>,
}

impl Default for RiemannSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RiemannSession {
    /// Create a session with the default ingredients: `f(x) = x` on
    /// `[0, 1]`, two partition points, midpoint samples.
    pub fn new() -> Self {
        Self {
            function: Box::new(|x| x),
            domain: Domain::default(),
            sample_point: SamplePoint::default(),
            partition: Partition::default(),
            samples: None,
            result: None,
        }
    }

    /// Replace the integrand.
    ///
    /// The partition is kept; cached samples and sums are dropped because
    /// their heights belong to the old function.
    pub fn set_function<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64 + 'static,
    {
        self.function = Box::new(f);
        self.samples = None;
        self.result = None;
    }

    /// Replace the domain of integration and regenerate a uniform
    /// partition over it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SumError::InvalidDomain`] when the domain fields
    /// have been put in an invalid state.
    pub fn set_domain(&mut self, domain: Domain) -> SumResult<()> {
        self.partition = Partition::uniform(&domain)?;
        self.domain = domain;
        self.samples = None;
        self.result = None;
        Ok(())
    }

    /// Replace the sample-point strategy used by [`Self::riemann_sum`].
    pub fn set_sample_point(&mut self, sample_point: SamplePoint) {
        self.sample_point = sample_point;
        self.samples = None;
        self.result = None;
    }

    /// Regenerate a uniform partition from the current domain.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SumError::InvalidDomain`] when the domain fields
    /// have been put in an invalid state.
    pub fn set_uniform_partition(&mut self) -> SumResult<()> {
        self.partition = Partition::uniform(&self.domain)?;
        self.samples = None;
        self.result = None;
        Ok(())
    }

    /// Regenerate a random partition from the current domain.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SumError::InvalidDomain`] when the domain fields
    /// have been put in an invalid state.
    pub fn set_random_partition<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SumResult<()> {
        self.partition = Partition::random(&self.domain, rng)?;
        self.samples = None;
        self.result = None;
        Ok(())
    }

    /// Select fresh sample points and compute the Riemann sum.
    ///
    /// Samples are re-drawn on every call, so with
    /// [`SamplePoint::Random`] repeated calls give different sums over the
    /// same partition. The selected samples and the full
    /// [`RiemannSum`] are cached for the accessors and for rendering.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SumError::InvalidInput`] when the sample count does
    /// not match the partition, which cannot happen for samples produced
    /// here.
    pub fn riemann_sum<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SumResult<f64> {
        let samples = select_samples(&self.partition, self.sample_point, rng);
        let result = quadrature::riemann_sum(&self.function, &self.partition, &samples)?;
        let value = result.value;
        self.samples = Some(samples);
        self.result = Some(result);
        Ok(value)
    }

    /// Compute the trapezoidal sum over the current partition.
    pub fn trapezoid_sum(&self) -> f64 {
        quadrature::trapezoid_sum(&self.function, &self.partition)
    }

    /// Compute the Simpson sum over the current partition.
    pub fn simpson_sum(&self) -> f64 {
        quadrature::simpson_sum(&self.function, &self.partition)
    }

    /// The norm of the current partition.
    pub fn norm(&self) -> f64 {
        self.partition.norm()
    }

    /// Evaluate the integrand at a point.
    pub fn function_value(&self, x: f64) -> f64 {
        (self.function)(x)
    }

    /// The current domain of integration.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// The current sample-point strategy.
    pub fn sample_point(&self) -> SamplePoint {
        self.sample_point
    }

    /// How the current partition was generated.
    pub fn partition_kind(&self) -> PartitionKind {
        self.partition.kind()
    }

    /// The current partition.
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// The sample points selected by the last [`Self::riemann_sum`] call,
    /// if any.
    pub fn samples(&self) -> Option<&[f64]> {
        self.samples.as_deref()
    }

    /// The result of the last [`Self::riemann_sum`] call, if any.
    pub fn last_sum(&self) -> Option<&RiemannSum> {
        self.result.as_ref()
    }

    /// A one-line description of the last computed sum, e.g.
    /// `Riemann Sum Using Uniform Partition with Midpoints as Samples: 0.5`.
    ///
    /// Returns `None` until [`Self::riemann_sum`] has been called.
    pub fn title(&self) -> Option<String> {
        self.result.as_ref().map(|r| {
            format!(
                "Riemann Sum Using {} Partition with {} as Samples: {}",
                self.partition.kind(),
                self.sample_point.label(),
                r.value
            )
        })
    }
}
