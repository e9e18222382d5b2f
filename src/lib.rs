//! Numerical integration over finite partitions, built for teaching.
//!
//! `sumr` approximates the definite integral of a real function with the
//! three classroom summation rules (Riemann sums over selectable sample
//! points, the trapezoidal rule and Simpson's rule) applied to explicit
//! partitions of the domain. Partitions are first-class values: generate
//! them uniformly or at random, inspect their sub-interval widths and
//! norm, and feed the same partition to every rule for comparison.
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`domain`] | Domain of integration with validation |
//! | [`partition`] | Uniform and random partition generation, widths, norm |
//! | [`sample`] | Sample-point strategies for Riemann sums |
//! | [`quadrature`] | The three summation rules |
//! | [`session`] | Stateful wrapper caching partition, samples and sums |
//! | [`convergence`] | Error sweeps over growing partition resolution |
//! | [`plot`] | Rendering of sums and log-log convergence charts (`plot` feature) |
//! | [`common`] | Shared numeric helpers |
//!
//! # Quick Start
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use sumr::{Domain, Partition, SamplePoint};
//! use sumr::{riemann_sum, select_samples, simpson_sum, trapezoid_sum};
//!
//! // Integrate x^2 over [0, 1]; the exact value is 1/3.
//! let domain = Domain::new(0.0, 1.0, 101)?;
//! let partition = Partition::uniform(&domain)?;
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let samples = select_samples(&partition, SamplePoint::Mid, &mut rng);
//! let riemann = riemann_sum(|x| x * x, &partition, &samples)?;
//!
//! assert!((riemann.value - 1.0 / 3.0).abs() < 1e-4);
//! assert!((trapezoid_sum(|x| x * x, &partition) - 1.0 / 3.0).abs() < 1e-4);
//! assert!((simpson_sum(|x| x * x, &partition) - 1.0 / 3.0).abs() < 1e-9);
//! # Ok::<(), sumr::SumError>(())
//! ```
//!
//! The [`RiemannSession`] wrapper bundles the same pieces for interactive
//! use and keeps the last computed sum around for rendering:
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use sumr::{Domain, RiemannSession};
//!
//! let mut session = RiemannSession::new();
//! session.set_function(|x: f64| x.sin());
//! session.set_domain(Domain::new(0.0, std::f64::consts::PI, 51)?)?;
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! session.set_random_partition(&mut rng)?;
//! let sum = session.riemann_sum(&mut rng)?;
//! assert!((sum - 2.0).abs() < 0.1);
//! # Ok::<(), sumr::SumError>(())
//! ```

pub mod common;
pub mod convergence;
pub mod domain;
pub mod error;
pub mod partition;
#[cfg(feature = "plot")]
pub mod plot;
pub mod quadrature;
pub mod sample;
pub mod session;

pub use convergence::{ConvergencePoint, Method, sweep};
pub use domain::Domain;
pub use error::{SumError, SumResult};
pub use partition::{Partition, PartitionKind};
#[cfg(feature = "plot")]
pub use plot::{PlotOptions, draw_loglog, draw_riemann, render_loglog_svg, render_riemann_svg};
pub use quadrature::{RiemannSum, riemann_sum, simpson_sum, trapezoid_sum};
pub use sample::{SamplePoint, select_samples};
pub use session::RiemannSession;
