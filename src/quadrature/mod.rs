//! Finite-partition summation rules.
//!
//! Three ways of turning a partition of [a, b] into an approximation of the
//! definite integral of `f`:
//!
//! | Rule | Input | Exact for |
//! |------|-------|-----------|
//! | [`riemann_sum`] | partition + sample points | constants |
//! | [`trapezoid_sum`] | partition endpoints | polynomials of degree <= 1 |
//! | [`simpson_sum`] | partition endpoints + geometric midpoints | polynomials of degree <= 3 |
//!
//! The Riemann sum depends on the sample-point strategy
//! ([`crate::SamplePoint`]); the trapezoidal and Simpson sums read only the
//! partition nodes and are independent of it. All three are pure functions
//! of their inputs; caching for rendering lives in
//! [`crate::RiemannSession`], not here.

mod riemann;
mod simpson;
mod trapezoid;

pub use riemann::{RiemannSum, riemann_sum};
pub use simpson::simpson_sum;
pub use trapezoid::trapezoid_sum;
