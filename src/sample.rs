//! Sample-point selection for Riemann sums.
//!
//! A sample point is the location inside each sub-interval where the
//! integrand is evaluated to obtain the rectangle height. The selection
//! strategy is a tagged enum; keyword strings are accepted at the boundary,
//! where an unknown keyword falls back to [`SamplePoint::Mid`] with a
//! warning instead of failing.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::{SumError, SumResult};
use crate::partition::Partition;

/// Sample-point selection strategy.
///
/// | Strategy | Sample in `[p_k, p_{k+1}]` |
/// |----------|-----------------------------|
/// | Left     | `p_k`                       |
/// | Right    | `p_{k+1}`                   |
/// | Mid      | `(p_k + p_{k+1}) / 2`       |
/// | Random   | one uniform draw            |
///
/// `Mid` is the default and the fallback for unknown keyword strings (see
/// [`SamplePoint::parse_lossy`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplePoint {
    /// Left endpoint of each sub-interval.
    Left,
    /// Right endpoint of each sub-interval.
    Right,
    /// Arithmetic mean of each sub-interval's endpoints (default).
    #[default]
    Mid,
    /// One uniform random draw within each sub-interval.
    Random,
}

impl SamplePoint {
    /// Keyword spelling, the accepted input vocabulary.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Mid => "mid",
            Self::Random => "random",
        }
    }

    /// Human-readable name used in chart titles.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Left => "Left Endpoints",
            Self::Right => "Right Endpoints",
            Self::Mid => "Midpoints",
            Self::Random => "Random Points",
        }
    }

    /// Parse a keyword, falling back to `Mid` on unknown input.
    ///
    /// Anything other than `"left"`, `"right"`, `"mid"` or `"random"` emits
    /// a warning through `tracing` and selects midpoints, matching the
    /// recover-don't-fail contract for interactive use.
    ///
    /// # Example
    ///
    /// ```
    /// use sumr::SamplePoint;
    ///
    /// assert_eq!(SamplePoint::parse_lossy("left"), SamplePoint::Left);
    /// assert_eq!(SamplePoint::parse_lossy("foo"), SamplePoint::Mid);
    /// ```
    pub fn parse_lossy(s: &str) -> Self {
        match s.parse() {
            Ok(mode) => mode,
            Err(_) => {
                tracing::warn!(
                    "unknown sample_point keyword {s:?}: expected one of \"left\", \"right\", \"mid\", \"random\"; using \"mid\""
                );
                Self::Mid
            }
        }
    }
}

impl fmt::Display for SamplePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl FromStr for SamplePoint {
    type Err = SumError;

    /// Strict keyword parsing; unknown input is an error.
    fn from_str(s: &str) -> SumResult<Self> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "mid" => Ok(Self::Mid),
            "random" => Ok(Self::Random),
            _ => Err(SumError::InvalidInput {
                context: format!(
                    "SamplePoint: unknown keyword {s:?} (expected \"left\", \"right\", \"mid\" or \"random\")"
                ),
            }),
        }
    }
}

/// Select one sample point per sub-interval of a partition.
///
/// Returns one value fewer than the partition has nodes. The random source
/// is only consulted for [`SamplePoint::Random`]; pass a seeded rng for
/// reproducible draws.
///
/// # Example
///
/// ```
/// use sumr::{Domain, Partition, SamplePoint, select_samples};
///
/// let partition = Partition::uniform(&Domain::new(0.0, 1.0, 3)?)?;
/// let samples = select_samples(&partition, SamplePoint::Mid, &mut rand::rng());
/// assert_eq!(samples, vec![0.25, 0.75]);
/// # Ok::<(), sumr::SumError>(())
/// ```
pub fn select_samples<R: Rng + ?Sized>(
    partition: &Partition,
    mode: SamplePoint,
    rng: &mut R,
) -> Vec<f64> {
    partition
        .points()
        .windows(2)
        .map(|w| match mode {
            SamplePoint::Left => w[0],
            SamplePoint::Right => w[1],
            SamplePoint::Mid => 0.5 * (w[0] + w[1]),
            SamplePoint::Random => {
                if w[1] > w[0] {
                    rng.random_range(w[0]..w[1])
                } else {
                    // Degenerate sub-interval: the endpoints coincide.
                    w[0]
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Domain;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn unit_partition(n: usize) -> Partition {
        Partition::uniform(&Domain::new(0.0, 1.0, n).unwrap()).unwrap()
    }

    #[test]
    fn test_sample_count() {
        let partition = unit_partition(9);
        let mut rng = StdRng::seed_from_u64(0);
        for mode in [
            SamplePoint::Left,
            SamplePoint::Right,
            SamplePoint::Mid,
            SamplePoint::Random,
        ] {
            let samples = select_samples(&partition, mode, &mut rng);
            assert_eq!(samples.len(), partition.num_intervals());
        }
    }

    #[test]
    fn test_left_right_mid_values() {
        let partition = unit_partition(3);
        let mut rng = StdRng::seed_from_u64(0);

        let left = select_samples(&partition, SamplePoint::Left, &mut rng);
        assert_eq!(left, vec![0.0, 0.5]);

        let right = select_samples(&partition, SamplePoint::Right, &mut rng);
        assert_eq!(right, vec![0.5, 1.0]);

        let mid = select_samples(&partition, SamplePoint::Mid, &mut rng);
        assert_eq!(mid, vec![0.25, 0.75]);
    }

    #[test]
    fn test_random_samples_stay_in_sub_intervals() {
        let domain = Domain::new(-2.0, 2.0, 25).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let partition = Partition::random(&domain, &mut rng).unwrap();
        let samples = select_samples(&partition, SamplePoint::Random, &mut rng);

        for (w, &s) in partition.points().windows(2).zip(&samples) {
            assert!(s >= w[0] && s <= w[1], "sample {s} outside [{}, {}]", w[0], w[1]);
        }
    }

    #[test]
    fn test_parse_lossy_keywords() {
        assert_eq!(SamplePoint::parse_lossy("left"), SamplePoint::Left);
        assert_eq!(SamplePoint::parse_lossy("right"), SamplePoint::Right);
        assert_eq!(SamplePoint::parse_lossy("mid"), SamplePoint::Mid);
        assert_eq!(SamplePoint::parse_lossy("random"), SamplePoint::Random);
    }

    #[test]
    fn test_parse_lossy_fallback_matches_mid() {
        // An invalid keyword must behave exactly like an explicit "mid".
        let partition = unit_partition(6);
        let mut rng = StdRng::seed_from_u64(0);

        let fallback = SamplePoint::parse_lossy("foo");
        assert_eq!(fallback, SamplePoint::Mid);

        let from_fallback = select_samples(&partition, fallback, &mut rng);
        let from_mid = select_samples(&partition, SamplePoint::Mid, &mut rng);
        assert_eq!(from_fallback, from_mid);
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("random".parse::<SamplePoint>().unwrap(), SamplePoint::Random);
        assert!("Mid".parse::<SamplePoint>().is_err());
        assert!("".parse::<SamplePoint>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(SamplePoint::Left.label(), "Left Endpoints");
        assert_eq!(SamplePoint::Right.label(), "Right Endpoints");
        assert_eq!(SamplePoint::Mid.label(), "Midpoints");
        assert_eq!(SamplePoint::Random.label(), "Random Points");
        assert_eq!(SamplePoint::default(), SamplePoint::Mid);
        assert_eq!(SamplePoint::Random.to_string(), "random");
    }
}
