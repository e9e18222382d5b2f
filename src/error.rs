//! Error types for partition and summation operations.

use std::fmt;

/// Result type for summation operations.
pub type SumResult<T> = Result<T, SumError>;

/// Errors that can occur while building partitions or computing sums.
#[derive(Debug, Clone)]
pub enum SumError {
    /// Invalid integration domain (endpoints out of order or too few points).
    InvalidDomain {
        left_endpoint: f64,
        right_endpoint: f64,
        num_points: usize,
        context: String,
    },

    /// Invalid input array size or value.
    InvalidInput { context: String },

    /// A drawing backend failed while rendering.
    #[cfg(feature = "plot")]
    Render { message: String },
}

impl fmt::Display for SumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomain {
                left_endpoint,
                right_endpoint,
                num_points,
                context,
            } => {
                write!(
                    f,
                    "{}: invalid domain [{}, {}] with {} points (need left < right and at least 2 points)",
                    context, left_endpoint, right_endpoint, num_points
                )
            }
            Self::InvalidInput { context } => {
                write!(f, "Invalid input: {}", context)
            }
            #[cfg(feature = "plot")]
            Self::Render { message } => {
                write!(f, "Render error: {}", message)
            }
        }
    }
}

impl std::error::Error for SumError {}
