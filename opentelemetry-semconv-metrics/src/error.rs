use std::result;
use thiserror::Error;

/// A specialized `Result` type for building semantic-convention instruments.
pub type Result<T> = result::Result<T, MetricError>;

/// Errors returned when instrument options do not describe a valid instrument.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MetricError {
    /// The unit override is not a valid instrument unit.
    ///
    /// Units must be ASCII and no longer than 63 characters.
    #[error("Invalid unit for {metric}: {reason}")]
    InvalidUnit {
        /// Name of the metric being built.
        metric: &'static str,
        /// What is wrong with the unit.
        reason: &'static str,
    },
    /// The explicit bucket boundaries of a histogram are unusable.
    #[error("Invalid histogram boundaries for {metric}: {reason}")]
    InvalidBoundaries {
        /// Name of the metric being built.
        metric: &'static str,
        /// What is wrong with the boundaries.
        reason: &'static str,
    },
}
