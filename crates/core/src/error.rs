//! Contract-violation error type.

use thiserror::Error;

/// Errors raised when a caller breaks an API contract.
///
/// The kernel has no operational failure modes: every error is a
/// precondition violation. The assertion-based constructors fail fast on the
/// same conditions; the `try_` constructors surface them as values instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An interval was constructed with its lower bound above its upper bound.
    #[error("invalid interval: {0}")]
    InvalidInterval(String),

    /// A construction algorithm received an empty point sequence.
    #[error("empty point sequence: {0}")]
    EmptyPointSeq(String),

    /// An intersection was requested for regions that do not overlap.
    #[error("disjoint regions: {0}")]
    Disjoint(String),
}

/// Result type for fallible constructors.
pub type Result<T> = std::result::Result<T, Error>;
