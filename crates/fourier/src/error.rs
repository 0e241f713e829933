//! Error types for the biolens-fourier crate.

use biolens_signal::SignalError;

/// Error type for all fallible operations in the biolens-fourier crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FourierError {
    /// Signal precondition or timestamp unit error.
    #[error(transparent)]
    Signal(#[from] SignalError),

    /// Returned when a configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Returned when the requested resolution needs more grid points than allowed.
    #[error("frequency grid needs {required} points, limit is {max}")]
    GridTooLarge {
        /// Number of points the tolerance requires.
        required: usize,
        /// Configured upper bound.
        max: usize,
    },
}
