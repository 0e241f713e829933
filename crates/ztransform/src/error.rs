//! Error types for the biolens-ztransform crate.

use biolens_signal::SignalError;

/// Error type for all fallible operations in the biolens-ztransform crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ZTransformError {
    /// Signal precondition error.
    #[error(transparent)]
    Signal(#[from] SignalError),

    /// Returned when a configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Returned when a cutoff hint is not a positive finite frequency.
    #[error("cutoff hint must be positive and finite, got {0}")]
    InvalidCutoffHint(f64),
}
