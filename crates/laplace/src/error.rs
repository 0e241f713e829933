//! Error types for the biolens-laplace crate.

use biolens_signal::SignalError;

/// Error type for all fallible operations in the biolens-laplace crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LaplaceError {
    /// Signal precondition error.
    #[error(transparent)]
    Signal(#[from] SignalError),

    /// Returned when a configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Returned when no autoregressive order down to 1 yields a solvable fit.
    #[error("autoregressive fit failed: normal equations singular for every order up to {order}")]
    FitFailed {
        /// Highest order attempted.
        order: usize,
    },

    /// Returned when the characteristic polynomial roots fail to converge.
    #[error("root finding did not converge after {iterations} iterations")]
    RootsDidNotConverge {
        /// Iterations performed.
        iterations: usize,
    },
}
