//! Error types for the biolens-wavelet crate.

use biolens_signal::SignalError;

/// Error type for all fallible operations in the biolens-wavelet crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WaveletError {
    /// Signal precondition error.
    #[error(transparent)]
    Signal(#[from] SignalError),

    /// Returned when a configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Returned when the chi-squared background threshold cannot be computed.
    #[error("significance test failed: {0}")]
    SignificanceFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_signal_transparent() {
        let err = WaveletError::from(SignalError::NonFinite { index: 2 });
        assert_eq!(err.to_string(), "invalid signal: non-finite sample at index 2");
    }

    #[test]
    fn error_invalid_config() {
        let err = WaveletError::InvalidConfig("dj must be > 0".into());
        assert_eq!(err.to_string(), "invalid configuration: dj must be > 0");
    }

    #[test]
    fn error_significance_failed() {
        let err = WaveletError::SignificanceFailed("bad dof".into());
        assert_eq!(err.to_string(), "significance test failed: bad dof");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<WaveletError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<WaveletError>();
    }
}
