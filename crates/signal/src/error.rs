//! Error types for the biolens-signal crate.

/// Error type for all fallible operations in the biolens-signal crate.
///
/// Every lens wraps this type, so a precondition failure reads the same no
/// matter which lens detected it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SignalError {
    /// Returned when the signal is shorter than the minimum required length.
    #[error("invalid signal: got {len} samples, need at least {min}")]
    TooShort {
        /// Number of samples provided.
        len: usize,
        /// Minimum number of samples required.
        min: usize,
    },

    /// Returned when the signal contains a NaN or infinite sample.
    #[error("invalid signal: non-finite sample at index {index}")]
    NonFinite {
        /// Index of the first offending sample.
        index: usize,
    },

    /// Returned when every sample has the same value.
    #[error("invalid signal: zero variance")]
    ZeroVariance,

    /// Returned when the sampling rate is not a positive finite number.
    #[error("sampling rate must be positive and finite, got {0}")]
    InvalidSamplingRate(f64),

    /// Returned when timestamps and samples differ in length.
    #[error("length mismatch: {signal} samples but {timestamps} timestamps")]
    LengthMismatch {
        /// Number of samples.
        signal: usize,
        /// Number of timestamps.
        timestamps: usize,
    },

    /// Returned when a [`ValidationConfig`](crate::ValidationConfig) is out of range.
    #[error("invalid validation config: {0}")]
    InvalidConfig(String),

    /// Returned when timestamps are inconsistent with the declared sampling rate.
    #[error("unit mismatch: {reason}")]
    UnitMismatch {
        /// Which consistency check failed.
        reason: String,
    },
}

impl SignalError {
    /// Returns `true` for the variants that describe an unusable signal
    /// (too short, non-finite, constant).
    pub fn is_invalid_signal(&self) -> bool {
        matches!(
            self,
            Self::TooShort { .. } | Self::NonFinite { .. } | Self::ZeroVariance
        )
    }
}
