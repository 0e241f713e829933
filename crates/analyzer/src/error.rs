//! Error types for the biolens-analyzer crate.

use biolens_fourier::FourierError;
use biolens_laplace::LaplaceError;
use biolens_signal::SignalError;
use biolens_wavelet::WaveletError;
use biolens_ztransform::ZTransformError;

/// Error type for all fallible operations in the biolens-analyzer crate.
///
/// Lens errors pass through unchanged so callers can match on the lens that
/// failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalyzerError {
    /// Sampling rate or signal precondition error.
    #[error(transparent)]
    Signal(#[from] SignalError),

    /// Fourier lens error.
    #[error(transparent)]
    Fourier(#[from] FourierError),

    /// Wavelet lens error.
    #[error(transparent)]
    Wavelet(#[from] WaveletError),

    /// Laplace lens error.
    #[error(transparent)]
    Laplace(#[from] LaplaceError),

    /// Z-transform lens error.
    #[error(transparent)]
    ZTransform(#[from] ZTransformError),

    /// Returned when a report cannot be serialized.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Underlying serializer message.
        reason: String,
    },
}
