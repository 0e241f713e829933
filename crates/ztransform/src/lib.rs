//! # biolens-ztransform
//!
//! Z-transform lens: denoises a uniformly sampled signal with a zero-phase
//! Butterworth low-pass filter and reports how much variability was removed.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     H["cutoff hint (Hz)"] -->|"resolve_cutoff"| C["cutoff <= 0.9 Nyquist"]
//!     C -->|"butterworth_lowpass"| S["biquad sections"]
//!     A["signal"] -->|"odd reflection"| P["padded"]
//!     S --> F["forward + backward pass"]
//!     P --> F
//!     F --> R["ZTransformResult"]
//!     R --> N[".noise_reduction_percent()"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use biolens_signal::SamplingRate;
//! use biolens_ztransform::{ZTransformConfig, z_transform_lens};
//!
//! let rate = SamplingRate::from_interval_secs(300.0)?;
//! let circadian_hz = 1.0 / (24.0 * 3600.0);
//! let result = z_transform_lens(&samples, rate, Some(circadian_hz), &ZTransformConfig::new())?;
//! println!("removed {:.1}% of variability", result.noise_reduction_percent());
//! ```

mod biquad;
mod config;
mod cutoff;
mod error;
mod filtfilt;
mod lens;
mod result;

pub use biquad::{Biquad, butterworth_lowpass, cascade_magnitude};
pub use config::{MAX_ORDER, ZTransformConfig};
pub use cutoff::{Cutoff, CutoffSource, resolve_cutoff};
pub use error::ZTransformError;
pub use filtfilt::filtfilt;
pub use lens::{MIN_SAMPLES, noise_reduction_percent, z_transform_lens};
pub use result::ZTransformResult;
