//! # biolens-wavelet
//!
//! Morlet wavelet lens: time-frequency power and transient event detection
//! for uniformly sampled biological telemetry.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["signal"] -->|"centre + even extension"| B["FFT"]
//!     B -->|"Morlet daughters"| C["power map (scale x time)"]
//!     A -->|"lag-1 + robust variance"| R["red-noise floor"]
//!     C -->|"cone of influence"| D["reliable cells"]
//!     D -->|"median + k*robust sd per scale"| E["flagged cells"]
//!     R --> E
//!     E -->|"connected, merged within an octave"| F["TransientEvent list"]
//! ```
//!
//! ## Units
//!
//! | Quantity | Unit |
//! |----------|------|
//! | scales, periods, cone of influence | seconds |
//! | power | squared signal units |
//! | event time, duration | samples |
//!
//! ## Quick Start
//!
//! ```ignore
//! use biolens_signal::SamplingRate;
//! use biolens_wavelet::{WaveletConfig, wavelet_lens};
//!
//! let rate = SamplingRate::from_interval_secs(300.0)?;
//! let result = wavelet_lens(&samples, rate, &WaveletConfig::new())?;
//! for event in result.transients() {
//!     println!("event at sample {} ({} samples)", event.time_index(), event.duration_samples());
//! }
//! ```

mod config;
mod cwt;
mod error;
mod lens;
mod result;
mod significance;
mod transient;

pub use config::WaveletConfig;
pub use cwt::fourier_factor;
pub use error::WaveletError;
pub use lens::{MIN_SAMPLES, wavelet_lens};
pub use result::WaveletResult;
pub use transient::TransientEvent;
