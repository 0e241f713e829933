//! # biolens-fourier
//!
//! Dominant-periodicity lens for biological telemetry that may be unevenly
//! sampled or gapped.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["signal + timestamps (s)"] -->|"resolve_timestamps"| B["times"]
//!     C["FourierConfig"] -->|"frequency_grid"| D["geometric grid"]
//!     B --> E["generalized Lomb-Scargle"]
//!     D --> E
//!     E --> F["FourierResult"]
//!     F --> G[".dominant_period_hours()"]
//!     F --> H[".significance()"]
//! ```
//!
//! ## Units
//!
//! | Quantity | Unit |
//! |----------|------|
//! | timestamps | seconds |
//! | frequencies | Hz |
//! | periods | hours |
//!
//! ## Quick Start
//!
//! ```ignore
//! use biolens_fourier::{FourierConfig, fourier_lens};
//! use biolens_signal::SamplingRate;
//!
//! let rate = SamplingRate::from_interval_secs(300.0)?;
//! let result = fourier_lens(&samples, None, rate, &FourierConfig::new())?;
//! println!("{:.2} h (significance {:.3})", result.dominant_period_hours(), result.significance());
//! ```

mod config;
mod error;
mod grid;
mod lens;
mod periodogram;
mod result;

pub use config::FourierConfig;
pub use error::FourierError;
pub use grid::{frequency_grid, grid_len, grid_resolves};
pub use lens::{MIN_SAMPLES, fourier_lens};
pub use result::{FourierResult, SpectralPeak, period_hours};
