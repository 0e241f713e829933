//! # biolens-laplace
//!
//! Laplace lens: fits an autoregressive model to a uniformly sampled signal,
//! maps its poles to the continuous s-plane and classifies the system as
//! stable, oscillatory or unstable.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["signal"] -->|"standardize"| S["stride m from ACF zero crossing"]
//!     S -->|"m-sample moving average"| B["OLS AR(p) + intercept on lags m apart"]
//!     B -->|"singular? reduce p"| B
//!     B -->|"characteristic roots"| C["z-plane poles"]
//!     C -->|"s = rate * ln z / m"| D["s-plane poles"]
//!     D --> E["LaplaceResult"]
//!     E --> F[".stability()"]
//!     E --> G[".natural_frequency()"]
//!     E --> H[".damping_ratio()"]
//! ```
//!
//! ## Mathematical Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | m | [`LaplaceResult::stride()`] | samples between AR lags |
//! | a1..ap | [`LaplaceResult::ar_coefficients()`] | AR weights on lags `m, 2m, ..., pm` |
//! | z | [`LaplaceResult::discrete_poles()`] | roots of `z^p - a1 z^(p-1) - ... - ap` |
//! | s | [`LaplaceResult::poles()`] | continuous poles, rad/s |
//! | f_n | [`LaplaceResult::natural_frequency()`] | `abs(s) / 2 pi` of the dominant pole, Hz |
//! | zeta | [`LaplaceResult::damping_ratio()`] | `-Re(s) / abs(s)` of the dominant pole |
//!
//! ## Quick Start
//!
//! ```ignore
//! use biolens_laplace::{LaplaceConfig, Stability, laplace_lens};
//! use biolens_signal::SamplingRate;
//!
//! let result = laplace_lens(&samples, SamplingRate::new(1.0)?, &LaplaceConfig::new())?;
//! if result.stability() == Stability::Unstable {
//!     println!("growing mode at {:.4} Hz", result.natural_frequency());
//! }
//! ```

mod ar;
mod config;
mod error;
mod lens;
mod linalg;
mod poles;
mod result;
mod roots;
mod stride;

pub use config::{LaplaceConfig, MAX_ORDER};
pub use error::LaplaceError;
pub use lens::{MIN_SAMPLES, laplace_lens};
pub use poles::{
    Stability, classify, damping_ratio, discrete_to_continuous, dominant_pole,
    natural_frequency_hz,
};
pub use result::LaplaceResult;
