//! # biolens-signal
//!
//! Sampling rate, timestamp resolution and pre-analysis validation shared by
//! every biolens lens.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["SamplingRate::new(hz)?"] --> B["validate(&signal, rate, &config)"]
//!     B --> C["ValidationReport"]
//!     C --> D[".all_passed()"]
//!     A --> E["resolve_timestamps(n, ts, rate, ratio)?"]
//!     E --> F["timestamps in seconds"]
//! ```
//!
//! Validation reports failures as booleans. Lenses call [`check_signal`] and
//! [`resolve_timestamps`], which fail fast with a [`SignalError`].

mod error;
mod rate;
mod timestamps;
mod validate;

pub use error::SignalError;
pub use rate::{SECONDS_PER_HOUR, SamplingRate};
pub use timestamps::{DEFAULT_MAX_SPAN_RATIO, resolve_timestamps, uniform_timestamps};
pub use validate::{Check, ValidationConfig, ValidationReport, check_signal, validate};
