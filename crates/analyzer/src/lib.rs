//! # biolens-analyzer
//!
//! Facade over the biolens lenses: one [`SystemAnalyzer`] per sampling rate,
//! one call per lens, or [`SystemAnalyzer::analyze`] for all of them.
//!
//! ## Lenses
//!
//! | Method | Crate | Answers |
//! |--------|-------|---------|
//! | [`validate`](SystemAnalyzer::validate) | `biolens-signal` | is the signal usable? |
//! | [`fourier_lens`](SystemAnalyzer::fourier_lens) | `biolens-fourier` | what is the dominant rhythm? |
//! | [`wavelet_lens`](SystemAnalyzer::wavelet_lens) | `biolens-wavelet` | when do transient events occur? |
//! | [`laplace_lens`](SystemAnalyzer::laplace_lens) | `biolens-laplace` | is the system stable? |
//! | [`z_transform_lens`](SystemAnalyzer::z_transform_lens) | `biolens-ztransform` | what does it look like denoised? |
//!
//! ## Combined run
//!
//! ```mermaid
//! graph LR
//!     S["signal"] --> V["validate"]
//!     S --> F["fourier_lens"]
//!     S --> W["wavelet_lens"]
//!     S --> L["laplace_lens"]
//!     F -->|"dominant frequency"| Z["z_transform_lens_with_hint"]
//!     S --> Z
//!     V --> R["AnalysisReport"]
//!     F --> R
//!     W --> R
//!     L --> R
//!     Z --> R
//! ```

mod analyzer;
mod config;
mod error;
mod report;

pub use analyzer::SystemAnalyzer;
pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
pub use report::{AnalysisReport, AnalysisSummary};
