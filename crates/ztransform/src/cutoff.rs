//! Cutoff frequency selection.

use serde::{Deserialize, Serialize};

use crate::config::ZTransformConfig;
use crate::error::ZTransformError;

/// Where the filter cutoff came from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum CutoffSource {
    /// Scaled from a dominant-frequency hint (Hz).
    Hint {
        /// The hinted frequency.
        frequency_hz: f64,
    },
    /// A fixed fraction of Nyquist.
    NyquistFraction,
}

/// A resolved cutoff frequency.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cutoff {
    /// Cutoff frequency (Hz), never above the configured Nyquist clamp.
    pub frequency_hz: f64,
    /// Where the cutoff came from.
    pub source: CutoffSource,
    /// `true` when the requested cutoff was lowered to the Nyquist clamp.
    pub clamped: bool,
}

/// Picks the cutoff for a signal with the given Nyquist frequency.
///
/// With a hint `f`, the cutoff is `hint_multiplier * f`; without, it is
/// `nyquist_fraction * nyquist`. Either way it is clamped to
/// `max_nyquist_fraction * nyquist`.
///
/// # Errors
///
/// [`ZTransformError::InvalidCutoffHint`] when the hint is not positive and finite.
pub fn resolve_cutoff(
    hint: Option<f64>,
    nyquist: f64,
    config: &ZTransformConfig,
) -> Result<Cutoff, ZTransformError> {
    let (requested, source) = match hint {
        Some(f) if !(f > 0.0) || !f.is_finite() => {
            return Err(ZTransformError::InvalidCutoffHint(f));
        }
        Some(f) => (
            config.hint_multiplier() * f,
            CutoffSource::Hint { frequency_hz: f },
        ),
        None => (
            config.nyquist_fraction() * nyquist,
            CutoffSource::NyquistFraction,
        ),
    };
    let ceiling = config.max_nyquist_fraction() * nyquist;
    Ok(Cutoff {
        frequency_hz: requested.min(ceiling),
        source,
        clamped: requested > ceiling,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_is_tenth_of_nyquist() {
        let cutoff = resolve_cutoff(None, 0.5, &ZTransformConfig::new()).unwrap();
        assert_relative_eq!(cutoff.frequency_hz, 0.05);
        assert_eq!(cutoff.source, CutoffSource::NyquistFraction);
        assert!(!cutoff.clamped);
    }

    #[test]
    fn hint_is_scaled() {
        let cutoff = resolve_cutoff(Some(0.01), 0.5, &ZTransformConfig::new()).unwrap();
        assert_relative_eq!(cutoff.frequency_hz, 0.04);
        assert_eq!(cutoff.source, CutoffSource::Hint { frequency_hz: 0.01 });
    }

    #[test]
    fn high_hint_is_clamped() {
        let cutoff = resolve_cutoff(Some(0.3), 0.5, &ZTransformConfig::new()).unwrap();
        assert_relative_eq!(cutoff.frequency_hz, 0.45);
        assert!(cutoff.clamped);
    }

    #[test]
    fn bad_hints_rejected() {
        let config = ZTransformConfig::new();
        for hint in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let err = resolve_cutoff(Some(hint), 0.5, &config).unwrap_err();
            assert!(matches!(err, ZTransformError::InvalidCutoffHint(_)));
        }
    }
}
