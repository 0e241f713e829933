//! Bundled configuration for every lens.

use serde::{Deserialize, Serialize};

use biolens_fourier::FourierConfig;
use biolens_laplace::LaplaceConfig;
use biolens_signal::ValidationConfig;
use biolens_wavelet::WaveletConfig;
use biolens_ztransform::ZTransformConfig;

use crate::error::AnalyzerError;

/// Per-lens configuration used by a [`SystemAnalyzer`](crate::SystemAnalyzer).
///
/// # Example
///
/// ```
/// use biolens_analyzer::AnalyzerConfig;
/// use biolens_laplace::LaplaceConfig;
///
/// let config = AnalyzerConfig::new().with_laplace(LaplaceConfig::new().with_order(4));
/// assert_eq!(config.laplace().order(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    validation: ValidationConfig,
    fourier: FourierConfig,
    wavelet: WaveletConfig,
    laplace: LaplaceConfig,
    ztransform: ZTransformConfig,
}

impl AnalyzerConfig {
    /// Creates a configuration with every lens at its defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the validator configuration.
    pub fn with_validation(mut self, config: ValidationConfig) -> Self {
        self.validation = config;
        self
    }

    /// Sets the Fourier lens configuration.
    pub fn with_fourier(mut self, config: FourierConfig) -> Self {
        self.fourier = config;
        self
    }

    /// Sets the wavelet lens configuration.
    pub fn with_wavelet(mut self, config: WaveletConfig) -> Self {
        self.wavelet = config;
        self
    }

    /// Sets the Laplace lens configuration.
    pub fn with_laplace(mut self, config: LaplaceConfig) -> Self {
        self.laplace = config;
        self
    }

    /// Sets the Z-transform lens configuration.
    pub fn with_ztransform(mut self, config: ZTransformConfig) -> Self {
        self.ztransform = config;
        self
    }

    /// Returns the validator configuration.
    pub fn validation(&self) -> &ValidationConfig {
        &self.validation
    }

    /// Returns the Fourier lens configuration.
    pub fn fourier(&self) -> &FourierConfig {
        &self.fourier
    }

    /// Returns the wavelet lens configuration.
    pub fn wavelet(&self) -> &WaveletConfig {
        &self.wavelet
    }

    /// Returns the Laplace lens configuration.
    pub fn laplace(&self) -> &LaplaceConfig {
        &self.laplace
    }

    /// Returns the Z-transform lens configuration.
    pub fn ztransform(&self) -> &ZTransformConfig {
        &self.ztransform
    }

    /// Validates every lens configuration.
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        self.validation.validate()?;
        self.fourier.validate()?;
        self.wavelet.validate()?;
        self.laplace.validate()?;
        self.ztransform.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(AnalyzerConfig::new().validate().is_ok());
    }

    #[test]
    fn invalid_lens_config_surfaces() {
        let config = AnalyzerConfig::new().with_ztransform(ZTransformConfig::new().with_order(3));
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AnalyzerError::ZTransform(_)));
    }

    #[test]
    fn invalid_validation_config_surfaces() {
        let config = AnalyzerConfig::new()
            .with_validation(ValidationConfig::new().with_shortest_period_hours(f64::NAN));
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            AnalyzerError::Signal(biolens_signal::SignalError::InvalidConfig(_))
        ));
    }

    #[test]
    fn builder_replaces_sections() {
        let config = AnalyzerConfig::new()
            .with_validation(ValidationConfig::new().with_min_len(16))
            .with_wavelet(WaveletConfig::new().with_threshold_sigma(4.0));
        assert_eq!(config.validation().min_len(), 16);
        assert!((config.wavelet().threshold_sigma() - 4.0).abs() < f64::EPSILON);
        assert_eq!(config.fourier(), &FourierConfig::new());
    }
}
