//! Pre-analysis sanity checks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SignalError;
use crate::rate::{SECONDS_PER_HOUR, SamplingRate};

/// One independent validator check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// Sample count reaches the configured minimum.
    Length,
    /// No NaN or infinite samples.
    Finiteness,
    /// Sample standard deviation is strictly positive.
    Variance,
    /// Time span covers enough cycles of the shortest period of interest.
    Duration,
}

impl Check {
    /// All checks, in report order.
    pub const ALL: [Check; 4] = [
        Check::Length,
        Check::Finiteness,
        Check::Variance,
        Check::Duration,
    ];

    /// Returns the check name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Check::Length => "length",
            Check::Finiteness => "finiteness",
            Check::Variance => "variance",
            Check::Duration => "duration",
        }
    }
}

/// Configuration for [`validate`].
///
/// # Example
///
/// ```
/// use biolens_signal::ValidationConfig;
///
/// let config = ValidationConfig::new()
///     .with_min_len(16)
///     .with_shortest_period_hours(24.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    min_len: usize,
    shortest_period_hours: Option<f64>,
    min_cycles: f64,
}

impl ValidationConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `min_len = 8`, `shortest_period_hours = None` (duration check
    /// always passes), `min_cycles = 2.0`.
    pub fn new() -> Self {
        Self {
            min_len: 8,
            shortest_period_hours: None,
            min_cycles: 2.0,
        }
    }

    /// Sets the minimum number of samples.
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Enables the duration check for the given shortest period of interest.
    pub fn with_shortest_period_hours(mut self, hours: f64) -> Self {
        self.shortest_period_hours = Some(hours);
        self
    }

    /// Sets how many cycles of the shortest period the record must cover.
    pub fn with_min_cycles(mut self, cycles: f64) -> Self {
        self.min_cycles = cycles;
        self
    }

    /// Returns the minimum number of samples.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Returns the shortest period of interest, if the duration check is enabled.
    pub fn shortest_period_hours(&self) -> Option<f64> {
        self.shortest_period_hours
    }

    /// Returns the required number of cycles.
    pub fn min_cycles(&self) -> f64 {
        self.min_cycles
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SignalError::InvalidConfig`] | `min_len < 2`, `min_cycles` or `shortest_period_hours` not positive and finite |
    pub fn validate(&self) -> Result<(), SignalError> {
        if self.min_len < 2 {
            return Err(SignalError::InvalidConfig(
                "min_len must be >= 2".to_string(),
            ));
        }
        if !(self.min_cycles > 0.0) || !self.min_cycles.is_finite() {
            return Err(SignalError::InvalidConfig(
                "min_cycles must be > 0".to_string(),
            ));
        }
        if let Some(hours) = self.shortest_period_hours
            && (!(hours > 0.0) || !hours.is_finite())
        {
            return Err(SignalError::InvalidConfig(
                "shortest_period_hours must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of [`validate`]: one boolean per [`Check`].
///
/// `all_passed` is always derived from the checks, including when a report
/// is deserialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ReportRepr")]
pub struct ValidationReport {
    checks: BTreeMap<Check, bool>,
    all_passed: bool,
}

/// Serialized form of [`ValidationReport`]; a stored `all_passed` is ignored.
#[derive(Deserialize)]
struct ReportRepr {
    checks: BTreeMap<Check, bool>,
}

impl From<ReportRepr> for ValidationReport {
    fn from(repr: ReportRepr) -> Self {
        Self::new(repr.checks)
    }
}

impl ValidationReport {
    fn new(checks: BTreeMap<Check, bool>) -> Self {
        let all_passed = checks.values().all(|&ok| ok);
        Self { checks, all_passed }
    }

    /// Returns `true` only if every check passed.
    pub fn all_passed(&self) -> bool {
        self.all_passed
    }

    /// Returns the outcome of a single check.
    pub fn passed(&self, check: Check) -> bool {
        self.checks.get(&check).copied().unwrap_or(false)
    }

    /// Returns all check outcomes.
    pub fn checks(&self) -> &BTreeMap<Check, bool> {
        &self.checks
    }

    /// Returns the checks that failed.
    pub fn failures(&self) -> Vec<Check> {
        self.checks
            .iter()
            .filter(|&(_, &ok)| !ok)
            .map(|(&c, _)| c)
            .collect()
    }
}

/// Runs every check on `signal`.
///
/// Never fails: the caller decides what to do with a failing report.
pub fn validate(signal: &[f64], rate: SamplingRate, config: &ValidationConfig) -> ValidationReport {
    let n = signal.len();
    let finite: Vec<f64> = signal.iter().copied().filter(|v| v.is_finite()).collect();

    let length_ok = n >= config.min_len;
    let finite_ok = finite.len() == n;
    let variance_ok = finite.len() >= 2 && biolens_stats::sd(&finite) > 0.0;
    let duration_ok = match config.shortest_period_hours {
        Some(hours) => {
            let required = config.min_cycles * hours * SECONDS_PER_HOUR;
            rate.span_secs(n) >= required
        }
        None => true,
    };

    let checks = BTreeMap::from([
        (Check::Length, length_ok),
        (Check::Finiteness, finite_ok),
        (Check::Variance, variance_ok),
        (Check::Duration, duration_ok),
    ]);
    let report = ValidationReport::new(checks);
    debug!(
        n,
        all_passed = report.all_passed(),
        failures = ?report.failures(),
        "signal validated"
    );
    report
}

/// Lens precondition: fails fast on a signal no lens can analyse.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SignalError::TooShort`] | `signal.len() < min_len` |
/// | [`SignalError::NonFinite`] | any sample is NaN or infinite |
/// | [`SignalError::ZeroVariance`] | all samples are equal |
pub fn check_signal(signal: &[f64], min_len: usize) -> Result<(), SignalError> {
    let min = min_len.max(2);
    if signal.len() < min {
        return Err(SignalError::TooShort {
            len: signal.len(),
            min,
        });
    }
    if let Some(index) = signal.iter().position(|v| !v.is_finite()) {
        return Err(SignalError::NonFinite { index });
    }
    if biolens_stats::sd(signal) <= 0.0 {
        return Err(SignalError::ZeroVariance);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hourly() -> SamplingRate {
        SamplingRate::from_interval_secs(3600.0).unwrap()
    }

    fn sine(n: usize) -> Vec<f64> {
        (0..n).map(|i| (i as f64 * 0.3).sin()).collect()
    }

    #[test]
    fn well_formed_passes() {
        let report = validate(&sine(64), hourly(), &ValidationConfig::new());
        assert!(report.all_passed());
        assert!(report.failures().is_empty());
        assert_eq!(report.checks().len(), Check::ALL.len());
    }

    #[test]
    fn constant_fails_variance_only() {
        let report = validate(&[3.0; 32], hourly(), &ValidationConfig::new());
        assert!(!report.all_passed());
        assert_eq!(report.failures(), vec![Check::Variance]);
    }

    #[test]
    fn nan_fails_finiteness() {
        let mut data = sine(32);
        data[7] = f64::NAN;
        let report = validate(&data, hourly(), &ValidationConfig::new());
        assert!(!report.all_passed());
        assert!(!report.passed(Check::Finiteness));
        assert!(report.passed(Check::Variance));
    }

    #[test]
    fn short_fails_length() {
        let report = validate(&sine(5), hourly(), &ValidationConfig::new());
        assert!(!report.passed(Check::Length));
        assert!(!report.all_passed());
    }

    #[test]
    fn duration_checks_cycles() {
        // 30 hourly samples span 29 h: not two 24 h cycles.
        let config = ValidationConfig::new().with_shortest_period_hours(24.0);
        let report = validate(&sine(30), hourly(), &config);
        assert!(!report.passed(Check::Duration));

        let report = validate(&sine(50), hourly(), &config);
        assert!(report.passed(Check::Duration));
    }

    #[test]
    fn empty_signal_does_not_panic() {
        let report = validate(&[], hourly(), &ValidationConfig::new());
        assert!(!report.all_passed());
        assert!(report.passed(Check::Finiteness));
        assert!(!report.passed(Check::Variance));
    }

    #[test]
    fn check_signal_errors() {
        assert_eq!(
            check_signal(&[1.0], 2),
            Err(SignalError::TooShort { len: 1, min: 2 })
        );
        assert_eq!(
            check_signal(&[1.0, f64::INFINITY, 2.0], 2),
            Err(SignalError::NonFinite { index: 1 })
        );
        assert_eq!(check_signal(&[2.0; 10], 2), Err(SignalError::ZeroVariance));
        assert!(check_signal(&sine(10), 8).is_ok());
    }

    #[test]
    fn check_signal_floor_is_two() {
        assert_eq!(
            check_signal(&[1.0], 0),
            Err(SignalError::TooShort { len: 1, min: 2 })
        );
    }

    #[test]
    fn check_names() {
        let names: Vec<&str> = Check::ALL.iter().map(Check::name).collect();
        assert_eq!(names, ["length", "finiteness", "variance", "duration"]);
    }

    #[test]
    fn deserialized_report_recomputes_all_passed() {
        let json = r#"{"checks":{"length":true,"finiteness":false,"variance":true,"duration":true},"all_passed":true}"#;
        let report: ValidationReport = serde_json::from_str(json).unwrap();
        assert!(!report.all_passed());
        assert_eq!(report.failures(), vec![Check::Finiteness]);

        let json = r#"{"checks":{"length":true,"variance":true},"all_passed":false}"#;
        let report: ValidationReport = serde_json::from_str(json).unwrap();
        assert!(report.all_passed());
    }

    #[test]
    fn report_serde_roundtrip() {
        let report = validate(&[3.0; 32], hourly(), &ValidationConfig::new());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"all_passed\":false"));
        let back: ValidationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }

    #[test]
    fn config_defaults_validate() {
        assert!(ValidationConfig::new().validate().is_ok());
        assert!(
            ValidationConfig::new()
                .with_shortest_period_hours(24.0)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn config_rejects_out_of_range_values() {
        let bad = [
            ValidationConfig::new().with_min_len(1),
            ValidationConfig::new().with_min_cycles(-1.0),
            ValidationConfig::new().with_min_cycles(0.0),
            ValidationConfig::new().with_min_cycles(f64::INFINITY),
            ValidationConfig::new().with_shortest_period_hours(f64::NAN),
            ValidationConfig::new().with_shortest_period_hours(0.0),
            ValidationConfig::new().with_shortest_period_hours(-24.0),
        ];
        for config in bad {
            let err = config.validate().unwrap_err();
            assert!(matches!(err, SignalError::InvalidConfig(_)), "{config:?}");
        }
    }

    #[test]
    fn report_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ValidationReport>();
    }
}
