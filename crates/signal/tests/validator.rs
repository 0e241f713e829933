//! Validator behaviour on the signals an upstream telemetry source produces.

use biolens_signal::{
    Check, DEFAULT_MAX_SPAN_RATIO, SamplingRate, SignalError, ValidationConfig, check_signal,
    resolve_timestamps, validate,
};

fn five_minutes() -> SamplingRate {
    SamplingRate::from_interval_secs(300.0).unwrap()
}

/// 72 h of a 24 h light rhythm at 5-minute resolution.
fn light_rhythm() -> Vec<f64> {
    (0..864)
        .map(|i| {
            let t_hours = i as f64 * 300.0 / 3600.0;
            500.0 + 400.0 * (2.0 * std::f64::consts::PI * t_hours / 24.0).sin()
        })
        .collect()
}

#[test]
fn well_formed_rhythm_passes_all_checks() {
    let config = ValidationConfig::new().with_shortest_period_hours(24.0);
    let report = validate(&light_rhythm(), five_minutes(), &config);
    assert!(report.all_passed(), "failures: {:?}", report.failures());
}

#[test]
fn constant_signal_fails() {
    let report = validate(&[750.0; 864], five_minutes(), &ValidationConfig::new());
    assert!(!report.all_passed());
    assert!(!report.passed(Check::Variance));
}

#[test]
fn nan_signal_fails() {
    let mut data = light_rhythm();
    data[100] = f64::NAN;
    let report = validate(&data, five_minutes(), &ValidationConfig::new());
    assert!(!report.all_passed());
    assert!(!report.passed(Check::Finiteness));
}

#[test]
fn short_signal_fails() {
    let data = light_rhythm();
    let report = validate(&data[..4], five_minutes(), &ValidationConfig::new());
    assert!(!report.all_passed());
    assert!(!report.passed(Check::Length));
}

#[test]
fn too_short_record_for_period_fails_duration() {
    let config = ValidationConfig::new().with_shortest_period_hours(24.0);
    // 24 h of data covers only one cycle.
    let data = &light_rhythm()[..288];
    let report = validate(data, five_minutes(), &config);
    assert!(!report.passed(Check::Duration));
    assert!(report.passed(Check::Length));
}

#[test]
fn validation_is_idempotent() {
    let data = light_rhythm();
    let config = ValidationConfig::new().with_shortest_period_hours(24.0);
    assert_eq!(
        validate(&data, five_minutes(), &config),
        validate(&data, five_minutes(), &config)
    );
}

#[test]
fn precondition_and_units_are_separate_failures() {
    let data = light_rhythm();
    assert!(check_signal(&data, 8).is_ok());

    let hours: Vec<f64> = (0..data.len()).map(|i| i as f64 * 300.0 / 3600.0).collect();
    let err =
        resolve_timestamps(data.len(), Some(&hours), five_minutes(), DEFAULT_MAX_SPAN_RATIO)
            .unwrap_err();
    assert!(matches!(err, SignalError::UnitMismatch { .. }));
    assert!(!err.is_invalid_signal());
}
