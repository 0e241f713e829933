use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use biolens_signal::{ValidationReport, validate};

use crate::cli::ValidateArgs;
use crate::config::BiolensConfig;
use crate::convert;
use crate::input;

/// Runs the validator and prints one line per check.
///
/// Exits with an error when any check fails.
pub fn run(args: ValidateArgs) -> Result<()> {
    let _span = info_span!("validate").entered();

    let cfg = BiolensConfig::load(args.config.as_deref())?;
    let validation_cfg = convert::build_validation_config(&cfg.validation);
    validation_cfg
        .validate()
        .context("invalid validation configuration")?;

    let telemetry = input::read_telemetry(&args.input)?;
    let rate = convert::resolve_sampling_rate(
        args.sampling_rate,
        &cfg.analyzer,
        telemetry.inferred_rate_hz(),
    )?;
    info!(n = telemetry.values().len(), rate_hz = rate.hz(), "telemetry loaded");

    let report = validate(telemetry.values(), rate, &validation_cfg);
    print!("{}", render(&report));

    let failures = report.failures();
    if !failures.is_empty() {
        let names: Vec<&str> = failures.iter().map(|c| c.name()).collect();
        bail!("validation failed: {}", names.join(", "));
    }
    Ok(())
}

fn render(report: &ValidationReport) -> String {
    report
        .checks()
        .iter()
        .map(|(check, &ok)| format!("{:<12}{}\n", check.name(), if ok { "pass" } else { "FAIL" }))
        .collect()
}
