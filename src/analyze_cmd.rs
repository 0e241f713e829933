use anyhow::{Context, Result};
use tracing::{info, info_span};

use biolens_analyzer::SystemAnalyzer;

use crate::cli::AnalyzeArgs;
use crate::config::BiolensConfig;
use crate::convert;
use crate::input;

/// Runs every lens over a CSV series and writes the JSON report.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _span = info_span!("analyze").entered();

    let cfg = BiolensConfig::load(args.config.as_deref())?;
    let analyzer_cfg = convert::build_analyzer_config(&cfg)?;

    info!(path = %args.input.display(), "reading telemetry");
    let telemetry = input::read_telemetry(&args.input)?;
    let rate = convert::resolve_sampling_rate(
        args.sampling_rate,
        &cfg.analyzer,
        telemetry.inferred_rate_hz(),
    )?;
    info!(n = telemetry.values().len(), rate_hz = rate.hz(), "telemetry loaded");

    let analyzer = SystemAnalyzer::new(rate.hz())?.with_config(analyzer_cfg)?;
    let report = analyzer
        .analyze(telemetry.values(), telemetry.times())
        .context("analysis failed")?;

    let summary = report.summary();
    info!(
        valid = summary.valid,
        dominant_period_hours = ?summary.dominant_period_hours,
        n_transients = summary.n_transients,
        stability = %summary.stability,
        cutoff_hz = summary.cutoff_frequency_hz,
        "analysis complete"
    );

    let json = if args.summary {
        summary.to_json()?
    } else {
        report.to_json()?
    };
    match args.output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "wrote report");
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::generate::{SyntheticParams, synthesize};

    fn write_signal(dir: &Path) -> PathBuf {
        let params = SyntheticParams {
            period_hours: 24.0,
            hours: 72.0,
            interval_s: 300.0,
            noise: 0.05,
            spike_at_hour: Some(40.0),
        };
        let (times, values) = synthesize(&params, &mut StdRng::seed_from_u64(3)).unwrap();
        let path = dir.join("signal.csv");
        input::write_telemetry(&path, &times, &values).unwrap();
        path
    }

    fn args(input: PathBuf, output: PathBuf) -> AnalyzeArgs {
        AnalyzeArgs {
            input,
            config: None,
            output: Some(output),
            sampling_rate: None,
            summary: false,
        }
    }

    #[test]
    fn full_report_written() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_signal(dir.path());
        let output = dir.path().join("report.json");
        run(args(input, output.clone())).unwrap();

        let json = std::fs::read_to_string(&output).unwrap();
        for key in ["\"validation\"", "\"fourier\"", "\"wavelet\"", "\"laplace\"", "\"ztransform\""] {
            assert!(json.contains(key), "missing {key}");
        }
    }

    #[test]
    fn summary_report_written() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_signal(dir.path());
        let output = dir.path().join("summary.json");
        let mut a = args(input, output.clone());
        a.summary = true;
        run(a).unwrap();

        let json = std::fs::read_to_string(&output).unwrap();
        assert!(json.contains("\"dominant_period_hours\""));
        assert!(!json.contains("\"fourier\""));
    }

    #[test]
    fn config_file_applied() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_signal(dir.path());
        let config = dir.path().join("biolens.toml");
        std::fs::write(&config, "[ztransform]\norder = 3\n").unwrap();
        let mut a = args(input, dir.path().join("report.json"));
        a.config = Some(config);
        let err = run(a).unwrap_err();
        assert!(format!("{err:#}").contains("order"));
    }

    #[test]
    fn value_only_csv_needs_rate() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("values.csv");
        std::fs::write(&input, "value\n1\n2\n3\n4\n5\n6\n7\n8\n9\n").unwrap();
        let err = run(args(input, dir.path().join("report.json"))).unwrap_err();
        assert!(err.to_string().contains("sampling rate unknown"));
    }
}
