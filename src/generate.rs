use anyhow::{Result, anyhow, bail};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use tracing::{info, info_span};

use biolens_signal::SECONDS_PER_HOUR;

use crate::cli::GenerateArgs;
use crate::input;

/// Height of an injected spike, in units of the daily light amplitude.
const SPIKE_HEIGHT: f64 = 3.0;

/// Shape of a synthetic light-intensity series.
#[derive(Clone, Debug)]
pub struct SyntheticParams {
    pub period_hours: f64,
    pub hours: f64,
    pub interval_s: f64,
    pub noise: f64,
    pub spike_at_hour: Option<f64>,
}

impl From<&GenerateArgs> for SyntheticParams {
    fn from(args: &GenerateArgs) -> Self {
        Self {
            period_hours: args.period_hours,
            hours: args.hours,
            interval_s: args.interval_s,
            noise: args.noise,
            spike_at_hour: args.spike_at_hour,
        }
    }
}

/// Generates `(times_s, values)` for a noisy daily light cycle.
///
/// The clean signal is `0.5 * (1 - cos(2 pi t / P))`, dark at `t = 0` and
/// brightest at `P / 2`. Gaussian noise with standard deviation `noise` is
/// added and the result is floored at zero. An optional spike of
/// [`SPIKE_HEIGHT`] lands on the sample nearest `spike_at_hour`.
pub fn synthesize<R: Rng>(params: &SyntheticParams, rng: &mut R) -> Result<(Vec<f64>, Vec<f64>)> {
    if !(params.period_hours > 0.0) || !params.period_hours.is_finite() {
        bail!("period must be > 0 hours, got {}", params.period_hours);
    }
    if !(params.interval_s > 0.0) || !params.interval_s.is_finite() {
        bail!("interval must be > 0 s, got {}", params.interval_s);
    }
    if !(params.hours > 0.0) || !params.hours.is_finite() {
        bail!("duration must be > 0 hours, got {}", params.hours);
    }
    let normal = Normal::new(0.0, params.noise)
        .map_err(|e| anyhow!("invalid noise level {}: {e}", params.noise))?;

    let n = (params.hours * SECONDS_PER_HOUR / params.interval_s).floor() as usize;
    if n < 2 {
        bail!(
            "{} hours at {} s spacing yields fewer than 2 samples",
            params.hours,
            params.interval_s
        );
    }

    let spike_index = match params.spike_at_hour {
        Some(h) if (0.0..params.hours).contains(&h) => {
            Some(((h * SECONDS_PER_HOUR / params.interval_s).round() as usize).min(n - 1))
        }
        Some(h) => bail!("spike hour {h} outside [0, {})", params.hours),
        None => None,
    };

    let omega = std::f64::consts::TAU / (params.period_hours * SECONDS_PER_HOUR);
    let times: Vec<f64> = (0..n).map(|i| i as f64 * params.interval_s).collect();
    let mut values: Vec<f64> = times
        .iter()
        .map(|&t| {
            let clean = 0.5 * (1.0 - (omega * t).cos());
            (clean + rng.sample(normal)).max(0.0)
        })
        .collect();
    if let Some(i) = spike_index {
        values[i] += SPIKE_HEIGHT;
    }

    Ok((times, values))
}

/// Writes a synthetic telemetry CSV.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _span = info_span!("generate").entered();

    let params = SyntheticParams::from(&args);
    let mut rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let (times, values) = synthesize(&params, &mut rng)?;

    input::write_telemetry(&args.output, &times, &values)?;
    info!(
        path = %args.output.display(),
        n = values.len(),
        period_hours = params.period_hours,
        "wrote synthetic telemetry"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn params() -> SyntheticParams {
        SyntheticParams {
            period_hours: 24.0,
            hours: 72.0,
            interval_s: 300.0,
            noise: 0.1,
            spike_at_hour: None,
        }
    }

    #[test]
    fn sample_count_and_spacing() {
        let mut rng = StdRng::seed_from_u64(1);
        let (times, values) = synthesize(&params(), &mut rng).unwrap();
        assert_eq!(values.len(), 864);
        assert_eq!(times.len(), 864);
        assert_abs_diff_eq!(times[1] - times[0], 300.0);
        assert!(values.iter().all(|v| *v >= 0.0));
    }

    #[test]
    fn same_seed_same_series() {
        let a = synthesize(&params(), &mut StdRng::seed_from_u64(7)).unwrap();
        let b = synthesize(&params(), &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn noiseless_cycle_shape() {
        let p = SyntheticParams {
            noise: 0.0,
            ..params()
        };
        let (_, values) = synthesize(&p, &mut StdRng::seed_from_u64(0)).unwrap();
        // 12 h = sample 144 is the daily maximum.
        assert_abs_diff_eq!(values[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(values[144], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(values[288], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn spike_lands_on_nearest_sample() {
        let p = SyntheticParams {
            noise: 0.0,
            spike_at_hour: Some(30.0),
            ..params()
        };
        let (_, values) = synthesize(&p, &mut StdRng::seed_from_u64(0)).unwrap();
        let argmax = values
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(argmax, 360);
    }

    #[test]
    fn spike_outside_record_rejected() {
        let p = SyntheticParams {
            spike_at_hour: Some(72.0),
            ..params()
        };
        assert!(synthesize(&p, &mut StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn invalid_shape_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        for p in [
            SyntheticParams {
                period_hours: 0.0,
                ..params()
            },
            SyntheticParams {
                interval_s: -1.0,
                ..params()
            },
            SyntheticParams {
                noise: -0.1,
                ..params()
            },
            SyntheticParams {
                hours: 0.01,
                ..params()
            },
        ] {
            assert!(synthesize(&p, &mut rng).is_err(), "{p:?}");
        }
    }
}
