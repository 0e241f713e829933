//! Transient detection on synthetic telemetry with injected events.

use std::f64::consts::PI;

use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use biolens_signal::SamplingRate;
use biolens_wavelet::{TransientEvent, WaveletConfig, WaveletResult, wavelet_lens};

fn five_minutes() -> SamplingRate {
    SamplingRate::from_interval_secs(300.0).unwrap()
}

/// Daily light rhythm sampled every 5 minutes.
fn daylight(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + 20.0 * (2.0 * PI * i as f64 / 288.0).sin())
        .collect()
}

fn near(events: &[TransientEvent], index: usize) -> Option<&TransientEvent> {
    events
        .iter()
        .find(|e| e.time_index().abs_diff(index) <= 1)
}

fn run(signal: &[f64]) -> WaveletResult {
    wavelet_lens(signal, five_minutes(), &WaveletConfig::new()).unwrap()
}

#[test]
fn spike_detected_at_its_sample() {
    let mut signal = daylight(512);
    signal[200] += 60.0;

    let result = run(&signal);
    let event = near(result.transients(), 200).unwrap_or_else(|| {
        panic!("no event near sample 200: {:?}", result.transients())
    });
    assert!(event.intensity() > 0.0);
    assert!(event.duration_samples() >= 1);
}

#[test]
fn step_detected_at_its_onset() {
    let signal: Vec<f64> = (0..256).map(|i| if i < 100 { 10.0 } else { 20.0 }).collect();

    let result = run(&signal);
    assert!(
        near(result.transients(), 100).is_some(),
        "no event near sample 100: {:?}",
        result.transients()
    );
}

#[test]
fn spike_in_noise_detected() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let noise = Normal::new(0.0, 1.0).unwrap();
    let mut signal: Vec<f64> = daylight(512)
        .into_iter()
        .map(|v| v + noise.sample(&mut rng))
        .collect();
    signal[300] += 50.0;

    let result = run(&signal);
    assert!(
        near(result.transients(), 300).is_some(),
        "no event near sample 300: {:?}",
        result.transients()
    );
}

#[test]
fn separated_spikes_are_separate_events() {
    let mut signal = daylight(512);
    signal[128] += 60.0;
    signal[384] += 60.0;

    let result = run(&signal);
    let events = result.transients();
    assert!(near(events, 128).is_some(), "missing event near 128: {events:?}");
    assert!(near(events, 384).is_some(), "missing event near 384: {events:?}");
    assert!(
        events
            .windows(2)
            .all(|w| w[0].time_index() <= w[1].time_index())
    );
}

#[test]
fn power_map_has_one_column_per_sample() {
    let signal = daylight(300);
    let result = run(&signal);

    assert_eq!(result.power().dim(), (result.n_scales(), 300));
    assert_eq!(result.coi().len(), 300);
    assert_eq!(result.periods().len(), result.n_scales());
    assert!(result.scales().windows(2).all(|w| w[0] < w[1]));
    assert!(result.power().iter().all(|p| p.is_finite() && *p >= 0.0));
    assert_eq!(result.global_wavelet_spectrum().len(), result.n_scales());
}

#[test]
fn repeat_calls_are_identical() {
    let mut signal = daylight(256);
    signal[90] += 40.0;
    let before = signal.clone();

    let a = run(&signal);
    let b = run(&signal);
    assert_eq!(a, b);
    assert_eq!(signal, before);
}

#[test]
fn disabling_coi_mask_keeps_map() {
    let mut signal = daylight(256);
    signal[128] += 60.0;

    let masked = run(&signal);
    let unmasked = wavelet_lens(
        &signal,
        five_minutes(),
        &WaveletConfig::new().with_mask_coi(false),
    )
    .unwrap();
    assert_eq!(masked.power(), unmasked.power());
    assert!(near(unmasked.transients(), 128).is_some());
}

#[test]
fn clean_rhythm_has_no_transients() {
    for n in [256, 300, 512, 864] {
        let result = run(&daylight(n));
        assert!(
            result.transients().is_empty(),
            "n={n}: {:?}",
            result.transients()
        );
    }
}

#[test]
fn single_spike_is_single_event() {
    let mut signal = daylight(512);
    signal[200] += 60.0;

    let events = run(&signal).transients().to_vec();
    assert_eq!(events.len(), 1, "{events:?}");
    assert!(events[0].time_index().abs_diff(200) <= 1);
}

#[test]
fn spikes_at_record_edges_detected() {
    for index in (0..5).chain(507..512) {
        let mut signal = daylight(512);
        signal[index] += 60.0;

        let events = run(&signal).transients().to_vec();
        assert_eq!(events.len(), 1, "spike at {index}: {events:?}");
        assert!(
            near(&events, index).is_some(),
            "spike at {index}: {events:?}"
        );
    }
}

#[test]
fn steps_near_record_edges_detected() {
    for onset in [3, 508] {
        let signal: Vec<f64> = daylight(512)
            .into_iter()
            .enumerate()
            .map(|(i, v)| if i >= onset { v + 60.0 } else { v })
            .collect();

        let result = run(&signal);
        assert!(
            near(result.transients(), onset).is_some(),
            "step at {onset}: {:?}",
            result.transients()
        );
    }
}

#[test]
fn spike_in_short_record_detected() {
    for n in [8, 12, 16, 24, 32, 48, 64] {
        let mut signal = daylight(n);
        signal[n / 2] += 20.0;

        let result = run(&signal);
        assert!(
            near(result.transients(), n / 2).is_some(),
            "n={n}: {:?}",
            result.transients()
        );
    }
}

#[test]
fn transients_clear_the_noise_floor() {
    let mut signal = daylight(512);
    signal[200] += 60.0;

    let result = run(&signal);
    let finest = result.noise_floor()[0];
    assert!(finest > 0.0);
    for event in result.transients() {
        assert!(event.intensity() > finest);
    }
}
