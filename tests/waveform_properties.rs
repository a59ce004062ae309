use waveplot_rs::waveform::{
    SampleError, WaveformKind, WaveformRequest, generate,
    generate_sawtooth_wave, generate_sine_wave, generate_square_wave,
    generate_triangle_wave,
};

const A: f64 = 1.0;
const F: f64 = 440.0;
const SR: f64 = 44100.0;
const N: usize = 1024;

fn reference() -> WaveformRequest {
    WaveformRequest::new(A, F, SR, N)
}

#[test]
fn every_kind_returns_requested_length() {
    for n in [0, 1, 7, N] {
        let request = WaveformRequest::new(A, F, SR, n);
        for kind in WaveformKind::ALL {
            assert_eq!(generate(kind, &request).unwrap().len(), n, "{kind:?}");
        }
    }
}

#[test]
fn reference_run_first_samples() {
    let sine = generate_sine_wave(A, F, SR, N).unwrap();
    let saw = generate_sawtooth_wave(A, F, SR, N).unwrap();
    assert_eq!(sine[0], 0.0);
    assert_eq!(saw[0], -1.0);
}

#[test]
fn sine_matches_closed_form() {
    let amplitude = 0.75;
    let wave = generate_sine_wave(amplitude, F, SR, N).unwrap();
    for (i, &sample) in wave.iter().enumerate() {
        let expected =
            amplitude * (2.0 * std::f64::consts::PI * F * i as f64 / SR).sin();
        assert!((sample - expected).abs() < 1e-9, "sample {i}");
    }
}

#[test]
fn square_never_returns_after_first_half_period() {
    let wave = generate_square_wave(A, F, SR, N).unwrap();
    // half of a 440 Hz period is ~50.1 samples at 44.1 kHz
    let positive = wave.iter().take_while(|&&s| s == A).count();
    assert_eq!(positive, 51);
    assert!(wave[positive..].iter().all(|&s| s == -A));
}

#[test]
fn sawtooth_stays_in_range_and_resets_each_period() {
    let wave = generate_sawtooth_wave(A, F, SR, N).unwrap();
    assert!(wave.iter().all(|&s| (-A..=A).contains(&s)));

    let period = 1.0 / F;
    for (i, &sample) in wave.iter().enumerate() {
        let t = i as f64 / SR;
        let phase = (t / period).fract();
        assert!((sample - A * (2.0 * phase - 1.0)).abs() < 1e-6, "sample {i}");
    }

    // drops only happen where elapsed time crosses a multiple of the period
    for i in 1..wave.len() {
        if wave[i] < wave[i - 1] {
            let before = ((i - 1) as f64 * F / SR).floor();
            let after = (i as f64 * F / SR).floor();
            assert_eq!(after, before + 1.0, "unexpected reset at {i}");
        }
    }
}

#[test]
fn triangle_is_unscaled() {
    let amplitude = 0.5;
    let wave = generate_triangle_wave(amplitude, F, SR, N).unwrap();
    let lo = -2.0 * amplitude;
    let hi = 2.0 * amplitude;
    assert!(wave.iter().all(|&s| s >= lo && s <= hi));
    let peak = wave.iter().copied().fold(f64::MIN, f64::max);
    assert!(peak > amplitude, "peak {peak} should exceed the amplitude");
}

#[test]
fn negative_amplitude_inverts_every_kind() {
    let positive = WaveformRequest::new(0.8, F, SR, 300);
    let negative = WaveformRequest::new(-0.8, F, SR, 300);
    for kind in WaveformKind::ALL {
        let up = generate(kind, &positive).unwrap();
        let down = generate(kind, &negative).unwrap();
        for (a, b) in up.iter().zip(&down) {
            assert_eq!(*b, -*a, "{kind:?}");
        }
    }
}

#[test]
fn zero_samples_is_not_an_error() {
    let request = WaveformRequest::new(A, F, SR, 0);
    for kind in WaveformKind::ALL {
        assert!(generate(kind, &request).unwrap().is_empty());
    }
}

#[test]
fn non_positive_rates_are_invalid_for_every_kind() {
    let bad = [
        (0.0, SR, "frequency"),
        (-440.0, SR, "frequency"),
        (F, 0.0, "sampling_rate"),
        (F, -1.0, "sampling_rate"),
        (f64::INFINITY, SR, "frequency"),
        (f64::NAN, SR, "frequency"),
        (F, f64::INFINITY, "sampling_rate"),
    ];
    for (frequency, sampling_rate, field) in bad {
        let request = WaveformRequest::new(A, frequency, sampling_rate, 16);
        for kind in WaveformKind::ALL {
            match generate(kind, &request) {
                Err(SampleError::InvalidParameter { name, .. }) => {
                    assert_eq!(name, field)
                }
                Ok(_) => panic!("{kind:?} accepted {request:?}"),
            }
        }
    }
}

#[test]
fn generation_is_deterministic() {
    for kind in WaveformKind::ALL {
        assert_eq!(
            generate(kind, &reference()).unwrap(),
            generate(kind, &reference()).unwrap()
        );
    }
}
