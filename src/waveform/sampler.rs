//! Closed-form sampling of the four basic waveforms.
//!
//! Every generator evaluates sample `i` at `t_i = i * (1 / sampling_rate)`
//! and depends on nothing but `i`, so buffers are deterministic.

use super::error::SampleError;

const PI: f64 = std::f64::consts::PI;

fn check_rate(name: &'static str, value: f64) -> Result<(), SampleError> {
    // an infinite rate gives a zero period or time step
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SampleError::InvalidParameter { name, value })
    }
}

/// Rejects rates that divide by zero or collapse the period.
pub(crate) fn validate_rates(
    frequency: f64,
    sampling_rate: f64,
) -> Result<(), SampleError> {
    check_rate("frequency", frequency)?;
    check_rate("sampling_rate", sampling_rate)
}

/// Returns `(time_step, period)` after validating both rates.
fn setup(
    frequency: f64,
    sampling_rate: f64,
) -> Result<(f64, f64), SampleError> {
    validate_rates(frequency, sampling_rate)?;
    Ok((1.0 / sampling_rate, 1.0 / frequency))
}

pub fn generate_sine_wave(
    amplitude: f64,
    frequency: f64,
    sampling_rate: f64,
    num_samples: usize,
) -> Result<Vec<f64>, SampleError> {
    let (time_step, _) = setup(frequency, sampling_rate)?;
    Ok((0..num_samples)
        .map(|i| {
            let time = i as f64 * time_step;
            amplitude * (2.0 * PI * frequency * time).sin()
        })
        .collect())
}

/// Square wave that compares elapsed time, not phase, against half a period.
///
/// Only the first half period is `+amplitude`; every later sample is
/// `-amplitude`. Existing consumers rely on this shape, so it is kept.
pub fn generate_square_wave(
    amplitude: f64,
    frequency: f64,
    sampling_rate: f64,
    num_samples: usize,
) -> Result<Vec<f64>, SampleError> {
    let (time_step, period) = setup(frequency, sampling_rate)?;
    Ok((0..num_samples)
        .map(|i| {
            let time = i as f64 * time_step;
            if time < period / 2.0 { amplitude } else { -amplitude }
        })
        .collect())
}

/// Triangle wave following `amplitude * (4p - 2[p > 0.5])`.
///
/// The formula is unscaled: values reach `2 * amplitude`.
pub fn generate_triangle_wave(
    amplitude: f64,
    frequency: f64,
    sampling_rate: f64,
    num_samples: usize,
) -> Result<Vec<f64>, SampleError> {
    let (time_step, period) = setup(frequency, sampling_rate)?;
    Ok((0..num_samples)
        .map(|i| {
            let phase = phase_at(i as f64 * time_step, period);
            let step = if phase > 0.5 { 1.0 } else { 0.0 };
            amplitude * (4.0 * phase - 2.0 * step)
        })
        .collect())
}

pub fn generate_sawtooth_wave(
    amplitude: f64,
    frequency: f64,
    sampling_rate: f64,
    num_samples: usize,
) -> Result<Vec<f64>, SampleError> {
    let (time_step, period) = setup(frequency, sampling_rate)?;
    Ok((0..num_samples)
        .map(|i| {
            let phase = phase_at(i as f64 * time_step, period);
            amplitude * (2.0 * phase - 1.0)
        })
        .collect())
}

/// Fractional position within the current period, in `[0, 1)`.
#[inline]
fn phase_at(time: f64, period: f64) -> f64 {
    (time % period) / period
}
