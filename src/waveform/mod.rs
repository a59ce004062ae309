//! Waveform sampling: the four generators plus a request/kind layer on top.

mod error;
mod sampler;

pub use error::SampleError;
pub use sampler::{
    generate_sawtooth_wave, generate_sine_wave, generate_square_wave,
    generate_triangle_wave,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::utils::consts::{
    DEFAULT_AMPLITUDE, DEFAULT_FREQUENCY, DEFAULT_NUM_SAMPLES,
    DEFAULT_SAMPLING_RATE,
};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum WaveformKind {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

impl WaveformKind {
    /// All kinds in the order the default run renders them.
    pub const ALL: [WaveformKind; 4] = [
        WaveformKind::Sine,
        WaveformKind::Square,
        WaveformKind::Triangle,
        WaveformKind::Sawtooth,
    ];

    pub fn title(self) -> &'static str {
        match self {
            WaveformKind::Sine => "Sine Wave",
            WaveformKind::Square => "Square Wave",
            WaveformKind::Triangle => "Triangle Wave",
            WaveformKind::Sawtooth => "Sawtooth Wave",
        }
    }
}

/// Parameters shared by every generator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaveformRequest {
    pub amplitude: f64,
    /// Hz
    pub frequency: f64,
    /// Hz
    pub sampling_rate: f64,
    pub num_samples: usize,
}

impl Default for WaveformRequest {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
            frequency: DEFAULT_FREQUENCY,
            sampling_rate: DEFAULT_SAMPLING_RATE,
            num_samples: DEFAULT_NUM_SAMPLES,
        }
    }
}

impl WaveformRequest {
    pub fn new(
        amplitude: f64,
        frequency: f64,
        sampling_rate: f64,
        num_samples: usize,
    ) -> Self {
        Self {
            amplitude,
            frequency,
            sampling_rate,
            num_samples,
        }
    }

    /// Checks the request up front, before any buffer is allocated.
    pub fn validate(&self) -> Result<(), SampleError> {
        sampler::validate_rates(self.frequency, self.sampling_rate)
    }

    /// Length of the buffer in seconds.
    pub fn duration(&self) -> f64 {
        self.num_samples as f64 / self.sampling_rate
    }
}

/// Samples `kind` with the parameters in `request`.
pub fn generate(
    kind: WaveformKind,
    request: &WaveformRequest,
) -> Result<Vec<f64>, SampleError> {
    let WaveformRequest {
        amplitude,
        frequency,
        sampling_rate,
        num_samples,
    } = *request;
    let generator: fn(f64, f64, f64, usize) -> Result<Vec<f64>, SampleError> =
        match kind {
            WaveformKind::Sine => generate_sine_wave,
            WaveformKind::Square => generate_square_wave,
            WaveformKind::Triangle => generate_triangle_wave,
            WaveformKind::Sawtooth => generate_sawtooth_wave,
        };
    let waveform = generator(amplitude, frequency, sampling_rate, num_samples)?;
    debug!(
        "Generated {:?}: {} samples ({:.4} s)",
        kind,
        waveform.len(),
        request.duration()
    );
    Ok(waveform)
}
