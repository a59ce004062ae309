//! Ties sampling to rendering: the body of the default program run.

use std::io;

use thiserror::Error;
use tracing::info;

use crate::render::Renderer;
use crate::waveform::{SampleError, WaveformKind, WaveformRequest, generate};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Sample(#[from] SampleError),
    #[error("rendering failed: {0}")]
    Render(#[from] io::Error),
}

/// Generates every kind in `kinds` and hands each buffer to `renderer`,
/// in order.
///
/// The request is validated once before anything is generated, so an invalid
/// request renders nothing. Returns the number of waveforms rendered.
pub fn run<R: Renderer + ?Sized>(
    request: &WaveformRequest,
    kinds: &[WaveformKind],
    renderer: &mut R,
) -> Result<usize, AppError> {
    request.validate()?;
    info!(
        "Sampling {} waveform(s): A={} f={} Hz fs={} Hz n={}",
        kinds.len(),
        request.amplitude,
        request.frequency,
        request.sampling_rate,
        request.num_samples
    );
    for &kind in kinds {
        let waveform = generate(kind, request)?;
        renderer.display(&waveform, kind.title())?;
    }
    Ok(kinds.len())
}
