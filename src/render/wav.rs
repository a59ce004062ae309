use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::Renderer;
use crate::utils::dump::slug;

/// Writes each waveform to `<out_dir>/<slug>.wav` as 16-bit mono PCM.
///
/// Samples outside `[-1, 1]` are clamped.
pub struct WavExport {
    out_dir: PathBuf,
    sample_rate: u32,
    written: Vec<PathBuf>,
}

impl WavExport {
    /// WAV headers hold an integer rate; `sample_rate` is rounded into
    /// `1..=u32::MAX`.
    pub fn new(out_dir: impl Into<PathBuf>, sample_rate: f64) -> Self {
        let header_rate = if sample_rate.is_nan() {
            1
        } else {
            sample_rate.round().clamp(1.0, u32::MAX as f64) as u32
        };
        if header_rate as f64 != sample_rate {
            warn!(
                "WAV header rate {} Hz differs from requested {} Hz",
                header_rate, sample_rate
            );
        }
        Self {
            out_dir: out_dir.into(),
            sample_rate: header_rate,
            written: Vec::new(),
        }
    }

    /// Rate written into every file header.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl Renderer for WavExport {
    fn display(&mut self, waveform: &[f64], title: &str) -> io::Result<()> {
        let path = self.out_dir.join(format!("{}.wav", slug(title)));
        let clipped = write_to_wav(waveform, self.sample_rate, &path)?;
        if clipped > 0 {
            warn!(
                "{}: clamped {} of {} samples to [-1, 1]",
                title,
                clipped,
                waveform.len()
            );
        }
        info!("Wrote {} ({} Hz)", path.display(), self.sample_rate);
        self.written.push(path);
        Ok(())
    }
}

/// Returns how many samples had to be clamped.
pub fn write_to_wav(
    signal: &[f64],
    sample_rate: u32,
    filename: &Path,
) -> io::Result<usize> {
    if let Some(parent) = filename.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(filename, spec)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, format!("{err}")))?;
    let amplitude = i16::MAX as f64;
    let mut clipped = 0;
    for &sample in signal {
        let value = if sample.is_nan() { 0.0 } else { sample };
        if !(-1.0..=1.0).contains(&value) {
            clipped += 1;
        }
        writer
            .write_sample((value.clamp(-1.0, 1.0) * amplitude) as i16)
            .map_err(|err| {
                io::Error::new(io::ErrorKind::Other, format!("{err}"))
            })?;
    }
    writer
        .finalize()
        .map_err(|err| io::Error::new(io::ErrorKind::Other, format!("{err}")))?;
    Ok(clipped)
}
