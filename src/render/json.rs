use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use super::Renderer;
use crate::utils::dump::{WaveformDump, slug};

/// Writes each waveform to `<out_dir>/<slug>.json`.
///
/// JSON has no encoding for NaN or infinity, so buffers holding them are
/// refused instead of being written as `null`.
pub struct JsonDump {
    out_dir: PathBuf,
    sample_rate: f64,
    written: Vec<PathBuf>,
}

impl JsonDump {
    pub fn new(out_dir: impl Into<PathBuf>, sample_rate: f64) -> Self {
        Self {
            out_dir: out_dir.into(),
            sample_rate,
            written: Vec::new(),
        }
    }

    /// Files produced so far, in render order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl Renderer for JsonDump {
    fn display(&mut self, waveform: &[f64], title: &str) -> io::Result<()> {
        if let Some(index) = waveform.iter().position(|s| !s.is_finite()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "{title}: sample {index} is {}, not representable in JSON",
                    waveform[index]
                ),
            ));
        }
        let path = self.out_dir.join(format!("{}.json", slug(title)));
        let dump = WaveformDump::new(title, self.sample_rate, waveform);
        write_dump(&dump, &path)?;
        info!("Wrote {} samples to {}", waveform.len(), path.display());
        self.written.push(path);
        Ok(())
    }
}

pub fn write_dump(dump: &WaveformDump, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, dump)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, format!("{err}")))?;
    writer.flush()
}
