//! Renderers consume a finished buffer plus a title. They never feed back
//! into sampling.

mod json;
mod plot;
mod wav;

pub use json::JsonDump;
pub use plot::{PlotConfig, TerminalPlot};
pub use wav::WavExport;

use std::io;

pub trait Renderer {
    /// Shows or stores one waveform.
    fn display(&mut self, waveform: &[f64], title: &str) -> io::Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn display(&mut self, waveform: &[f64], title: &str) -> io::Result<()> {
        (**self).display(waveform, title)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn display(&mut self, waveform: &[f64], title: &str) -> io::Result<()> {
        (**self).display(waveform, title)
    }
}

/// Drops every waveform.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl Renderer for Discard {
    fn display(&mut self, _waveform: &[f64], _title: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Renderer selection on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputKind {
    /// Text chart on stdout
    Plot,
    /// One JSON file per waveform
    Json,
    /// One 16-bit mono WAV file per waveform
    Wav,
    /// Generate only
    #[value(name = "none")]
    Silent,
}
