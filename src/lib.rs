pub mod app;
pub mod render;
pub mod ui;
pub mod utils;
pub mod waveform;

pub use app::{AppError, run};
pub use render::Renderer;
pub use waveform::{SampleError, WaveformKind, WaveformRequest, generate};
