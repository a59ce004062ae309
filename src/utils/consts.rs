/// Default peak amplitude
pub const DEFAULT_AMPLITUDE: f64 = 1.0;

/// Default waveform frequency (Hz)
pub const DEFAULT_FREQUENCY: f64 = 440.0;

/// Default sampling rate (Hz)
pub const DEFAULT_SAMPLING_RATE: f64 = 44100.0;

/// Default buffer length (samples)
pub const DEFAULT_NUM_SAMPLES: usize = 1024;

/// Log level (can be overridden by RUST_LOG)
pub const LOG_LEVEL: &str = "info";

// ============================================================================
// Plot Parameters
// ============================================================================

/// Chart width in columns, excluding the y-axis gutter
pub const PLOT_WIDTH: usize = 72;

/// Chart height in rows
pub const PLOT_HEIGHT: usize = 17;

/// Horizontal grid spacing (columns)
pub const GRID_COLUMNS: usize = 8;

/// Vertical grid spacing (rows)
pub const GRID_ROWS: usize = 4;

pub const X_LABEL: &str = "Time (samples)";

pub const Y_LABEL: &str = "Amplitude";

/// Directory for json/wav output when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "waveforms";
