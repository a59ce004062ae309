use std::io::{self, Write};

use super::Renderer;
use crate::utils::consts::{
    GRID_COLUMNS, GRID_ROWS, PLOT_HEIGHT, PLOT_WIDTH, X_LABEL, Y_LABEL,
};

const LABEL_WIDTH: usize = 9;
const TRACE: char = '*';
const GRID: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotConfig {
    /// Maximum number of chart columns
    pub width: usize,
    /// Number of chart rows
    pub height: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
        }
    }
}

/// Amplitude vs. sample index chart drawn with plain characters.
///
/// Each column covers a run of consecutive samples and shows their
/// min/max envelope, so buffers longer than the chart keep their shape.
pub struct TerminalPlot<W: Write> {
    out: W,
    config: PlotConfig,
}

impl TerminalPlot<io::Stdout> {
    pub fn stdout(config: PlotConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> TerminalPlot<W> {
    pub fn new(out: W, config: PlotConfig) -> Self {
        Self { out, config }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, waveform: &[f64], title: &str) -> io::Result<()> {
        let n = waveform.len();
        let height = self.config.height.max(2);
        let columns = self.config.width.max(1).min(n.max(1));
        let gutter = " ".repeat(LABEL_WIDTH);

        writeln!(self.out, "{gutter}  {title:^columns$}")?;
        writeln!(self.out, "{Y_LABEL}")?;

        if n == 0 {
            writeln!(self.out, "{gutter} | (no samples)")?;
            writeln!(self.out, "{gutter}  {X_LABEL}")?;
            writeln!(self.out)?;
            return self.out.flush();
        }

        let (lo, hi) = value_range(waveform);
        let span = hi - lo;
        let last_row = height - 1;
        let row_of = |value: f64| {
            let row = ((hi - value) / span * last_row as f64).round();
            (row.max(0.0) as usize).min(last_row)
        };

        let mut cells = vec![vec![' '; columns]; height];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                if r % GRID_ROWS == 0 || c % GRID_COLUMNS == 0 {
                    *cell = GRID;
                }
            }
        }
        for c in 0..columns {
            let start = c * n / columns;
            let end = ((c + 1) * n / columns).clamp(start + 1, n);
            if let Some((min, max)) = value_range_of(&waveform[start..end]) {
                let (top, bottom) = (row_of(max), row_of(min));
                for row in cells.iter_mut().take(bottom + 1).skip(top) {
                    row[c] = TRACE;
                }
            }
        }

        for (r, row) in cells.iter().enumerate() {
            let line: String = row.iter().collect();
            if r % GRID_ROWS == 0 || r == last_row {
                let value = hi - r as f64 * span / last_row as f64;
                writeln!(self.out, "{value:>LABEL_WIDTH$.3} |{line}")?;
            } else {
                writeln!(self.out, "{gutter} |{line}")?;
            }
        }
        writeln!(self.out, "{gutter} +{}", "-".repeat(columns))?;

        let last_index = (n - 1).to_string();
        let pad = columns.saturating_sub(1 + last_index.len());
        writeln!(self.out, "{gutter}  0{}{last_index}", " ".repeat(pad))?;
        writeln!(self.out, "{gutter}  {X_LABEL:^columns$}")?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalPlot<W> {
    fn display(&mut self, waveform: &[f64], title: &str) -> io::Result<()> {
        self.draw(waveform, title)
    }
}

/// Min and max of the finite samples, if any.
fn value_range_of(samples: &[f64]) -> Option<(f64, f64)> {
    samples
        .iter()
        .copied()
        .filter(|s| s.is_finite())
        .fold(None, |acc, s| match acc {
            None => Some((s, s)),
            Some((min, max)) => Some((min.min(s), max.max(s))),
        })
}

/// Vertical extent of the chart; flat signals get a unit margin.
fn value_range(samples: &[f64]) -> (f64, f64) {
    match value_range_of(samples) {
        Some((min, max)) if max > min => (min, max),
        Some((v, _)) => (v - 1.0, v + 1.0),
        None => (-1.0, 1.0),
    }
}
