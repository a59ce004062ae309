use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use waveplot_rs::render::{
    Discard, JsonDump, OutputKind, PlotConfig, Renderer, TerminalPlot,
    WavExport,
};
use waveplot_rs::ui::print_banner;
use waveplot_rs::utils::consts::*;
use waveplot_rs::utils::logging::init_logging;
use waveplot_rs::{WaveformKind, WaveformRequest, run};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Sample and plot basic waveforms",
    long_about = None
)]
struct Cli {
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_AMPLITUDE,
        allow_negative_numbers = true
    )]
    amplitude: f64,
    /// Hz
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_FREQUENCY,
        allow_negative_numbers = true
    )]
    frequency: f64,
    /// Hz
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SAMPLING_RATE,
        allow_negative_numbers = true
    )]
    sampling_rate: f64,
    #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_SAMPLES)]
    samples: usize,
    /// Waveforms to generate (repeatable); all four when omitted
    #[arg(short, long, value_enum)]
    kind: Vec<WaveformKind>,
    #[arg(short, long, value_enum, default_value_t = OutputKind::Plot)]
    output: OutputKind,
    /// Destination for json/wav output
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    out_dir: PathBuf,
    #[arg(long, default_value_t = PLOT_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = PLOT_HEIGHT)]
    height: usize,
}

fn build_renderer(cli: &Cli) -> Box<dyn Renderer> {
    match cli.output {
        OutputKind::Plot => Box::new(TerminalPlot::stdout(PlotConfig {
            width: cli.width,
            height: cli.height,
        })),
        OutputKind::Json => {
            Box::new(JsonDump::new(cli.out_dir.clone(), cli.sampling_rate))
        }
        OutputKind::Wav => {
            Box::new(WavExport::new(cli.out_dir.clone(), cli.sampling_rate))
        }
        OutputKind::Silent => Box::new(Discard),
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let request = WaveformRequest::new(
        cli.amplitude,
        cli.frequency,
        cli.sampling_rate,
        cli.samples,
    );
    let kinds = if cli.kind.is_empty() {
        WaveformKind::ALL.to_vec()
    } else {
        cli.kind.clone()
    };

    if cli.output == OutputKind::Plot {
        print_banner(&request);
    }

    let mut renderer = build_renderer(&cli);
    match run(&request, &kinds, &mut renderer) {
        Ok(count) => {
            tracing::info!("Rendered {} waveform(s)", count);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
