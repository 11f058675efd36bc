//! probe - Terminal front end for the impulse probe demo
//!
//! Run with: cargo run -- [--amplification A] [--shift D]
//! Headless: cargo run -- report --amplification 19.6 --shift 0.5

mod app;
mod audio;
mod logging;
mod report;
mod ui;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use std::path::PathBuf;
use tracing::info;

use app::{App, Mode};
use impulse_probe::{
    probe::{self, ProbeConfig, ProbeParams},
    sine::SineParams,
    GRID_SAMPLE_RATE, IMPULSE_THRESHOLD,
};
use logging::LogSink;

#[derive(Debug, Parser)]
#[command(name = "probe", version, about = "Recover f(Δ) by probing cos(3t) with impulse-like kernels")]
struct Cli {
    /// Initial amplification a, in [1, 20]
    #[arg(short, long, global = true, default_value_t = 1.0)]
    amplification: f64,

    /// Initial time shift Δ, in [-3, 3]
    #[arg(short, long, global = true, default_value_t = 0.0, allow_negative_numbers = true)]
    shift: f64,

    /// Time-grid sample rate (samples per second)
    #[arg(long, global = true, default_value_t = GRID_SAMPLE_RATE)]
    sample_rate: f64,

    /// Amplification above which the Dirac limit is shown
    #[arg(long, global = true, default_value_t = IMPULSE_THRESHOLD)]
    threshold: f64,

    /// Demo shown at startup
    #[arg(long, value_enum, default_value_t = Mode::Probe)]
    mode: Mode,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Write logs to this file (the TUI has nowhere else to put them)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print one probe frame without starting the TUI
    Report,
    /// Print the sine explorer readout without starting the TUI
    Sine {
        #[arg(long, default_value_t = 5.0)]
        amplitude: f64,
        #[arg(long, default_value_t = 440.0)]
        frequency: f64,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        phase: f64,
    },
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let sink = match (&cli.command, cli.log_file.as_deref()) {
        (_, Some(path)) => LogSink::File(path),
        (Some(_), None) => LogSink::Stderr,
        (None, None) => LogSink::Off,
    };
    logging::init(&cli.log_level, sink)?;

    let config = ProbeConfig::new()
        .sample_rate(cli.sample_rate)
        .impulse_threshold(cli.threshold);
    config.validate().wrap_err("invalid probe configuration")?;
    let params = ProbeParams::with_config(cli.amplification, cli.shift, &config)
        .wrap_err("invalid initial parameters")?;

    match cli.command {
        Some(Command::Report) => {
            let frame = probe::render(params, &config)?;
            print!("{}", report::probe_report(&frame));
            Ok(())
        }
        Some(Command::Sine {
            amplitude,
            frequency,
            phase,
        }) => {
            let sine = SineParams::new(amplitude, frequency, phase)?;
            print!("{}", report::sine_report(&sine));
            Ok(())
        }
        None => {
            info!(?config, "launching TUI");
            let mut app = App::new(cli.mode, config, params);
            let mut terminal = ratatui::init();
            let result = app.run(&mut terminal);
            ratatui::restore();
            result
        }
    }
}
