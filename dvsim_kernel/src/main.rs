//! # dvsim
//!
//! Command-line driver for the discrete-event simulation kernel.
//!
//! Parsing, elaboration, and code generation are out of scope for this
//! crate, so `dvsim` ships a small built-in registry of hand-built
//! demo designs (see [`demos`]) in place of a real front-end — the
//! stand-in for the "design library" referenced in the external
//! interfaces, selected with `--design`.
//!
//! # Usage
//!
//! ```bash
//! # Run the built-in pulse demo with default settings
//! dvsim --design pulse
//!
//! # Cap an otherwise-unbounded design and see verbose logs
//! dvsim --design oscillator --max-iterations 10 -v
//! ```

#![deny(warnings)]

use clap::Parser;
use dvsim_common::config::{ConfigLoader, LogFormat, SimConfig};
use dvsim_kernel::elaborated::ElaboratedDesign;
use dvsim_kernel::setup::setup;
use dvsim_kernel::testkit::MapBackend;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod demos;

/// dvsim - discrete-event simulation kernel demo driver
#[derive(Parser, Debug)]
#[command(name = "dvsim")]
#[command(version)]
#[command(about = "Runs a built-in demo design through the simulation cycle")]
struct Args {
    /// Path to a kernel configuration file (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Which built-in demo design to run.
    #[arg(short, long, default_value = "pulse")]
    design: String,

    /// Cap the number of cohorts dispatched (overrides config file).
    #[arg(long)]
    max_iterations: Option<u64>,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long)]
    verbose: bool,

    /// Output logs as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), String> {
    let mut config = match &args.config {
        Some(path) => SimConfig::load(path).map_err(|e| e.to_string())?,
        None => SimConfig::default(),
    };
    if let Some(cap) = args.max_iterations {
        config.max_iterations = Some(cap);
    }
    if args.verbose {
        config.log_level = dvsim_common::config::LogLevel::Debug;
    }
    config.validate().map_err(|e| e.to_string())?;

    setup_tracing(&config, args.json);

    info!(design = %args.design, "dvsim starting");

    let (design, mut backend): (ElaboratedDesign, MapBackend) =
        demos::build(&args.design).ok_or_else(|| format!("unknown demo design '{}'", args.design))?;

    let mut kernel = setup(&design, &mut backend, config).map_err(|e| e.to_string())?;
    kernel.run().map_err(|e| e.to_string())?;

    let stats = kernel.stats();
    info!(cycles = stats.cycles, events = stats.events, final_time = %kernel.now(), "dvsim done");
    for (id, signal) in design.signals.iter().enumerate() {
        let value = kernel.signal(id as u32).resolved();
        info!(signal = %signal.name, value, "final value");
    }
    Ok(())
}

fn setup_tracing(config: &SimConfig, force_json: bool) {
    let filter = EnvFilter::from_default_env().add_directive(config.log_level.as_filter_directive().parse().unwrap());
    let json = force_json || matches!(config.log_format, LogFormat::Json);
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
