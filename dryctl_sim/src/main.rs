//! # Dryctl Simulator Runner
//!
//! Drives the control engine against the deterministic plant simulator at
//! the configured tick cadence. Loads `config/dryer.toml` (shared section,
//! operator parameters, plant tuning), logs cascade phase transitions and
//! fault edges, and runs until ctrl-c or the optional tick budget expires.

use clap::Parser;
use dryctl_common::config::{ConfigLoader, SharedConfig};
use dryctl_common::io::{InputSource, OutputSink};
use dryctl_common::params::Parameters;
use dryctl_common::state::FaultFlags;
use dryctl_sim::plant::{PlantConfig, PlantSimulator};
use dryctl_sim::runner::ControlLoop;
use serde::Deserialize;
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn, Level};
use tracing_subscriber::EnvFilter;

/// Dryctl Simulator — batch dryer control loop against a simulated plant
#[derive(Parser, Debug)]
#[command(name = "dryctl_sim")]
#[command(version)]
#[command(about = "Batch dryer/feeder control loop against a simulated plant")]
struct Args {
    /// Path to the dryer configuration TOML.
    #[arg(default_value = "config/dryer.toml")]
    config: PathBuf,

    /// Tick interval in milliseconds (1000 = real time).
    #[arg(long, default_value_t = 1000)]
    tick_ms: u64,

    /// Stop after this many ticks (default: run until ctrl-c).
    #[arg(long)]
    ticks: Option<u64>,

    /// Assert the operator enable input from the first tick.
    #[arg(long)]
    enable: bool,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format.
    #[arg(long)]
    json: bool,
}

/// Unified runner configuration.
#[derive(Debug, Deserialize)]
struct DryerConfig {
    shared: SharedConfig,
    #[serde(default)]
    params: Parameters,
    #[serde(default)]
    plant: PlantConfig,
}

fn main() {
    let args = Args::parse();
    setup_tracing(&args);

    info!("Dryctl Simulator v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args) {
        error!("FATAL: {e}");
        process::exit(1);
    }

    info!("Dryctl Simulator shutdown complete");
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = DryerConfig::load(&args.config)?;
    config.shared.validate()?;
    info!(
        "Config OK: device={}, setpoint={}°{:?}, tick={}ms",
        config.shared.device_id,
        config.params.temp_setpoint,
        config.params.temp_unit,
        args.tick_ms,
    );

    let mut plant = PlantSimulator::new(config.plant);
    plant.set_run_enable(args.enable);
    let mut control = ControlLoop::new(config.params);

    // Graceful shutdown on ctrl-c.
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        info!("Received shutdown signal");
        r.store(false, Ordering::SeqCst);
    })?;

    let tick_duration = Duration::from_millis(args.tick_ms);
    let mut prev_phase = control.state().phase;
    let mut prev_faults = FaultFlags::empty();
    let mut elapsed_ticks: u64 = 0;

    while running.load(Ordering::SeqCst) {
        let inputs = plant.read_inputs();
        let outputs = control.step(&inputs);
        plant.write_outputs(&outputs);
        plant.step();

        let state = control.state();
        if state.phase != prev_phase {
            info!(
                "Cascade {:?} → {:?} (temp={:.1}, valve open={}, closed={})",
                prev_phase,
                state.phase,
                inputs.process_temperature,
                inputs.valve_open_limit,
                inputs.valve_closed_limit,
            );
            prev_phase = state.phase;
        }
        if state.faults != prev_faults {
            if state.faults.is_empty() {
                info!("Faults cleared");
            } else {
                warn!("Faults active: {:?} (alarm={})", state.faults, outputs.alarm);
            }
            prev_faults = state.faults;
        }

        elapsed_ticks += 1;
        if let Some(budget) = args.ticks {
            if elapsed_ticks >= budget {
                info!("Tick budget reached ({budget}), stopping");
                break;
            }
        }

        std::thread::sleep(tick_duration);
    }

    info!(
        "Stopped after {elapsed_ticks} ticks (temp={:.1}, humidity={:.1})",
        plant.temperature(),
        plant.humidity(),
    );
    Ok(())
}

/// Setup tracing subscriber based on CLI arguments.
fn setup_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .init();
    }
}
