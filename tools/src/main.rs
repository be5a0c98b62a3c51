//! farm-runner: interactive shell for the idle farm simulator.
//!
//! Usage:
//!   farm-runner
//!   farm-runner --catalog crops.json --config farm.json
//!   farm-runner --ipc-mode < commands.jsonl
//!
//! Set RUST_LOG=info (or debug) to see the farm's log on stderr.

mod ipc;
mod shell;

use anyhow::{Context, Result};
use farm_core::{catalog::CropCatalog, config::FarmConfig, farm::FarmState};
use std::env;
use std::io;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");

    let catalog = match flag_value(&args, "--catalog") {
        Some(path) => CropCatalog::load(path)?,
        None => CropCatalog::standard(),
    };
    let config = match flag_value(&args, "--config") {
        Some(path) => FarmConfig::load(path)?,
        None => FarmConfig::default(),
    };
    let mut farm = FarmState::new(catalog, config).context("Cannot set up the farm")?;

    log::info!(
        "runner: farm ready with {} crops, {} gold, {} plots",
        farm.catalog().len(),
        farm.gold(),
        farm.plot_capacity()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    if ipc_mode {
        ipc::run(&mut farm, stdin.lock(), stdout.lock())
    } else {
        shell::Shell::new(&mut farm, stdin.lock(), stdout.lock()).run()
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
