use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use calm_light::hardware::{open_buttons, open_strip};
use calm_light::{ButtonTracker, Config, Controller, InputPoller, SystemClock};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::filter::Targets;

/// Button driven LED countdown timer.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the YAML config.
    ///
    /// Defaults to `config.yaml` next to the executable.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tracing filter, for example `info` or `info,calm_light=debug`.
    #[arg(long = "log", env = "CALM_LIGHT_LOG", default_value = "info")]
    trace_filter: Targets,
}

fn main() -> ExitCode {
    use tracing_subscriber::prelude::*;

    let Args {
        config,
        trace_filter,
    } = Args::parse();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(trace_filter)
        .init();

    let path = config.unwrap_or_else(Config::default_path);
    let config = match Config::load(&path) {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "Failed to load config from {}", path.display());
            return ExitCode::FAILURE;
        }
    };

    let strip = match open_strip(&config.led) {
        Ok(strip) => strip,
        Err(err) => {
            error!(%err, "Failed to open LED strip");
            return ExitCode::FAILURE;
        }
    };
    let (primary, secondary) = match open_buttons(&config.button) {
        Ok(buttons) => buttons,
        Err(err) => {
            error!(%err, "Failed to open buttons");
            return ExitCode::FAILURE;
        }
    };

    let shutdown = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&shutdown);
    if let Err(err) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::Release)) {
        error!(%err, "Failed to install interrupt handler");
        return ExitCode::FAILURE;
    }

    let mut input = InputPoller::new(
        ButtonTracker::new(primary, config.primary_hold()),
        ButtonTracker::new(secondary, config.secondary_hold()),
    );
    info!(config = %path.display(), leds = config.led.count, "calm-light started");

    let mut controller = Controller::new(strip, SystemClock, config);
    controller.run(&mut input, &shutdown);

    info!("bye");
    ExitCode::SUCCESS
}
