//! dote runner (default binary).
//!
//! Parses flags, takes over the terminal, and runs the animation until the
//! passes are done, `q` is pressed, or a signal arrives. The terminal is
//! restored on every one of those paths.

use std::env;
use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use dote::cli::{clock_seed, Cli};
use dote::engine::{Driver, RunConfig, RunOutcome, SignalFlags, TtyBackend};
use dote::term::Session;

/// Path to append log records to. Unset means no logging at all, since
/// stdout and stderr both belong to the animation.
const LOG_ENV: &str = "DOTE_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging() {
        eprintln!("dote: {err:#}");
    }

    let config = cli.into_config(clock_seed());
    match run(config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dote: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: RunConfig) -> Result<RunOutcome> {
    info!("dote {} starting: {:?}", env!("CARGO_PKG_VERSION"), config);
    let signals = SignalFlags::register().context("failed to install signal handlers")?;
    let session = Session::acquire()?;
    session.install_panic_hook();

    let mut backend = TtyBackend::new(session, signals);
    Driver::new(config).run(&mut backend)
}

fn init_logging() -> Result<()> {
    let Some(path) = env::var_os(LOG_ENV) else {
        return Ok(());
    };
    let path = Path::new(&path);
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}
