//! Reef simulation runner.
//!
//! Runs a simulation and logs per-species counts each tick. Set `--log` or
//! `RUST_LOG=reef=debug` to also see a one-line field summary per tick.

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::Parser;
use reef::arena::Snapshot;
use reef::engine::{
    ConfigError, FieldView, SimConfig, Simulator, TracingStats, TracingView, LONG_RUN_STEPS,
};
use reef::types::TickId;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Reef - predators, grazers and plants on a grid
#[derive(Parser, Debug)]
#[command(name = "reef-sim")]
#[command(about = "Run a predator-prey reef simulation")]
struct Args {
    /// Number of rows (overrides the config file)
    #[arg(long)]
    depth: Option<i64>,

    /// Number of columns (overrides the config file)
    #[arg(long)]
    width: Option<i64>,

    /// Maximum ticks to run
    #[arg(long, default_value_t = LONG_RUN_STEPS)]
    steps: u64,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pause between ticks, in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Log filter, e.g. "reef=debug" (defaults to RUST_LOG, then "reef=info")
    #[arg(long)]
    log: Option<String>,
}

/// Wraps a view and sleeps after each frame.
struct Paced<V> {
    inner: V,
    delay: Duration,
}

impl<V: FieldView> FieldView for Paced<V> {
    fn show_status(&mut self, step: TickId, snapshot: &Snapshot<'_>) {
        self.inner.show_status(step, snapshot);
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

fn build_config(args: &Args) -> Result<SimConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = match &args.log {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reef=info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut sim = match Simulator::new(config) {
        Ok(sim) => sim,
        Err(e) => {
            error!("cannot start simulation: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut view = Paced {
        inner: TracingView,
        delay: Duration::from_millis(args.delay_ms),
    };
    let summary = sim.simulate(args.steps, &mut view, &mut TracingStats);

    info!(
        seed = sim.seed(),
        steps = summary.steps_run,
        living = sim.snapshot().living_count(),
        "{}",
        summary.halt
    );
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from(["reef-sim", "--depth", "10", "--seed", "3"]).unwrap();
        assert_eq!(args.steps, LONG_RUN_STEPS);
        let config = build_config(&args).unwrap();
        assert_eq!(config.depth, 10);
        assert_eq!(config.width, SimConfig::default().width);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args =
            Args::try_parse_from(["reef-sim", "--config", "/nonexistent/reef.toml"]).unwrap();
        assert!(matches!(build_config(&args), Err(ConfigError::Io(_))));
    }
}
