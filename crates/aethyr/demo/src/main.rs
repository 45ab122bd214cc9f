#![deny(unsafe_code)]
//! Aethyr command-line driver.
//!
//! Builds one node from layered configuration and runs a single command
//! against it: a computation, one or more evolution calls, or a status dump.

use aethyr_core::{AethyrCore, CoreConfig, EvolutionRequest, EvolutionStatus};
use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Aethyr node CLI
#[derive(Parser)]
#[command(name = "aethyr")]
#[command(about = "Run computations and risk-gated evolution on an Aethyr node", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (JSON, TOML or YAML)
    #[arg(short, long, env = "AETHYR_CONFIG")]
    config: Option<PathBuf>,

    /// Seed both random sources for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Log level
    #[arg(long, env = "AETHYR_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "AETHYR_LOG_JSON")]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a computation task
    Compute {
        /// nth_prime | square_free_count | matrix_multiply | neural_simulation
        task: String,
        /// Positional arguments, each parsed as JSON (bare words become strings)
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Evolve the parameter set
    Evolve {
        /// Mutation probability; defaults to the node's stored rate
        #[arg(long)]
        rate: Option<f64>,
        /// Steps per evolution call
        #[arg(long, default_value_t = 1)]
        steps: u32,
        /// Number of evolution calls
        #[arg(long, default_value_t = 1)]
        repeat: u32,
    },
    /// Print the node snapshot as JSON
    Status,
}

fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());

    if cli.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }

    let mut config =
        CoreConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    let mut core = AethyrCore::new(config).context("failed to build node")?;

    match cli.command {
        Command::Compute { task, args } => {
            let args: Vec<Value> = args.iter().map(|a| parse_arg(a)).collect();
            let output = core.dispatch(&task, &args)?;
            println!("{}", serde_json::to_string(&output)?);
        }
        Command::Evolve {
            rate,
            steps,
            repeat,
        } => {
            let rate = rate.unwrap_or_else(|| core.mutation_rate());
            let request = EvolutionRequest::new(rate, steps);
            for i in 0..repeat.max(1) {
                let report = core.evolve_report(request);
                let verdict = match report.status {
                    EvolutionStatus::Committed => "committed",
                    EvolutionStatus::Rejected => "rejected",
                };
                println!(
                    "[{}] {} risk={:.4} threshold={} {}",
                    i + 1,
                    verdict,
                    report.risk_score,
                    report.risk_threshold,
                    serde_json::to_string(&report.parameters)?
                );
            }
        }
        Command::Status => {
            println!("{}", serde_json::to_string_pretty(&core.snapshot())?);
        }
    }

    Ok(())
}
