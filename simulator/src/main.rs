use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use othrcore::Condition;
use serde::Serialize;
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline driver for the Arctic OTHR coverage model")]
struct Cli {
    /// Load a workflow config from YAML instead of the built-in baseline
    #[arg(long, global = true)]
    workflow: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Per-profile detection ranges, degradation impact and configuration echo
    Summary {
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Multi-site coverage grid statistics
    Coverage {
        /// Grid step in degrees
        #[arg(long)]
        resolution: Option<f64>,
        /// Include the per-cell site counts, one row per latitude sample
        #[arg(long, default_value_t = false)]
        rows: bool,
    },
    /// Probability of detection and track accuracy at one range
    Pd {
        #[arg(long)]
        profile: String,
        #[arg(long)]
        range: f64,
        #[arg(long, default_value = "clear")]
        condition: Condition,
    },
    /// Range at which Pd first drops below the threshold
    MaxRange {
        #[arg(long)]
        profile: String,
        #[arg(long)]
        threshold: Option<f64>,
        #[arg(long, default_value = "clear")]
        condition: Condition,
    },
    /// Measurement error estimates at one range
    Accuracy {
        #[arg(long)]
        range: f64,
    },
    /// Pd sampled across the range window
    Curve {
        #[arg(long)]
        profile: String,
        #[arg(long, default_value = "clear")]
        condition: Condition,
        /// Sample spacing in km
        #[arg(long)]
        step: Option<f64>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let workflow_config = WorkflowConfig::load_or_default(cli.workflow.as_ref())?;
    info!(
        "loaded configuration with {} sites and {} target profiles",
        workflow_config.system.sites().len(),
        workflow_config.system.target_profiles().len()
    );
    let runner = Runner::new(workflow_config);

    match cli.command {
        Command::Summary { threshold } => emit(&runner.summary(threshold)?),
        Command::Coverage { resolution, rows } => emit(&runner.coverage(resolution, rows)?),
        Command::Pd {
            profile,
            range,
            condition,
        } => emit(&runner.detection(&profile, range, condition)?),
        Command::MaxRange {
            profile,
            threshold,
            condition,
        } => emit(&runner.max_range(&profile, threshold, condition)?),
        Command::Accuracy { range } => emit(&runner.accuracy(range)?),
        Command::Curve {
            profile,
            condition,
            step,
        } => emit(&runner.curve(&profile, condition, step)?),
    }
}

fn emit<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("serializing result")?;
    println!("{}", rendered);
    Ok(())
}
