//! sessionlens - extract usage insights from AI assistant session logs
//!
//! Scans `.jsonl` session logs under a projects root, aggregates usage
//! statistics, and emits either a JSON report or a human-readable summary.

mod summary;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sessionlens_core::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sessionlens")]
#[command(about = "Extract usage insights from AI assistant session logs")]
#[command(version)]
struct Cli {
    /// Path to the projects root directory (default: ~/.claude/projects)
    #[arg(long, global = true)]
    projects_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the full report as JSON to stdout
    Analyze,
    /// Write the report to a file and confirm the path
    Export {
        /// Output path for the report
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print a human-readable summary
    Summary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load().context("failed to load configuration")?;

    // Initialize logging
    let _log_guard = sessionlens_core::logging::init(&config.logging)
        .context("failed to initialize logging")?;

    let root = cli
        .projects_root
        .clone()
        .unwrap_or_else(|| config.projects_root());

    let report = sessionlens_core::process_projects(&root, &config.keywords)
        .with_context(|| format!("failed to analyze projects under {}", root.display()))?;

    match cli.command {
        Command::Analyze => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Export { output } => {
            let path = output.unwrap_or_else(|| config.output_path());

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create output directory {}", parent.display())
                })?;
            }

            let json = serde_json::to_string_pretty(&report)?;
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write report to {}", path.display()))?;

            tracing::info!(path = %path.display(), "report exported");
            println!("Insights exported to: {}", path.display());
        }
        Command::Summary => {
            print!("{}", summary::render(&report));
        }
    }

    Ok(())
}
