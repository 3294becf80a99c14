mod render;

use bb_core::config::{load_config, load_config_file, load_plan};
use bb_core::logger::ChannelLogger;
use bb_core::logging::init_logging;
use bb_core::plan::plan_to_process;
use bb_core::runner::ProcessRunner;
use bb_protocol::CompletionStatus;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

/// Run build plans as sequences of logged blocks.
#[derive(Parser)]
#[command(name = "bb", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every block of a plan in order.
    Run {
        /// Path to the plan YAML file.
        plan: PathBuf,

        /// Settings file; defaults to `bb.toml` in the working directory.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print block events as JSON lines.
        #[arg(long)]
        json: bool,

        /// Directory commands run in; defaults to the current directory.
        #[arg(short = 'C', long = "dir")]
        dir: Option<PathBuf>,
    },

    /// Validate a plan and list its blocks.
    Check {
        /// Path to the plan YAML file.
        plan: PathBuf,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    match Cli::parse().command {
        Command::Run {
            plan,
            config,
            json,
            dir,
        } => {
            let working_dir = match dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            let status = run(&plan, config.as_deref(), json, &working_dir).await?;
            Ok(exit_code(status))
        }
        Command::Check { plan } => {
            check(&plan)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run(
    plan_path: &Path,
    config_path: Option<&Path>,
    json: bool,
    working_dir: &Path,
) -> color_eyre::Result<CompletionStatus> {
    let config = match config_path {
        Some(path) => load_config_file(path)?,
        None => load_config(working_dir)?,
    };
    init_logging(&config.logging);

    let plan = load_plan(plan_path)?;
    tracing::info!(plan = %plan.name, blocks = plan.blocks.len(), "Running plan");

    let (logger, rx) = ChannelLogger::channel();
    let printer = tokio::spawn(render::print_events(rx, json));

    let mut process = plan_to_process(&plan, Arc::new(logger), working_dir);
    let runner = ProcessRunner::from_config(&config.runner);
    let result = runner
        .run_until(&mut process, shutdown_signal())
        .await;

    // Dropping the process releases the last event senders
    drop(process);
    printer.await?;

    let status = result?;
    if !json {
        let summary = format!("Plan '{}' finished: {}", plan.name, status);
        if status.is_success() {
            println!("{}", summary.green().bold());
        } else {
            println!("{}", summary.red().bold());
        }
    }
    Ok(status)
}

/// Resolves on Ctrl-C. Never resolves when the handler cannot be installed.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C, interruption disabled");
        std::future::pending::<()>().await;
    }
}

fn check(plan_path: &Path) -> color_eyre::Result<()> {
    let plan = load_plan(plan_path)?;

    println!("{} ({} blocks)", plan.name.bold(), plan.blocks.len());
    for (index, block) in plan.blocks.iter().enumerate() {
        println!("  {}. {} - {}", index + 1, block.name, block.display_description());
    }
    Ok(())
}

fn exit_code(status: CompletionStatus) -> ExitCode {
    match status {
        CompletionStatus::Success => ExitCode::SUCCESS,
        CompletionStatus::Failed => ExitCode::from(1),
        CompletionStatus::Interrupted => ExitCode::from(130),
    }
}
