use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::Input;
use stackops_core::aws::CfnStackProvider;
use stackops_core::{run_teardown, TeardownConfig, TeardownOutcome};

mod confirm;

/// Operational tooling for CloudFormation-managed pipeline stacks
#[derive(Parser)]
#[command(name = "stackops")]
#[command(version)]
#[command(about = "Operational tooling for CloudFormation-managed pipeline stacks", long_about = None)]
struct Cli {
    /// Log level: trace, debug, info, warn, error
    #[arg(short = 'v', long, value_name = "LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Tear down the app and its CI pipeline stacks
    Terminate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    // Build tokio runtime and run the requested command
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?
        .block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Terminate => terminate().await,
    }
}

async fn terminate() -> Result<()> {
    println!("Are you sure you want to terminate the app and all its AWS resources?");
    let answer: String = Input::new()
        .with_prompt("Enter 'yes' to terminate")
        .allow_empty(true)
        .interact_text()
        .context("Failed to read confirmation")?;

    // Declining is a normal exit, not an error
    if !confirm::confirms(&answer) {
        println!("Aborted.");
        return Ok(());
    }

    let config = TeardownConfig::from_env();
    let provider = CfnStackProvider::from_env().await;

    match run_teardown(&provider, &config).await? {
        TeardownOutcome::CiStackMissing { ci_stack_name } => {
            println!("CI stack {ci_stack_name} not found");
        }
        TeardownOutcome::Deleted { stacks } => {
            for stack in stacks {
                println!("Terminated stack {stack}");
            }
        }
    }

    Ok(())
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();
}
