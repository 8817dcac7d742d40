//! Sample programs demonstrating the Develocity API.
//!
//! The `builds` sample streams builds from the server and reports build
//! cache performance per build; the `tests` sample determines test classes
//! that have recently become unstable and reports them to standard output
//! or as GitHub issues; the `spec` sample downloads the API specification
//! document the client is written against.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod deps;
mod processor;
mod provider;
mod query;
mod report;

#[cfg(test)]
mod test_helpers;

use deps::{RealProcessExecutor, RealUserInterface, UserInterface};

#[derive(Parser)]
#[command(
    name = "develocity-api-samples",
    about = "A program that demonstrates using the Develocity API to extract build and tests data",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase logging verbosity (-v, -vv, ...)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Extract build data about build cache performance
    Builds(commands::builds::BuildsArgs),

    /// Determine test classes that have recently become unstable
    Tests(commands::tests::TestsArgs),

    /// Download the Develocity API specification document
    Spec(commands::spec::SpecArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => EnvFilter::new("error"),
        1 => EnvFilter::new("warn"),
        2 => EnvFilter::new("info"),
        3 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let ui: Arc<dyn UserInterface> = Arc::new(RealUserInterface);

    match cli.command {
        Command::Builds(args) => commands::builds::execute(args, ui).await,
        Command::Tests(args) => {
            commands::tests::execute(args, ui, Arc::new(RealProcessExecutor)).await
        }
        Command::Spec(args) => commands::spec::execute(args, ui).await,
    }
}
