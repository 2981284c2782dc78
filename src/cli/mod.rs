//! Command-line interface for properties-reader
//!
//! Provides `parse` and `run` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod parse;
mod run;

/// Read Java-style .properties files into nested JSON configuration
#[derive(Parser)]
#[command(name = "properties-reader")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and merge properties files and print the result
    Parse(parse::ParseArgs),

    /// Run targets from a task file and store their results
    Run(run::RunArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Parse(args) => parse::run(args),
        Commands::Run(args) => run::run(args),
    }
}

/// Level added to the `RUST_LOG` filter; optional-file warnings stay visible by default.
fn fallback_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::from_default_env().add_directive(fallback_level(verbose).into());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
