//! dogapi CLI - Command-line interface
//!
//! Looks up dog sub-breeds through the caching dog.ceo fetcher.

mod commands;
mod error;

use std::io::{self, BufWriter, Write};
use std::process;

use clap::{Parser, Subcommand};
use tracing::info;

use commands::common::{build_fetcher, resolve_config, GlobalArgs};
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "dogapi", version, about = "Look up dog sub-breeds from dog.ceo")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve one or more breeds and print their sub-breeds
    Lookup {
        /// Breed names (case-insensitive)
        #[arg(required = true, value_name = "BREED")]
        breeds: Vec<String>,
    },
    /// Read breed names from stdin, one per line, sharing one cache
    Shell,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        if !matches!(e, CliError::NotFound(_)) {
            eprintln!("Error: {}", e);
        }
        process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = resolve_config(&cli.global)?;
    let _log_guard = dogapi::logging::init_logging(&config.logging)?;

    info!(
        version = dogapi::VERSION,
        base_url = %config.api.base_url,
        timeout_secs = config.api.timeout_secs,
        "Starting dogapi"
    );

    let fetcher = build_fetcher(&config)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = match cli.command {
        Command::Lookup { breeds } => commands::lookup::run(&fetcher, &breeds, &mut out),
        Command::Shell => commands::shell::run(&fetcher, io::stdin().lock(), &mut out),
    };
    out.flush()?;
    result
}
