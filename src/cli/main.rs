//! doi-registry: register and inspect DOI relationship graphs

mod commands;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::ConnectionArgs;
use commands::check::{CheckArgs, handle_check};
use commands::inspect::{InspectArgs, handle_inspect};
use commands::register::{RegisterArgs, handle_register};
use commands::resolve::{ResolveArgs, handle_resolve};
use doi_registry_sdk::classify::Topic;

#[derive(Parser)]
#[command(author, version, about = "Register and inspect DOI relationship graphs")]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the records described by a topology file and submit them
    Register {
        topology: PathBuf,
        /// Show the records without contacting the registry
        #[arg(long)]
        dry_run: bool,
        /// Registry endpoint (overrides EZID_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,
        /// Request timeout in seconds (overrides EZID_TIMEOUT_SECS)
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Fetch identifiers and show their relationship or version fields
    Inspect {
        #[arg(long, default_value = "container")]
        topic: Topic,
        #[arg(required = true)]
        identifiers: Vec<String>,
        #[arg(long)]
        base_url: Option<String>,
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Build and validate a topology file offline
    Check { topology: PathBuf },
    /// Convert between registry and resolver forms of an identifier
    Resolve { input: String },
}

fn main() -> anyhow::Result<()> {
    // Optional; variables already in the environment take precedence.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    match cli.command {
        Command::Register {
            topology,
            dry_run,
            base_url,
            timeout,
        } => handle_register(&RegisterArgs {
            topology,
            dry_run,
            json,
            connection: ConnectionArgs { base_url, timeout },
        })?,
        Command::Inspect {
            topic,
            identifiers,
            base_url,
            timeout,
        } => handle_inspect(&InspectArgs {
            identifiers,
            topic,
            json,
            connection: ConnectionArgs { base_url, timeout },
        })?,
        Command::Check { topology } => handle_check(&CheckArgs { topology, json })?,
        Command::Resolve { input } => handle_resolve(&ResolveArgs { input, json })?,
    }

    Ok(())
}
