//! # prov CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; caller identity comes from the global
//! `--as <org>` flag and ledger state from the `--ledger <path>` snapshot.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use prov_cli::commands::{
    run_by_owner, run_create, run_history, run_init, run_list, run_receive, run_show,
    run_transfer, run_versions, ByOwnerArgs, CreateArgs, ProductArgs, ReceiveArgs, TransferArgs,
};

/// Provenance Stack CLI
///
/// Custody tracking for discrete physical goods: create records, hand off
/// and confirm custody along the transfer graph, and query the append-only
/// history — all against a file-snapshotted ledger.
#[derive(Parser, Debug)]
#[command(name = "prov", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the ledger snapshot file.
    #[arg(long, global = true, default_value = "ledger.json")]
    ledger: PathBuf,

    /// Caller organization token (required for mutating commands).
    #[arg(long = "as", value_name = "ORG", global = true)]
    as_org: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Seed the ledger with the initial record (overwrites on re-run).
    Init,

    /// Create a new custody record (origin role only).
    Create(CreateArgs),

    /// Transfer custody to another organization.
    Transfer(TransferArgs),

    /// Confirm physical custody at a location.
    Receive(ReceiveArgs),

    /// Show one custody record.
    Show(ProductArgs),

    /// Show a record's embedded event history.
    History(ProductArgs),

    /// List every record on the ledger.
    List,

    /// List records currently owned by an organization.
    ByOwner(ByOwnerArgs),

    /// Show the store's per-key version log for a record.
    Versions(ProductArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let as_org = cli.as_org.as_deref();
    let result = match cli.command {
        Commands::Init => run_init(&cli.ledger),
        Commands::Create(args) => run_create(&args, &cli.ledger, as_org),
        Commands::Transfer(args) => run_transfer(&args, &cli.ledger, as_org),
        Commands::Receive(args) => run_receive(&args, &cli.ledger, as_org),
        Commands::Show(args) => run_show(&args, &cli.ledger),
        Commands::History(args) => run_history(&args, &cli.ledger),
        Commands::List => run_list(&cli.ledger),
        Commands::ByOwner(args) => run_by_owner(&args, &cli.ledger),
        Commands::Versions(args) => run_versions(&args, &cli.ledger),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
