//! # credoffer CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use credoffer_cli::send::{run_send, SendArgs};
use credoffer_cli::session::Session;
use credoffer_cli::types::run_types;

/// Build and send ad-hoc credential offers for testing wallets.
#[derive(Parser, Debug)]
#[command(name = "credoffer", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Base URL of the credential offer service. Overrides CREDOFFER_SERVICE_URL.
    #[arg(long, global = true)]
    service_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Edit a credential offer form interactively and send it.
    Interactive,

    /// Build a credential offer from flags and send it.
    Send(SendArgs),

    /// List the credential types.
    Types,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // stdout carries the form and responses; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("credoffer CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let service_url = cli.service_url.as_deref();
    let mut stdout = std::io::stdout().lock();

    let result = match cli.command {
        Commands::Interactive => match credoffer_cli::service_client(service_url) {
            Ok(client) => {
                let mut session = Session::new(client);
                session
                    .run(std::io::stdin().lock(), &mut stdout)
                    .await
                    .map(|()| 0)
            }
            Err(e) => Err(e),
        },
        Commands::Send(args) => run_send(&args, service_url, &mut stdout).await,
        Commands::Types => run_types(&mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
