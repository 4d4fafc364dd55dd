/**
 * CloudVault command-line client
 *
 * Parses arguments, installs logging and runs one command against the API.
 */

mod args;
mod commands;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cloudvault::shared::error::ApiError;

use crate::args::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise warn, or debug with -v.
    let default_level = if cli.verbose { "cloudvault=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = commands::run(cli).await {
        eprintln!("error: {}", e.user_message());
        if e.is_auth_failure() {
            eprintln!("hint: run `cloudvault login --email <address>` to sign in again");
        }
        if let ApiError::Upload { completed, .. } = &e {
            eprintln!("{} file(s) were uploaded before the failure", completed.len());
        }
        std::process::exit(1);
    }
}
