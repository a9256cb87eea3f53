//! ClaimForge CLI
//!
//! Submits claims to the ClaimForge analysis service and prints the result.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::Cli;

/// Initialize tracing on stderr so stdout carries only analysis output.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "claimforge=debug,claimforge_core=debug,claimforge_client=debug"
    } else {
        "claimforge=info,claimforge_core=info,claimforge_client=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    cli.execute().await
}
