//! Claim analysis command.

use anyhow::{Context, Result};
use clap::Args;
use claimforge_client::HttpAnalysisClient;
use claimforge_core::{ClaimSubmissionHandler, ClientConfig, Theme};
use std::io::Read;
use std::process::ExitCode;
use std::time::Duration;
use tracing::debug;

use crate::output::TerminalSurface;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Claim to analyze (read from stdin when omitted)
    pub claim: Option<String>,

    /// Analysis service base URL
    #[arg(long, env = "CLAIMFORGE_API_URL")]
    pub api_url: Option<String>,

    /// Host the client is served from; localhost and 127.0.0.1 select the local server
    #[arg(long, env = "CLAIMFORGE_ORIGIN_HOST")]
    pub origin_host: Option<String>,

    /// Give up on the request after this many seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

pub async fn execute(args: AnalyzeArgs, theme: Theme) -> Result<ExitCode> {
    let mut config = ClientConfig::resolve(args.api_url.as_deref(), args.origin_host.as_deref())?;
    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    debug!(endpoint = %config.endpoint, timeout = ?config.timeout, "Resolved client config");

    let claim = match args.claim {
        Some(claim) => claim,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read claim from stdin")?;
            buf
        }
    };

    let client = HttpAnalysisClient::new(&config)?;
    let handler = ClaimSubmissionHandler::new(client, TerminalSurface::new(theme));

    // The handler has already shown why a submission failed
    if handler.submit(&claim).await.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
