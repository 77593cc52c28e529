//! x_mcp server binary.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use x_mcp::{ToolContext, XMcpConfig, XMcpServer};
use x_mcp_social::{Credentials, XClient};

/// MCP server for drafting and publishing X (Twitter) posts.
#[derive(Debug, Parser)]
#[command(name = "x-mcp", version, about)]
struct Args {
    /// Configuration file layered over the defaults
    #[arg(long, env = "X_MCP_CONFIG")]
    config: Option<PathBuf>,

    /// Keep drafts as JSON files in this directory
    #[arg(long, env = "X_MCP_DRAFTS_DIR")]
    drafts_dir: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries the protocol; logs go to stderr.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(true)
        .with_line_number(true);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    init_tracing(args.log_json);

    tracing::info!("Starting x_mcp server");

    let credentials = Credentials::from_env().context("Cannot start without X API credentials")?;

    let mut config = XMcpConfig::load(args.config.as_deref())?;
    if let Some(dir) = args.drafts_dir {
        config = config.with_drafts_dir(dir);
    }

    let client = XClient::new(credentials, config.x_api())?;
    let context = ToolContext::builder()
        .store(config.drafts().open_store()?)
        .platform(Arc::new(client))
        .limits(*config.limits())
        .thread_delay(config.publishing().thread_delay())
        .build();

    tracing::info!("Server ready, listening on stdio");
    XMcpServer::new(context).run_stdio().await
}
