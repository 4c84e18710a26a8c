//! youtrack-mcp: MCP server exposing YouTrack issues, projects, and agile boards as tools.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;
use youtrack_api::{ApiConfig, YouTrackClient};
use youtrack_mcp::McpServer;

#[derive(Parser)]
#[command(version, about = "MCP server for YouTrack issue tracking, agile boards, and project administration")]
struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  // Tracing to stderr. Stdout is reserved for MCP JSON-RPC protocol.
  let level = match cli.verbose {
    0 => tracing::Level::WARN,
    1 => tracing::Level::INFO,
    2 => tracing::Level::DEBUG,
    _ => tracing::Level::TRACE,
  };

  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  let config = ApiConfig::from_env().context("YOUTRACK_BASE_URL must be set")?;
  if !config.has_credentials() {
    bail!("either YOUTRACK_TOKEN or YOUTRACK_USERNAME and YOUTRACK_PASSWORD must be set");
  }

  let client = YouTrackClient::new(config).context("Failed to construct YouTrack client")?;
  McpServer::new(client).run().await
}
