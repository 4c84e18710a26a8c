//! Connection and server information tools.

use schemars::JsonSchema;
use serde::Deserialize;
use youtrack_api::YouTrackClient;

use crate::types::ToolOutcome;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PingParams {}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetServerInfoParams {}

/// Probe the configured instance. Every failure mode, unreachable host and
/// bad credentials alike, collapses into a `success: false` envelope with a
/// message instead of an error.
pub async fn ping(client: &YouTrackClient) -> ToolOutcome {
  if client.ping().await {
    ToolOutcome::status(true, "YouTrack connection successful")
  } else {
    ToolOutcome::status(false, "YouTrack connection failed")
  }
}

pub async fn get_server_info(client: &YouTrackClient) -> ToolOutcome {
  match client.server_info().await {
    Ok(info) => ToolOutcome::ok(info, "Retrieved YouTrack server information"),
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}
