//! MCP server loop and request routing.
//!
//! Messages arrive one per line on stdin and responses leave one per line on
//! stdout; everything else (logs included) goes to stderr. Tool failures stay
//! inside the tool-call envelope; JSON-RPC errors are reserved for protocol
//! violations such as unparseable frames or unknown methods.

use anyhow::Result;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};
use youtrack_api::YouTrackClient;

use crate::protocol::{
  CallToolParams, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse, ListToolsResult, PROTOCOL_VERSION,
  ServerCapabilities, ServerInfo, ToolsCapability,
};
use crate::tools;

/// MCP server bridging stdio JSON-RPC to a YouTrack instance.
pub struct McpServer {
  client: YouTrackClient,
}

impl McpServer {
  pub fn new(client: YouTrackClient) -> Self {
    Self { client }
  }

  /// Run the server loop until stdin closes.
  pub async fn run(self) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    info!("YouTrack MCP server listening on stdio");

    while let Some(line) = lines.next_line().await? {
      if line.trim().is_empty() {
        continue;
      }

      let request: JsonRpcRequest = match serde_json::from_str(&line) {
        Ok(request) => request,
        Err(e) => {
          let response = JsonRpcResponse::error(None, JsonRpcError::parse_error(format!("Parse error: {e}")));
          write_response(&mut stdout, &response).await?;
          continue;
        }
      };

      if let Some(response) = self.handle_request(request).await {
        write_response(&mut stdout, &response).await?;
      }
    }

    info!("stdin closed, shutting down");
    Ok(())
  }

  /// Handle a single request. Notifications return `None`.
  pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
    debug!(method = %request.method, "handling request");

    match request.method.as_str() {
      "initialize" => Some(self.handle_initialize(request.id)),
      "tools/list" => Some(self.handle_list_tools(request.id)),
      "tools/call" => Some(self.handle_call_tool(request.id, request.params).await),
      method if method.starts_with("notifications/") => None,
      method => Some(JsonRpcResponse::error(
        request.id,
        JsonRpcError::method_not_found(format!("Method not found: {method}")),
      )),
    }
  }

  fn handle_initialize(&self, id: Option<Value>) -> JsonRpcResponse {
    let result = InitializeResult {
      protocol_version: PROTOCOL_VERSION.to_string(),
      capabilities: ServerCapabilities {
        tools: ToolsCapability { list_changed: false },
      },
      server_info: ServerInfo {
        name: "youtrack-mcp".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
      },
    };

    into_response(id, &result)
  }

  fn handle_list_tools(&self, id: Option<Value>) -> JsonRpcResponse {
    let result = ListToolsResult { tools: tools::catalog() };
    into_response(id, &result)
  }

  async fn handle_call_tool(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
    let params: CallToolParams = match params.map(serde_json::from_value).transpose() {
      Ok(Some(params)) => params,
      Ok(None) => {
        return JsonRpcResponse::error(id, JsonRpcError::invalid_params("tools/call requires params"));
      }
      Err(e) => {
        return JsonRpcResponse::error(id, JsonRpcError::invalid_params(format!("Invalid tool call params: {e}")));
      }
    };

    let arguments = params.arguments.unwrap_or_else(|| serde_json::json!({}));
    let outcome = tools::dispatch(&self.client, &params.name, arguments).await;
    into_response(id, &outcome.into_call_tool_result())
  }
}

fn into_response<T: serde::Serialize>(id: Option<Value>, result: &T) -> JsonRpcResponse {
  match serde_json::to_value(result) {
    Ok(value) => JsonRpcResponse::success(id, value),
    Err(e) => JsonRpcResponse::error(id, JsonRpcError::internal_error(format!("Serialization failed: {e}"))),
  }
}

async fn write_response<W>(stdout: &mut W, response: &JsonRpcResponse) -> Result<()>
where
  W: AsyncWriteExt + Unpin,
{
  let mut frame = serde_json::to_vec(response)?;
  frame.push(b'\n');
  stdout.write_all(&frame).await?;
  stdout.flush().await?;
  Ok(())
}
