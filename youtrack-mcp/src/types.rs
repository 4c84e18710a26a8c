//! Structured response types for youtrack-mcp tools.
//!
//! Every tool returns a JSON-serialized [`ToolOutcome`]: a `success` flag with
//! a `data` payload and human-readable `message` on success, or an `error`
//! string on failure. The envelope is what a model sees, so it never leaks
//! transport details beyond the normalized error message.

use serde::Serialize;
use serde_json::Value;

use crate::protocol::{CallToolResult, ToolContent};

/// Standard envelope for all tool responses.
#[derive(Debug, Serialize)]
pub struct ToolOutcome {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub data: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl ToolOutcome {
  /// Successful outcome with a payload.
  pub fn ok(data: Value, message: impl Into<String>) -> Self {
    Self {
      success: true,
      data: Some(data),
      message: Some(message.into()),
      error: None,
    }
  }

  /// Successful outcome with no payload, e.g. for deletions.
  pub fn done(message: impl Into<String>) -> Self {
    Self {
      success: true,
      data: None,
      message: Some(message.into()),
      error: None,
    }
  }

  /// Outcome whose success flag mirrors a probe result. Used by the
  /// connection check, where an unreachable instance is reported through
  /// `message` rather than `error`.
  pub fn status(success: bool, message: impl Into<String>) -> Self {
    Self {
      success,
      data: None,
      message: Some(message.into()),
      error: None,
    }
  }

  /// Failed outcome with a normalized error message.
  pub fn fail(error: impl Into<String>) -> Self {
    Self {
      success: false,
      data: None,
      message: None,
      error: Some(error.into()),
    }
  }

  /// Serialize into a `tools/call` result, setting `isError` for failures.
  pub fn into_call_tool_result(self) -> CallToolResult {
    let text = serde_json::to_string_pretty(&self)
      .unwrap_or_else(|e| format!(r#"{{"success":false,"error":"Serialization failed: {e}"}}"#));
    CallToolResult {
      content: vec![ToolContent::Text { text }],
      is_error: Some(!self.success),
    }
  }
}
