//! Error type for the YouTrack client.

use reqwest::StatusCode;
use serde::Deserialize;

/// Error returned by every client operation.
///
/// The `Display` impl always yields a human-readable message; for remote
/// failures that message is pulled from YouTrack's structured error body when
/// the server provides one.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
  /// The request never completed (connection failure, timeout).
  #[error("{0}")]
  Network(#[from] reqwest::Error),

  /// The server answered with a non-2xx status.
  #[error("{message}")]
  Remote { status: StatusCode, message: String },

  /// A 2xx response carried a body that was not valid JSON.
  #[error("failed to parse YouTrack response: {0}")]
  Decode(String),

  /// The client could not be constructed from the given configuration.
  #[error("invalid configuration: {0}")]
  Config(String),
}

/// Structured error body returned by the YouTrack API.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
  pub error: Option<String>,
  pub error_description: Option<String>,
}

impl ApiError {
  /// Build a `Remote` error from a status and raw response body.
  ///
  /// Precedence: `error_description`, then `error`, then the status line.
  pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
    let message = serde_json::from_str::<ErrorBody>(body)
      .ok()
      .and_then(|e| e.error_description.or(e.error))
      .unwrap_or_else(|| format!("HTTP {status}"));
    Self::Remote { status, message }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_description_takes_precedence() {
    let err = ApiError::from_response(
      StatusCode::NOT_FOUND,
      r#"{"error":"Not Found","error_description":"Issue not found"}"#,
    );
    assert_eq!(err.to_string(), "Issue not found");
  }

  #[test]
  fn test_falls_back_to_error_field() {
    let err = ApiError::from_response(StatusCode::BAD_REQUEST, r#"{"error":"invalid_query"}"#);
    assert_eq!(err.to_string(), "invalid_query");
  }

  #[test]
  fn test_falls_back_to_status_for_unstructured_body() {
    let err = ApiError::from_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
    assert_eq!(err.to_string(), "HTTP 502 Bad Gateway");
  }
}
