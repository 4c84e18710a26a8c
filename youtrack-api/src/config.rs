//! Client configuration.
//!
//! All knobs are fixed at construction; the client never mutates its
//! configuration afterwards. `from_env` mirrors the environment surface the
//! server binary documents (`YOUTRACK_*` plus the optional Cloudflare Access
//! pair).

use std::env;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default value for the (inert) retry knob.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Configuration for [`YouTrackClient`](crate::YouTrackClient).
#[derive(Debug, Clone)]
pub struct ApiConfig {
  /// YouTrack instance URL, without the `/api` suffix.
  pub base_url: String,
  /// Permanent token for bearer authentication.
  pub token: Option<String>,
  /// Username for basic authentication (used only when no token is set).
  pub username: Option<String>,
  /// Password for basic authentication.
  pub password: Option<String>,
  /// Process-wide request timeout in milliseconds.
  pub timeout_ms: u64,
  /// Accepted for compatibility with existing deployments; the client makes
  /// exactly one attempt per request and never consults this value.
  pub max_retries: u32,
  /// Log request/response details at debug level.
  pub debug: bool,
  /// Optional `CF-Access-Client-Id` header for Cloudflare Access proxies.
  pub cf_access_client_id: Option<String>,
  /// Optional `CF-Access-Client-Secret` header.
  pub cf_access_client_secret: Option<String>,
}

impl ApiConfig {
  /// Create a configuration with defaults for everything but the base URL.
  pub fn new(base_url: &str) -> Self {
    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      token: None,
      username: None,
      password: None,
      timeout_ms: DEFAULT_TIMEOUT_MS,
      max_retries: DEFAULT_MAX_RETRIES,
      debug: false,
      cf_access_client_id: None,
      cf_access_client_secret: None,
    }
  }

  /// Build a configuration from `YOUTRACK_*` environment variables.
  ///
  /// Returns `None` when `YOUTRACK_BASE_URL` is unset; every other variable
  /// falls back to its default.
  pub fn from_env() -> Option<Self> {
    let base_url = env::var("YOUTRACK_BASE_URL").ok()?;
    let mut config = Self::new(&base_url);
    config.token = env::var("YOUTRACK_TOKEN").ok();
    config.username = env::var("YOUTRACK_USERNAME").ok();
    config.password = env::var("YOUTRACK_PASSWORD").ok();
    config.timeout_ms = env::var("YOUTRACK_REQUEST_TIMEOUT")
      .ok()
      .and_then(|v| v.parse().ok())
      .unwrap_or(DEFAULT_TIMEOUT_MS);
    config.max_retries = env::var("YOUTRACK_MAX_RETRIES")
      .ok()
      .and_then(|v| v.parse().ok())
      .unwrap_or(DEFAULT_MAX_RETRIES);
    config.debug = env::var("YOUTRACK_DEBUG").is_ok_and(|v| v == "true");
    config.cf_access_client_id = env::var("CF_ACCESS_CLIENT_ID").ok();
    config.cf_access_client_secret = env::var("CF_ACCESS_CLIENT_SECRET").ok();
    Some(config)
  }

  /// A configuration is usable when it has either a token or a full
  /// username/password pair.
  pub fn has_credentials(&self) -> bool {
    self.token.is_some() || (self.username.is_some() && self.password.is_some())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_trailing_slash_is_trimmed() {
    let config = ApiConfig::new("https://example.youtrack.cloud/");
    assert_eq!(config.base_url, "https://example.youtrack.cloud");
  }

  #[test]
  fn test_defaults() {
    let config = ApiConfig::new("https://example.youtrack.cloud");
    assert_eq!(config.timeout_ms, 30_000);
    assert_eq!(config.max_retries, 3);
    assert!(!config.debug);
    assert!(!config.has_credentials());
  }

  #[test]
  fn test_has_credentials() {
    let mut config = ApiConfig::new("https://example.youtrack.cloud");
    config.username = Some("jane".to_string());
    assert!(!config.has_credentials(), "username alone is not enough");

    config.password = Some("secret".to_string());
    assert!(config.has_credentials());

    let mut config = ApiConfig::new("https://example.youtrack.cloud");
    config.token = Some("perm-token".to_string());
    assert!(config.has_credentials());
  }
}
