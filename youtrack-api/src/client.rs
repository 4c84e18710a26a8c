use std::time::Duration;

use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// YouTrack REST API client.
///
/// The underlying HTTP client is built once, at construction, with the
/// configured timeout and default headers. Authentication is applied per
/// request so a single client can outlive credential rotation upstream.
pub struct YouTrackClient {
  pub(crate) client: Client,
  pub(crate) config: ApiConfig,
}

impl YouTrackClient {
  /// Create a new client from a configuration.
  pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
    if config.base_url.is_empty() {
      return Err(ApiError::Config("base URL must not be empty".to_string()));
    }
    Url::parse(&config.base_url).map_err(|e| ApiError::Config(format!("invalid base URL: {e}")))?;

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    if let Some(ref id) = config.cf_access_client_id {
      headers.insert(
        "CF-Access-Client-Id",
        HeaderValue::from_str(id).map_err(|_| ApiError::Config("invalid CF Access client id".to_string()))?,
      );
    }
    if let Some(ref secret) = config.cf_access_client_secret {
      headers.insert(
        "CF-Access-Client-Secret",
        HeaderValue::from_str(secret).map_err(|_| ApiError::Config("invalid CF Access client secret".to_string()))?,
      );
    }

    let client = Client::builder()
      .timeout(Duration::from_millis(config.timeout_ms))
      .default_headers(headers)
      .build()?;

    Ok(Self { client, config })
  }

  /// Resolve a path against the instance's `/api` root.
  pub(crate) fn api_url(&self, path: &str) -> String {
    format!("{}/api{}", self.config.base_url, path)
  }

  /// Attach credentials to an outgoing request. A permanent token takes
  /// precedence over username/password when both are configured.
  fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
    if let Some(ref token) = self.config.token {
      builder.bearer_auth(token)
    } else if let (Some(username), Some(password)) = (&self.config.username, &self.config.password) {
      builder.basic_auth(username, Some(password))
    } else {
      builder
    }
  }

  /// Send a single request and decode the JSON response.
  ///
  /// Exactly one attempt is made per call; there is no retry. Non-2xx
  /// responses become [`ApiError::Remote`] with the message extracted from
  /// YouTrack's error body. An empty 2xx body decodes to `Value::Null`.
  pub(crate) async fn request(
    &self,
    method: Method,
    path: &str,
    body: Option<&Value>,
    query: &[(&str, String)],
  ) -> Result<Value, ApiError> {
    let url = self.api_url(path);
    if self.config.debug {
      debug!(%method, %url, "YouTrack request");
    }

    let mut builder = self.client.request(method, &url);
    if !query.is_empty() {
      builder = builder.query(query);
    }
    if let Some(body) = body {
      builder = builder.json(body);
    }

    let response = self.authorize(builder).send().await?;
    self.decode(response).await
  }

  /// POST a typed JSON payload. All YouTrack mutations, updates included,
  /// go over POST; only removals use DELETE.
  pub(crate) async fn post_json<B>(&self, path: &str, body: &B, query: &[(&str, String)]) -> Result<Value, ApiError>
  where
    B: serde::Serialize + ?Sized,
  {
    let url = self.api_url(path);
    if self.config.debug {
      debug!(%url, "YouTrack request");
    }

    let mut builder = self.client.post(&url).json(body);
    if !query.is_empty() {
      builder = builder.query(query);
    }

    let response = self.authorize(builder).send().await?;
    self.decode(response).await
  }

  /// Send a multipart request. Used only for attachment uploads, where the
  /// multipart boundary replaces the default JSON content type.
  pub(crate) async fn request_multipart(&self, path: &str, form: Form) -> Result<Value, ApiError> {
    let url = self.api_url(path);
    if self.config.debug {
      debug!(%url, "YouTrack multipart upload");
    }

    let builder = self.client.post(&url).multipart(form);
    let response = self.authorize(builder).send().await?;
    self.decode(response).await
  }

  async fn decode(&self, response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
      return Err(ApiError::from_response(status, &body));
    }
    if body.is_empty() {
      return Ok(Value::Null);
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
  }

  /// Probe the instance by fetching the current user. Any failure, from a
  /// refused connection to a 401, collapses to `false`.
  pub async fn ping(&self) -> bool {
    self.request(Method::GET, "/users/me", None, &[]).await.is_ok()
  }

  /// Fetch the server configuration (version, build, and friends).
  pub async fn server_info(&self) -> Result<Value, ApiError> {
    self.request(Method::GET, "/config", None, &[]).await
  }
}

#[cfg(test)]
mod tests {
  use anyhow::Result;
  use serde_json::json;
  use wiremock::matchers::{body_json, header, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  fn test_config(base_url: &str) -> ApiConfig {
    let mut config = ApiConfig::new(base_url);
    config.token = Some("perm-token".to_string());
    config
  }

  #[tokio::test]
  async fn test_bearer_token_and_default_headers() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/users/me"))
      .and(header("Authorization", "Bearer perm-token"))
      .and(header("Accept", "application/json"))
      .and(header("Cache-Control", "no-cache"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1-1", "login": "jane"})))
      .mount(&mock_server)
      .await;

    let client = YouTrackClient::new(test_config(&mock_server.uri()))?;
    let user = client.request(Method::GET, "/users/me", None, &[]).await?;

    assert_eq!(user["login"], "jane");
    Ok(())
  }

  #[tokio::test]
  async fn test_basic_auth_when_no_token() -> Result<()> {
    let mock_server = MockServer::start().await;

    // jane:secret in base64
    Mock::given(method("GET"))
      .and(path("/api/users/me"))
      .and(header("Authorization", "Basic amFuZTpzZWNyZXQ="))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1-1"})))
      .mount(&mock_server)
      .await;

    let mut config = ApiConfig::new(&mock_server.uri());
    config.username = Some("jane".to_string());
    config.password = Some("secret".to_string());
    let client = YouTrackClient::new(config)?;

    assert!(client.ping().await);
    Ok(())
  }

  #[tokio::test]
  async fn test_token_wins_over_basic_credentials() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/users/me"))
      .and(header("Authorization", "Bearer perm-token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1-1"})))
      .mount(&mock_server)
      .await;

    let mut config = test_config(&mock_server.uri());
    config.username = Some("jane".to_string());
    config.password = Some("secret".to_string());
    let client = YouTrackClient::new(config)?;

    assert!(client.ping().await);
    Ok(())
  }

  #[tokio::test]
  async fn test_cf_access_headers_are_sent() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/config"))
      .and(header("CF-Access-Client-Id", "cf-id"))
      .and(header("CF-Access-Client-Secret", "cf-secret"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version": "2024.1"})))
      .mount(&mock_server)
      .await;

    let mut config = test_config(&mock_server.uri());
    config.cf_access_client_id = Some("cf-id".to_string());
    config.cf_access_client_secret = Some("cf-secret".to_string());
    let client = YouTrackClient::new(config)?;

    let info = client.server_info().await?;
    assert_eq!(info["version"], "2024.1");
    Ok(())
  }

  #[tokio::test]
  async fn test_query_and_body_are_forwarded() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
      .and(path("/api/issues"))
      .and(query_param("fields", "id,idReadable"))
      .and(body_json(json!({"summary": "Test"})))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "2-1", "idReadable": "DEMO-1"})))
      .mount(&mock_server)
      .await;

    let client = YouTrackClient::new(test_config(&mock_server.uri()))?;
    let issue = client
      .request(
        Method::POST,
        "/issues",
        Some(&json!({"summary": "Test"})),
        &[("fields", "id,idReadable".to_string())],
      )
      .await?;

    assert_eq!(issue["idReadable"], "DEMO-1");
    Ok(())
  }

  #[tokio::test]
  async fn test_remote_error_message_extraction() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/issues/DEMO-404"))
      .respond_with(
        ResponseTemplate::new(404).set_body_json(json!({"error": "Not Found", "error_description": "Issue not found"})),
      )
      .mount(&mock_server)
      .await;

    let client = YouTrackClient::new(test_config(&mock_server.uri()))?;
    let err = client
      .request(Method::GET, "/issues/DEMO-404", None, &[])
      .await
      .unwrap_err();

    assert_eq!(err.to_string(), "Issue not found");
    Ok(())
  }

  #[tokio::test]
  async fn test_empty_success_body_decodes_to_null() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
      .and(path("/api/issues/DEMO-1"))
      .respond_with(ResponseTemplate::new(200))
      .mount(&mock_server)
      .await;

    let client = YouTrackClient::new(test_config(&mock_server.uri()))?;
    let value = client.request(Method::DELETE, "/issues/DEMO-1", None, &[]).await?;

    assert!(value.is_null());
    Ok(())
  }

  #[tokio::test]
  async fn test_ping_collapses_errors_to_false() -> Result<()> {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/users/me"))
      .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Unauthorized"})))
      .mount(&mock_server)
      .await;

    let client = YouTrackClient::new(test_config(&mock_server.uri()))?;
    assert!(!client.ping().await);
    Ok(())
  }

  #[test]
  fn test_empty_base_url_is_rejected() {
    let err = YouTrackClient::new(ApiConfig::new("")).err().unwrap();
    assert!(matches!(err, ApiError::Config(_)));
  }

  #[test]
  fn test_malformed_base_url_is_rejected() {
    let err = YouTrackClient::new(ApiConfig::new("not a url")).err().unwrap();
    assert!(matches!(err, ApiError::Config(_)));
  }
}
