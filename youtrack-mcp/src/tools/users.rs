//! User and group tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use youtrack_api::YouTrackClient;
use youtrack_api::models::SearchOptions;

use super::{count, default_top, display_field, parse_params};
use crate::types::ToolOutcome;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCurrentUserParams {
  /// Comma-separated list of fields to return.
  pub fields: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListUsersParams {
  /// Search query matching login, name, or email.
  pub query: Option<String>,
  /// Number of items to skip for pagination.
  #[serde(default)]
  pub skip: u64,
  /// Maximum number of items to return.
  #[serde(default = "default_top")]
  pub top: u64,
  /// Comma-separated list of fields to return.
  pub fields: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetUserParams {
  /// User ID or login.
  pub user_id: String,
  /// Comma-separated list of fields to return.
  pub fields: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListGroupsParams {
  /// Number of items to skip for pagination.
  #[serde(default)]
  pub skip: u64,
  /// Maximum number of items to return.
  #[serde(default = "default_top")]
  pub top: u64,
  /// Comma-separated list of fields to return.
  pub fields: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetGroupParams {
  /// Group ID.
  pub group_id: String,
  /// Comma-separated list of fields to return.
  pub fields: Option<String>,
}

pub async fn get_current_user(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: GetCurrentUserParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  match client.current_user(params.fields.as_deref()).await {
    Ok(user) => {
      let login = display_field(&user, "login", "").to_string();
      ToolOutcome::ok(user, format!("Retrieved current user {login}"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn list_users(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: ListUsersParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let options = SearchOptions {
    query: params.query,
    skip: params.skip,
    top: params.top,
    fields: params.fields,
  };

  match client.list_users(&options).await {
    Ok(users) => {
      let found = count(&users);
      ToolOutcome::ok(users, format!("Retrieved {found} users"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn get_user(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: GetUserParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  match client.get_user(&params.user_id, params.fields.as_deref()).await {
    Ok(user) => {
      let login = display_field(&user, "login", &params.user_id).to_string();
      ToolOutcome::ok(user, format!("Retrieved user {login}"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn list_groups(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: ListGroupsParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  let options = SearchOptions {
    skip: params.skip,
    top: params.top,
    fields: params.fields,
    ..SearchOptions::default()
  };

  match client.list_groups(&options).await {
    Ok(groups) => {
      let found = count(&groups);
      ToolOutcome::ok(groups, format!("Retrieved {found} groups"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

pub async fn get_group(client: &YouTrackClient, args: Value) -> ToolOutcome {
  let params: GetGroupParams = match parse_params(args) {
    Ok(p) => p,
    Err(outcome) => return outcome,
  };

  match client.get_group(&params.group_id, params.fields.as_deref()).await {
    Ok(group) => {
      let name = display_field(&group, "name", &params.group_id).to_string();
      ToolOutcome::ok(group, format!("Retrieved group {name}"))
    }
    Err(e) => ToolOutcome::fail(e.to_string()),
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{method, path, query_param, query_param_is_missing};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::tools::test_support::test_client;

  #[tokio::test]
  async fn test_get_current_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/users/me"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1-1", "login": "jane"})))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let outcome = get_current_user(&client, json!({})).await;

    assert!(outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Retrieved current user jane"));
  }

  #[tokio::test]
  async fn test_list_users_without_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/users"))
      .and(query_param_is_missing("query"))
      .and(query_param("top", "10"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "1-1"}, {"id": "1-2"}])))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let outcome = list_users(&client, json!({"top": 10})).await;

    assert!(outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Retrieved 2 users"));
  }

  #[tokio::test]
  async fn test_get_group_falls_back_to_id_in_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
      .and(path("/api/groups/3-0"))
      .and(query_param("fields", "id"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "3-0"})))
      .mount(&mock_server)
      .await;

    let client = test_client(&mock_server);
    let outcome = get_group(&client, json!({"groupId": "3-0", "fields": "id"})).await;

    assert!(outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Retrieved group 3-0"));
  }
}
