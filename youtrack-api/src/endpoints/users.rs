//! # User Endpoints
//!
//! User and group lookups, including the `/users/me` probe the server uses
//! for connection checks.

use reqwest::Method;
use serde_json::Value;

use super::fields_query;
use crate::client::YouTrackClient;
use crate::error::ApiError;
use crate::models::SearchOptions;

impl YouTrackClient {
  /// Fetch the authenticated user.
  pub async fn current_user(&self, fields: Option<&str>) -> Result<Value, ApiError> {
    self.request(Method::GET, "/users/me", None, &fields_query(fields)).await
  }

  /// Fetch a user by id or login.
  pub async fn get_user(&self, user_id: &str, fields: Option<&str>) -> Result<Value, ApiError> {
    self
      .request(Method::GET, &format!("/users/{user_id}"), None, &fields_query(fields))
      .await
  }

  /// List users, optionally filtered by a search query.
  pub async fn list_users(&self, options: &SearchOptions) -> Result<Value, ApiError> {
    self.request(Method::GET, "/users", None, &options.to_query()).await
  }

  /// List user groups.
  pub async fn list_groups(&self, options: &SearchOptions) -> Result<Value, ApiError> {
    self.request(Method::GET, "/groups", None, &options.to_query()).await
  }

  /// Fetch a user group by id.
  pub async fn get_group(&self, group_id: &str, fields: Option<&str>) -> Result<Value, ApiError> {
    self
      .request(Method::GET, &format!("/groups/{group_id}"), None, &fields_query(fields))
      .await
  }
}
