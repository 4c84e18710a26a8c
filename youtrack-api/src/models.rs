//! Request payload types for the YouTrack REST API.
//!
//! YouTrack responses are passed through as raw `serde_json::Value` because
//! their shape depends entirely on the caller-supplied `fields` selector.
//! Outgoing payloads are fully typed: every optional field is an `Option`
//! that is skipped when absent, which keeps explicitly-supplied `false`/`0`
//! values on the wire while never sending nulls for omitted parameters.

use serde::Serialize;

/// Reference to another entity by id, serialized as `{"id": "..."}`.
///
/// YouTrack accepts this shape wherever a linked entity is expected
/// (`project`, `assignee`, `priority`, `type`, tags, ...).
#[derive(Debug, Clone, Serialize)]
pub struct EntityRef {
  pub id: String,
}

impl From<&str> for EntityRef {
  fn from(id: &str) -> Self {
    Self { id: id.to_string() }
  }
}

impl From<String> for EntityRef {
  fn from(id: String) -> Self {
    Self { id }
  }
}

/// Work item duration: either raw minutes or a presentation string
/// such as `"2h 30m"`. Serialized untagged, exactly as the API accepts it.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum DurationSpec {
  Minutes(u64),
  Presentation(String),
}

/// Pagination and field selection shared by all list endpoints.
///
/// `skip` and `top` are always sent; `query` and `fields` only when present.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
  pub query: Option<String>,
  pub skip: u64,
  pub top: u64,
  pub fields: Option<String>,
}

impl SearchOptions {
  pub fn page(skip: u64, top: u64) -> Self {
    Self {
      skip,
      top,
      ..Self::default()
    }
  }

  /// Render as query-string pairs.
  pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(ref query) = self.query {
      pairs.push(("query", query.clone()));
    }
    pairs.push(("skip", self.skip.to_string()));
    pairs.push(("top", self.top.to_string()));
    if let Some(ref fields) = self.fields {
      pairs.push(("fields", fields.clone()));
    }
    pairs
  }
}

// ---------------------------------------------------------------------------
// Issues
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct NewIssue {
  pub project: EntityRef,
  pub summary: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assignee: Option<EntityRef>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub priority: Option<EntityRef>,
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub issue_type: Option<EntityRef>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tags: Option<Vec<EntityRef>>,
}

#[derive(Debug, Default, Serialize)]
pub struct IssuePatch {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assignee: Option<EntityRef>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub priority: Option<EntityRef>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub state: Option<EntityRef>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tags: Option<Vec<EntityRef>>,
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct NewComment {
  pub text: String,
  #[serde(rename = "usesMarkdown")]
  pub uses_markdown: bool,
}

#[derive(Debug, Default, Serialize)]
pub struct CommentPatch {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,
  #[serde(rename = "usesMarkdown", skip_serializing_if = "Option::is_none")]
  pub uses_markdown: Option<bool>,
}

// ---------------------------------------------------------------------------
// Work items
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct NewWorkItem {
  pub duration: DurationSpec,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub date: Option<i64>,
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub work_type: Option<EntityRef>,
}

#[derive(Debug, Default, Serialize)]
pub struct WorkItemPatch {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub duration: Option<DurationSpec>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub date: Option<i64>,
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub work_type: Option<EntityRef>,
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct NewProject {
  pub name: String,
  #[serde(rename = "shortName")]
  pub short_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub leader: Option<EntityRef>,
}

#[derive(Debug, Default, Serialize)]
pub struct ProjectPatch {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub leader: Option<EntityRef>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub archived: Option<bool>,
}

// ---------------------------------------------------------------------------
// Agile boards and sprints
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct NewBoard {
  pub name: String,
  pub projects: Vec<EntityRef>,
}

#[derive(Debug, Default, Serialize)]
pub struct BoardPatch {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub projects: Option<Vec<EntityRef>>,
}

#[derive(Debug, Serialize)]
pub struct NewSprint {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub goal: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub start: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub finish: Option<i64>,
}

#[derive(Debug, Default, Serialize)]
pub struct SprintPatch {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub goal: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub start: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub finish: Option<i64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub archived: Option<bool>,
}

// ---------------------------------------------------------------------------
// Workflow commands
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct CommandRequest {
  pub query: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comment: Option<String>,
}
