//! Tool registry for the YouTrack MCP server.
//!
//! Each tool module owns its parameter structs and handlers; this module
//! holds the catalog served by `tools/list` and the name-based dispatch used
//! by `tools/call`. Parameter validation failures and YouTrack errors both
//! surface as envelope failures, never as JSON-RPC errors, so a model always
//! gets a `success: false` payload it can read.

pub mod attachments;
pub mod boards;
pub mod comments;
pub mod issues;
pub mod projects;
pub mod sprints;
pub mod statistics;
pub mod users;
pub mod utility;
pub mod work_items;
pub mod workflow;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use youtrack_api::YouTrackClient;

use crate::protocol::Tool;
use crate::types::ToolOutcome;

pub(crate) fn default_top() -> u64 {
  50
}

/// Deserialize tool arguments, turning validation failures into envelope
/// failures. Unknown keys are accepted and ignored.
pub(crate) fn parse_params<T: DeserializeOwned>(args: Value) -> Result<T, ToolOutcome> {
  serde_json::from_value(args).map_err(|e| ToolOutcome::fail(format!("Invalid parameters: {e}")))
}

/// Element count of a list response; non-arrays count as zero.
pub(crate) fn count(value: &Value) -> usize {
  value.as_array().map_or(0, Vec::len)
}

/// Pull a display string out of a response, falling back to the id the
/// caller supplied when the field selector excluded it.
pub(crate) fn display_field<'a>(value: &'a Value, key: &str, fallback: &'a str) -> &'a str {
  value.get(key).and_then(Value::as_str).unwrap_or(fallback)
}

fn tool_def<P: JsonSchema>(name: &str, description: &str) -> Tool {
  let input_schema =
    serde_json::to_value(schemars::schema_for!(P)).unwrap_or_else(|_| serde_json::json!({"type": "object"}));
  Tool {
    name: name.to_string(),
    description: description.to_string(),
    input_schema,
  }
}

/// The full tool catalog, in the order `tools/list` advertises it.
pub fn catalog() -> Vec<Tool> {
  vec![
    // Issue management
    tool_def::<issues::ListIssuesParams>("youtrack_list_issues", "List issues with optional filtering and pagination"),
    tool_def::<issues::GetIssueParams>("youtrack_get_issue", "Get detailed information about a specific issue"),
    tool_def::<issues::CreateIssueParams>("youtrack_create_issue", "Create a new issue"),
    tool_def::<issues::UpdateIssueParams>("youtrack_update_issue", "Update an existing issue"),
    tool_def::<issues::DeleteIssueParams>("youtrack_delete_issue", "Delete an issue"),
    tool_def::<issues::SearchIssuesParams>("youtrack_search_issues", "Search issues using YouTrack query syntax"),
    // Comment management
    tool_def::<comments::GetCommentsParams>("youtrack_get_comments", "Get all comments for an issue"),
    tool_def::<comments::AddCommentParams>("youtrack_add_comment", "Add a comment to an issue"),
    tool_def::<comments::UpdateCommentParams>("youtrack_update_comment", "Update an existing comment"),
    tool_def::<comments::DeleteCommentParams>("youtrack_delete_comment", "Delete a comment"),
    // Attachment management
    tool_def::<attachments::GetAttachmentsParams>("youtrack_get_attachments", "Get all attachments for an issue"),
    // Work item management
    tool_def::<work_items::GetWorkItemsParams>(
      "youtrack_get_work_items",
      "Get work items (time tracking entries) for an issue",
    ),
    tool_def::<work_items::AddWorkItemParams>(
      "youtrack_add_work_item",
      "Add a work item (time tracking entry) to an issue",
    ),
    tool_def::<work_items::UpdateWorkItemParams>("youtrack_update_work_item", "Update an existing work item"),
    tool_def::<work_items::DeleteWorkItemParams>("youtrack_delete_work_item", "Delete a work item"),
    // Project management
    tool_def::<projects::ListProjectsParams>("youtrack_list_projects", "List all accessible projects"),
    tool_def::<projects::GetProjectParams>("youtrack_get_project", "Get detailed information about a specific project"),
    tool_def::<projects::CreateProjectParams>("youtrack_create_project", "Create a new project"),
    tool_def::<projects::UpdateProjectParams>("youtrack_update_project", "Update an existing project"),
    tool_def::<projects::DeleteProjectParams>("youtrack_delete_project", "Delete a project"),
    tool_def::<projects::GetProjectCustomFieldsParams>(
      "youtrack_get_project_custom_fields",
      "Get custom fields for a project",
    ),
    // User management
    tool_def::<users::GetCurrentUserParams>(
      "youtrack_get_current_user",
      "Get current authenticated user information",
    ),
    tool_def::<users::ListUsersParams>("youtrack_list_users", "List users with optional search and pagination"),
    tool_def::<users::GetUserParams>("youtrack_get_user", "Get detailed information about a specific user"),
    tool_def::<users::ListGroupsParams>("youtrack_list_groups", "List user groups"),
    tool_def::<users::GetGroupParams>("youtrack_get_group", "Get detailed information about a specific group"),
    // Workflow management
    tool_def::<workflow::GetIssueCommandsParams>(
      "youtrack_get_issue_commands",
      "Get available workflow commands for an issue",
    ),
    tool_def::<workflow::ApplyCommandParams>("youtrack_apply_workflow_command", "Apply a workflow command to an issue"),
    // Agile board management
    tool_def::<boards::ListBoardsParams>("youtrack_list_agile_boards", "List all agile boards"),
    tool_def::<boards::GetBoardParams>(
      "youtrack_get_agile_board",
      "Get detailed information about a specific agile board",
    ),
    tool_def::<boards::CreateBoardParams>("youtrack_create_agile_board", "Create a new agile board"),
    tool_def::<boards::UpdateBoardParams>("youtrack_update_agile_board", "Update an existing agile board"),
    // Sprint management
    tool_def::<sprints::ListSprintsParams>("youtrack_list_sprints", "List sprints for an agile board"),
    tool_def::<sprints::GetSprintParams>("youtrack_get_sprint", "Get detailed information about a specific sprint"),
    tool_def::<sprints::CreateSprintParams>("youtrack_create_sprint", "Create a new sprint"),
    tool_def::<sprints::UpdateSprintParams>("youtrack_update_sprint", "Update an existing sprint"),
    // Utility
    tool_def::<utility::PingParams>("youtrack_ping", "Test YouTrack connection"),
    tool_def::<utility::GetServerInfoParams>("youtrack_get_server_info", "Get YouTrack server information"),
    // Statistics and reporting
    tool_def::<statistics::GetProjectStatisticsParams>(
      "youtrack_get_project_statistics",
      "Get project statistics and metrics",
    ),
    tool_def::<statistics::GenerateReportParams>("youtrack_generate_report", "Generate custom reports"),
  ]
}

/// Route a tool call to its handler. Unknown names yield an envelope failure
/// rather than a protocol error.
pub async fn dispatch(client: &YouTrackClient, name: &str, arguments: Value) -> ToolOutcome {
  match name {
    "youtrack_list_issues" => issues::list_issues(client, arguments).await,
    "youtrack_get_issue" => issues::get_issue(client, arguments).await,
    "youtrack_create_issue" => issues::create_issue(client, arguments).await,
    "youtrack_update_issue" => issues::update_issue(client, arguments).await,
    "youtrack_delete_issue" => issues::delete_issue(client, arguments).await,
    "youtrack_search_issues" => issues::search_issues(client, arguments).await,
    "youtrack_get_comments" => comments::get_comments(client, arguments).await,
    "youtrack_add_comment" => comments::add_comment(client, arguments).await,
    "youtrack_update_comment" => comments::update_comment(client, arguments).await,
    "youtrack_delete_comment" => comments::delete_comment(client, arguments).await,
    "youtrack_get_attachments" => attachments::get_attachments(client, arguments).await,
    "youtrack_get_work_items" => work_items::get_work_items(client, arguments).await,
    "youtrack_add_work_item" => work_items::add_work_item(client, arguments).await,
    "youtrack_update_work_item" => work_items::update_work_item(client, arguments).await,
    "youtrack_delete_work_item" => work_items::delete_work_item(client, arguments).await,
    "youtrack_list_projects" => projects::list_projects(client, arguments).await,
    "youtrack_get_project" => projects::get_project(client, arguments).await,
    "youtrack_create_project" => projects::create_project(client, arguments).await,
    "youtrack_update_project" => projects::update_project(client, arguments).await,
    "youtrack_delete_project" => projects::delete_project(client, arguments).await,
    "youtrack_get_project_custom_fields" => projects::get_project_custom_fields(client, arguments).await,
    "youtrack_get_current_user" => users::get_current_user(client, arguments).await,
    "youtrack_list_users" => users::list_users(client, arguments).await,
    "youtrack_get_user" => users::get_user(client, arguments).await,
    "youtrack_list_groups" => users::list_groups(client, arguments).await,
    "youtrack_get_group" => users::get_group(client, arguments).await,
    "youtrack_get_issue_commands" => workflow::get_issue_commands(client, arguments).await,
    "youtrack_apply_workflow_command" => workflow::apply_workflow_command(client, arguments).await,
    "youtrack_list_agile_boards" => boards::list_agile_boards(client, arguments).await,
    "youtrack_get_agile_board" => boards::get_agile_board(client, arguments).await,
    "youtrack_create_agile_board" => boards::create_agile_board(client, arguments).await,
    "youtrack_update_agile_board" => boards::update_agile_board(client, arguments).await,
    "youtrack_list_sprints" => sprints::list_sprints(client, arguments).await,
    "youtrack_get_sprint" => sprints::get_sprint(client, arguments).await,
    "youtrack_create_sprint" => sprints::create_sprint(client, arguments).await,
    "youtrack_update_sprint" => sprints::update_sprint(client, arguments).await,
    "youtrack_ping" => utility::ping(client).await,
    "youtrack_get_server_info" => utility::get_server_info(client).await,
    "youtrack_get_project_statistics" => statistics::get_project_statistics(client, arguments).await,
    "youtrack_generate_report" => statistics::generate_report(client, arguments).await,
    _ => ToolOutcome::fail(format!("Unknown tool: {name}")),
  }
}
