//! # YouTrack API Endpoints
//!
//! Organized endpoint implementations for the YouTrack resource types the
//! server exposes: issues, comments, attachments, work items, projects,
//! users, agile boards, sprints, tags, custom fields, commands, and reports.

pub mod attachments;
pub mod boards;
pub mod comments;
pub mod commands;
pub mod custom_fields;
pub mod issues;
pub mod projects;
pub mod reports;
pub mod sprints;
pub mod tags;
pub mod users;
pub mod work_items;

/// Query pairs for an optional `fields` selector.
pub(crate) fn fields_query(fields: Option<&str>) -> Vec<(&'static str, String)> {
  match fields {
    Some(fields) => vec![("fields", fields.to_string())],
    None => Vec::new(),
  }
}
