//! # YouTrack API Client
//!
//! Provides YouTrack REST API integration for issue management, time tracking,
//! agile boards, and project administration, supporting token and basic
//! authentication for all operations exposed by the MCP server.

mod client;
mod config;
mod error;
pub mod models;

mod endpoints;

// Re-export the client
pub use client::YouTrackClient;
// Re-export configuration
pub use config::ApiConfig;
// Re-export errors
pub use error::ApiError;
