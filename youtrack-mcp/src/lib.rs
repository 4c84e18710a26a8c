//! # YouTrack MCP Server
//!
//! MCP server exposing YouTrack issue tracking, time tracking, agile boards,
//! and project administration as tools over stdio JSON-RPC.

pub mod protocol;
pub mod server;
pub mod tools;
pub mod types;

pub use server::McpServer;
