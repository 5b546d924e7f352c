// MCP (Model Context Protocol) server exposing Signaturit contacts and
// signature requests as tools for agent clients

pub mod error;
pub mod protocol;
pub mod server;
pub mod tools;

pub use error::{ArgumentError, ArgumentReason, ToolError};
pub use server::McpServer;
