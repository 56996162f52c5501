//! # digitalme-mcp
//!
//! MCP method dispatch handler (APPLICATION layer).
//!
//! Provides `McpHandler` and `JsonRpcOutput` for validating JSON-RPC
//! envelopes and routing them to the persona's method implementations.

mod dispatch;
pub mod error;
pub mod handler;

pub use error::DispatchError;
pub use handler::{JsonRpcOutput, McpHandler, SERVER_NAME, SERVER_VERSION};
