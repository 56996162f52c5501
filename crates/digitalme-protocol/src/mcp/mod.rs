//! MCP (Model Context Protocol) type definitions.

pub mod completion;
pub mod initialize;
pub mod tools;

pub use completion::*;
pub use initialize::*;
pub use tools::*;

/// Method names served on `POST /mcp`.
pub mod methods {
    pub const INITIALIZE: &str = "initialize";
    pub const LLM_COMPLETE: &str = "llm/complete";
    pub const TOOLS_LIST: &str = "tools/list";
    pub const TOOLS_CALL: &str = "tools/call";
}
