//! MCP tools/* method types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single tool definition in the `tools/list` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name.
    pub name: String,
    /// Tool description.
    pub description: String,
    /// JSON Schema for the tool arguments.
    pub parameters: Value,
}

/// Response for `tools/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsListResult {
    /// Available tools.
    pub tools: Vec<ToolDefinition>,
}

/// Request params for `tools/call`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsCallParams {
    /// Name of the tool to invoke. Kept untyped so that a non-string
    /// name can still be reported back as an unknown tool.
    #[serde(default)]
    pub name: Value,
    /// Arguments to pass. `null` when omitted.
    #[serde(default)]
    pub arguments: Value,
}

/// Response for `tools/call`.
///
/// `content` is always a plain string, even when the tool produces
/// structured data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallResult {
    /// Text produced by the tool.
    pub content: String,
    /// Tool-specific metadata.
    pub metadata: Value,
}
