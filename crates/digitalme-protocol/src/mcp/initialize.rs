//! MCP initialize method types.
//!
//! The initialize handshake is the first message exchanged between
//! client and server. This server advertises a fixed capability set and
//! ignores whatever the client sends.

use serde::{Deserialize, Serialize};

/// An empty capability group. Serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyCapability {}

/// Server capabilities returned during initialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// Tools capability.
    pub tools: EmptyCapability,
    /// Resources capability.
    pub resources: EmptyCapability,
    /// Prompts capability.
    pub prompts: EmptyCapability,
    /// Logging capability.
    pub logging: EmptyCapability,
}

/// Server info returned during initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
}

/// Response for `initialize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResult {
    /// Protocol version announced by the server.
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server capabilities.
    pub capabilities: ServerCapabilities,
    /// Server info.
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

/// MCP protocol version announced by this implementation.
pub const PROTOCOL_VERSION: &str = "2024-11-05";
