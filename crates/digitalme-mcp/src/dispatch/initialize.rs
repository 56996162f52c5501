//! Handles the `initialize` MCP method.

use serde_json::Value;

use digitalme_protocol::mcp::initialize::{
    InitializeResult, ServerCapabilities, ServerInfo, PROTOCOL_VERSION,
};

use crate::error::DispatchError;
use crate::handler::{SERVER_NAME, SERVER_VERSION};

/// Returns the fixed server capabilities. Client params are ignored.
pub(crate) fn handle_initialize() -> Result<Value, DispatchError> {
    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities::default(),
        server_info: ServerInfo {
            name: SERVER_NAME.to_string(),
            version: SERVER_VERSION.to_string(),
        },
    };

    serde_json::to_value(result).map_err(|e| DispatchError::Internal(e.to_string()))
}
