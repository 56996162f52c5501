//! Dispatch error type.

use digitalme_protocol::error_codes;
use thiserror::Error;

/// Failures that end a request with a JSON-RPC error envelope.
///
/// `Display` renders the exact `error.message` sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The body is not a JSON object with `jsonrpc: "2.0"`.
    #[error("Invalid Request")]
    InvalidRequest,
    /// No handler for the method.
    #[error("Method not found: {0}")]
    MethodNotFound(String),
    /// `tools/call` named a tool that does not exist.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    /// `llm/complete` could not process its params.
    #[error("LLM completion error: {0}")]
    Completion(String),
    /// Anything else that went wrong while handling the request.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DispatchError {
    /// JSON-RPC error code for this error.
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidRequest => error_codes::INVALID_REQUEST,
            Self::MethodNotFound(_) => error_codes::METHOD_NOT_FOUND,
            Self::UnknownTool(_) => error_codes::INVALID_PARAMS,
            Self::Completion(_) | Self::Internal(_) => error_codes::INTERNAL_ERROR,
        }
    }
}
