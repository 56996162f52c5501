//! MCP request handler: envelope validation and method routing.

use serde_json::Value;
use tracing::{debug, warn};

use digitalme_persona::{PersonalityRecord, IVAN};
use digitalme_protocol::{
    methods, JsonRpcErrorResponse, JsonRpcRequest, JsonRpcResponse, RequestId, JSONRPC_VERSION,
};

use crate::dispatch;
use crate::error::DispatchError;

/// Name announced in `initialize`.
pub const SERVER_NAME: &str = "DigitalMe-MCP-Server";

/// Version announced in `initialize` and the HTTP info endpoints.
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Outcome of handling one request: a success or an error envelope.
#[derive(Debug, Clone)]
pub enum JsonRpcOutput {
    /// `result` envelope.
    Success(JsonRpcResponse),
    /// `error` envelope.
    Error(JsonRpcErrorResponse),
}

impl JsonRpcOutput {
    /// Wraps a dispatch result in the matching envelope.
    pub fn from_result(id: RequestId, result: Result<Value, DispatchError>) -> Self {
        match result {
            Ok(value) => Self::Success(JsonRpcResponse::success(id, value)),
            Err(e) => Self::error(id, &e),
        }
    }

    /// Builds an error envelope from a `DispatchError`.
    pub fn error(id: RequestId, err: &DispatchError) -> Self {
        Self::Error(JsonRpcErrorResponse::error(id, err.code(), err.to_string()))
    }

    /// The echoed request id.
    pub fn id(&self) -> &RequestId {
        match self {
            Self::Success(r) => &r.id,
            Self::Error(e) => &e.id,
        }
    }

    /// The JSON-RPC error code, or `None` on success.
    pub fn error_code(&self) -> Option<i32> {
        match self {
            Self::Success(_) => None,
            Self::Error(e) => Some(e.error.code),
        }
    }

    /// Serializes the envelope.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Success(r) => serde_json::to_string(r),
            Self::Error(e) => serde_json::to_string(e),
        }
    }
}

/// Stateless dispatcher for the persona's JSON-RPC methods.
///
/// Holds only immutable data, so one instance can be shared across
/// concurrent requests behind an `Arc`.
#[derive(Debug, Clone)]
pub struct McpHandler {
    personality: PersonalityRecord,
}

impl Default for McpHandler {
    fn default() -> Self {
        Self::new(IVAN)
    }
}

impl McpHandler {
    /// Creates a handler serving `personality` through `get_personality_info`.
    pub fn new(personality: PersonalityRecord) -> Self {
        Self { personality }
    }

    /// Handles a raw request body.
    ///
    /// Never fails: input that is not UTF-8 JSON becomes an
    /// `Invalid Request` envelope with a null id.
    pub fn handle_body(&self, body: impl AsRef<[u8]>) -> JsonRpcOutput {
        match serde_json::from_slice::<Value>(body.as_ref()) {
            Ok(envelope) => self.handle_value(&envelope),
            Err(e) => {
                warn!(error = %e, "request body is not valid JSON");
                JsonRpcOutput::error(RequestId::Null, &DispatchError::InvalidRequest)
            }
        }
    }

    /// Validates a parsed envelope and dispatches it.
    ///
    /// The id is extracted before validation so that every error path
    /// can echo it.
    pub fn handle_value(&self, envelope: &Value) -> JsonRpcOutput {
        let id = RequestId::from_envelope(envelope);

        let version_ok = envelope.get("jsonrpc").and_then(Value::as_str) == Some(JSONRPC_VERSION);
        if !version_ok {
            warn!(id = ?id, "rejecting envelope without jsonrpc \"2.0\"");
            return JsonRpcOutput::error(id, &DispatchError::InvalidRequest);
        }

        let method = match envelope.get("method") {
            Some(Value::String(m)) => m.clone(),
            Some(other) => other.to_string(),
            None => Value::Null.to_string(),
        };
        let params = envelope.get("params").filter(|p| !p.is_null()).cloned();

        self.dispatch(&JsonRpcRequest::new(id, method, params))
    }

    /// Routes a typed request to its method implementation.
    pub fn dispatch(&self, request: &JsonRpcRequest) -> JsonRpcOutput {
        debug!(method = %request.method, id = ?request.id, "received request");

        let params = request.params.as_ref();
        let result = match request.method.as_str() {
            methods::INITIALIZE => dispatch::initialize::handle_initialize(),
            methods::LLM_COMPLETE => dispatch::completion::handle_completion(params),
            methods::TOOLS_LIST => dispatch::tools_list::handle_tools_list(),
            methods::TOOLS_CALL => {
                dispatch::tools_call::handle_tools_call(params, &self.personality)
            }
            other => Err(DispatchError::MethodNotFound(other.to_string())),
        };

        if let Err(ref e) = result {
            debug!(method = %request.method, code = e.code(), error = %e, "request failed");
        }

        JsonRpcOutput::from_result(request.id.clone(), result)
    }
}
