//! Handles the `tools/call` MCP method.

use serde_json::{json, Value};

use digitalme_persona::{personality_json, structured_analysis, PersonaTool, PersonalityRecord};
use digitalme_protocol::mcp::tools::{ToolCallResult, ToolsCallParams};

use crate::error::DispatchError;

/// Runs the named persona tool.
pub(crate) fn handle_tools_call(
    params: Option<&Value>,
    personality: &PersonalityRecord,
) -> Result<Value, DispatchError> {
    // 1. Parse params
    let call = match params {
        Some(p) => serde_json::from_value::<ToolsCallParams>(p.clone())
            .map_err(|e| DispatchError::Internal(format!("invalid tools/call params: {e}")))?,
        None => ToolsCallParams::default(),
    };

    // 2. Resolve the tool
    let tool = call
        .name
        .as_str()
        .and_then(PersonaTool::from_name)
        .ok_or_else(|| DispatchError::UnknownTool(display_name(&call.name)))?;

    tracing::debug!(%tool, "running persona tool");

    // 3. Run it
    let result = match tool {
        PersonaTool::PersonalityInfo => ToolCallResult {
            content: personality_json(personality)
                .map_err(|e| DispatchError::Internal(e.to_string()))?,
            metadata: json!({"tool": tool.name()}),
        },
        PersonaTool::StructuredThinking => {
            let problem = problem_argument(&call.arguments)?;
            ToolCallResult {
                content: structured_analysis(&problem),
                metadata: json!({"tool": tool.name(), "problem": problem}),
            }
        }
    };

    serde_json::to_value(result).map_err(|e| DispatchError::Internal(e.to_string()))
}

/// Renders a tool name for error messages: strings verbatim, anything
/// else (including a missing name) as JSON text.
fn display_name(name: &Value) -> String {
    match name {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Reads `arguments.problem`; absent or null means `""`, other non-strings
/// are rendered as JSON text.
fn problem_argument(arguments: &Value) -> Result<String, DispatchError> {
    match arguments {
        Value::Null => Ok(String::new()),
        Value::Object(map) => Ok(match map.get("problem") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }),
        _ => Err(DispatchError::Internal(
            "tool arguments must be an object".to_string(),
        )),
    }
}
