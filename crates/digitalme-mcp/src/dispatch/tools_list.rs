//! Handles the `tools/list` MCP method.

use serde_json::Value;

use digitalme_persona::{PersonaTool, ToolArgument};
use digitalme_protocol::mcp::tools::{ToolDefinition, ToolsListResult};

use crate::error::DispatchError;

/// Lists the persona's tools.
pub(crate) fn handle_tools_list() -> Result<Value, DispatchError> {
    let tools = PersonaTool::ALL
        .iter()
        .map(|tool| ToolDefinition {
            name: tool.name().to_string(),
            description: tool.description().to_string(),
            parameters: build_parameters_schema(tool.arguments()),
        })
        .collect();

    serde_json::to_value(ToolsListResult { tools })
        .map_err(|e| DispatchError::Internal(e.to_string()))
}

/// Builds a JSON Schema object from tool arguments.
///
/// `required` is always present, empty when no argument is required.
pub(crate) fn build_parameters_schema(arguments: &[ToolArgument]) -> Value {
    let mut properties = serde_json::Map::new();
    let mut required = Vec::new();

    for arg in arguments {
        let mut prop = serde_json::Map::new();
        prop.insert("type".to_string(), Value::String(arg.arg_type.to_string()));
        prop.insert(
            "description".to_string(),
            Value::String(arg.description.to_string()),
        );
        properties.insert(arg.name.to_string(), Value::Object(prop));
        if arg.required {
            required.push(Value::String(arg.name.to_string()));
        }
    }

    let mut schema = serde_json::Map::new();
    schema.insert("type".to_string(), Value::String("object".to_string()));
    schema.insert("properties".to_string(), Value::Object(properties));
    schema.insert("required".to_string(), Value::Array(required));

    Value::Object(schema)
}
