//! Handles the `llm/complete` method.

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use tracing::{debug, trace};

use digitalme_persona::{respond, MODEL_NAME, SYSTEM_PROMPT};
use digitalme_protocol::mcp::completion::{CompletionMetadata, CompletionParams, CompletionResult};

use crate::error::DispatchError;

const CONFIDENCE: f64 = 0.85;
const MOOD: &str = "professional";

/// Answers the first user message with the persona's canned reply.
pub(crate) fn handle_completion(params: Option<&Value>) -> Result<Value, DispatchError> {
    // 1. Parse params
    let params = match params {
        Some(p) => serde_json::from_value::<CompletionParams>(p.clone())
            .map_err(|e| DispatchError::Completion(e.to_string()))?,
        None => CompletionParams::default(),
    };

    // 2. Resolve prompt and metadata. Neither influences the reply.
    let system_prompt = params.system_prompt.as_deref().unwrap_or(SYSTEM_PROMPT);
    trace!(
        system_prompt_len = system_prompt.len(),
        has_metadata = params.metadata.is_some(),
        "completion context"
    );

    // 3. Pick the reply from the first user message only
    let first_user = params
        .first_user_message()
        .map_err(|e| DispatchError::Completion(e.to_string()))?;
    let message = match first_user.map(|m| m.content) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => {
            return Err(DispatchError::Completion(format!(
                "user message content must be a string, got {other}"
            )));
        }
    };
    let (topic, reply) = respond(&message);
    debug!(?topic, "selected persona reply");

    let result = CompletionResult {
        content: reply.to_string(),
        metadata: CompletionMetadata {
            model: MODEL_NAME.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            confidence: CONFIDENCE,
            mood: MOOD.to_string(),
        },
    };

    serde_json::to_value(result).map_err(|e| DispatchError::Completion(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use digitalme_persona::FALLBACK_REPLY;
    use serde_json::json;

    #[test]
    fn missing_params_fall_back() {
        let v = handle_completion(None).expect("complete");
        assert_eq!(v["content"], FALLBACK_REPLY);
        assert_eq!(v["metadata"]["confidence"], 0.85);
        assert_eq!(v["metadata"]["mood"], "professional");
        assert_eq!(v["metadata"]["model"], "ivan-personality-v1");
    }

    #[test]
    fn timestamp_is_rfc3339_utc() {
        let v = handle_completion(None).expect("complete");
        let ts = v["metadata"]["timestamp"].as_str().expect("str");
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
        assert!(ts.ends_with('Z'));
    }

    #[test]
    fn system_prompt_does_not_change_reply() {
        let msgs = json!([{"role": "user", "content": "hello"}]);
        let plain = handle_completion(Some(&json!({"messages": msgs}))).expect("a");
        let custom = handle_completion(Some(&json!({
            "messages": msgs,
            "systemPrompt": "You are a pirate.",
            "metadata": {"session": 1}
        })))
        .expect("b");
        assert_eq!(plain["content"], custom["content"]);
    }

    #[test]
    fn non_object_params_is_completion_error() {
        let err = handle_completion(Some(&json!("oops"))).expect_err("must fail");
        assert!(matches!(err, DispatchError::Completion(_)));
        assert!(err.to_string().starts_with("LLM completion error: "));
    }

    #[test]
    fn non_string_content_is_completion_error() {
        let params = json!({"messages": [{"role": "user", "content": 42}]});
        let err = handle_completion(Some(&params)).expect_err("must fail");
        assert!(matches!(err, DispatchError::Completion(_)));
    }

    #[test]
    fn structured_assistant_content_is_ignored() {
        let params = json!({"messages": [
            {"role": "user", "content": "hello"},
            {"role": "assistant", "content": [{"type": "text", "text": "hi"}]}
        ]});
        let v = handle_completion(Some(&params)).expect("complete");
        assert_eq!(v["content"], respond("hello").1);
    }

    #[test]
    fn null_user_content_falls_back() {
        let params = json!({"messages": [{"role": "user", "content": null}]});
        let v = handle_completion(Some(&params)).expect("complete");
        assert_eq!(v["content"], FALLBACK_REPLY);
    }
}
