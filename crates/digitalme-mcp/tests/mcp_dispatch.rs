//! End-to-end dispatch tests through `McpHandler`.

use serde_json::{json, Value};

use digitalme_mcp::McpHandler;
use digitalme_persona::{respond, Topic, FALLBACK_REPLY};
use digitalme_protocol::mcp::methods;
use digitalme_protocol::{JsonRpcRequest, RequestId};

fn rpc(method: &str, id: i64, params: Option<Value>) -> JsonRpcRequest {
    JsonRpcRequest::new(RequestId::from(id), method, params)
}

fn to_value(handler: &McpHandler, req: &JsonRpcRequest) -> Value {
    let json_str = handler.dispatch(req).to_json().expect("ser");
    serde_json::from_str(&json_str).expect("de")
}

fn complete(message: &str) -> Value {
    let handler = McpHandler::default();
    let params = json!({"messages": [{"role": "user", "content": message}]});
    to_value(&handler, &rpc(methods::LLM_COMPLETE, 1, Some(params)))
}

#[test]
fn initialize_is_identical_for_any_params() {
    let handler = McpHandler::default();
    let a = to_value(&handler, &rpc(methods::INITIALIZE, 1, None));
    let b = to_value(
        &handler,
        &rpc(methods::INITIALIZE, 1, Some(json!({"clientInfo": {"name": "x"}}))),
    );
    assert_eq!(a, b);
    assert_eq!(a["result"]["serverInfo"]["name"], "DigitalMe-MCP-Server");
    assert_eq!(a["result"]["serverInfo"]["version"], "1.0.0");
    assert_eq!(a["jsonrpc"], "2.0");
}

#[test]
fn hello_returns_greeting_in_any_case() {
    let greeting = respond("hello").1;
    for msg in ["hello", "HELLO world", "Well, HeLlO!"] {
        assert_eq!(complete(msg)["result"]["content"], greeting, "message: {msg}");
    }
}

#[test]
fn work_and_family_returns_work_reply() {
    let (topic, work_reply) = respond("work");
    assert_eq!(topic, Topic::Work);
    assert_eq!(
        complete("my family and my work")["result"]["content"],
        work_reply
    );
}

#[test]
fn only_first_user_message_counts() {
    let handler = McpHandler::default();
    let params = json!({"messages": [
        {"role": "assistant", "content": "hello"},
        {"role": "user", "content": "what now?"},
        {"role": "user", "content": "hello"}
    ]});
    let v = to_value(&handler, &rpc(methods::LLM_COMPLETE, 3, Some(params)));
    assert_eq!(v["result"]["content"], FALLBACK_REPLY);
}

#[test]
fn completion_error_is_internal_code() {
    let handler = McpHandler::default();
    let v = to_value(
        &handler,
        &rpc(methods::LLM_COMPLETE, 4, Some(json!({"messages": 7}))),
    );
    assert_eq!(v["error"]["code"], -32603);
    assert!(v["error"]["message"]
        .as_str()
        .expect("msg")
        .starts_with("LLM completion error:"));
    assert_eq!(v["id"], 4);
}

#[test]
fn tools_call_unknown_tool() {
    let handler = McpHandler::default();
    let v = to_value(
        &handler,
        &rpc(methods::TOOLS_CALL, 5, Some(json!({"name": "nope", "arguments": {}}))),
    );
    assert_eq!(v["error"]["code"], -32602);
    assert_eq!(v["error"]["message"], "Unknown tool: nope");
}

#[test]
fn tools_call_personality_info() {
    let handler = McpHandler::default();
    let v = to_value(
        &handler,
        &rpc(methods::TOOLS_CALL, 6, Some(json!({"name": "get_personality_info"}))),
    );
    let content: Value =
        serde_json::from_str(v["result"]["content"].as_str().expect("str")).expect("json");
    assert_eq!(content["position"], "Head of R&D at EllyAnalytics");
}

#[test]
fn unknown_method_mentions_method() {
    let handler = McpHandler::default();
    let v = to_value(&handler, &rpc("resources/list", 7, None));
    assert_eq!(v["error"]["code"], -32601);
    assert_eq!(v["error"]["message"], "Method not found: resources/list");
}

#[test]
fn id_echoed_from_raw_body() {
    let handler = McpHandler::default();
    for (body, expected) in [
        (r#"{"jsonrpc":"2.0","id":"abc","method":"tools/list"}"#, json!("abc")),
        (r#"{"jsonrpc":"2.0","id":12,"method":"tools/list"}"#, json!(12)),
        (r#"{"jsonrpc":"2.0","id":2.25,"method":"tools/list"}"#, json!(2.25)),
        (r#"{"jsonrpc":"2.0","method":"tools/list"}"#, Value::Null),
        (r#"{"id":"early","method":"tools/list"}"#, json!("early")),
        (r#"{"jsonrpc":"2.0","id":3,"method":"bogus"}"#, json!(3)),
    ] {
        let out = handler.handle_body(body);
        let v: Value = serde_json::from_str(&out.to_json().expect("ser")).expect("de");
        assert_eq!(v["id"], expected, "body: {body}");
        assert!(v.as_object().expect("obj").contains_key("id"));
    }
}

#[test]
fn non_string_role_is_skipped() {
    let handler = McpHandler::default();
    let params = json!({"messages": [
        {"role": 1, "content": "work"},
        {"role": null, "content": "family"},
        {"role": "user", "content": "hello"}
    ]});
    let v = to_value(&handler, &rpc(methods::LLM_COMPLETE, 8, Some(params)));
    assert_eq!(v["result"]["content"], respond("hello").1);
}

#[test]
fn structured_content_outside_first_user_message_is_ignored() {
    let handler = McpHandler::default();
    let params = json!({"messages": [
        {"role": "system", "content": {"text": "be brief"}},
        {"role": "user", "content": "hello"},
        {"role": "assistant", "content": [{"type": "text", "text": "hi"}]}
    ]});
    let v = to_value(&handler, &rpc(methods::LLM_COMPLETE, 9, Some(params)));
    assert!(v.get("error").is_none(), "unexpected error: {v}");
    assert_eq!(v["result"]["content"], respond("hello").1);
}

#[test]
fn structured_content_in_first_user_message_is_completion_error() {
    let handler = McpHandler::default();
    let params = json!({"messages": [
        {"role": "user", "content": [{"type": "text", "text": "hello"}]}
    ]});
    let v = to_value(&handler, &rpc(methods::LLM_COMPLETE, 10, Some(params)));
    assert_eq!(v["error"]["code"], -32603);
    assert!(v["error"]["message"]
        .as_str()
        .expect("msg")
        .starts_with("LLM completion error:"));
}

#[test]
fn non_string_tool_name_is_unknown_tool() {
    let handler = McpHandler::default();
    let v = to_value(
        &handler,
        &rpc(methods::TOOLS_CALL, 11, Some(json!({"name": 5}))),
    );
    assert_eq!(v["error"]["code"], -32602);
    assert_eq!(v["error"]["message"], "Unknown tool: 5");
    assert_eq!(v["id"], 11);
}

#[test]
fn structured_thinking_with_null_arguments() {
    let handler = McpHandler::default();
    let params = json!({"name": "structured_thinking", "arguments": null});
    let v = to_value(&handler, &rpc(methods::TOOLS_CALL, 12, Some(params)));
    assert_eq!(v["result"]["metadata"]["problem"], "");
    assert!(v["result"]["content"]
        .as_str()
        .expect("content")
        .starts_with("Структурированный анализ проблемы: \"\""));
}

#[test]
fn float_id_echoed_from_raw_body() {
    let handler = McpHandler::default();
    let out = handler.handle_body(r#"{"jsonrpc":"2.0","id":1.5,"method":"bogus"}"#);
    assert_eq!(out.error_code(), Some(-32601));
    let v: Value = serde_json::from_str(&out.to_json().expect("ser")).expect("de");
    assert_eq!(v["id"], json!(1.5));
}
