//! `digitalme ask` command.
//!
//! Runs one `llm/complete` request through the dispatcher in-process,
//! without binding a socket.

use clap::Args;

use digitalme_mcp::{JsonRpcOutput, McpHandler};
use digitalme_protocol::mcp::completion::{ChatMessage, CompletionParams};
use digitalme_protocol::{methods, JsonRpcRequest, RequestId};

use crate::{input, output};

/// Ask the persona one question.
#[derive(Debug, Args)]
pub struct AskArgs {
    /// The user message (`-` reads it from stdin).
    pub message: String,
    /// Print the full JSON-RPC response instead of the reply text.
    #[arg(long)]
    pub json: bool,
}

/// Builds the `llm/complete` request for a single user message.
fn build_request(message: &str) -> anyhow::Result<JsonRpcRequest> {
    let params = CompletionParams {
        messages: vec![ChatMessage::user(message).into()],
        ..CompletionParams::default()
    };
    Ok(JsonRpcRequest::new(
        RequestId::from("cli"),
        methods::LLM_COMPLETE,
        Some(serde_json::to_value(params)?),
    ))
}

/// Executes the ask command.
pub fn execute(args: &AskArgs) -> anyhow::Result<()> {
    let message = input::resolve_message(&args.message)?;
    let request = build_request(&message)?;
    let response = McpHandler::default().dispatch(&request);

    if args.json {
        println!("{}", response.to_json()?);
        return Ok(());
    }

    match response {
        JsonRpcOutput::Success(resp) => {
            let reply = resp.result["content"].as_str().unwrap_or_default();
            output::print_reply(reply);
            Ok(())
        }
        JsonRpcOutput::Error(err) => {
            output::print_error(&err.error.message);
            anyhow::bail!("completion failed with code {}", err.error.code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digitalme_persona::respond;

    #[test]
    fn request_targets_llm_complete() {
        let req = build_request("hello").expect("build");
        assert_eq!(req.method, "llm/complete");
        let params = req.params.expect("params");
        assert_eq!(params["messages"][0]["role"], "user");
        assert_eq!(params["messages"][0]["content"], "hello");
        assert!(params.get("systemPrompt").is_none());
    }

    #[test]
    fn dispatch_yields_persona_reply() {
        let req = build_request("расскажи про проект").expect("build");
        match McpHandler::default().dispatch(&req) {
            JsonRpcOutput::Success(resp) => {
                assert_eq!(resp.result["content"], respond("проект").1);
            }
            JsonRpcOutput::Error(err) => panic!("unexpected error: {}", err.error.message),
        }
    }
}
