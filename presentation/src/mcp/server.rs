//! Stdio protocol server
//!
//! Line-delimited JSON-RPC 2.0 over stdin/stdout. The binding is thin:
//! `tools/list` reads the dispatcher's definitions through the schema
//! converter, `tools/call` forwards to the dispatcher and wraps the
//! outcome. stdout carries protocol frames only; all logging goes to
//! stderr.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use relay_application::{Dispatcher, ToolSchemaPort};

use super::envelope::CallResult;

const PROTOCOL_VERSION: &str = "2024-11-05";

const PARSE_ERROR: i64 = -32700;
const METHOD_NOT_FOUND: i64 = -32601;
const INVALID_PARAMS: i64 = -32602;

#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    #[allow(dead_code)]
    jsonrpc: Option<String>,
    /// Absent for notifications, which expect no response.
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

fn ok_response(id: Value, result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

fn err_response(id: Value, code: i64, message: String) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "error": { "code": code, "message": message } })
}

/// Serves the tool protocol over stdio until EOF or cancellation.
pub struct StdioServer {
    dispatcher: Arc<Dispatcher>,
    schema: Arc<dyn ToolSchemaPort>,
    server_name: String,
    server_version: String,
}

impl StdioServer {
    pub fn new(
        dispatcher: Arc<Dispatcher>,
        schema: Arc<dyn ToolSchemaPort>,
        server_name: impl Into<String>,
        server_version: impl Into<String>,
    ) -> Self {
        Self {
            dispatcher,
            schema,
            server_name: server_name.into(),
            server_version: server_version.into(),
        }
    }

    /// Read frames from stdin and write responses to stdout.
    pub async fn run(&self, cancel: CancellationToken) -> std::io::Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        let mut lines = stdin.lines();

        info!(
            tools = self.dispatcher.tool_count(),
            "serving tool protocol over stdio"
        );

        loop {
            let line = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("shutdown requested");
                    break;
                }
                line = lines.next_line() => line?,
            };
            let Some(line) = line else {
                debug!("stdin closed");
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(&line, &cancel).await {
                let mut frame = serde_json::to_vec(&response)?;
                frame.push(b'\n');
                stdout.write_all(&frame).await?;
                stdout.flush().await?;
            }
        }

        Ok(())
    }

    /// Handle one raw frame. Returns `None` for notifications.
    async fn handle_line(&self, line: &str, cancel: &CancellationToken) -> Option<Value> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "unparseable frame");
                return Some(err_response(
                    Value::Null,
                    PARSE_ERROR,
                    format!("parse error: {e}"),
                ));
            }
        };

        let Some(id) = request.id else {
            debug!(method = %request.method, "notification ignored");
            return None;
        };

        Some(self.handle_request(id, &request.method, request.params, cancel).await)
    }

    async fn handle_request(
        &self,
        id: Value,
        method: &str,
        params: Value,
        cancel: &CancellationToken,
    ) -> Value {
        match method {
            "initialize" => ok_response(
                id,
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": { "tools": {} },
                    "serverInfo": {
                        "name": self.server_name,
                        "version": self.server_version,
                    },
                }),
            ),
            "ping" => ok_response(id, json!({})),
            "tools/list" => {
                let schemas = self.schema.all_tools_schema(&self.dispatcher.definitions());
                ok_response(id, json!({ "tools": schemas }))
            }
            "tools/call" => {
                let Some(name) = params["name"].as_str().map(str::to_string) else {
                    return err_response(
                        id,
                        INVALID_PARAMS,
                        "missing tool name".to_string(),
                    );
                };
                let arguments = match params.get("arguments") {
                    Some(v) => v.clone(),
                    None => json!({}),
                };

                let outcome = self.dispatcher.call(&name, arguments, cancel).await;
                let result = CallResult::from(outcome);
                ok_response(id, serde_json::to_value(result).unwrap_or(Value::Null))
            }
            other => err_response(
                id,
                METHOD_NOT_FOUND,
                format!("method not found: {other}"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use relay_domain::{
        Tool, ToolArgs, ToolDefinition, ToolError, ToolHandler, ToolParameter, ToolSet,
    };

    struct EchoHandler;

    #[async_trait]
    impl ToolHandler for EchoHandler {
        async fn run(&self, args: &ToolArgs) -> Result<serde_json::Value, ToolError> {
            Ok(json!({ "echoed": args.get_str("word") }))
        }
    }

    struct PassthroughSchema;

    impl ToolSchemaPort for PassthroughSchema {
        fn tool_to_schema(&self, tool: &ToolDefinition) -> Value {
            json!({ "name": tool.canonical_name(), "description": tool.description })
        }
    }

    fn server() -> StdioServer {
        let mut set = ToolSet::new();
        set.insert(
            "test",
            Tool::new(
                ToolDefinition::new("echo", "Echo a word")
                    .with_parameter(ToolParameter::new("word", "Word to echo", true)),
                Arc::new(EchoHandler),
            ),
        )
        .unwrap();
        StdioServer::new(
            Arc::new(Dispatcher::new(set)),
            Arc::new(PassthroughSchema),
            "onchain-relay",
            "0.1.0",
        )
    }

    #[tokio::test]
    async fn test_initialize() {
        let server = server();
        let response = server
            .handle_line(
                r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["serverInfo"]["name"], "onchain-relay");
        assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
    }

    #[tokio::test]
    async fn test_tools_list() {
        let server = server();
        let response = server
            .handle_line(
                r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], "ECHO");
    }

    #[tokio::test]
    async fn test_tools_call_success() {
        let server = server();
        let response = server
            .handle_line(
                r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"ECHO","arguments":{"word":"hbar"}}}"#,
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        let result = &response["result"];
        assert_eq!(result["isError"], false);
        assert!(result["content"][0]["text"].as_str().unwrap().contains("hbar"));
    }

    #[tokio::test]
    async fn test_tools_call_failure_is_envelope_not_rpc_error() {
        let server = server();
        let response = server
            .handle_line(
                r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"ECHO","arguments":{}}}"#,
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert!(response["error"].is_null(), "application failure must not be an RPC error");
        assert_eq!(response["result"]["isError"], true);
        assert!(
            response["result"]["content"][0]["text"]
                .as_str()
                .unwrap()
                .contains("word")
        );
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let server = server();
        let response = server
            .handle_line(
                r#"{"jsonrpc":"2.0","id":5,"method":"resources/list"}"#,
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_notification_gets_no_response() {
        let server = server();
        let response = server
            .handle_line(
                r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
                &CancellationToken::new(),
            )
            .await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_parse_error() {
        let server = server();
        let response = server
            .handle_line("{not json", &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(response["error"]["code"], PARSE_ERROR);
    }

    #[tokio::test]
    async fn test_call_without_name_is_invalid_params() {
        let server = server();
        let response = server
            .handle_line(
                r#"{"jsonrpc":"2.0","id":6,"method":"tools/call","params":{"arguments":{}}}"#,
                &CancellationToken::new(),
            )
            .await
            .unwrap();
        assert_eq!(response["error"]["code"], INVALID_PARAMS);
    }
}
