//! Line-delimited JSON-RPC 2.0 server speaking the MCP tool methods.
//!
//! One request per line in, one response per line out. Notifications (no
//! `id`) are processed but never answered.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use orderdesk::mcp::McpServer;
//! use otooling::{DefaultToolRuntime, ToolDefinition, ToolRegistry};
//! use serde_json::json;
//!
//! let mut registry = ToolRegistry::new();
//! registry.register_fn(
//!     ToolDefinition::new("ping_tool", "Replies pong", json!({ "type": "object" })),
//!     |_args, _ctx| async move { Ok("pong".to_string()) },
//! );
//! let server = McpServer::new(DefaultToolRuntime::new(Arc::new(registry)));
//!
//! let runtime = tokio::runtime::Builder::new_current_thread()
//!     .enable_all()
//!     .build()
//!     .expect("runtime should build");
//! let mut output = Vec::new();
//! runtime
//!     .block_on(server.serve(&b"{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n"[..], &mut output))
//!     .expect("serve should finish at end of input");
//!
//! assert_eq!(
//!     String::from_utf8(output).expect("utf8"),
//!     "{\"jsonrpc\":\"2.0\",\"id\":1,\"result\":{}}\n"
//! );
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use otooling::{DefaultToolRuntime, ToolCall, ToolExecutionContext, ToolRegistry, ToolRuntime};

use crate::OrderDeskError;

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "amazon-orders";

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;

#[derive(Debug, Deserialize)]
struct RpcRequest {
    #[serde(default)]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcResponse {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl RpcResponse {
    fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    fn failure(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

pub struct McpServer {
    runtime: DefaultToolRuntime,
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    pub fn new(runtime: DefaultToolRuntime) -> Self {
        let registry = runtime.registry();
        Self { runtime, registry }
    }

    /// Reads requests until end of input, writing one response line per request.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<(), OrderDeskError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(&line).await {
                let mut encoded = serde_json::to_string(&response).map_err(|err| {
                    OrderDeskError::transport(format!("failed to encode response: {err}"))
                })?;
                encoded.push('\n');
                writer.write_all(encoded.as_bytes()).await?;
                writer.flush().await?;
            }
        }

        tracing::info!(phase = "transport", event = "input_closed");
        Ok(())
    }

    pub async fn handle_line(&self, line: &str) -> Option<RpcResponse> {
        let message: Value = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(err) => {
                tracing::warn!(phase = "transport", event = "parse_error", error = %err);
                return Some(RpcResponse::failure(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {err}"),
                ));
            }
        };

        self.handle_message(message).await
    }

    pub async fn handle_message(&self, message: Value) -> Option<RpcResponse> {
        let raw_id = message.get("id").cloned();
        let request: RpcRequest = match serde_json::from_value(message) {
            Ok(request) => request,
            Err(err) => {
                tracing::warn!(phase = "transport", event = "invalid_request", error = %err);
                return raw_id.map(|id| {
                    RpcResponse::failure(id, INVALID_REQUEST, format!("Invalid request: {err}"))
                });
            }
        };

        tracing::debug!(
            phase = "transport",
            event = "request",
            method = request.method,
            notification = request.id.is_none()
        );

        let id = request.id.clone();
        let outcome = self.dispatch(&request).await;
        let id = id?;

        Some(match outcome {
            Ok(result) => RpcResponse::success(id, result),
            Err(error) => RpcResponse::failure(id, error.code, error.message),
        })
    }

    async fn dispatch(&self, request: &RpcRequest) -> Result<Value, RpcError> {
        match request.method.as_str() {
            "initialize" => Ok(json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": { "listChanged": false } },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": env!("CARGO_PKG_VERSION")
                }
            })),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(self.list_tools()),
            "tools/call" => self.call_tool(request).await,
            method if method.starts_with("notifications/") => Ok(Value::Null),
            method => Err(RpcError {
                code: METHOD_NOT_FOUND,
                message: format!("Method not found: {method}"),
            }),
        }
    }

    fn list_tools(&self) -> Value {
        let tools: Vec<Value> = self
            .registry
            .definitions()
            .into_iter()
            .map(|definition| {
                json!({
                    "name": definition.name,
                    "description": definition.description,
                    "inputSchema": definition.input_schema,
                })
            })
            .collect();

        json!({ "tools": tools })
    }

    async fn call_tool(&self, request: &RpcRequest) -> Result<Value, RpcError> {
        let params: CallParams = serde_json::from_value(request.params.clone()).map_err(|err| {
            RpcError {
                code: INVALID_PARAMS,
                message: format!("Invalid tools/call params: {err}"),
            }
        })?;

        let call_id = request.id.as_ref().map(id_text).unwrap_or_default();
        let arguments = match params.arguments {
            Value::Null => "{}".to_string(),
            arguments => arguments.to_string(),
        };
        let call = ToolCall::new(call_id.clone(), params.name, arguments);
        let context = ToolExecutionContext::new().with_request_id(call_id);

        match self.runtime.execute(call, context).await {
            Ok(result) => Ok(tool_result(result.output, false)),
            Err(error) if error.is_caller_error() => Err(RpcError {
                code: INVALID_PARAMS,
                message: error.message,
            }),
            Err(error) => Ok(tool_result(format!("Error: {}", error.message), true)),
        }
    }
}

fn tool_result(text: String, is_error: bool) -> Value {
    json!({
        "content": [{ "type": "text", "text": text }],
        "isError": is_error,
    })
}

fn id_text(id: &Value) -> String {
    match id {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Serves on the process stdin and stdout until stdin closes.
pub async fn serve_stdio(server: &McpServer) -> Result<(), OrderDeskError> {
    let reader = BufReader::new(tokio::io::stdin());
    server.serve(reader, tokio::io::stdout()).await
}

#[cfg(test)]
mod tests {
    use otooling::{ToolDefinition, ToolError};

    use super::*;

    fn server() -> McpServer {
        let mut registry = ToolRegistry::new();
        registry.register_fn(
            ToolDefinition::new("echo", "Echoes arguments", json!({ "type": "object" })),
            |args, _ctx| async move { Ok(args) },
        );
        registry.register_fn(
            ToolDefinition::new("strict", "Rejects everything", json!({ "type": "object" })),
            |_args, _ctx| async move { Err(ToolError::invalid_arguments("'x' must be a string")) },
        );
        registry.register_fn(
            ToolDefinition::new("flaky", "Fails while running", json!({ "type": "object" })),
            |_args, _ctx| async move { Err(ToolError::execution("backend went away")) },
        );
        McpServer::new(DefaultToolRuntime::new(Arc::new(registry)))
    }

    async fn request(server: &McpServer, line: &str) -> Value {
        let response = server.handle_line(line).await.expect("response expected");
        serde_json::to_value(response).expect("response should encode")
    }

    #[tokio::test]
    async fn initialize_reports_server_info_and_tools_capability() {
        let response = request(
            &server(),
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        )
        .await;

        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(response["result"]["serverInfo"]["name"], "amazon-orders");
        assert!(response["result"]["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn tools_list_uses_camel_case_schema_key() {
        let response = request(&server(), r#"{"jsonrpc":"2.0","id":"a","method":"tools/list"}"#).await;

        let tools = response["result"]["tools"].as_array().expect("tools array");
        assert_eq!(tools.len(), 3);
        assert_eq!(tools[0]["name"], "echo");
        assert_eq!(tools[0]["inputSchema"]["type"], "object");
    }

    #[tokio::test]
    async fn tools_call_wraps_output_as_text_content() {
        let response = request(
            &server(),
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"echo","arguments":{"k":"v"}}}"#,
        )
        .await;

        assert_eq!(response["result"]["content"][0]["type"], "text");
        assert_eq!(response["result"]["content"][0]["text"], r#"{"k":"v"}"#);
        assert_eq!(response["result"]["isError"], false);
    }

    #[tokio::test]
    async fn missing_arguments_are_sent_as_empty_object() {
        let response = request(
            &server(),
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"echo"}}"#,
        )
        .await;

        assert_eq!(response["result"]["content"][0]["text"], "{}");
    }

    #[tokio::test]
    async fn caller_mistakes_are_invalid_params() {
        let server = server();

        let unknown = request(
            &server,
            r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"nope"}}"#,
        )
        .await;
        assert_eq!(unknown["error"]["code"], INVALID_PARAMS);

        let rejected = request(
            &server,
            r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"strict"}}"#,
        )
        .await;
        assert_eq!(rejected["error"]["code"], INVALID_PARAMS);
        assert_eq!(rejected["error"]["message"], "'x' must be a string");

        let malformed = request(
            &server,
            r#"{"jsonrpc":"2.0","id":6,"method":"tools/call","params":{"arguments":{}}}"#,
        )
        .await;
        assert_eq!(malformed["error"]["code"], INVALID_PARAMS);
    }

    #[tokio::test]
    async fn execution_failures_are_reported_in_the_result() {
        let response = request(
            &server(),
            r#"{"jsonrpc":"2.0","id":7,"method":"tools/call","params":{"name":"flaky"}}"#,
        )
        .await;

        assert_eq!(response["result"]["isError"], true);
        assert_eq!(response["result"]["content"][0]["text"], "Error: backend went away");
    }

    #[tokio::test]
    async fn protocol_errors_use_standard_codes() {
        let server = server();

        let parse = request(&server, "{not json").await;
        assert_eq!(parse["error"]["code"], PARSE_ERROR);
        assert_eq!(parse["id"], Value::Null);

        let unknown = request(&server, r#"{"jsonrpc":"2.0","id":8,"method":"resources/list"}"#).await;
        assert_eq!(unknown["error"]["code"], METHOD_NOT_FOUND);

        let invalid = request(&server, r#"{"jsonrpc":"2.0","id":9}"#).await;
        assert_eq!(invalid["error"]["code"], INVALID_REQUEST);
    }

    #[tokio::test]
    async fn notifications_get_no_reply() {
        let server = server();

        assert!(
            server
                .handle_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
                .await
                .is_none()
        );
        assert!(
            server
                .handle_line(r#"{"jsonrpc":"2.0","method":"unknown/method"}"#)
                .await
                .is_none()
        );
    }
}
