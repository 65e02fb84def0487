//! MCP tool server over stdio.
//!
//! Advertises the registered tools and executes them for an external agent
//! host. stdout carries protocol frames only; diagnostics go through
//! `tracing`, which the binary points at stderr.
//!
//! | Method | Result |
//! |--------|--------|
//! | `initialize` | protocol version, `tools` capability, server info |
//! | `ping` | `{}` |
//! | `tools/list` | tool descriptors in registration order |
//! | `tools/call` | text content, `isError` set for tool failures |

use super::protocol::{
    CallToolParams, CallToolResult, DEFAULT_PROTOCOL_VERSION, InitializeParams, JsonRpcRequest,
    JsonRpcResponse, MessageKind, RpcError, classify_message,
};
use crate::tools::JsonSchemaToolConverter;
use clinic_application::ports::tool_executor::ToolExecutorPort;
use clinic_domain::ToolCall;
use serde_json::{Value, json};
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

/// Name reported in `serverInfo`.
pub const SERVER_NAME: &str = "healthcare-assistant";

/// Errors that end the serve loop.
#[derive(Error, Debug)]
pub enum McpServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

pub struct McpServer {
    executor: Arc<dyn ToolExecutorPort>,
    version: String,
}

impl McpServer {
    pub fn new(executor: Arc<dyn ToolExecutorPort>) -> Self {
        Self {
            executor,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Serve on the process's stdin/stdout until stdin closes.
    pub async fn serve_stdio(&self) -> Result<(), McpServerError> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serve newline-delimited frames from `reader`, answering on `writer`.
    ///
    /// Returns cleanly on EOF.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<(), McpServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("MCP server '{}' listening on stdio", SERVER_NAME);
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line).await {
                let mut frame = serde_json::to_vec(&response)?;
                frame.push(b'\n');
                writer.write_all(&frame).await?;
                writer.flush().await?;
            }
        }

        info!("stdin closed, MCP server shutting down");
        Ok(())
    }

    /// Handle one frame. Returns `None` when no response is due.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let json: Value = match serde_json::from_str(line) {
            Ok(json) => json,
            Err(e) => {
                warn!("Unparseable frame: {}", e);
                return Some(JsonRpcResponse::failure(Value::Null, RpcError::parse_error(e)));
            }
        };

        match classify_message(&json) {
            MessageKind::Request => {}
            MessageKind::Notification => {
                debug!("Notification: {}", json["method"]);
                return None;
            }
            MessageKind::Response => {
                debug!("Ignoring response frame from host");
                return None;
            }
            MessageKind::Invalid => {
                let id = json.get("id").cloned().unwrap_or(Value::Null);
                return Some(JsonRpcResponse::failure(
                    id,
                    RpcError::invalid_request("missing method"),
                ));
            }
        }

        let request: JsonRpcRequest = match serde_json::from_value(json) {
            Ok(request) => request,
            Err(e) => {
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    RpcError::invalid_request(e),
                ));
            }
        };
        let id = request.id.clone().unwrap_or(Value::Null);

        debug!(method = %request.method, "Request");
        Some(match self.dispatch(&request).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::failure(id, error),
        })
    }

    async fn dispatch(&self, request: &JsonRpcRequest) -> Result<Value, RpcError> {
        match request.method.as_str() {
            "initialize" => Ok(self.initialize(request.params.as_ref())),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({
                "tools": JsonSchemaToolConverter::mcp_tools(self.executor.tool_spec()),
            })),
            "tools/call" => self.call_tool(request.params.clone()).await,
            other => Err(RpcError::method_not_found(other)),
        }
    }

    fn initialize(&self, params: Option<&Value>) -> Value {
        let requested = params
            .and_then(|p| serde_json::from_value::<InitializeParams>(p.clone()).ok())
            .and_then(|p| p.protocol_version);
        let protocol_version = requested.as_deref().unwrap_or(DEFAULT_PROTOCOL_VERSION);
        info!("Host initialized with protocol {}", protocol_version);

        json!({
            "protocolVersion": protocol_version,
            "capabilities": { "tools": {} },
            "serverInfo": { "name": SERVER_NAME, "version": self.version },
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, RpcError> {
        let params = params.ok_or_else(|| RpcError::invalid_params("missing params"))?;
        let params: CallToolParams =
            serde_json::from_value(params).map_err(RpcError::invalid_params)?;

        let mut call = ToolCall::new(&params.name);
        if let Some(arguments) = params.arguments {
            call.arguments = arguments;
        }

        let result = match self.executor.execute(&call).await {
            Ok(output) => CallToolResult::text(output),
            Err(e) => {
                warn!(code = e.code(), "Tool call failed: {}", e);
                CallToolResult::error(e.to_string())
            }
        };
        serde_json::to_value(result).map_err(|e| RpcError::new(-32603, e.to_string()))
    }
}
