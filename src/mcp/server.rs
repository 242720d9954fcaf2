//! Line-delimited JSON-RPC server loop.

use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use super::protocol::{ProtocolError, Request, Response, JSONRPC_VERSION};
use super::tool;
use crate::ports::git::GitRepo;

/// Protocol revisions this server can speak, newest first.
pub const SUPPORTED_PROTOCOL_VERSIONS: &[&str] = &["2025-06-18", "2025-03-26", "2024-11-05"];

const SERVER_NAME: &str = "gh-image";
const SERVER_TITLE: &str = "GitHub image upload tool for obtaining image preview URLs";

/// Dispatches MCP requests to the upload tool.
///
/// Requests are handled one at a time; a `tools/call` blocks on git until
/// the whole upload sequence has finished.
pub struct Server<'a> {
    git: &'a dyn GitRepo,
}

impl<'a> Server<'a> {
    /// Creates a server driving the given git port.
    #[must_use]
    pub fn new(git: &'a dyn GitRepo) -> Self {
        Self { git }
    }

    /// Handles one input line, returning the reply line if one is due.
    #[must_use]
    pub fn handle_line(&self, line: &str) -> Option<String> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!("unparseable message: {e}");
                return Some(Response::failure(Value::Null, &ProtocolError::Parse(e)).to_line());
            }
        };
        let id = value.get("id").cloned().unwrap_or(Value::Null);

        let request: Request = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                let err = ProtocolError::InvalidRequest(e.to_string());
                return Some(Response::failure(id, &err).to_line());
            }
        };
        self.handle(request).map(|response| response.to_line())
    }

    /// Handles a parsed request. Notifications never produce a response.
    #[must_use]
    pub fn handle(&self, request: Request) -> Option<Response> {
        if request.jsonrpc != JSONRPC_VERSION {
            let err = ProtocolError::InvalidRequest(format!(
                "unsupported jsonrpc version {:?}",
                request.jsonrpc
            ));
            return Some(Response::failure(request.id.unwrap_or(Value::Null), &err));
        }

        let Some(id) = request.id else {
            debug!(method = %request.method, "notification");
            return None;
        };

        debug!(method = %request.method, %id, "request");
        match self.dispatch(&request.method, request.params) {
            Ok(result) => Some(Response::success(id, result)),
            Err(err) => {
                warn!(method = %request.method, "{err}");
                Some(Response::failure(id, &err))
            }
        }
    }

    fn dispatch(&self, method: &str, params: Value) -> Result<Value, ProtocolError> {
        match method {
            "initialize" => Ok(initialize_result(&params)),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": [tool::descriptor()] })),
            "tools/call" => {
                let result = tool::call(self.git, params)?;
                serde_json::to_value(result).map_err(|e| ProtocolError::Internal(e.to_string()))
            }
            other => Err(ProtocolError::MethodNotFound(other.to_string())),
        }
    }

    /// Serves requests from `reader` until end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the input or writing a reply fails.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(reply) = self.handle_line(line) {
                writer.write_all(reply.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }
        info!("input closed, shutting down");
        Ok(())
    }

    /// Serves requests over the process's stdin and stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if stdin or stdout fail.
    pub async fn serve_stdio(&self) -> std::io::Result<()> {
        info!(tool = tool::TOOL_NAME, "serving MCP over stdio");
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
    }
}

fn initialize_result(params: &Value) -> Value {
    let requested = params.get("protocolVersion").and_then(Value::as_str);
    let version = requested
        .filter(|v| SUPPORTED_PROTOCOL_VERSIONS.contains(v))
        .unwrap_or(SUPPORTED_PROTOCOL_VERSIONS[0]);

    json!({
        "protocolVersion": version,
        "capabilities": { "tools": { "listChanged": false } },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "title": SERVER_TITLE,
        },
    })
}
