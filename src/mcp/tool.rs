//! The `commit-and-upload-image` tool: descriptor and call handling.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::protocol::ProtocolError;
use crate::ports::git::GitRepo;
use crate::upload::{self, ImagePath, StructuredResult, UploadOutcome};

/// Protocol-level tool name.
pub const TOOL_NAME: &str = "commit-and-upload-image";

const TOOL_TITLE: &str = "Commit and Upload Image for preparing Github comment with image";

const TOOL_DESCRIPTION: &str = "\
- Agents normally cannot create PR or issue comments with image previews on GitHub
- Neither the gh CLI nor GitHub's own MCP tools can attach an image to a comment
- An image link pointing at a local file will not render when a human opens the PR in a browser
- This tool commits the image to the repository and returns a GitHub URL for it, so the preview renders for humans reading the comment
- Put the screenshot for the PR at 'commitAndUploadImagePath' before calling
- Confirm beforehand that the gh command-line tool is available and authenticated, and push the commit before posting the comment";

/// Arguments accepted by the tool.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitAndUploadArgs {
    /// Repository-relative path of the image or image directory.
    pub commit_and_upload_image_path: ImagePath,
}

#[derive(Debug, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

/// One text item of a tool result's `content`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TextContent {
    #[serde(rename = "type")]
    kind: &'static str,
    /// The text payload.
    pub text: String,
}

/// The full `tools/call` result.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    /// Mirrors `structured_content.is_error`.
    pub is_error: bool,
    /// Narrow projection matching the declared output schema.
    pub structured_content: StructuredResult,
    /// The rich payload as JSON text.
    pub content: Vec<TextContent>,
}

impl From<UploadOutcome> for ToolResult {
    fn from(outcome: UploadOutcome) -> Self {
        let structured_content = StructuredResult::from(&outcome);
        Self {
            is_error: structured_content.is_error,
            structured_content,
            content: vec![TextContent { kind: "text", text: outcome.to_json() }],
        }
    }
}

/// The entry returned by `tools/list`.
#[must_use]
pub fn descriptor() -> Value {
    json!({
        "name": TOOL_NAME,
        "title": TOOL_TITLE,
        "description": TOOL_DESCRIPTION,
        "annotations": {
            "readOnlyHint": false,
            "destructiveHint": true,
            "idempotentHint": false,
            "openWorldHint": true,
        },
        "inputSchema": {
            "type": "object",
            "properties": {
                "commitAndUploadImagePath": {
                    "type": "string",
                    "minLength": 1,
                    "pattern": "\\S",
                    "description": "Path to the image or directory of images to commit and upload, \
                        relative to the repository root (e.g. 'images/pr/[PR_NUMBER]')",
                },
            },
            "required": ["commitAndUploadImagePath"],
            "additionalProperties": false,
        },
        "outputSchema": {
            "type": "object",
            "properties": {
                "isError": { "type": "boolean" },
                "message": {
                    "type": "string",
                    "description": "Message about the operation result",
                },
                "previewUrl": {
                    "type": ["string", "null"],
                    "description": "Markdown image snippet for previewing the uploaded image in a GitHub PR",
                },
            },
            "required": ["isError", "message", "previewUrl"],
        },
    })
}

/// Handles `tools/call`, validating parameters before touching git.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidParams`] for an unknown tool name or
/// arguments that fail validation (including an empty path).
pub fn call(git: &dyn GitRepo, params: Value) -> Result<ToolResult, ProtocolError> {
    let params: CallParams = serde_json::from_value(params)
        .map_err(|e| ProtocolError::InvalidParams(format!("tools/call: {e}")))?;
    if params.name != TOOL_NAME {
        return Err(ProtocolError::InvalidParams(format!("Unknown tool: {}", params.name)));
    }
    let args: CommitAndUploadArgs = serde_json::from_value(params.arguments)
        .map_err(|e| ProtocolError::InvalidParams(format!("Invalid arguments for {TOOL_NAME}: {e}")))?;

    Ok(upload::commit_and_upload(git, &args.commit_and_upload_image_path).into())
}
