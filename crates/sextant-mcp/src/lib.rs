//! Sextant MCP Server
//!
//! An MCP server that exposes one bounded working-directory session as a
//! set of navigation tools. The session is confined to the root directory
//! given at startup: descent through symbolic links is refused and no tool
//! can move or act outside the root subtree.

use std::path::Path;
use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    model::*,
    service::{RequestContext, RoleServer},
};
use serde::{Deserialize, Serialize};
use sextant::{NavError, NavigatorSession, navigation_tools};

/// Parameters for the `descend` tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescendParams {
    /// Name of a direct child directory of the current position.
    pub target: String,
}

/// Parameters for the single-name file tools (`create_file`, `remove_file`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameParams {
    /// File name, without any directory part.
    pub name: String,
}

/// Parameters for the `rename_file` tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameParams {
    /// Current file name.
    pub old: String,
    /// New file name.
    pub new: String,
}

/// MCP server that drives one [`NavigatorSession`].
#[derive(Clone)]
pub struct SextantServer {
    session: NavigatorSession,
}

impl std::fmt::Debug for SextantServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SextantServer").finish_non_exhaustive()
    }
}

impl SextantServer {
    /// Create a server whose session is confined to `root`.
    ///
    /// # Errors
    ///
    /// Fails when `root` does not exist or is not a directory; no server
    /// is produced in that case.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, NavError> {
        Ok(Self {
            session: NavigatorSession::open(root)?,
        })
    }

    /// The session driven by this server.
    pub fn session(&self) -> &NavigatorSession {
        &self.session
    }

    /// Tool descriptors, taken from the core tool definitions so the MCP
    /// surface and any other dispatch layer advertise the same schemas.
    fn tools() -> Vec<Tool> {
        navigation_tools()
            .into_iter()
            .map(|def| {
                let input_schema = match def.parameters {
                    serde_json::Value::Object(map) => Arc::new(map),
                    _ => Arc::new(serde_json::Map::new()),
                };
                Tool {
                    name: def.name.into(),
                    title: None,
                    description: Some(def.description.into()),
                    input_schema,
                    output_schema: None,
                    annotations: None,
                    icons: None,
                    meta: None,
                }
            })
            .collect()
    }
}

/// Deserialize a tool's arguments, mapping any mismatch to an
/// invalid-params protocol error.
fn parse_params<T: serde::de::DeserializeOwned>(
    request: &CallToolRequestParam,
) -> Result<T, McpError> {
    match &request.arguments {
        Some(args) => serde_json::from_value(serde_json::Value::Object(args.clone()))
            .map_err(|e| McpError::invalid_params(format!("Invalid parameters: {}", e), None)),
        None => Err(McpError::invalid_params("Missing required parameters", None)),
    }
}

impl ServerHandler for SextantServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Sextant confines directory navigation to a bounded working tree. \
                Use 'list' to inspect the current directory, 'descend' and 'ascend' to \
                move around, 'current_trail' to see the path taken from the top, and \
                'create_file'/'remove_file'/'rename_file' to change files in place. \
                Navigation never follows symbolic links and never leaves the root \
                directory."
                    .into(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: Self::tools(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        // Navigator failures are recoverable and stay inside the text
        // result; only unknown tools and malformed arguments are protocol
        // errors.
        let text = match request.name.as_ref() {
            "descend" => {
                let params: DescendParams = parse_params(&request)?;
                self.session.descend(&params.target).await
            }
            "ascend" => self.session.ascend().await,
            "current_trail" => self.session.current_trail().await,
            "list" => self.session.list().await,
            "create_file" => {
                let params: NameParams = parse_params(&request)?;
                self.session.create_file(&params.name).await
            }
            "remove_file" => {
                let params: NameParams = parse_params(&request)?;
                self.session.remove_file(&params.name).await
            }
            "rename_file" => {
                let params: RenameParams = parse_params(&request)?;
                self.session.rename_file(&params.old, &params.new).await
            }
            _ => {
                return Err(McpError::invalid_params(
                    format!("Unknown tool: {}", request.name),
                    None,
                ));
            }
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
