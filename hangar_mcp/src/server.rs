//! Core MCP server implementation for Hangar.

use std::sync::Arc;

use log::debug;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt, handler::server::wrapper::Parameters,
    model::*, tool, tool_handler, tool_router, transport::stdio,
};

use hangar_core::{DispatchSink, TemplateCatalog};

use crate::tools::{DeleteParams, DeployParams, ListTemplatesParams};

/// Error type for MCP server operations.
#[derive(Debug)]
pub enum ServerError {
    /// MCP protocol error
    Mcp(String),
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerError::Mcp(msg) => write!(f, "MCP error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

/// MCP server for Hangar deployments.
///
/// Exposes the template catalog and the deployment backend as MCP tools.
/// The catalog and sink are injected at construction and shared across
/// concurrent tool calls; neither is mutated after startup.
#[derive(Clone)]
pub struct HangarMcpServer {
    catalog: Arc<dyn TemplateCatalog>,
    sink: Arc<dyn DispatchSink>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<HangarMcpServer>,
}

#[tool_router]
impl HangarMcpServer {
    /// Create a new MCP server over the given catalog and dispatch sink.
    pub fn new(catalog: Arc<dyn TemplateCatalog>, sink: Arc<dyn DispatchSink>) -> Self {
        Self {
            catalog,
            sink,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Deploy a server for a user. Provide 'user_id' and 'creds', plus either \
        'template_id' for an exact template or 'name' to match a template by name \
        (case-insensitive substring). An explicit 'template_id' is taken as-is and wins over 'name'. \
        Use 'list_templates' to see what is available."
    )]
    async fn deploy(
        &self,
        Parameters(params): Parameters<DeployParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: deploy, user_id={:?}, template_id={:?}, name={:?}",
            params.user_id, params.template_id, params.name
        );
        Ok(crate::tools::deploy::execute(self.catalog.as_ref(), self.sink.as_ref(), params).await)
    }

    #[tool(
        description = "Delete a deployed server by its server ID. \
        The deletion is dispatched to the deployment backend; it does not wait for teardown to finish."
    )]
    async fn delete(
        &self,
        Parameters(params): Parameters<DeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: delete, server_id={}", params.server_id);
        Ok(crate::tools::delete::execute(self.sink.as_ref(), params).await)
    }

    #[tool(
        description = "List all deployable templates with their IDs, types and required credential fields. \
        Use the listed IDs with 'deploy'."
    )]
    async fn list_templates(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<ListTemplatesParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: list_templates");
        Ok(crate::tools::list_templates::execute(self.catalog.as_ref()).await)
    }

    /// Serve MCP over stdio (stdin/stdout).
    ///
    /// This method blocks until the connection is closed.
    pub async fn serve_stdio(self) -> Result<(), ServerError> {
        debug!("Starting MCP server on stdio");
        let service = self
            .serve(stdio())
            .await
            .map_err(|e| ServerError::Mcp(format!("Failed to start server: {}", e)))?;
        service
            .waiting()
            .await
            .map_err(|e| ServerError::Mcp(format!("Server error: {}", e)))?;
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for HangarMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Hangar MCP server. Use 'list_templates' to discover deployable templates, \
                 'deploy' to dispatch a deployment for a user, and 'delete' to tear a server down."
                    .into(),
            ),
        }
    }
}
