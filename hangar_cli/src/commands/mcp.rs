//! MCP server command implementation.

use std::sync::Arc;

use log::info;

use hangar_core::{DispatchSink, TemplateCatalog};
use hangar_mcp::HangarMcpServer;

use crate::errors::CliError;
use crate::ui;

/// Start the MCP server on stdio.
pub fn serve(
    catalog: Arc<dyn TemplateCatalog>,
    sink: Arc<dyn DispatchSink>,
) -> Result<(), CliError> {
    let rt = super::runtime()?;

    rt.block_on(async {
        // Surface a broken catalog before the protocol handshake.
        let templates = catalog.all().await.map_err(|e| {
            ui::error_with_details("Template catalog is unavailable", &e.to_string());
            CliError::CatalogError
        })?;
        info!("Serving {} templates over MCP", templates.len());

        let server = HangarMcpServer::new(catalog, sink);

        // Serve over stdio (blocks until connection closes)
        server.serve_stdio().await.map_err(|e| {
            ui::error_with_details("MCP server error", &e.to_string());
            CliError::ServerError
        })
    })
}
