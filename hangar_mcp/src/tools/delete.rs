//! Delete tool implementation.

use rmcp::model::{CallToolResult, Content};
use rmcp::schemars;

use hangar_core::DispatchSink;

/// Parameters for the delete tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DeleteParams {
    /// ID of the server to delete (e.g. "srv-12").
    pub server_id: String,
}

/// Execute the delete tool.
///
/// Dispatches a deletion for the given server. The backend tears the server
/// down asynchronously; a success here means the command was accepted.
pub async fn execute(sink: &dyn DispatchSink, params: DeleteParams) -> CallToolResult {
    if params.server_id.is_empty() {
        return CallToolResult::error(vec![Content::text(
            "server_id must be a non-empty string.",
        )]);
    }

    match sink.delete(&params.server_id).await {
        Ok(()) => CallToolResult::success(vec![Content::text(format!(
            "Deletion dispatched for server '{}'.",
            params.server_id
        ))]),
        Err(error) => CallToolResult::error(vec![Content::text(format!(
            "Deletion was not dispatched: {}",
            error
        ))]),
    }
}
