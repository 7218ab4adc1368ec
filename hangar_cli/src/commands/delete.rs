//! Delete command implementation.

use std::sync::Arc;

use hangar_core::DispatchSink;

use crate::errors::CliError;
use crate::ui;

/// Dispatches a deletion for a server.
pub fn delete_server(sink: Arc<dyn DispatchSink>, server_id: &str) -> Result<(), CliError> {
    ui::header("Deleting server");

    if server_id.is_empty() {
        ui::error("server_id must be a non-empty string");
        return Err(CliError::InputError);
    }

    let rt = super::runtime()?;
    rt.block_on(async {
        sink.delete(server_id).await.map_err(|e| {
            ui::error_with_details("Deletion was not dispatched", &e.to_string());
            CliError::DispatchError
        })
    })?;

    ui::success(&format!("Dispatched deletion for server '{}'", server_id));
    Ok(())
}
