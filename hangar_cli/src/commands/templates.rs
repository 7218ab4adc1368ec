//! Templates command: lists the deployable catalog.

use std::sync::Arc;

use hangar_core::TemplateCatalog;

use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Lists every template in the catalog.
pub fn list_templates(
    catalog: Arc<dyn TemplateCatalog>,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Listing templates");
    let rt = super::runtime()?;

    let templates = rt.block_on(catalog.all()).map_err(|e| {
        ui::error_with_details("Failed to read the template catalog", &e.to_string());
        CliError::CatalogError
    })?;

    ui::success(&format!("Found {} templates", templates.len()));

    match output_format {
        OutputFormat::Pretty => ui::pretty_template_list(&templates),
        OutputFormat::Json => ui::json_output(&templates),
    }

    Ok(())
}
