//! Deploy command implementation.

use std::sync::Arc;

use serde_json::Value;

use hangar_core::{
    DeployRequest, DispatchSink, ResolveError, ResolvedVia, TemplateCatalog, resolve,
};

use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Resolves a deploy request and dispatches the resulting command.
pub fn deploy_server(
    catalog: Arc<dyn TemplateCatalog>,
    sink: Arc<dyn DispatchSink>,
    user_id: String,
    template_id: Option<String>,
    name: Option<String>,
    creds: &str,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Deploying server");

    let creds: Value = serde_json::from_str(creds).map_err(|e| {
        ui::error_with_details("Invalid creds JSON", &e.to_string());
        CliError::InputError
    })?;

    let request = DeployRequest {
        user_id: Some(Value::String(user_id)),
        template_id: template_id.map(Value::String),
        name: name.map(Value::String),
        creds: Some(creds),
    };

    let rt = super::runtime()?;
    rt.block_on(async {
        let resolution = resolve(&request, catalog.as_ref()).await.map_err(|e| {
            let code = match &e {
                ResolveError::Catalog(_) => CliError::CatalogError,
                _ => CliError::InputError,
            };
            ui::error_with_details("Could not resolve the deploy request", &e.to_string());
            code
        })?;

        sink.deploy(&resolution.command).await.map_err(|e| {
            ui::error_with_details("Deployment was not dispatched", &e.to_string());
            CliError::DispatchError
        })?;

        match output_format {
            OutputFormat::Pretty => match &resolution.via {
                ResolvedVia::TemplateId => ui::success(&format!(
                    "Dispatched deployment of template '{}' for user '{}'",
                    resolution.command.template_id, resolution.command.user_id
                )),
                ResolvedVia::NameMatch { query, template } => ui::success(&format!(
                    "Dispatched deployment of '{}' ({}), matched name '{}', for user '{}'",
                    template.name, template.id, query, resolution.command.user_id
                )),
            },
            OutputFormat::Json => ui::json_output(&resolution),
        }

        Ok(())
    })
}
