mod delete;
mod deploy;
mod mcp;
mod templates;

pub use delete::delete_server;
pub use deploy::deploy_server;
pub use mcp::serve;
pub use templates::list_templates;

use std::sync::Arc;

use hangar_core::{DispatchSink, LogSink, StaticCatalog, TemplateCatalog};
use hangar_mcp::remote::{ApiSink, HttpCatalog, QueueSink};

use crate::cli::{CatalogSource, SinkSpec};
use crate::errors::CliError;
use crate::ui;

/// Build the template catalog selected on the command line.
pub fn build_catalog(
    source: &CatalogSource,
    token: Option<&str>,
) -> Result<Arc<dyn TemplateCatalog>, CliError> {
    match source {
        CatalogSource::Builtin => Ok(Arc::new(StaticCatalog::builtin())),
        CatalogSource::Manifest(path) => {
            let catalog = StaticCatalog::from_json_file(path).map_err(|e| {
                ui::error_with_details("Failed to load template manifest", &e.to_string());
                CliError::CatalogError
            })?;
            Ok(Arc::new(catalog))
        }
        CatalogSource::Remote(url) => Ok(Arc::new(match token {
            Some(token) => HttpCatalog::with_token(url.clone(), token),
            None => HttpCatalog::new(url.clone()),
        })),
    }
}

/// Build the dispatch sink selected on the command line.
pub fn build_sink(spec: &SinkSpec, queue: &str, token: Option<&str>) -> Arc<dyn DispatchSink> {
    match spec {
        SinkSpec::Log => Arc::new(LogSink),
        SinkSpec::Api(url) => Arc::new(match token {
            Some(token) => ApiSink::with_token(url.clone(), token),
            None => ApiSink::new(url.clone()),
        }),
        SinkSpec::Queue(url) => Arc::new(match token {
            Some(token) => QueueSink::with_token(url.clone(), queue, token),
            None => QueueSink::new(url.clone(), queue),
        }),
    }
}

/// Create a tokio runtime for commands that drive async backends.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new().map_err(|e| {
        ui::error_with_details("Failed to create async runtime", &e.to_string());
        CliError::RuntimeError
    })
}
