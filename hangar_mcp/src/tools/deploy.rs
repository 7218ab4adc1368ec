//! Deploy tool implementation.

use rmcp::model::{CallToolResult, Content};
use rmcp::schemars;
use serde_json::Value;

use hangar_core::{
    DeployRequest, DispatchSink, Resolution, ResolveError, ResolvedVia, TemplateCatalog, resolve,
};

/// Parameters for the deploy tool.
///
/// Fields are deliberately loose: validation happens in the resolver so a
/// single error can report every problem with the request at once.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DeployParams {
    /// ID of the user the server is deployed for.
    #[serde(default)]
    pub user_id: Option<Value>,
    /// Exact template ID (e.g. "tpl-gpt"). Taken as-is, without a catalog lookup.
    #[serde(default)]
    pub template_id: Option<Value>,
    /// Template name to match instead of an ID, e.g. "gpt". Case-insensitive substring.
    #[serde(default)]
    pub name: Option<Value>,
    /// Credential payload for the deployed server, forwarded unchanged.
    #[serde(default)]
    pub creds: Option<Value>,
}

impl DeployParams {
    pub fn into_request(self) -> DeployRequest {
        DeployRequest {
            user_id: self.user_id,
            template_id: self.template_id,
            name: self.name,
            creds: self.creds,
        }
    }
}

/// Execute the deploy tool.
///
/// Resolves the request against the catalog and hands the resulting command
/// to the dispatch sink. The response says which template was deployed and
/// how it was chosen.
pub async fn execute(
    catalog: &dyn TemplateCatalog,
    sink: &dyn DispatchSink,
    params: DeployParams,
) -> CallToolResult {
    let request = params.into_request();

    let resolution = match resolve(&request, catalog).await {
        Ok(resolution) => resolution,
        Err(error @ ResolveError::TemplateNotFound(_)) => {
            return CallToolResult::error(vec![Content::text(format!(
                "{}. Use 'list_templates' to see available templates.",
                error
            ))]);
        }
        Err(error) => {
            return CallToolResult::error(vec![Content::text(error.to_string())]);
        }
    };

    if let Err(error) = sink.deploy(&resolution.command).await {
        return CallToolResult::error(vec![Content::text(format!(
            "Deployment was not dispatched: {}",
            error
        ))]);
    }

    CallToolResult::success(vec![Content::text(describe(&resolution))])
}

fn describe(resolution: &Resolution) -> String {
    match &resolution.via {
        ResolvedVia::TemplateId => format!(
            "Deployment dispatched: template '{}' for user '{}'.",
            resolution.command.template_id, resolution.command.user_id
        ),
        ResolvedVia::NameMatch { query, template } => format!(
            "Deployment dispatched: '{}' ({}) matched name '{}', for user '{}'.",
            template.name, template.id, query, resolution.command.user_id
        ),
    }
}
