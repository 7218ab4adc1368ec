//! List templates tool implementation.

use rmcp::model::{CallToolResult, Content};
use rmcp::schemars;

use hangar_core::{Template, TemplateCatalog};

/// Parameters for the list_templates tool. Takes no arguments.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ListTemplatesParams {}

/// Render a single template as a text block.
pub fn format_template(template: &Template) -> String {
    let mut block = format!("{} ({})", template.name, template.id);
    match (&template.kind, &template.subtype) {
        (Some(kind), Some(subtype)) => {
            block.push_str(&format!("\n  Type: {} / {}", kind, subtype));
        }
        (Some(kind), None) => {
            block.push_str(&format!("\n  Type: {}", kind));
        }
        _ => {}
    }
    if !template.required_fields.is_empty() {
        block.push_str(&format!(
            "\n  Fields: {}",
            template.required_fields.join(", ")
        ));
    }
    block
}

/// Execute the list_templates tool.
///
/// Returns every template in the catalog, one block per template.
pub async fn execute(catalog: &dyn TemplateCatalog) -> CallToolResult {
    let templates = match catalog.all().await {
        Ok(templates) => templates,
        Err(error) => {
            return CallToolResult::error(vec![Content::text(format!(
                "Failed to list templates: {}",
                error
            ))]);
        }
    };

    if templates.is_empty() {
        return CallToolResult::success(vec![Content::text("No templates found.")]);
    }

    let blocks: Vec<String> = templates.iter().map(format_template).collect();
    CallToolResult::success(vec![Content::text(blocks.join("\n"))])
}
