//! MCP tool implementations for Hangar.

pub mod delete;
pub mod deploy;
pub mod list_templates;

pub use delete::DeleteParams;
pub use deploy::DeployParams;
pub use list_templates::ListTemplatesParams;
