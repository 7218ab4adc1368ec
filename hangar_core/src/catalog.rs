//! The template catalog capability and its in-memory implementation.

use std::fmt;
use std::io;
use std::path::Path;

use async_trait::async_trait;
use log::debug;

use crate::template::{Template, TemplateManifest};

/// Defines the errors a template catalog source can raise.
#[derive(Debug)]
pub enum CatalogError {
    Io(io::Error),
    Parse(String),
    Unreachable(String),
    Rejected { status: u16, detail: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(error) => {
                write!(
                    f,
                    "There was a problem reading the template catalog: {}",
                    error
                )
            }
            CatalogError::Parse(detail) => {
                write!(f, "The template catalog could not be parsed: {}", detail)
            }
            CatalogError::Unreachable(detail) => {
                write!(f, "The template catalog could not be reached: {}", detail)
            }
            CatalogError::Rejected { status, detail } => {
                write!(
                    f,
                    "The template catalog rejected the request (status {}): {}",
                    status, detail
                )
            }
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<io::Error> for CatalogError {
    fn from(err: io::Error) -> Self {
        CatalogError::Io(err)
    }
}

/// Read-only source of deployment templates.
///
/// Any conforming implementation is interchangeable: an embedded list, a
/// manifest document on disk, or a remote listing API.
#[async_trait]
pub trait TemplateCatalog: Send + Sync {
    /// All templates, with metadata, in catalog order.
    async fn all(&self) -> Result<Vec<Template>, CatalogError>;

    /// Templates whose name contains `fragment` (case-insensitive), in
    /// catalog order.
    ///
    /// Implementations share this default so every catalog backend applies
    /// the same matching policy.
    async fn find_by_name(&self, fragment: &str) -> Result<Vec<Template>, CatalogError> {
        Ok(self
            .all()
            .await?
            .into_iter()
            .filter(|template| template.matches_name(fragment))
            .collect())
    }
}

/// An in-memory template catalog.
#[derive(Debug)]
pub struct StaticCatalog {
    templates: Vec<Template>,
}

impl StaticCatalog {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// The catalog that ships with the binary: a small fixed set of
    /// deployable server templates.
    pub fn builtin() -> Self {
        Self::new(vec![
            Template::new("tpl-mongo", "MongoDB Server")
                .with_kind("database")
                .with_subtype("document")
                .with_required_field("root_password")
                .with_flag("persistent", true),
            Template::new("tpl-redis", "Redis Cache")
                .with_kind("database")
                .with_subtype("key-value")
                .with_flag("persistent", false),
            Template::new("tpl-gpt", "Basic GPT Server")
                .with_kind("app")
                .with_subtype("llm")
                .with_required_field("openai_api_key"),
            Template::new("tpl-web", "Static Web Server")
                .with_kind("app")
                .with_subtype("web")
                .with_flag("public", true),
        ])
    }

    /// Load a catalog from a JSON manifest document.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        let manifest: TemplateManifest =
            serde_json::from_str(&contents).map_err(|e| CatalogError::Parse(e.to_string()))?;

        debug!(
            "Loaded {} templates from {}",
            manifest.templates.len(),
            path.display()
        );
        Ok(Self::new(manifest.templates))
    }
}

#[async_trait]
impl TemplateCatalog for StaticCatalog {
    async fn all(&self) -> Result<Vec<Template>, CatalogError> {
        Ok(self.templates.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::fs;
    use tempfile::TempDir;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new(vec![
            Template::new("tpl-mongo", "MongoDB Server"),
            Template::new("tpl-express", "Mongo Express"),
            Template::new("tpl-gpt", "Basic GPT Server"),
        ])
    }

    #[tokio::test]
    async fn test_find_by_name_matches_substring() {
        let matches = catalog().find_by_name("gpt").await.unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "tpl-gpt");
    }

    #[tokio::test]
    async fn test_find_by_name_is_case_insensitive() {
        let matches = catalog().find_by_name("MONGODB").await.unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "tpl-mongo");
    }

    #[tokio::test]
    async fn test_find_by_name_preserves_catalog_order() {
        let matches = catalog().find_by_name("mongo").await.unwrap();

        let ids: Vec<&str> = matches.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["tpl-mongo", "tpl-express"]);
    }

    #[tokio::test]
    async fn test_find_by_name_returns_empty_for_no_match() {
        let matches = catalog().find_by_name("postgres").await.unwrap();

        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_builtin_catalog_is_not_empty() {
        let templates = StaticCatalog::builtin().all().await.unwrap();

        assert!(!templates.is_empty());
        assert!(templates.iter().any(|t| t.id == "tpl-gpt"));
    }

    #[test]
    fn test_from_json_file_loads_manifest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("templates.json");
        fs::write(
            &path,
            r#"{
                "templates": [
                    {"id": "tpl-a", "name": "Server A", "type": "app"},
                    {"id": "tpl-b", "name": "Server B"}
                ]
            }"#,
        )
        .unwrap();

        let catalog = StaticCatalog::from_json_file(&path).unwrap();

        assert_eq!(catalog.templates.len(), 2);
        assert_eq!(catalog.templates[0].id, "tpl-a");
    }

    #[test]
    fn test_from_json_file_reports_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");

        let error = StaticCatalog::from_json_file(&path).unwrap_err();

        assert_matches!(error, CatalogError::Io(_));
    }

    #[test]
    fn test_rejected_error_names_the_status() {
        let error = CatalogError::Rejected {
            status: 500,
            detail: "internal error".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "The template catalog rejected the request (status 500): internal error"
        );
    }

    #[test]
    fn test_from_json_file_reports_malformed_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("templates.json");
        fs::write(&path, "not json").unwrap();

        let error = StaticCatalog::from_json_file(&path).unwrap_err();

        assert_matches!(error, CatalogError::Parse(_));
    }
}
