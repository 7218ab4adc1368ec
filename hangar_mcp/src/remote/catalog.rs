//! Template catalog served over HTTP.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use hangar_core::{CatalogError, Template, TemplateCatalog};

use super::{add_auth, http_client, trim_base};

/// A catalog backed by a remote catalog service.
///
/// Fetches `GET {base_url}/templates` on every call; the service owns
/// caching and ordering.
pub struct HttpCatalog {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: http_client(),
            base_url: trim_base(base_url),
            token: None,
        }
    }

    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut catalog = Self::new(base_url);
        catalog.token = Some(token.into());
        catalog
    }
}

#[async_trait]
impl TemplateCatalog for HttpCatalog {
    async fn all(&self) -> Result<Vec<Template>, CatalogError> {
        let url = format!("{}/templates", self.base_url);
        debug!("Fetching templates from {}", url);

        let request = add_auth(self.client.get(&url), self.token.as_deref());
        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = match response.text().await {
                Ok(body) if !body.is_empty() => body,
                _ => status.to_string(),
            };
            return Err(CatalogError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        let templates: Vec<Template> = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        debug!("Catalog returned {} templates", templates.len());
        Ok(templates)
    }
}
