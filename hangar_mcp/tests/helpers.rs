//! Shared test helpers for hangar_mcp tests.

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rmcp::model::{CallToolResult, RawContent};

use hangar_core::{
    CatalogError, ControlMessage, DeployCommand, DispatchError, DispatchSink, StaticCatalog,
    Template, TemplateCatalog,
};

/// Extract the text content from a CallToolResult.
pub fn get_text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "Expected exactly one content item");
    match &result.content[0].raw {
        RawContent::Text(text_content) => text_content.text.clone(),
        _ => panic!("Expected text content"),
    }
}

/// Check if the result is a success.
pub fn is_success(result: &CallToolResult) -> bool {
    result.is_error == Some(false)
}

/// Check if the result is an error.
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}

/// A small catalog with one database and one app template.
pub fn sample_catalog() -> StaticCatalog {
    StaticCatalog::new(vec![
        Template::new("tpl-mongo", "MongoDB Server")
            .with_kind("database")
            .with_subtype("document")
            .with_required_field("root_password"),
        Template::new("tpl-gpt", "Basic GPT Server")
            .with_kind("app")
            .with_required_field("openai_api_key"),
    ])
}

/// A sink that records every dispatched message.
#[derive(Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<ControlMessage>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<ControlMessage> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl DispatchSink for RecordingSink {
    async fn deploy(&self, command: &DeployCommand) -> Result<(), DispatchError> {
        self.messages
            .lock()
            .unwrap()
            .push(ControlMessage::Deploy(command.clone()));
        Ok(())
    }

    async fn delete(&self, server_id: &str) -> Result<(), DispatchError> {
        self.messages.lock().unwrap().push(ControlMessage::Delete {
            server_id: server_id.to_string(),
        });
        Ok(())
    }
}

/// A sink whose backend refuses every command.
pub struct FailingSink;

#[async_trait]
impl DispatchSink for FailingSink {
    async fn deploy(&self, _command: &DeployCommand) -> Result<(), DispatchError> {
        Err(DispatchError::Rejected {
            status: 503,
            detail: "backend down".to_string(),
        })
    }

    async fn delete(&self, _server_id: &str) -> Result<(), DispatchError> {
        Err(DispatchError::Rejected {
            status: 503,
            detail: "backend down".to_string(),
        })
    }
}

/// A catalog that counts how often it is consulted.
pub struct CountingCatalog {
    inner: StaticCatalog,
    lookups: AtomicUsize,
}

impl CountingCatalog {
    pub fn new(inner: StaticCatalog) -> Self {
        Self {
            inner,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TemplateCatalog for CountingCatalog {
    async fn all(&self) -> Result<Vec<Template>, CatalogError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.all().await
    }
}

/// A catalog that is never reachable.
pub struct DownCatalog;

#[async_trait]
impl TemplateCatalog for DownCatalog {
    async fn all(&self) -> Result<Vec<Template>, CatalogError> {
        Err(CatalogError::Unreachable("connection refused".to_string()))
    }
}
