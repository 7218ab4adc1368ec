//! Core deployment types and resolution logic for Hangar.
//!
//! This crate defines the template catalog and dispatch sink capabilities,
//! and the resolver that turns a loosely-specified deploy request into a
//! canonical deployment command.

pub mod catalog;
pub mod dispatch;
pub mod resolve;
pub mod template;

pub use catalog::{CatalogError, StaticCatalog, TemplateCatalog};
pub use dispatch::{ControlMessage, DispatchError, DispatchSink, LogSink};
pub use resolve::{
    DeployCommand, DeployRequest, FieldViolation, Resolution, ResolveError, ResolvedVia, resolve,
};
pub use template::{Template, TemplateManifest};
