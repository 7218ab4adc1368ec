//! Deployment templates: named blueprints read from a catalog.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named deployment blueprint.
///
/// Templates are created and updated by an external catalog system; this
/// crate only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Unique, stable identifier (e.g. "tpl-gpt").
    pub id: String,
    /// Human-readable name, not guaranteed unique (e.g. "Basic GPT Server").
    pub name: String,
    /// Broad category (e.g. "database", "app").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Narrower category within the kind (e.g. "document", "llm").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    /// Names of the credential fields a deployment of this template needs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_fields: Vec<String>,
    /// Capability flags (e.g. "persistent", "public").
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub flags: BTreeMap<String, bool>,
}

impl Template {
    /// Create a template with just an id and a display name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: None,
            subtype: None,
            required_fields: Vec::new(),
            flags: BTreeMap::new(),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    pub fn with_required_field(mut self, field: impl Into<String>) -> Self {
        self.required_fields.push(field.into());
        self
    }

    pub fn with_flag(mut self, flag: impl Into<String>, value: bool) -> Self {
        self.flags.insert(flag.into(), value);
        self
    }

    /// Case-insensitive substring match of `fragment` against the name.
    pub fn matches_name(&self, fragment: &str) -> bool {
        self.name.to_lowercase().contains(&fragment.to_lowercase())
    }
}

/// The on-disk catalog document: a JSON object wrapping the template list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateManifest {
    pub templates: Vec<Template>,
}
