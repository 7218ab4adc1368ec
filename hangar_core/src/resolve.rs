//! Deploy request resolution.
//!
//! A deploy request may identify its template either by an explicit id or
//! by a human-entered name. Exactly one resolution path is attempted per
//! call: the strict path first (explicit id, no catalog lookup), then the
//! name fallback (case-insensitive substring match against the catalog).

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{CatalogError, TemplateCatalog};
use crate::template::Template;

/// A raw deploy request, as received from a tool call.
///
/// Every field is optional and untyped until validated, so that a single
/// error can report everything wrong with the request. JSON `null` is
/// treated the same as an absent field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeployRequest {
    #[serde(default)]
    pub user_id: Option<Value>,
    #[serde(default)]
    pub template_id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub creds: Option<Value>,
}

/// The canonical deployment command sent downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployCommand {
    /// The user the server is deployed for.
    pub user_id: String,
    /// Identifier of the template to deploy. Referred to an existing
    /// template at resolution time; there is no transactional coupling to
    /// the catalog afterwards.
    pub template_id: String,
    /// Opaque credential payload, forwarded unchanged.
    pub creds: Value,
}

/// How a deploy request was resolved, for caller observability.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "path", rename_all = "snake_case")]
pub enum ResolvedVia {
    /// The request carried an explicit template id; the catalog was not
    /// consulted.
    TemplateId,
    /// The template was found by matching a name against the catalog.
    NameMatch {
        /// The name fragment the caller supplied.
        query: String,
        /// The catalog entry that was chosen.
        template: Template,
    },
}

/// A resolved deploy request: the command plus how it was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub command: DeployCommand,
    pub via: ResolvedVia,
}

/// A single field-level problem found while validating a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub reason: String,
}

impl FieldViolation {
    fn missing(field: &'static str) -> Self {
        Self {
            field,
            reason: "field is required".to_string(),
        }
    }

    fn not_a_string(field: &'static str) -> Self {
        Self {
            field,
            reason: "must be a non-empty string".to_string(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Defines the ways resolution can fail.
#[derive(Debug)]
pub enum ResolveError {
    /// One or more required fields were absent or had the wrong shape.
    /// Carries every violation found, not just the first.
    Invalid(Vec<FieldViolation>),
    /// The fallback path ran and no catalog entry's name contained the
    /// supplied fragment.
    TemplateNotFound(String),
    /// The catalog could not be consulted.
    Catalog(CatalogError),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Invalid(violations) => {
                let details: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
                write!(f, "Invalid deploy request: {}", details.join("; "))
            }
            ResolveError::TemplateNotFound(name) => {
                write!(f, "No template found matching name: {}", name)
            }
            ResolveError::Catalog(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for ResolveError {}

impl From<CatalogError> for ResolveError {
    fn from(err: CatalogError) -> Self {
        ResolveError::Catalog(err)
    }
}

/// Resolve a raw deploy request into a canonical deployment command.
///
/// The strict path (explicit `template_id`) is tried first and never
/// touches the catalog. If the strict shape does not hold but `user_id`,
/// `creds` and a non-empty `name` do, the name is matched against the
/// catalog instead; one or more matches select the first in catalog order.
/// Anything else fails with the full list of field violations.
pub async fn resolve(
    request: &DeployRequest,
    catalog: &dyn TemplateCatalog,
) -> Result<Resolution, ResolveError> {
    let mut violations = Vec::new();

    let user_id = required_string("user_id", &request.user_id, &mut violations);
    let template_id = required_string("template_id", &request.template_id, &mut violations);
    let creds = match present(&request.creds) {
        Some(value) => Some(value.clone()),
        None => {
            violations.push(FieldViolation::missing("creds"));
            None
        }
    };

    // Strict path: explicit template id, accepted unchanged.
    if let (Some(user_id), Some(template_id), Some(creds)) =
        (user_id.as_ref(), template_id.as_ref(), creds.as_ref())
    {
        debug!(
            "Resolved deploy request for '{}' via explicit template id '{}'",
            user_id, template_id
        );
        return Ok(Resolution {
            command: DeployCommand {
                user_id: user_id.clone(),
                template_id: template_id.clone(),
                creds: creds.clone(),
            },
            via: ResolvedVia::TemplateId,
        });
    }

    // Fallback path: match a human-entered name against the catalog.
    let mut name_violations = Vec::new();
    let name = required_string("name", &request.name, &mut name_violations);
    if let (Some(user_id), Some(creds), Some(name)) = (user_id, creds, name) {
        let matches = catalog.find_by_name(&name).await?;
        let template = match matches.first() {
            Some(template) => template.clone(),
            None => return Err(ResolveError::TemplateNotFound(name)),
        };
        if matches.len() > 1 {
            debug!(
                "Name '{}' matched {} templates; keeping the first in catalog order ('{}')",
                name,
                matches.len(),
                template.id
            );
        }
        debug!(
            "Resolved deploy request for '{}' via name '{}' -> template '{}'",
            user_id, name, template.id
        );
        return Ok(Resolution {
            command: DeployCommand {
                user_id,
                template_id: template.id.clone(),
                creds,
            },
            via: ResolvedVia::NameMatch {
                query: name,
                template,
            },
        });
    }

    // Neither path could run: report everything wrong with the strict
    // shape, plus the name when it was supplied but unusable.
    if present(&request.name).is_some() {
        violations.extend(name_violations);
    }
    debug!("Deploy request failed validation with {} violations", violations.len());
    Err(ResolveError::Invalid(violations))
}

/// A field value, with JSON `null` collapsed to absent.
fn present(value: &Option<Value>) -> Option<&Value> {
    match value {
        Some(Value::Null) | None => None,
        Some(value) => Some(value),
    }
}

/// Extract a required non-empty string field, recording a violation when it
/// is absent or differently shaped.
fn required_string(
    field: &'static str,
    value: &Option<Value>,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match present(value) {
        None => {
            violations.push(FieldViolation::missing(field));
            None
        }
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(_) => {
            violations.push(FieldViolation::not_a_string(field));
            None
        }
    }
}
