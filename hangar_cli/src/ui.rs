//! Terminal output helpers for the Hangar CLI.
//!
//! Human-facing status lines go to stderr so that stdout stays clean for
//! MCP protocol traffic and JSON output.

use console::style;
use serde::Serialize;

use hangar_core::Template;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pretty" => Ok(OutputFormat::Pretty),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "unknown format '{}': expected 'pretty' or 'json'",
                s
            )),
        }
    }
}

pub fn header(message: &str) {
    eprintln!("{}", style(message).bold());
}

pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red(), message);
}

pub fn error_with_details(message: &str, details: &str) {
    eprintln!("{} {}: {}", style("✗").red(), message, style(details).dim());
}

/// Print templates as readable blocks on stdout.
pub fn pretty_template_list(templates: &[Template]) {
    for template in templates {
        println!(
            "{} {}",
            style(&template.name).bold(),
            style(format!("({})", template.id)).dim()
        );
        match (&template.kind, &template.subtype) {
            (Some(kind), Some(subtype)) => println!("  Type: {} / {}", kind, subtype),
            (Some(kind), None) => println!("  Type: {}", kind),
            _ => {}
        }
        if !template.required_fields.is_empty() {
            println!("  Fields: {}", template.required_fields.join(", "));
        }
        if !template.flags.is_empty() {
            let flags: Vec<String> = template
                .flags
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect();
            println!("  Flags: {}", flags.join(", "));
        }
    }
}

/// Print a value as pretty JSON on stdout.
pub fn json_output<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error_with_details("Failed to serialize output", &e.to_string()),
    }
}
