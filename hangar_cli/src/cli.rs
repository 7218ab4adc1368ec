use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::ui::OutputFormat;

/// Defines the top-level interface for the Hangar CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "hangar")]
#[command(version, about = "Hangar CLI: Deploy servers from templates.")]
pub struct HangarCli {
    /// Template catalog: "builtin", a manifest file path, or a catalog service URL.
    #[arg(long, global = true, env = "HANGAR_CATALOG", default_value_t = CatalogSource::default())]
    pub catalog: CatalogSource,

    /// Dispatch sink: "log", "api:<url>" or "queue:<gateway-url>".
    #[arg(long, global = true, env = "HANGAR_SINK", default_value_t = SinkSpec::default())]
    pub sink: SinkSpec,

    /// Queue name used by the "queue:" sink.
    #[arg(long, global = true, env = "HANGAR_QUEUE", default_value = "deployments")]
    pub queue: String,

    /// Bearer token for the catalog service and deployment backend.
    #[arg(long, global = true, env = "HANGAR_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: HangarCliCommand,
}

/// Where the template catalog comes from.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogSource {
    /// The catalog compiled into the binary.
    #[default]
    Builtin,
    /// A JSON manifest file on disk.
    Manifest(PathBuf),
    /// A remote catalog service.
    Remote(String),
}

impl std::str::FromStr for CatalogSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "builtin" => CatalogSource::Builtin,
            s if s.starts_with("http://") || s.starts_with("https://") => {
                CatalogSource::Remote(s.to_string())
            }
            s => CatalogSource::Manifest(PathBuf::from(s)),
        })
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::Builtin => write!(f, "builtin"),
            CatalogSource::Manifest(path) => write!(f, "{}", path.display()),
            CatalogSource::Remote(url) => write!(f, "{}", url),
        }
    }
}

/// Where resolved commands are dispatched to.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SinkSpec {
    /// Log what would be dispatched, dispatch nothing.
    #[default]
    Log,
    /// The deployment REST API at the given base URL.
    Api(String),
    /// A queue publish gateway at the given base URL.
    Queue(String),
}

impl std::str::FromStr for SinkSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "log" {
            Ok(SinkSpec::Log)
        } else if let Some(url) = s.strip_prefix("api:") {
            Ok(SinkSpec::Api(url.to_string()))
        } else if let Some(url) = s.strip_prefix("queue:") {
            Ok(SinkSpec::Queue(url.to_string()))
        } else {
            Err(format!(
                "unknown sink '{}': expected 'log', 'api:<url>' or 'queue:<url>'",
                s
            ))
        }
    }
}

impl std::fmt::Display for SinkSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkSpec::Log => write!(f, "log"),
            SinkSpec::Api(url) => write!(f, "api:{}", url),
            SinkSpec::Queue(url) => write!(f, "queue:{}", url),
        }
    }
}

/// Defines the available subcommands of the Hangar CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum HangarCliCommand {
    /// Start the MCP server on stdio.
    Mcp,
    /// List the deployable templates.
    Templates,
    /// Deploy a server for a user, from a template ID or name.
    Deploy {
        /// ID of the user the server is deployed for.
        #[arg(long)]
        user_id: String,
        /// Exact template ID (e.g. tpl-gpt). Wins over --name when both are given.
        #[arg(long)]
        template_id: Option<String>,
        /// Template name to match (case-insensitive substring, e.g. "gpt").
        #[arg(long)]
        name: Option<String>,
        /// Credential payload as a JSON object.
        #[arg(long, default_value = "{}")]
        creds: String,
    },
    /// Delete a deployed server.
    Delete {
        /// ID of the server to delete (e.g. srv-12).
        server_id: String,
    },
}
