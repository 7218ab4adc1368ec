//! Dispatching resolved commands to a deployment backend.

use std::fmt;

use async_trait::async_trait;
use log::info;
use serde::{Deserialize, Serialize};

use crate::resolve::DeployCommand;

/// A control message on the wire, tagged by action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ControlMessage {
    Deploy(DeployCommand),
    Delete { server_id: String },
}

/// Defines the ways dispatching a command can fail.
#[derive(Debug)]
pub enum DispatchError {
    /// The backend could not be reached at all.
    Unreachable(String),
    /// The backend answered but refused the command.
    Rejected { status: u16, detail: String },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Unreachable(detail) => {
                write!(f, "The dispatch sink could not be reached: {}", detail)
            }
            DispatchError::Rejected { status, detail } => {
                write!(
                    f,
                    "The dispatch sink rejected the command (status {}): {}",
                    status, detail
                )
            }
        }
    }
}

impl std::error::Error for DispatchError {}

/// A destination for deployment commands.
///
/// A sink reports acceptance, not completion: `Ok` means the backend took
/// the command, not that the server finished deploying.
#[async_trait]
pub trait DispatchSink: Send + Sync {
    async fn deploy(&self, command: &DeployCommand) -> Result<(), DispatchError>;
    async fn delete(&self, server_id: &str) -> Result<(), DispatchError>;
}

/// A sink that only logs what it would have sent. Useful for dry runs and
/// local development without a backend.
#[derive(Debug, Default)]
pub struct LogSink;

#[async_trait]
impl DispatchSink for LogSink {
    async fn deploy(&self, command: &DeployCommand) -> Result<(), DispatchError> {
        info!(
            "Dry run: would deploy template '{}' for user '{}'",
            command.template_id, command.user_id
        );
        Ok(())
    }

    async fn delete(&self, server_id: &str) -> Result<(), DispatchError> {
        info!("Dry run: would delete server '{}'", server_id);
        Ok(())
    }
}
