//! Error outcomes of CLI commands.

/// Defines the failure categories a command can exit with.
///
/// Messages are printed where errors occur; this type only decides the
/// process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliError {
    /// Invalid user input (bad flags, malformed creds, unresolvable request).
    InputError,
    /// The template catalog could not be read or reached.
    CatalogError,
    /// The deployment backend refused or could not be reached.
    DispatchError,
    /// The MCP server failed.
    ServerError,
    /// The async runtime could not be created.
    RuntimeError,
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InputError => 2,
            CliError::CatalogError => 3,
            CliError::DispatchError => 4,
            CliError::ServerError => 1,
            CliError::RuntimeError => 1,
        }
    }
}
