use std::io;

/// Errors that can occur during noderun operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The spawned process exited abnormally or could not be spawned at all
    #[error("Command failed: {command}: {detail}")]
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        detail: String,
    },

    #[error("Invalid script identifier: {0}")]
    InvalidScript(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl Error {
    pub fn is_command_failed(&self) -> bool {
        matches!(self, Error::CommandFailed { .. })
    }

    /// Exit code of the failed process, if it ran to completion
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::CommandFailed { exit_code, .. } => *exit_code,
            _ => None,
        }
    }
}

/// Result type alias for noderun operations
pub type Result<T> = std::result::Result<T, Error>;
