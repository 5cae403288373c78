//! Command execution interface

use crate::{command::ScriptCommand, error::Result};

/// Runs a composed command to completion and returns its captured output.
///
/// Implementations report a non-zero exit, a signal, or a spawn failure as
/// [`Error::CommandFailed`](crate::Error::CommandFailed).
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, command: &ScriptCommand) -> Result<String>;
}
