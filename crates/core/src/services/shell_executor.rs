//! Legacy executor that routes the escaped command line through a shell

use crate::{
    command::ScriptCommand, error::Result, interfaces::CommandExecutor,
    services::process_executor::run_captured,
};
use std::process::Command;

/// Runs [`ScriptCommand::to_shell_command`] through the host shell.
///
/// Kept for setups that rely on shell behaviour in the interpreter token
/// (aliases, `PATH` tweaks inside the line). Arguments are still escaped
/// one by one, but prefer [`ProcessExecutor`](super::ProcessExecutor).
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: String,
    flag: String,
}

impl ShellExecutor {
    pub fn new() -> Self {
        if cfg!(windows) {
            Self::with_shell("cmd", "/C")
        } else {
            Self::with_shell("sh", "-c")
        }
    }

    pub fn with_shell(shell: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            flag: flag.into(),
        }
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor for ShellExecutor {
    fn execute(&self, command: &ScriptCommand) -> Result<String> {
        let line = command.to_shell_command();
        let mut cmd = Command::new(&self.shell);
        cmd.arg(&self.flag).arg(&line);
        run_captured(cmd, &line)
    }
}
