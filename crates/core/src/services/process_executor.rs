//! Default command executor: spawns the interpreter directly

use crate::{
    command::ScriptCommand,
    error::{Error, Result},
    interfaces::CommandExecutor,
};
use std::process::Command;
use tracing::{debug, info, warn};

/// Spawns the interpreter with an argument vector, no shell involved, and
/// returns its captured stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for ProcessExecutor {
    fn execute(&self, command: &ScriptCommand) -> Result<String> {
        run_captured(command.to_process_command(), &command.to_shell_command())
    }
}

/// Run `cmd` to completion, returning stdout or a `CommandFailed` error
/// labelled with `line`.
pub(crate) fn run_captured(mut cmd: Command, line: &str) -> Result<String> {
    info!("Running: {}", line);

    let output = cmd.output().map_err(|e| Error::CommandFailed {
        command: line.to_string(),
        exit_code: None,
        detail: format!("failed to spawn process: {e}"),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let exit_code = output.status.code();
        let mut detail = match exit_code {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by signal".to_string(),
        };
        if !stderr.is_empty() {
            detail.push_str(": ");
            detail.push_str(&stderr);
        }
        warn!("Command `{}` {}", line, detail);
        return Err(Error::CommandFailed {
            command: line.to_string(),
            exit_code,
            detail,
        });
    }

    debug!("Command `{}` produced {} bytes of output", line, output.stdout.len());
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_script(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_returns_stdout_and_passes_args_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(&temp_dir, "echo.sh", "printf '%s|' \"$@\"\n");
        let command = ScriptCommand::new(
            "sh",
            script,
            vec!["a".to_string(), "b c".to_string(), "d;rm -rf /".to_string()],
        );

        let output = ProcessExecutor::new().execute(&command).unwrap();
        assert_eq!(output, "a|b c|d;rm -rf /|");
    }

    #[test]
    fn test_non_zero_exit_is_command_failed() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(&temp_dir, "fail.sh", "echo oops >&2\nexit 3\n");
        let command = ScriptCommand::new("sh", script, Vec::new());

        let err = ProcessExecutor::new().execute(&command).unwrap_err();
        match err {
            Error::CommandFailed {
                exit_code, detail, ..
            } => {
                assert_eq!(exit_code, Some(3));
                assert!(detail.contains("oops"), "detail was: {detail}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_failure_is_labelled_with_command_line() {
        let temp_dir = TempDir::new().unwrap();
        let script = write_script(&temp_dir, "fail.sh", "exit 1\n");
        let command = ScriptCommand::new("sh", &script, vec!["x y".to_string()]);

        match ProcessExecutor::new().execute(&command).unwrap_err() {
            Error::CommandFailed { command: line, .. } => {
                assert_eq!(line, format!("sh {} 'x y'", script.display()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_spawn_failure_is_command_failed() {
        let command = ScriptCommand::new("/nonexistent/interpreter", "script.js", Vec::new());
        let err = ProcessExecutor::new().execute(&command).unwrap_err();
        assert!(err.is_command_failed());
        assert_eq!(err.exit_code(), None);
    }
}
