use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::shell::join_escaped;

/// A fully composed interpreter invocation: `<program> <script> <args...>`.
///
/// Built fresh for every run and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptCommand {
    pub program: String,
    pub script: PathBuf,
    pub args: Vec<String>,
}

impl ScriptCommand {
    pub fn new(program: impl Into<String>, script: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            script: script.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Arguments passed to the program when spawned directly, unescaped
    pub fn argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.script.to_string_lossy().into_owned());
        argv.extend(self.args.iter().cloned());
        argv
    }

    /// Single command line for a shell. The interpreter and script path are
    /// emitted verbatim; every argument is escaped individually.
    pub fn to_shell_command(&self) -> String {
        let mut cmd = format!("{} {}", self.program, self.script.display());
        if !self.args.is_empty() {
            cmd.push(' ');
            cmd.push_str(&join_escaped(&self.args));
        }
        cmd
    }

    /// Build a process that runs the interpreter directly, without a shell
    pub fn to_process_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(&self.script);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for ScriptCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_shell_command())
    }
}
