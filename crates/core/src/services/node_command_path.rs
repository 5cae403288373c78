//! Default interpreter path provider

use crate::interfaces::InterpreterPath;

/// Executable name used when no explicit interpreter is configured
pub const DEFAULT_NODE_COMMAND: &str = "node";

/// Supplies the Node.js command, `node` from `PATH` unless overridden
#[derive(Debug, Clone)]
pub struct NodeCommandPath {
    path: String,
}

impl NodeCommandPath {
    pub fn new() -> Self {
        Self {
            path: DEFAULT_NODE_COMMAND.to_string(),
        }
    }

    pub fn with_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for NodeCommandPath {
    fn default() -> Self {
        Self::new()
    }
}

impl InterpreterPath for NodeCommandPath {
    fn command_path(&self) -> String {
        self.path.clone()
    }
}
