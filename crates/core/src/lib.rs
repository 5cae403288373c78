//! noderun - resolve scripts across search directories and run them with Node.js
//!
//! This crate provides functionality to:
//! - Normalize script names and find them in an ordered list of directories
//! - Memoize resolutions for the lifetime of a runner
//! - Compose interpreter command lines with shell-safe argument quoting
//! - Execute them and return the captured output
pub mod cache;
pub mod command;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod resolver;
pub mod runner;
pub mod services;

// Re-export commonly used types and traits
pub use error::{Error, Result};

// Re-export main API components
pub use command::{ScriptCommand, escape_arg};
pub use config::{Config, ExecutionMode};
pub use interfaces::{CommandExecutor, InterpreterPath, PathResolver};
pub use resolver::{ScriptResolver, normalize_script};
pub use runner::{ScriptRunner, ScriptRunnerBuilder};
pub use services::{DefaultPathResolver, NodeCommandPath, ProcessExecutor, ShellExecutor};
