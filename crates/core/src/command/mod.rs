//! Script command composition

pub mod script_command;
pub mod shell;

// Re-export commonly used types
pub use script_command::ScriptCommand;
pub use shell::escape_arg;
