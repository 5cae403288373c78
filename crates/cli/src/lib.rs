pub mod cli;
pub mod commands;
pub mod settings;

// Re-export commonly used items
pub use cli::{Cli, Commands, LookupArgs, RunArgs};
