//! Configuration management for noderun

mod settings;

// Re-export main types
pub use settings::{CONFIG_FILE_NAMES, Config, ExecutionMode};
