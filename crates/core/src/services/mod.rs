//! Default collaborator implementations
//!
//! Concrete implementations of the interface traits, used whenever a runner
//! is built without explicit collaborators.

pub mod default_path_resolver;
pub mod node_command_path;
pub mod process_executor;
pub mod shell_executor;

pub use default_path_resolver::DefaultPathResolver;
pub use node_command_path::NodeCommandPath;
pub use process_executor::ProcessExecutor;
pub use shell_executor::ShellExecutor;
