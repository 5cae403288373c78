//! Collaborator interfaces
//!
//! The runner only talks to the outside world through these traits, so
//! process spawning, interpreter lookup and filesystem probing can all be
//! swapped out (a recording executor in tests, an in-memory filesystem, ...).

pub mod executor;
pub mod interpreter;
pub mod path_resolver;

pub use executor::CommandExecutor;
pub use interpreter::InterpreterPath;
pub use path_resolver::PathResolver;
