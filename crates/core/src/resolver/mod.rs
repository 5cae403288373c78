//! Script name normalization and directory-scan resolution

pub mod script_name;
pub mod script_resolver;

pub use script_name::{DEFAULT_EXTENSION, has_extension, normalize_script};
pub use script_resolver::ScriptResolver;
