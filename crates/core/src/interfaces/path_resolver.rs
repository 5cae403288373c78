//! Path probing interface
//!
//! Abstracts the existence check used while scanning search directories.

use std::path::Path;

/// Trait for filesystem probes performed during script resolution
pub trait PathResolver: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;
}
