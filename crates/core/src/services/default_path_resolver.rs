//! Default path resolver implementation
//!
//! Provides standard file system based existence checks.

use crate::interfaces::PathResolver;
use std::path::Path;

/// Default implementation of PathResolver using std::fs
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultPathResolver;

impl DefaultPathResolver {
    pub fn new() -> Self {
        Self
    }
}

impl PathResolver for DefaultPathResolver {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
