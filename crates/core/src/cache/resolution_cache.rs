use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Normalized script identifier -> resolved path.
///
/// Entries live as long as the cache itself; nothing is evicted or persisted.
#[derive(Debug, Default, Clone)]
pub struct ResolutionCache {
    entries: HashMap<String, PathBuf>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, script: &str) -> Option<&Path> {
        self.entries.get(script).map(PathBuf::as_path)
    }

    pub fn contains(&self, script: &str) -> bool {
        self.entries.contains_key(script)
    }

    /// Record the bare identifier as its own resolution, the fallback used
    /// when no search directory holds the script.
    pub fn seed(&mut self, script: &str) {
        self.entries.insert(script.to_string(), PathBuf::from(script));
    }

    pub fn insert(&mut self, script: String, path: PathBuf) {
        self.entries.insert(script, path);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
