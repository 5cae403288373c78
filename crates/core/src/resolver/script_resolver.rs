use crate::{
    cache::ResolutionCache,
    error::{Error, Result},
    interfaces::PathResolver,
    services::DefaultPathResolver,
};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::script_name::{DEFAULT_EXTENSION, normalize_script};

/// Maps script identifiers to paths by scanning an ordered list of
/// directories. The first directory holding the script wins and the result
/// is memoized for the lifetime of the resolver.
pub struct ScriptResolver {
    search_dirs: Vec<PathBuf>,
    default_extension: String,
    cache: ResolutionCache,
    path_resolver: Box<dyn PathResolver>,
}

impl ScriptResolver {
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self {
            search_dirs,
            default_extension: DEFAULT_EXTENSION.to_string(),
            cache: ResolutionCache::new(),
            path_resolver: Box::new(DefaultPathResolver::new()),
        }
    }

    pub fn with_default_extension(mut self, extension: impl Into<String>) -> Self {
        self.default_extension = extension.into();
        self
    }

    pub fn with_path_resolver(mut self, path_resolver: Box<dyn PathResolver>) -> Self {
        self.path_resolver = path_resolver;
        self
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    /// Resolve `script` to a path.
    ///
    /// A script found in none of the search directories resolves to its
    /// normalized name, leaving the lookup to the interpreter.
    pub fn resolve(&mut self, script: &str) -> Result<PathBuf> {
        if script.is_empty() {
            return Err(Error::InvalidScript(
                "script identifier must not be empty".to_string(),
            ));
        }

        let normalized = normalize_script(script, &self.default_extension);

        if let Some(cached) = self.cache.get(&normalized) {
            debug!("Resolution cache hit: {} -> {}", normalized, cached.display());
            return Ok(cached.to_path_buf());
        }

        self.cache.seed(&normalized);

        for dir in &self.search_dirs {
            let candidate = trim_trailing_separators(dir).join(&normalized);
            debug!("Checking {}", candidate.display());
            if self.path_resolver.exists(&candidate) {
                debug!("Resolved {} -> {}", normalized, candidate.display());
                self.cache.insert(normalized.clone(), candidate);
                break;
            }
        }

        let resolved = self
            .cache
            .get(&normalized)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&normalized));
        if resolved.as_os_str() == normalized.as_str() {
            debug!("{} not found in search directories, using bare name", normalized);
        }
        Ok(resolved)
    }
}

impl std::fmt::Debug for ScriptResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptResolver")
            .field("search_dirs", &self.search_dirs)
            .field("default_extension", &self.default_extension)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

/// `js/`, `js//` and `js` all name the same directory
fn trim_trailing_separators(dir: &Path) -> PathBuf {
    dir.components().collect()
}
