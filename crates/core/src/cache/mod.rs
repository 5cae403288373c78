//! Caching of script resolution results

pub mod resolution_cache;

// Re-export the main cache type
pub use resolution_cache::ResolutionCache;
