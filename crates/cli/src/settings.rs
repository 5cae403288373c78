use anyhow::{Context, Result};
use noderun_core::Config;
use std::env;
use tracing::debug;

use crate::cli::LookupArgs;

/// Load the explicit or nearest config file, then apply command-line overrides
pub fn load_config(lookup: &LookupArgs) -> Result<Config> {
    let config_path = match &lookup.config {
        Some(path) => Some(path.clone()),
        None => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            Config::find_config_file(&cwd)
        }
    };

    let mut config = match config_path {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            Config::load_from_file(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?
        }
        None => Config::default(),
    };

    if !lookup.dirs.is_empty() {
        config.js_dirs = lookup.dirs.clone();
    }
    if let Some(ext) = &lookup.ext {
        config.default_extension = ext.clone();
    }

    debug!("Effective config: {:?}", config);
    Ok(config)
}
