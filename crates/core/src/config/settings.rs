use crate::{
    error::{Error, Result},
    resolver::DEFAULT_EXTENSION,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File names looked up by [`Config::find_config_file`], in priority order
pub const CONFIG_FILE_NAMES: [&str; 2] = [".noderun.json", "noderun.json"];

/// How the composed command reaches the operating system
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Spawn the interpreter with an argument vector
    #[default]
    Direct,
    /// Hand the escaped command line to the host shell
    Shell,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Interpreter command, `node` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,

    /// Directories searched for scripts, in priority order
    #[serde(default)]
    pub js_dirs: Vec<PathBuf>,

    #[serde(default = "default_extension")]
    pub default_extension: String,

    #[serde(default)]
    pub execution: ExecutionMode,
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node: None,
            js_dirs: Vec::new(),
            default_extension: default_extension(),
            execution: ExecutionMode::default(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }
}
