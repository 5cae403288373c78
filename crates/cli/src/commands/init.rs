use anyhow::{Context, Result, bail};
use noderun_core::{Config, config::CONFIG_FILE_NAMES};
use std::{env, path::Path, path::PathBuf};
use tracing::info;

pub fn init_command(cwd: Option<&Path>, force: bool) -> Result<()> {
    let project_root = match cwd {
        Some(cwd) => cwd.to_path_buf(),
        None => env::current_dir().context("Failed to get current directory")?,
    };

    let config_path = project_root.join(CONFIG_FILE_NAMES[0]);
    if config_path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    let config = Config {
        js_dirs: vec![PathBuf::from("js")],
        ..Default::default()
    };
    config
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    info!("Wrote {}", config_path.display());
    println!("✅ Created config: {}", config_path.display());

    Ok(())
}
