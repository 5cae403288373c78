use anyhow::Result;
use noderun_core::ScriptRunner;
use tracing::debug;

use crate::{cli::LookupArgs, settings::load_config};

pub fn resolve_command(script: &str, lookup: &LookupArgs) -> Result<()> {
    let config = load_config(lookup)?;
    debug!("Resolving {} in {:?}", script, config.js_dirs);

    let mut runner = ScriptRunner::from_config(&config);
    let resolved = runner.resolve(script)?;
    println!("{}", resolved.display());

    Ok(())
}
