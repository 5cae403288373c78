use anyhow::{Context, Result};
use noderun_core::{ExecutionMode, ScriptRunner};
use serde::Serialize;
use tracing::{debug, info};

use crate::{cli::RunArgs, settings::load_config};

/// JSON shape printed by `run --json`
#[derive(Debug, Serialize)]
struct RunReport<'a> {
    result: &'a str,
}

pub fn run_command(args: RunArgs) -> Result<()> {
    let mut config = load_config(&args.lookup)?;
    if let Some(node) = args.node {
        config.node = Some(node);
    }
    if args.shell {
        config.execution = ExecutionMode::Shell;
    }

    debug!("Running script: {} with args: {:?}", args.script, args.args);
    let mut runner = ScriptRunner::from_config(&config);

    if args.dry_run {
        let command = runner.command_for(&args.script, &args.args)?;
        println!("{}", command.to_shell_command());
        return Ok(());
    }

    let output = match runner.run(&args.script, &args.args) {
        Ok(output) => output,
        Err(err) if err.is_command_failed() => {
            eprintln!("❌ {err}");
            std::process::exit(err.exit_code().unwrap_or(1));
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to run {}", args.script));
        }
    };
    info!("{} finished", args.script);

    if args.json {
        let report = RunReport { result: &output };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{output}");
    }

    Ok(())
}
