use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{init_command, resolve_command, run_command};

#[derive(Parser, Debug)]
#[command(name = "noderun")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that resolves scripts
#[derive(Args, Debug, Clone, Default)]
pub struct LookupArgs {
    /// Directory to search for scripts; repeat to add more, searched in order
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dirs: Vec<PathBuf>,

    /// Extension appended to script names given without one
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    pub ext: Option<String>,

    /// Config file to use instead of the nearest .noderun.json
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Script name or path (extension optional)
    pub script: String,

    /// Arguments passed to the script
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    #[command(flatten)]
    pub lookup: LookupArgs,

    /// Interpreter command (defaults to `node` from PATH)
    #[arg(short = 'n', long = "node", value_name = "PATH")]
    pub node: Option<String>,

    /// Run the command line through the shell instead of spawning directly
    #[arg(short = 's', long)]
    pub shell: bool,

    /// Print the command without executing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print the output wrapped in a JSON object
    #[arg(short = 'j', long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a script and run it with the interpreter
    #[command(visible_alias = "r")]
    Run(RunArgs),
    /// Print the path a script name resolves to
    Resolve {
        /// Script name or path (extension optional)
        script: String,

        #[command(flatten)]
        lookup: LookupArgs,
    },
    /// Write a default .noderun.json
    Init {
        /// Directory to write the config into (defaults to current directory)
        #[arg(long)]
        cwd: Option<PathBuf>,

        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Run(args) => run_command(args),
            Commands::Resolve { script, lookup } => resolve_command(&script, &lookup),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
