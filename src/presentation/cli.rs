//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--root, --config, --json, --color, --verbose, --dry-run) are
//!   accepted before or after the subcommand
//! - No subcommand runs the `default` operation

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::Operation;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// sitetask - build, preview, and deploy a static site
#[derive(Parser, Debug)]
#[command(name = "sitetask")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'sitetask' without arguments to run the default operation (build).")]
pub struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true, env = "SITETASK_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file (defaults to <root>/sitetask.toml, then the user config)
    #[arg(long, global = true, env = "SITETASK_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print the steps without running anything
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the site builder
    Build,

    /// Run the site builder with its force flag (no cache)
    Rebuild,

    /// Delete the output directory
    Clean,

    /// Clean, build, then sync the output directory to the remote
    Deploy,

    /// Run the local preview server (blocks until interrupted)
    Serve,

    /// Run the file watcher (blocks until interrupted)
    Watch,

    /// Alias for build
    Default,

    /// Show every operation and the commands it would run
    List,

    /// Write a starter sitetask.toml into the project root
    Init {
        /// Overwrite an existing sitetask.toml
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// The dispatcher operation this subcommand runs, if any
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Commands::Build => Some(Operation::Build),
            Commands::Rebuild => Some(Operation::Rebuild),
            Commands::Clean => Some(Operation::Clean),
            Commands::Deploy => Some(Operation::Deploy),
            Commands::Serve => Some(Operation::Serve),
            Commands::Watch => Some(Operation::Watch),
            Commands::Default => Some(Operation::Default),
            Commands::List | Commands::Init { .. } => None,
        }
    }
}

impl Cli {
    /// Subcommand, with "none given" meaning `default`
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Default)
    }
}
