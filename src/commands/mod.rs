//! Command handlers for the sitetask binary
//!
//! Each handler returns the process exit code. Errors that stop a command
//! before any step runs come back as `anyhow::Error` wrapping a `TaskError`.

pub mod init;
pub mod list;
pub mod project_root;
pub mod run;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::ui::context::UiContext;
use sitetask::config::LoadedConfig;
use sitetask::presentation::Cli;
use sitetask::Config;

/// Everything a command needs after flags and config are resolved
pub struct Session {
    pub root: PathBuf,
    pub loaded: LoadedConfig,
    pub ui: UiContext,
}

impl Session {
    pub fn open(cli: &Cli) -> Result<Self> {
        let root = resolve_root(cli)?;
        let loaded = Config::load_for_project(&root, cli.config.as_deref())?;
        let ui = UiContext::new(cli.json, cli.color, &loaded.config.output);

        if !ui.json {
            crate::ui::output::print_config_warnings(&loaded.warnings, &ui);
        }

        Ok(Self { root, loaded, ui })
    }

    pub fn config(&self) -> &Config {
        &self.loaded.config
    }

    pub fn config_source(&self) -> String {
        self.loaded.source.describe()
    }
}

/// `--root` wins; otherwise the nearest ancestor with a sitetask.toml
fn resolve_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.root {
        Some(root) => canonical_root(root),
        None => Ok(project_root::discover_project_root(&current_dir()?)),
    }
}

/// `init` writes into `--root` or the current directory, never an ancestor
pub fn init_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.root {
        Some(root) => {
            std::fs::create_dir_all(root)
                .with_context(|| format!("cannot create '{}'", root.display()))?;
            canonical_root(root)
        }
        None => current_dir(),
    }
}

fn canonical_root(root: &Path) -> Result<PathBuf> {
    root.canonicalize()
        .with_context(|| format!("project root '{}' does not exist", root.display()))
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("cannot read current directory")
}
