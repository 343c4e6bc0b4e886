//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CommandLine, RemoteTarget};
use crate::error::TaskResult;

use super::loader::{self, LoadedConfig};

/// Filesystem locations, relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_output_dir")]
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            output: default_output_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

/// Site builder invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderConfig {
    #[serde(default = "default_builder_command")]
    pub command: CommandLine,

    /// Appended by `rebuild` to discard the builder's incremental cache
    #[serde(default = "default_force_flag")]
    pub force_flag: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            command: default_builder_command(),
            force_flag: default_force_flag(),
        }
    }
}

fn default_builder_command() -> CommandLine {
    CommandLine::new(["pdm", "run", "src/builder/build.py"])
}

fn default_force_flag() -> String {
    "--force".to_string()
}

/// Preview server invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_command")]
    pub command: CommandLine,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            command: default_server_command(),
        }
    }
}

fn default_server_command() -> CommandLine {
    CommandLine::new(["pdm", "run", "src/builder/serve.py"])
}

/// File watcher invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatcherConfig {
    #[serde(default = "default_watcher_command")]
    pub command: CommandLine,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            command: default_watcher_command(),
        }
    }
}

fn default_watcher_command() -> CommandLine {
    CommandLine::new(["pdm", "run", "src/builder/watch.py"])
}

/// Which sync tool `deploy` uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    #[default]
    Rsync,
    Scp,
    /// rsync when installed, scp otherwise
    Auto,
}

impl TransportKind {
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rsync" => Some(TransportKind::Rsync),
            "scp" => Some(TransportKind::Scp),
            "auto" => Some(TransportKind::Auto),
            _ => None,
        }
    }
}

/// Deploy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Remote destination ("host:path" or "user@host:path")
    #[serde(default)]
    pub remote: Option<String>,

    #[serde(default)]
    pub transport: TransportKind,

    /// Override the sync binary (defaults to the transport's name)
    #[serde(default)]
    pub program: Option<String>,

    /// Remote shell rsync uses (`-e`)
    #[serde(default = "default_ssh")]
    pub ssh: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            remote: None,
            transport: TransportKind::default(),
            program: None,
            ssh: default_ssh(),
        }
    }
}

fn default_ssh() -> String {
    "ssh".to_string()
}

impl DeployConfig {
    /// Parsed remote target, if one is configured
    pub fn remote_target(&self) -> TaskResult<Option<RemoteTarget>> {
        self.remote
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .map(str::parse::<RemoteTarget>)
            .transpose()
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub fn parse_lenient(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub builder: BuilderConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub watcher: WatcherConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Resolve the config for a project: explicit file, project file, user
    /// file, or defaults, then environment overrides
    pub fn load_for_project(root: &Path, explicit: Option<&Path>) -> TaskResult<LoadedConfig> {
        loader::load_for_project(root, explicit)
    }

    /// Output directory resolved against the project root
    pub fn output_dir(&self, root: &Path) -> PathBuf {
        if self.paths.output.is_absolute() {
            self.paths.output.clone()
        } else {
            root.join(&self.paths.output)
        }
    }
}
