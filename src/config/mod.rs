//! Configuration module for sitetask
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SITETASK_*)
//! 3. Project config (sitetask.toml in the project root)
//! 4. User config (~/.config/sitetask/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_for_project_with, user_config_path, write_starter, ConfigSource, ConfigWarning,
    LoadedConfig, PROJECT_CONFIG_FILE, STARTER_TEMPLATE,
};
pub use types::{
    BuilderConfig, ColorMode, Config, DeployConfig, OutputConfig, PathsConfig, ServerConfig,
    TransportKind, Verbosity, WatcherConfig,
};
