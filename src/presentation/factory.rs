//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{Dispatcher, Toolchain};
use crate::config::Config;
use crate::infrastructure::{strategy_for, LocalFs, SystemRunner};

/// Type alias for the concrete Dispatcher with all dependencies
pub type ConcreteDispatcher = Dispatcher<SystemRunner, LocalFs>;

/// Resolve the project's toolchain from config
pub fn create_toolchain(config: &Config, root: &Path) -> Toolchain {
    Toolchain::from_config(config, root, strategy_for(&config.deploy))
}

/// Create a dispatcher with all dependencies wired up
///
/// Commands run in `root`. In JSON mode child stdout is discarded so the
/// event stream stays parseable.
pub fn create_dispatcher(config: &Config, root: &Path, json: bool) -> ConcreteDispatcher {
    let runner = SystemRunner::new(root).with_discard_stdout(json);
    Dispatcher::new(create_toolchain(config, root), runner, LocalFs::new())
}
