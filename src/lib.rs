//! sitetask - task dispatcher for a static-site workflow
//!
//! sitetask maps a small, fixed set of operations onto external commands:
//! the site builder and its preview tools, plus rsync or scp for deploys.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DispatchOptions, DispatchReport, Dispatcher, StepOutcome};
pub use config::Config;
pub use domain::services::CommandTable;
pub use domain::value_objects::{Action, CommandSpec, Operation, RemoteTarget, Step};
pub use error::{TaskError, TaskResult};
