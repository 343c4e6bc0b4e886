//! Error types for sitetask
//!
//! Uses `thiserror` for library errors. A non-zero exit from an external
//! command is not an error here: it is reported as a failed step.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sitetask operations
pub type TaskResult<T> = Result<T, TaskError>;

/// Exit code used for configuration and planning errors
pub const USAGE_EXIT_CODE: i32 = 2;

/// Main error type for sitetask operations
#[derive(Error, Debug)]
pub enum TaskError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Operation name not in the command table
    #[error("unknown operation '{name}' (expected one of: {expected})")]
    UnknownOperation { name: String, expected: String },

    /// Deploy requested without a remote destination
    #[error("'{operation}' needs a remote destination - set [deploy] remote = \"host:path\" or SITETASK_REMOTE")]
    MissingRemote { operation: String },

    /// Remote destination could not be parsed
    #[error("invalid remote '{remote}': {reason}")]
    InvalidRemote { remote: String, reason: String },

    /// A configured command line has no program
    #[error("[{section}] command is empty")]
    EmptyCommand { section: String },

    /// Output directory would remove something it should not
    #[error("refusing to remove output directory '{path}': {reason}")]
    UnsafeOutputDir { path: PathBuf, reason: String },

    /// Command table refers back to an operation being expanded
    #[error("command table cycle: {chain}")]
    CyclicOperation { chain: String },

    /// Command table refers to an operation with no entry
    #[error("command table has no entry for '{operation}'")]
    UndefinedOperation { operation: String },

    /// External command could not be started
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl TaskError {
    /// Process exit code for this error
    ///
    /// Spawn failures follow the shell convention (127 not found, 126 not
    /// executable). Configuration and planning errors use 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            TaskError::Spawn { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => 127,
                std::io::ErrorKind::PermissionDenied => 126,
                _ => 1,
            },
            TaskError::Io(_) => 1,
            _ => USAGE_EXIT_CODE,
        }
    }
}
