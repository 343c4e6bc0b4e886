//! Transfer Strategy Port
//!
//! Turns "mirror this directory to that remote" into one external command.
//! The dispatcher runs the command like any other step.

use std::path::Path;

use crate::domain::value_objects::{CommandSpec, RemoteTarget};

/// Strategy for one-way transfers to a remote server
pub trait TransferStrategy: Send + Sync {
    /// Name of this transfer method (for logging and `list`)
    fn name(&self) -> &'static str;

    /// Check if this transfer method is available on the system
    fn is_available(&self) -> bool;

    /// Command that copies the contents of `source` (not the directory
    /// itself) to `remote`
    fn command(&self, source: &Path, remote: &RemoteTarget) -> CommandSpec;
}

/// Directory path rendered with exactly one trailing separator
pub fn contents_of(source: &Path) -> String {
    let text = source.display().to_string();
    let trimmed = text.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("{trimmed}/")
    }
}
