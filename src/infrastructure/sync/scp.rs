//! SCP Transfer Strategy
//!
//! Uses scp for file transfers to remote servers.
//! This is the fallback method when rsync is not available,
//! particularly on Windows systems with OpenSSH.

use crate::domain::ports::{contents_of, TransferStrategy};
use crate::domain::value_objects::{CommandSpec, RemoteTarget};
use std::path::Path;
use std::process::{Command, Stdio};

/// Transfer strategy using scp
///
/// Unlike rsync, scp always copies full files. `<dir>/.` as the source
/// copies the directory's contents rather than the directory itself.
#[derive(Debug, Clone)]
pub struct ScpTransfer {
    program: String,
}

impl ScpTransfer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Check if scp is installed and available
    pub fn check_available(program: &str) -> bool {
        // scp without args returns non-zero, but if we can spawn it, it's available
        Command::new(program)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }
}

impl Default for ScpTransfer {
    fn default() -> Self {
        Self::new("scp")
    }
}

impl TransferStrategy for ScpTransfer {
    fn name(&self) -> &'static str {
        "scp"
    }

    fn is_available(&self) -> bool {
        Self::check_available(&self.program)
    }

    fn command(&self, source: &Path, remote: &RemoteTarget) -> CommandSpec {
        CommandSpec::new(self.program.as_str())
            .arg("-r")
            .arg("-C")
            .arg(format!("{}.", contents_of(source)))
            .arg(remote.destination())
    }
}
