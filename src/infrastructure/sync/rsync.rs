//! Rsync Transfer Strategy
//!
//! Uses rsync for efficient incremental file transfers.
//! This is the preferred method on Unix systems.

use crate::domain::ports::{contents_of, TransferStrategy};
use crate::domain::value_objects::{CommandSpec, RemoteTarget};
use std::path::Path;
use std::process::{Command, Stdio};

/// Transfer strategy using rsync
///
/// Archive mode, compression, remote shell given by `ssh`. No `--delete`:
/// files that exist only on the remote are left alone.
#[derive(Debug, Clone)]
pub struct RsyncTransfer {
    program: String,
    ssh: String,
}

impl RsyncTransfer {
    pub fn new(program: impl Into<String>, ssh: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ssh: ssh.into(),
        }
    }

    /// Check if rsync is installed and available
    pub fn check_available(program: &str) -> bool {
        Command::new(program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl Default for RsyncTransfer {
    fn default() -> Self {
        Self::new("rsync", "ssh")
    }
}

impl TransferStrategy for RsyncTransfer {
    fn name(&self) -> &'static str {
        "rsync"
    }

    fn is_available(&self) -> bool {
        Self::check_available(&self.program)
    }

    fn command(&self, source: &Path, remote: &RemoteTarget) -> CommandSpec {
        CommandSpec::new(self.program.as_str())
            .arg("-avz")
            .arg("-e")
            .arg(self.ssh.as_str())
            .arg(contents_of(source)) // trailing slash = copy contents
            .arg(remote.destination())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsync_transfer_name() {
        assert_eq!(RsyncTransfer::default().name(), "rsync");
    }

    #[test]
    fn command_copies_contents_without_delete() {
        let remote: RemoteTarget = "me@host:/srv/www".parse().unwrap();
        let spec = RsyncTransfer::default().command(Path::new("/site/dist"), &remote);

        insta::assert_snapshot!(spec.display(), @"rsync -avz -e ssh /site/dist/ me@host:/srv/www");
        assert!(!spec.args.iter().any(|a| a.starts_with("--delete")));
    }

    #[test]
    fn custom_program_and_ssh() {
        let remote: RemoteTarget = "host:site".parse().unwrap();
        let spec = RsyncTransfer::new("/opt/bin/rsync", "ssh -p 2222")
            .command(Path::new("dist"), &remote);

        assert_eq!(spec.program, "/opt/bin/rsync");
        assert_eq!(spec.args[2], "ssh -p 2222");
    }

    #[test]
    fn check_available_does_not_panic() {
        let _ = RsyncTransfer::check_available("rsync");
    }
}
