//! Transfer strategy selection

use std::path::Path;

use tracing::debug;

use super::rsync::RsyncTransfer;
use super::scp::ScpTransfer;
use crate::config::{DeployConfig, TransportKind};
use crate::domain::ports::TransferStrategy;
use crate::domain::value_objects::{CommandSpec, RemoteTarget};

/// Detect and return the best available transfer strategy
pub fn detect_strategy(ssh: &str) -> Option<Box<dyn TransferStrategy>> {
    // Try rsync first (preferred)
    let rsync = RsyncTransfer::new("rsync", ssh);
    if rsync.is_available() {
        return Some(Box::new(rsync));
    }

    // Fallback to scp (common on Windows)
    let scp = ScpTransfer::default();
    if scp.is_available() {
        return Some(Box::new(scp));
    }

    None
}

/// Strategy for the `[deploy]` section
pub fn strategy_for(deploy: &DeployConfig) -> Box<dyn TransferStrategy> {
    let program = deploy.program.as_deref().filter(|p| !p.trim().is_empty());
    match deploy.transport {
        TransportKind::Rsync => Box::new(RsyncTransfer::new(
            program.unwrap_or("rsync"),
            deploy.ssh.as_str(),
        )),
        TransportKind::Scp => Box::new(ScpTransfer::new(program.unwrap_or("scp"))),
        TransportKind::Auto => Box::new(AutoTransfer::new(deploy.ssh.as_str())),
    }
}

/// Picks rsync or scp when the sync command is resolved, so commands that
/// never deploy don't probe the system
#[derive(Debug, Clone)]
pub struct AutoTransfer {
    ssh: String,
}

impl AutoTransfer {
    pub fn new(ssh: impl Into<String>) -> Self {
        Self { ssh: ssh.into() }
    }
}

impl TransferStrategy for AutoTransfer {
    fn name(&self) -> &'static str {
        "auto"
    }

    fn is_available(&self) -> bool {
        detect_strategy(&self.ssh).is_some()
    }

    fn command(&self, source: &Path, remote: &RemoteTarget) -> CommandSpec {
        match detect_strategy(&self.ssh) {
            Some(strategy) => {
                debug!(transport = strategy.name(), "detected transfer strategy");
                strategy.command(source, remote)
            }
            // Neither is installed; rsync's spawn error is the clearest report
            None => RsyncTransfer::new("rsync", self.ssh.as_str()).command(source, remote),
        }
    }
}
