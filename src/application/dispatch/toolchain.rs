//! Toolchain - resolves leaf actions into concrete invocations

use std::path::{Component, Path, PathBuf};

use crate::config::{Config, DeployConfig};
use crate::domain::ports::TransferStrategy;
use crate::domain::value_objects::{Action, CommandLine, Operation, RemoteTarget};
use crate::error::{TaskError, TaskResult};

use super::plan::Invocation;

/// The external programs and paths one project uses
///
/// Command lines stay unresolved until an action needs them, so an empty
/// `[server] command` only breaks `serve`.
pub struct Toolchain {
    root: PathBuf,
    output_dir: PathBuf,
    builder: CommandLine,
    force_flag: String,
    server: CommandLine,
    watcher: CommandLine,
    deploy: DeployConfig,
    transfer: Box<dyn TransferStrategy>,
}

impl Toolchain {
    pub fn from_config(config: &Config, root: &Path, transfer: Box<dyn TransferStrategy>) -> Self {
        Self {
            root: root.to_path_buf(),
            output_dir: config.output_dir(root),
            builder: config.builder.command.clone(),
            force_flag: config.builder.force_flag.clone(),
            server: config.server.command.clone(),
            watcher: config.watcher.command.clone(),
            deploy: config.deploy.clone(),
            transfer,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn transfer_name(&self) -> &'static str {
        self.transfer.name()
    }

    /// Parsed remote target; `None` when no remote is configured
    pub fn remote(&self) -> TaskResult<Option<RemoteTarget>> {
        self.deploy.remote_target()
    }

    /// Resolve one action contributed by `operation`
    pub fn resolve(&self, operation: Operation, action: Action) -> TaskResult<Invocation> {
        let command = match action {
            Action::RemoveOutput => {
                self.check_removable()?;
                return Ok(Invocation::RemoveTree(self.output_dir.clone()));
            }
            Action::Build { force } => {
                let spec = self.builder.to_spec("builder")?;
                let flag = self.force_flag.trim();
                if force && !flag.is_empty() {
                    spec.arg(flag)
                } else {
                    spec
                }
            }
            Action::Serve => self.server.to_spec("server")?,
            Action::Watch => self.watcher.to_spec("watcher")?,
            Action::Sync => {
                let remote = self.remote()?.ok_or_else(|| TaskError::MissingRemote {
                    operation: operation.name().to_string(),
                })?;
                self.transfer.command(&self.output_dir, &remote)
            }
        };
        Ok(Invocation::Command(command))
    }

    /// Refuse output directories whose removal would take the project with it
    pub fn check_removable(&self) -> TaskResult<()> {
        let unsafe_dir = |reason: &str| TaskError::UnsafeOutputDir {
            path: self.output_dir.clone(),
            reason: reason.to_string(),
        };

        if self.output_dir.as_os_str().is_empty() {
            return Err(unsafe_dir("path is empty"));
        }

        let output = normalize(&self.output_dir);
        let root = normalize(&self.root);

        if output.has_root() && output.parent().is_none() {
            return Err(unsafe_dir("it is the filesystem root"));
        }
        if output == root {
            return Err(unsafe_dir("it is the project root"));
        }
        if root.starts_with(&output) {
            return Err(unsafe_dir("it contains the project root"));
        }

        Ok(())
    }
}

/// Lexically resolve `.` and `..` without touching the disk
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if out.file_name().is_some() {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
