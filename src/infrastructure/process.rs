//! System command runner
//!
//! Spawns external commands with `std::process`, inheriting the terminal so
//! interactive tools (ssh password prompts, servers) behave normally.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::domain::ports::{CommandRunner, ExitOutcome};
use crate::domain::value_objects::CommandSpec;
use crate::error::{TaskError, TaskResult};

/// Runs commands in the project root
#[derive(Debug, Clone)]
pub struct SystemRunner {
    cwd: PathBuf,
    discard_stdout: bool,
}

impl SystemRunner {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            discard_stdout: false,
        }
    }

    /// Send child stdout to /dev/null (JSON mode keeps stdout for events)
    pub fn with_discard_stdout(mut self, discard: bool) -> Self {
        self.discard_stdout = discard;
        self
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandSpec) -> TaskResult<ExitOutcome> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .current_dir(&self.cwd)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());

        if self.discard_stdout {
            cmd.stdout(Stdio::null());
        } else {
            cmd.stdout(Stdio::inherit());
        }

        let status = cmd.status().map_err(|source| TaskError::Spawn {
            program: command.program.clone(),
            source,
        })?;

        let outcome = ExitOutcome::from_code(exit_code(status));
        debug!(program = %command.program, code = outcome.code, "command exited");
        Ok(outcome)
    }
}

/// Exit code, with signal terminations mapped to 128 + signal
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sh(script: &str) -> CommandSpec {
        CommandSpec::new("sh").arg("-c").arg(script)
    }

    #[test]
    fn reports_exit_code() {
        let dir = tempdir().unwrap();
        let runner = SystemRunner::new(dir.path());

        assert_eq!(runner.run(&sh("exit 0")).unwrap(), ExitOutcome::SUCCESS);
        assert_eq!(runner.run(&sh("exit 7")).unwrap().code, 7);
    }

    #[test]
    fn runs_in_working_directory() {
        let dir = tempdir().unwrap();
        let runner = SystemRunner::new(dir.path()).with_discard_stdout(true);

        runner.run(&sh("echo hi > marker.txt")).unwrap();
        assert!(dir.path().join("marker.txt").exists());
    }

    #[test]
    fn signal_maps_to_128_plus_signal() {
        let dir = tempdir().unwrap();
        let runner = SystemRunner::new(dir.path());

        let outcome = runner.run(&sh("kill -TERM $$")).unwrap();
        assert_eq!(outcome.code, 128 + 15);
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let dir = tempdir().unwrap();
        let runner = SystemRunner::new(dir.path());

        let err = runner
            .run(&CommandSpec::new("sitetask-definitely-not-installed"))
            .unwrap_err();
        assert_eq!(err.exit_code(), 127);
    }
}
