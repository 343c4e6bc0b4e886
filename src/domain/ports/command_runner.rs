//! CommandRunner port - abstraction over spawning external commands
//!
//! The dispatcher only ever asks "run this and tell me how it exited", so
//! tests can swap in a recorder instead of real processes.

use serde::Serialize;

use crate::domain::value_objects::CommandSpec;
use crate::error::TaskResult;

/// How an external command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExitOutcome {
    /// Exit code; signal terminations are reported as 128 + signal
    pub code: i32,
}

impl ExitOutcome {
    pub const SUCCESS: ExitOutcome = ExitOutcome { code: 0 };

    pub fn from_code(code: i32) -> Self {
        Self { code }
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// Runs one external command to completion
///
/// Implementations:
/// - `SystemRunner` - std::process with inherited stdio
/// - test doubles that record invocations
pub trait CommandRunner {
    /// Run the command and block until it exits
    ///
    /// Returns `Err` only when the command could not be started.
    fn run(&self, command: &CommandSpec) -> TaskResult<ExitOutcome>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, command: &CommandSpec) -> TaskResult<ExitOutcome> {
        (**self).run(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_success() {
        assert!(ExitOutcome::SUCCESS.is_success());
        assert!(!ExitOutcome::from_code(3).is_success());
    }
}
