//! Dispatch result types

use std::time::Duration;

use serde::Serialize;

use crate::domain::value_objects::Operation;

use super::plan::PlannedStep;

/// Exit code reported when Ctrl+C stopped the run between steps
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// How a step ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    /// External command exited 0
    Succeeded,
    /// Output tree removed; `existed` is false when there was nothing to remove
    Removed { existed: bool },
    /// Dry run: nothing was executed
    Planned,
    /// Non-zero exit, spawn failure, or removal error
    Failed { code: i32, message: String },
}

impl StepOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, StepOutcome::Failed { .. })
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            StepOutcome::Failed { code, .. } => *code,
            _ => 0,
        }
    }
}

/// A step that was started, and how it ended
#[derive(Debug, Clone)]
pub struct StepReport {
    pub step: PlannedStep,
    pub outcome: StepOutcome,
    pub elapsed: Duration,
}

/// Result of running one operation
#[derive(Debug, Clone)]
pub struct DispatchReport {
    pub operation: Operation,
    pub dry_run: bool,
    /// Steps that were started, in order
    pub steps: Vec<StepReport>,
    /// Steps never reached because an earlier one failed
    pub skipped: Vec<PlannedStep>,
    /// Ctrl+C was recorded before a step could start
    pub interrupted: bool,
}

impl DispatchReport {
    pub fn new(operation: Operation, dry_run: bool) -> Self {
        Self {
            operation,
            dry_run,
            steps: Vec::new(),
            skipped: Vec::new(),
            interrupted: false,
        }
    }

    /// The step that stopped the run, if any
    pub fn failed_step(&self) -> Option<&StepReport> {
        self.steps.iter().find(|s| !s.outcome.is_success())
    }

    pub fn is_success(&self) -> bool {
        self.failed_step().is_none() && !self.interrupted
    }

    /// First non-zero step status, 130 when an interrupt skipped steps, else 0
    pub fn exit_code(&self) -> i32 {
        match self.failed_step() {
            Some(step) => step.outcome.exit_code(),
            None if self.interrupted => INTERRUPTED_EXIT_CODE,
            None => 0,
        }
    }
}
