//! Dispatch Use Case
//!
//! Plans and runs one operation.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::domain::ports::{CommandRunner, FileSystem};
use crate::domain::services::CommandTable;
use crate::domain::value_objects::{CommandSpec, Operation};
use crate::error::TaskResult;

use super::events::{DispatchEvent, DispatchEventSink};
use super::options::DispatchOptions;
use super::plan::{Invocation, Plan, PlannedStep};
use super::result::{DispatchReport, StepOutcome, StepReport};
use super::toolchain::Toolchain;

/// Exit code for a failed in-process removal
const REMOVE_FAILED_EXIT_CODE: i32 = 1;

/// Dispatcher - interprets the command table against injected ports
pub struct Dispatcher<R, F>
where
    R: CommandRunner,
    F: FileSystem,
{
    table: CommandTable,
    toolchain: Toolchain,
    runner: R,
    fs: F,
}

impl<R, F> Dispatcher<R, F>
where
    R: CommandRunner,
    F: FileSystem,
{
    /// Create a dispatcher over the standard command table
    pub fn new(toolchain: Toolchain, runner: R, fs: F) -> Self {
        Self {
            table: CommandTable::standard(),
            toolchain,
            runner,
            fs,
        }
    }

    /// Replace the command table
    pub fn with_table(mut self, table: CommandTable) -> Self {
        self.table = table;
        self
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }

    /// Expand and resolve every step of `operation`
    ///
    /// Fails before anything runs when a step cannot be resolved (missing
    /// remote, empty command, unsafe output directory).
    pub fn plan(&self, operation: Operation) -> TaskResult<Plan> {
        let steps = self
            .table
            .expand(operation)?
            .into_iter()
            .map(|(source, action)| {
                self.toolchain
                    .resolve(source, action)
                    .map(|invocation| PlannedStep::new(source, action, invocation))
            })
            .collect::<TaskResult<Vec<_>>>()?;

        debug!(operation = %operation, steps = steps.len(), "planned operation");
        Ok(Plan { operation, steps })
    }

    /// Plan and run `operation`
    pub fn execute(
        &self,
        operation: Operation,
        options: &DispatchOptions,
        events: &dyn DispatchEventSink,
    ) -> TaskResult<DispatchReport> {
        let plan = self.plan(operation)?;
        Ok(self.run_plan(plan, options, events))
    }

    /// Run a resolved plan, stopping at the first failure
    pub fn run_plan(
        &self,
        plan: Plan,
        options: &DispatchOptions,
        events: &dyn DispatchEventSink,
    ) -> DispatchReport {
        let operation = plan.operation;
        let total = plan.len();
        let mut report = DispatchReport::new(operation, options.dry_run);

        events.on_event(DispatchEvent::OperationStarted {
            operation,
            steps: total,
            dry_run: options.dry_run,
        });

        let mut stopped = false;
        for (index, step) in plan.steps.into_iter().enumerate() {
            if !stopped && options.is_interrupted() {
                warn!(operation = %operation, "interrupted, not starting remaining steps");
                report.interrupted = true;
                stopped = true;
            }

            if stopped {
                events.on_event(DispatchEvent::StepSkipped {
                    index,
                    total,
                    step: step.clone(),
                });
                report.skipped.push(step);
                continue;
            }

            events.on_event(DispatchEvent::StepStarted {
                index,
                total,
                step: step.clone(),
            });

            let started = Instant::now();
            let outcome = if options.dry_run {
                StepOutcome::Planned
            } else {
                self.perform(&step)
            };
            let elapsed = started.elapsed();

            if !outcome.is_success() {
                stopped = true;
            }

            events.on_event(DispatchEvent::StepFinished {
                index,
                total,
                step: step.clone(),
                outcome: outcome.clone(),
                elapsed,
            });
            report.steps.push(StepReport {
                step,
                outcome,
                elapsed,
            });
        }

        // Ctrl+C that ended the last step; its own exit status still stands
        if options.is_interrupted() && report.failed_step().is_some() {
            report.interrupted = true;
        }

        events.on_event(DispatchEvent::OperationFinished {
            operation,
            exit_code: report.exit_code(),
            interrupted: report.interrupted,
        });

        report
    }

    fn perform(&self, step: &PlannedStep) -> StepOutcome {
        match &step.invocation {
            Invocation::RemoveTree(path) => self.remove_tree(path),
            Invocation::Command(command) => self.run_command(command),
        }
    }

    fn remove_tree(&self, path: &Path) -> StepOutcome {
        match self.fs.remove_tree(path) {
            Ok(existed) => {
                debug!(path = %path.display(), existed, "removed output directory");
                StepOutcome::Removed { existed }
            }
            Err(e) => StepOutcome::Failed {
                code: REMOVE_FAILED_EXIT_CODE,
                message: format!("failed to remove {}: {}", path.display(), e),
            },
        }
    }

    fn run_command(&self, command: &CommandSpec) -> StepOutcome {
        info!(command = %command, "running");
        match self.runner.run(command) {
            Ok(exit) if exit.is_success() => StepOutcome::Succeeded,
            Ok(exit) => StepOutcome::Failed {
                code: exit.code,
                message: format!("{} exited with status {}", command.program, exit.code),
            },
            Err(e) => StepOutcome::Failed {
                code: e.exit_code(),
                message: e.to_string(),
            },
        }
    }
}
