//! Dispatch events
//!
//! Observable interface for a running operation. Renderers (text, NDJSON)
//! implement the sink; the dispatcher never prints.

use std::time::Duration;

use crate::domain::value_objects::Operation;

use super::plan::PlannedStep;
use super::result::StepOutcome;

/// Event emitted while an operation runs
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchEvent {
    /// Plan resolved, about to run the first step
    OperationStarted {
        operation: Operation,
        steps: usize,
        dry_run: bool,
    },

    /// A step is about to run
    StepStarted {
        index: usize,
        total: usize,
        step: PlannedStep,
    },

    /// A step ended
    StepFinished {
        index: usize,
        total: usize,
        step: PlannedStep,
        outcome: StepOutcome,
        elapsed: Duration,
    },

    /// A step was never reached
    StepSkipped {
        index: usize,
        total: usize,
        step: PlannedStep,
    },

    /// Every step ran or was skipped
    OperationFinished {
        operation: Operation,
        exit_code: i32,
        interrupted: bool,
    },
}

/// Trait for receiving dispatch events
///
/// Implementations:
/// - text renderer in the CLI
/// - `JsonEventSink` for NDJSON output
/// - `NoopEventSink` for silent runs
pub trait DispatchEventSink: Send + Sync {
    fn on_event(&self, event: DispatchEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DispatchEventSink for NoopEventSink {
    fn on_event(&self, _event: DispatchEvent) {}
}
