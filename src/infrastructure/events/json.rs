//! JSON Event Sink
//!
//! Outputs dispatch events as NDJSON for CI/automation consumption.

use crate::application::{DispatchEvent, DispatchEventSink, PlannedStep, StepOutcome};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn step_fields(index: usize, total: usize, step: &PlannedStep) -> serde_json::Value {
    serde_json::json!({
        "index": index,
        "total": total,
        "operation": step.operation,
        "action": step.action.name(),
        "command": step.invocation.describe(),
    })
}

fn merge(mut base: serde_json::Value, extra: serde_json::Value) -> serde_json::Value {
    if let (Some(base), serde_json::Value::Object(extra)) = (base.as_object_mut(), extra) {
        base.extend(extra);
    }
    base
}

impl DispatchEventSink for JsonEventSink {
    fn on_event(&self, event: DispatchEvent) {
        let json = match event {
            DispatchEvent::OperationStarted {
                operation,
                steps,
                dry_run,
            } => {
                serde_json::json!({
                    "event": "operation_started",
                    "operation": operation,
                    "steps": steps,
                    "dry_run": dry_run,
                })
            }

            DispatchEvent::StepStarted { index, total, step } => merge(
                serde_json::json!({ "event": "step_started" }),
                step_fields(index, total, &step),
            ),

            DispatchEvent::StepFinished {
                index,
                total,
                step,
                outcome,
                elapsed,
            } => {
                let mut extra = serde_json::json!({
                    "event": "step_finished",
                    "status": outcome_status(&outcome),
                    "exit_code": outcome.exit_code(),
                    "elapsed_ms": elapsed.as_millis() as u64,
                });
                match outcome {
                    StepOutcome::Removed { existed } => {
                        extra = merge(extra, serde_json::json!({ "existed": existed }));
                    }
                    StepOutcome::Failed { message, .. } => {
                        extra = merge(extra, serde_json::json!({ "error": message }));
                    }
                    StepOutcome::Succeeded | StepOutcome::Planned => {}
                }
                merge(extra, step_fields(index, total, &step))
            }

            DispatchEvent::StepSkipped { index, total, step } => merge(
                serde_json::json!({ "event": "step_skipped" }),
                step_fields(index, total, &step),
            ),

            DispatchEvent::OperationFinished {
                operation,
                exit_code,
                interrupted,
            } => {
                let status = if interrupted {
                    "interrupted"
                } else if exit_code == 0 {
                    "success"
                } else {
                    "failed"
                };
                serde_json::json!({
                    "event": "operation_finished",
                    "operation": operation,
                    "status": status,
                    "exit_code": exit_code,
                })
            }
        };

        self.write_event(json);
    }
}

fn outcome_status(outcome: &StepOutcome) -> &'static str {
    match outcome {
        StepOutcome::Succeeded => "succeeded",
        StepOutcome::Removed { .. } => "removed",
        StepOutcome::Planned => "planned",
        StepOutcome::Failed { .. } => "failed",
    }
}
