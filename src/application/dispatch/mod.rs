//! Dispatch Use Case
//!
//! Interprets the command table for one operation.
//!
//! This module handles:
//! - Expanding the operation into leaf actions
//! - Resolving every action to a command before anything runs
//! - Running the steps in order and stopping at the first failure
//! - Reporting progress through a `DispatchEventSink`

mod events;
mod options;
mod plan;
mod result;
mod toolchain;
mod use_case;


pub use events::{DispatchEvent, DispatchEventSink, NoopEventSink};
pub use options::DispatchOptions;
pub use plan::{Invocation, Plan, PlannedStep};
pub use result::{DispatchReport, StepOutcome, StepReport, INTERRUPTED_EXIT_CODE};
pub use toolchain::Toolchain;
pub use use_case::Dispatcher;
