//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Does NOT spawn processes or touch the disk itself
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Dispatcher` - Plans and runs one operation of the command table

pub mod dispatch;

pub use dispatch::{
    DispatchEvent, DispatchEventSink, DispatchOptions, DispatchReport, Dispatcher, Invocation,
    NoopEventSink, Plan, PlannedStep, StepOutcome, StepReport, Toolchain, INTERRUPTED_EXIT_CODE,
};
