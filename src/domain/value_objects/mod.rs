//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod command_spec;
mod operation;
mod remote;
mod step;

pub use command_spec::{CommandLine, CommandSpec};
pub use operation::Operation;
pub use remote::RemoteTarget;
pub use step::{Action, Step};
