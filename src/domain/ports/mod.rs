//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod file_system;
pub mod transfer_strategy;

pub use command_runner::{CommandRunner, ExitOutcome};
pub use file_system::{FileSystem, FsError, FsResult};
pub use transfer_strategy::{contents_of, TransferStrategy};
