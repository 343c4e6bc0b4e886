//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation (Local)
//! - `process` - Command runner over `std::process`
//! - `sync/` - Transfer strategies (rsync, scp)
//! - `events/` - Dispatch event sinks (JSON)

pub mod events;
pub mod fs;
pub mod process;
pub mod sync;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use process::SystemRunner;
pub use sync::{detect_strategy, strategy_for, RsyncTransfer, ScpTransfer};
