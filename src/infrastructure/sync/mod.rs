//! Remote Transfer Strategies
//!
//! Turn the deploy step into one rsync or scp command line.
//!
//! ## Strategies
//!
//! - `RsyncTransfer` - preferred; compressed, recursive, over ssh
//! - `ScpTransfer` - fallback when rsync is not installed
//! - `AutoTransfer` - picks one of the above when the command is resolved

mod rsync;
mod scp;
mod transfer;

pub use rsync::RsyncTransfer;
pub use scp::ScpTransfer;
pub use transfer::{detect_strategy, strategy_for, AutoTransfer};
