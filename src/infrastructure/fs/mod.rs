//! File System Implementations

mod local;

pub use local::LocalFs;
