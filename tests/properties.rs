//! Property tests for sitetask.
//!
//! Properties use randomized input generation to protect invariants like
//! "never panics" and "expansion is deterministic".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/remote.rs"]
mod remote;

#[path = "properties/plan.rs"]
mod plan;

#[path = "properties/contents.rs"]
mod contents;
