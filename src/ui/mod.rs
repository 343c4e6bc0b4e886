//! Terminal and JSON rendering for the CLI
//!
//! ## Structure
//!
//! - `terminal` / `context` - capability detection and the resolved UI settings
//! - `theme` - semantic colors and icon sets (unicode + ASCII)
//! - `primitives` / `blocks` - small reusable renderers
//! - `views` - per-command output
//! - `json` - NDJSON helpers for command-level events

pub mod blocks;
pub mod context;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
