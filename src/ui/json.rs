//! JSON output utilities for CLI commands.
//!
//! Dispatch events are written by `JsonEventSink`; this module covers the
//! command-level documents (`list`, `init`, errors) that sit around them.

use std::io::{self, Write};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Convenience helper that writes raw JSON value to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Error event for failures that happen before any dispatch event
pub fn error_event(command: &str, message: &str, exit_code: i32) -> serde_json::Value {
    serde_json::json!({
        "event": "error",
        "command": command,
        "message": message,
        "exit_code": exit_code,
    })
}
