//! Dispatch options

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Options for running an operation
#[derive(Debug, Clone, Default)]
pub struct DispatchOptions {
    /// Emit events for every step without running anything
    pub dry_run: bool,
    /// Set by the Ctrl+C handler; checked between steps
    pub interrupt: Option<Arc<AtomicBool>>,
}

impl DispatchOptions {
    /// Create new dispatch options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set the interrupt flag
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Whether an interrupt has been recorded
    pub fn is_interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}
