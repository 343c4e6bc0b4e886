//! Run one operation of the command table

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use tracing::warn;

use super::Session;
use crate::ui::context::UiContext;
use crate::ui::views::run::{render_event, render_run_header};
use sitetask::application::{DispatchEvent, DispatchEventSink, StepOutcome};
use sitetask::infrastructure::JsonEventSink;
use sitetask::presentation::create_dispatcher;
use sitetask::{DispatchOptions, Operation};

/// Prints dispatch events as timestamped lines
struct TextEventSink {
    ui: UiContext,
}

impl DispatchEventSink for TextEventSink {
    fn on_event(&self, event: DispatchEvent) {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered = render_event(&timestamp, &event, self.ui.color, self.ui.unicode);
        match event {
            DispatchEvent::StepFinished {
                outcome: StepOutcome::Failed { .. },
                ..
            } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    }
}

pub fn cmd_run(session: &Session, operation: Operation, dry_run: bool) -> Result<i32> {
    let dispatcher = create_dispatcher(session.config(), &session.root, session.ui.json);
    let plan = dispatcher.plan(operation)?;

    // The child gets the same SIGINT; we only stop launching further steps.
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
        warn!(error = %e, "could not install Ctrl+C handler");
    }

    let options = DispatchOptions::new()
        .with_dry_run(dry_run)
        .with_interrupt(interrupted);

    let report = if session.ui.json {
        dispatcher.run_plan(plan, &options, &JsonEventSink::stdout())
    } else {
        print!(
            "{}",
            render_run_header(
                operation,
                dispatcher.toolchain(),
                &session.config_source(),
                dry_run,
                session.ui.color,
                session.ui.unicode,
            )
        );
        println!();
        dispatcher.run_plan(
            plan,
            &options,
            &TextEventSink { ui: session.ui },
        )
    };

    Ok(report.exit_code())
}
