//! Operation run views
//!
//! Header, per-event progress lines and the closing summary for
//! `build`, `rebuild`, `clean`, `deploy`, `serve`, `watch` and `default`.

use std::time::Duration;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use sitetask::application::{DispatchEvent, PlannedStep, StepOutcome, Toolchain};
use sitetask::Operation;

/// Render the header printed before an operation runs
pub fn render_run_header(
    operation: Operation,
    toolchain: &Toolchain,
    config_source: &str,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if dry_run {
        format!("sitetask {} (dry run)", operation)
    } else {
        format!("sitetask {}", operation)
    };
    let mut header = CommandHeader::new(Icon::for_operation(operation), title);

    header.add("Root", toolchain.root().display().to_string());
    header.add("Config", config_source);
    header.add("Output", toolchain.output_dir().display().to_string());

    if operation == Operation::Deploy {
        if let Ok(Some(remote)) = toolchain.remote() {
            header.add("Remote", remote.to_string());
        }
        header.add("Transport", toolchain.transfer_name());
    }
    if operation.is_long_running() && !dry_run {
        header.add("Hint", "Press Ctrl+C to stop");
    }

    header.render(supports_color, supports_unicode)
}

/// Render one dispatch event as a timestamped line
///
/// `OperationStarted` has no line of its own; the header covers it.
pub fn render_event(
    timestamp: &str,
    event: &DispatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = ColoredText::dim(format!("[{}]", timestamp)).render(supports_color);

    match event {
        DispatchEvent::OperationStarted { .. } => String::new(),
        DispatchEvent::StepStarted { index, total, step } => format!(
            "{} {} {} {}: {}\n",
            prefix,
            Icon::Progress.colored(supports_color, supports_unicode),
            counter(*index, *total),
            step.action,
            step.invocation.describe()
        ),
        DispatchEvent::StepFinished {
            index,
            total,
            step,
            outcome,
            elapsed,
        } => render_outcome(
            &prefix,
            &counter(*index, *total),
            step,
            outcome,
            *elapsed,
            supports_color,
            supports_unicode,
        ),
        DispatchEvent::StepSkipped { index, total, step } => format!(
            "{} {} {} {}: skipped\n",
            prefix,
            Icon::Pending.colored(supports_color, supports_unicode),
            counter(*index, *total),
            step.action
        ),
        DispatchEvent::OperationFinished {
            operation,
            exit_code,
            interrupted,
        } => render_summary(
            *operation,
            *exit_code,
            *interrupted,
            supports_color,
            supports_unicode,
        ),
    }
}

fn render_outcome(
    prefix: &str,
    counter: &str,
    step: &PlannedStep,
    outcome: &StepOutcome,
    elapsed: Duration,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match outcome {
        StepOutcome::Succeeded => format!(
            "{} {} {} {} ({})\n",
            prefix,
            Icon::Success.colored(supports_color, supports_unicode),
            counter,
            step.action,
            format_elapsed(elapsed)
        ),
        StepOutcome::Removed { existed: true } => format!(
            "{} {} {} removed {}\n",
            prefix,
            Icon::Success.colored(supports_color, supports_unicode),
            counter,
            step.invocation.describe().trim_start_matches("rm -rf ")
        ),
        StepOutcome::Removed { existed: false } => format!(
            "{} {} {} nothing to remove\n",
            prefix,
            Icon::Success.colored(supports_color, supports_unicode),
            counter
        ),
        StepOutcome::Planned => format!(
            "{} {} {} {} (not run)\n",
            prefix,
            Icon::Arrow.colored(supports_color, supports_unicode),
            counter,
            step.action
        ),
        StepOutcome::Failed { message, .. } => format!(
            "{} {} {} {} failed: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            counter,
            step.action,
            ColoredText::error(message.as_str()).render(supports_color)
        ),
    }
}

/// Render the closing line for an operation
pub fn render_summary(
    operation: Operation,
    exit_code: i32,
    interrupted: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if exit_code == 0 {
        let text = format!("{} finished", operation);
        return format!(
            "\n{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success(text).bold().render(supports_color)
        );
    }

    if interrupted {
        let text = format!("{} interrupted", operation);
        return format!(
            "\n{} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(text).bold().render(supports_color)
        );
    }

    let text = format!("{} failed (exit {})", operation, exit_code);
    format!(
        "\n{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(text).bold().render(supports_color)
    )
}

fn counter(index: usize, total: usize) -> String {
    format!("[{}/{}]", index + 1, total)
}

fn format_elapsed(elapsed: Duration) -> String {
    if elapsed < Duration::from_secs(1) {
        format!("{}ms", elapsed.as_millis())
    } else {
        format!("{:.1}s", elapsed.as_secs_f64())
    }
}
