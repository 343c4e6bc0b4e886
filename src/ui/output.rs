//! Plain stderr output shared by every command

use sitetask::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Print config warnings (unknown keys) to stderr
pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for w in warnings {
        eprint!("{}", render_config_warning(w, ui.color, ui.unicode));
    }
}

pub fn render_config_warning(w: &ConfigWarning, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Warning.colored(supports_color, supports_unicode);
    let mut out = match w.line {
        Some(line) => format!(
            "{} Unknown config key '{}' in {}:{}\n",
            icon,
            w.key,
            w.file.display(),
            line
        ),
        None => format!(
            "{} Unknown config key '{}' in {}\n",
            icon,
            w.key,
            w.file.display()
        ),
    };

    if let Some(suggestion) = &w.suggestion {
        out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
    }
    out
}

/// Print a fatal error to stderr
pub fn print_error(message: &str, ui: &UiContext) {
    eprintln!(
        "{} {}",
        Icon::Error.colored(ui.color, ui.unicode),
        ColoredText::error(message).render(ui.color)
    );
}
