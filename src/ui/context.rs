use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use sitetask::config::{ColorMode, OutputConfig};
use sitetask::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, output: &OutputConfig) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, cli_color, output, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        output: &OutputConfig,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            caps,
            color: color && !json,
            unicode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ci_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            supports_color: true,
            supports_unicode: true,
            is_ci: true,
        }
    }

    #[test]
    fn ci_defaults_to_no_color_when_auto() {
        let output = OutputConfig::default();
        let ui = UiContext::from_caps(false, None, &output, ci_caps());
        assert!(!ui.color);
    }

    #[test]
    fn ci_allows_explicit_color_always_flag() {
        let output = OutputConfig::default();
        let ui = UiContext::from_caps(false, Some(ColorWhen::Always), &output, ci_caps());
        assert!(ui.color);
    }

    #[test]
    fn cli_flag_beats_config() {
        let output = OutputConfig {
            color: ColorMode::Always,
            ..OutputConfig::default()
        };
        let ui = UiContext::from_caps(false, Some(ColorWhen::Never), &output, ci_caps());
        assert!(!ui.color);
    }

    #[test]
    fn config_can_disable_unicode() {
        let output = OutputConfig {
            unicode: false,
            ..OutputConfig::default()
        };
        let ui = UiContext::from_caps(false, None, &output, ci_caps());
        assert!(!ui.unicode);
    }

    #[test]
    fn json_mode_never_colors() {
        let output = OutputConfig::default();
        let ui = UiContext::from_caps(true, Some(ColorWhen::Always), &output, ci_caps());
        assert!(!ui.color);
    }
}
