use std::fmt;

use crossterm::style::{Color, Stylize};

use crate::ui::theme;

/// Text tagged with one of the theme colors; styling only applies when
/// rendered for a color-capable terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Color,
    bold: bool,
}

impl ColoredText {
    fn themed(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::themed(text, theme::colors::SUCCESS)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::themed(text, theme::colors::ERROR)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::themed(text, theme::colors::WARNING)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::themed(text, theme::colors::INFO)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::themed(text, theme::colors::DIM)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let styled = self.text.as_str().with(self.color);
        if self.bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_when_color_unsupported() {
        assert_eq!(ColoredText::success("ok").bold().render(false), "ok");
    }

    #[test]
    fn escape_codes_when_color_supported() {
        let rendered = ColoredText::error("no").render(true);
        assert!(rendered.contains("\u{1b}["));
        assert!(rendered.contains("no"));
    }
}
