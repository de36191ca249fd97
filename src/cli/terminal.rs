//! Terminal color handling

use owo_colors::{OwoColorize, colors::css};

/// Applies colors to output text when the target stream supports them.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    /// A painter for text written to stdout.
    pub fn stdout() -> Self {
        Self {
            enabled: supports_color::on(supports_color::Stream::Stdout).is_some(),
        }
    }

    /// A painter for text written to stderr.
    pub fn stderr() -> Self {
        Self {
            enabled: supports_color::on(supports_color::Stream::Stderr).is_some(),
        }
    }

    /// A painter that never emits escape codes.
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// Course headings (blue)
    pub fn heading(self, text: &str) -> String {
        self.paint(text, |t| t.fg::<css::LightBlue>().to_string())
    }

    /// Warnings (amber)
    pub fn warning(self, text: &str) -> String {
        self.paint(text, |t| t.fg::<css::Orange>().to_string())
    }

    /// Secondary labels
    pub fn dim(self, text: &str) -> String {
        self.paint(text, |t| t.dimmed().to_string())
    }

    fn paint(self, text: &str, style: impl FnOnce(&str) -> String) -> String {
        if self.enabled {
            style(text)
        } else {
            text.to_string()
        }
    }
}
