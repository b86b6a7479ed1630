//! ANSI color helpers for terminal output.
//!
//! All report output goes through a [`Theme`] so colors can be switched off
//! (config `color: false` or `NO_COLOR`) without touching the reporters.

use ansi_term::{Colour, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub enabled: bool,
}

impl Theme {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    fn paint(&self, style: Style, s: &str) -> String {
        if self.enabled {
            style.paint(s).to_string()
        } else {
            s.to_string()
        }
    }

    /// Section title, e.g. "Calculating User Stats..."
    pub fn heading(&self, s: &str) -> String {
        self.paint(Colour::Cyan.bold(), s)
    }

    /// Left-hand side of a "+ label: value" line
    pub fn label(&self, s: &str) -> String {
        self.paint(Style::new().bold(), s)
    }

    pub fn value(&self, s: &str) -> String {
        self.paint(Colour::Green.normal(), s)
    }

    /// Grey text for missing values and timings
    pub fn muted(&self, s: &str) -> String {
        self.paint(Colour::Fixed(244).normal(), s)
    }

    pub fn prompt(&self, s: &str) -> String {
        self.paint(Colour::Yellow.normal(), s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_returns_input() {
        let t = Theme::plain();
        assert_eq!(t.heading("Stats"), "Stats");
        assert_eq!(t.value("42"), "42");
        assert_eq!(t.muted("no data"), "no data");
    }

    #[test]
    fn test_enabled_theme_wraps_in_escape_codes() {
        let t = Theme::new(true);
        let v = t.value("42");
        assert!(v.starts_with("\x1b["));
        assert!(v.contains("42"));
        assert!(v.ends_with("\x1b[0m"));
    }
}
