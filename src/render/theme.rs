//! Styling for rendered views.
//!
//! Color scheme (rich mode only):
//! - Cyan: users
//! - Magenta: machines
//! - Blue: groups
//! - Red: secrets, direct grants
//! - Yellow: inherited grants
//! - Dimmed: keys, secondary labels
//!
//! Plain mode emits neither ANSI codes nor icons.

use console::Style;

/// Whether colored output is allowed (respects `NO_COLOR` and terminal detection).
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    rich: bool,
}

impl Theme {
    pub fn rich() -> Self {
        Self { rich: true }
    }

    pub fn plain() -> Self {
        Self { rich: false }
    }

    /// Rich output unless `basic` was requested or colors are disabled.
    pub fn detect(basic: bool) -> Self {
        Self {
            rich: !basic && colors_enabled(),
        }
    }

    pub fn is_rich(&self) -> bool {
        self.rich
    }

    /// An icon followed by a space, or nothing in plain mode.
    pub fn icon(&self, icon: &str) -> String {
        if self.rich {
            format!("{} ", icon)
        } else {
            String::new()
        }
    }

    pub fn title(&self, text: &str) -> String {
        self.paint(text, Style::new().bold().blue())
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(text, Style::new().bold())
    }

    pub fn user(&self, text: &str) -> String {
        self.paint(text, Style::new().cyan())
    }

    pub fn machine(&self, text: &str) -> String {
        self.paint(text, Style::new().magenta())
    }

    pub fn group(&self, text: &str) -> String {
        self.paint(text, Style::new().blue())
    }

    pub fn secret(&self, text: &str) -> String {
        self.paint(text, Style::new().red())
    }

    pub fn direct(&self, text: &str) -> String {
        self.paint(text, Style::new().red().bold())
    }

    pub fn inherited(&self, text: &str) -> String {
        self.paint(text, Style::new().yellow())
    }

    pub fn key(&self, text: &str) -> String {
        self.paint(text, Style::new().dim().italic())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, Style::new().dim())
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.rich {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }
}
