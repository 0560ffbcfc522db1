//! Colours and styles shared by every screen

use ratatui::style::{Color, Modifier, Style};

/// Marker drawn in front of the focused control
pub const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Theme colours
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Background (dark)
    pub bg: Color,
    /// Foreground
    pub fg: Color,
    /// Headings and links
    pub accent: Color,
    /// Focused control background
    pub selected_bg: Color,
    /// Focused control foreground
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    /// Hints and secondary text
    pub hint: Color,
    pub border: Color,
    pub title: Color,
}

impl Default for Theme {
    fn default() -> Self {
        THEME
    }
}

impl Theme {
    pub fn normal(&self) -> Style {
        Style::new().fg(self.fg).bg(self.bg)
    }

    pub fn title(&self) -> Style {
        Style::new()
            .fg(self.title)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Section headings inside screen content
    pub fn heading(&self) -> Style {
        Style::new()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::new()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Gated button whose gate is closed
    pub fn disabled(&self) -> Style {
        Style::new()
            .fg(self.hint)
            .bg(self.bg)
            .add_modifier(Modifier::DIM)
    }

    pub fn border(&self) -> Style {
        Style::new().fg(self.border).bg(self.bg)
    }

    pub fn hint(&self) -> Style {
        Style::new().fg(self.hint).bg(self.bg)
    }

    pub fn link(&self) -> Style {
        Style::new()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn success(&self) -> Style {
        Style::new().fg(self.success).bg(self.bg)
    }

    pub fn warning(&self) -> Style {
        Style::new().fg(self.warning).bg(self.bg)
    }

    pub fn error(&self) -> Style {
        Style::new().fg(self.error).bg(self.bg)
    }
}

/// Global theme instance
pub static THEME: Theme = Theme {
    bg: Color::Black,
    fg: Color::White,
    accent: Color::Cyan,
    selected_bg: Color::Cyan,
    selected_fg: Color::Black,
    success: Color::Green,
    warning: Color::Yellow,
    error: Color::Red,
    hint: Color::Gray,
    border: Color::Cyan,
    title: Color::Cyan,
};

/// Global theme reference
pub fn theme() -> &'static Theme {
    &THEME
}
