// ui/theme.rs - Colors for the terminal display

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub gutter_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Reset keeps the user's terminal palette
        Self {
            background: Color::Reset,
            foreground: Color::Reset,
            status_bar_bg: Color::Blue,
            status_bar_fg: Color::White,
            gutter_fg: Color::DarkGray,
        }
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn gutter(&self) -> Style {
        Style::default()
            .fg(self.gutter_fg)
            .bg(self.background)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar(&self) -> Style {
        Style::default().bg(self.status_bar_bg).fg(self.status_bar_fg)
    }
}
