// ui/widgets/status_bar.rs - Status bar widget

use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use crate::ui::theme::Theme;

/// One-row bar showing whatever status text the session last set
pub struct StatusBar<'a> {
    pub text: &'a str,
    pub theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(text: &'a str, theme: &'a Theme) -> Self {
        Self { text, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status = format!(" {}", self.text);

        // Pad by characters so non-ASCII names still fill the bar
        let padding = (area.width as usize).saturating_sub(status.chars().count());
        let padded_status = format!("{}{}", status, " ".repeat(padding));

        let line_widget = Line::from(padded_status).style(self.theme.status_bar());
        buf.set_line(area.x, area.y, &line_widget, area.width);
    }
}
