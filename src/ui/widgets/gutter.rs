// ui/widgets/gutter.rs - Gutter widget for line numbers

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::theme::Theme;

/// Gutter widget that shows 1-based line numbers next to each drawn row
pub struct Gutter<'a> {
    pub numbers: &'a [Option<usize>],
    pub theme: &'a Theme,
}

impl<'a> Gutter<'a> {
    pub fn new(numbers: &'a [Option<usize>], theme: &'a Theme) -> Self {
        Self { numbers, theme }
    }
}

impl Widget for Gutter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let digits = (area.width as usize).saturating_sub(1);
        for i in 0..area.height as usize {
            let text = match self.numbers.get(i).copied().flatten() {
                Some(doc_row) => format!("{:>width$} ", doc_row + 1, width = digits),
                None => " ".repeat(area.width as usize),
            };

            let line_widget = Line::from(Span::styled(text, self.theme.gutter()));
            buf.set_line(area.x, area.y + i as u16, &line_widget, area.width);
        }
    }
}
