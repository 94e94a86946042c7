// ui/widgets/editor_pane.rs - Editor pane widget

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::ui::theme::Theme;

/// Renders the text rows of the screen model, clipped to the pane.
pub struct EditorPane<'a> {
    pub rows: &'a [String],
    pub theme: &'a Theme,
}

impl<'a> EditorPane<'a> {
    pub fn new(rows: &'a [String], theme: &'a Theme) -> Self {
        Self { rows, theme }
    }
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.theme.text();
        let width = area.width as usize;
        let blank = " ".repeat(width);
        for y in 0..area.height {
            // Clear first so shortened lines leave no artifacts
            buf.set_stringn(area.x, area.y + y, &blank, width, style);
            if let Some(row) = self.rows.get(y as usize) {
                buf.set_stringn(area.x, area.y + y, row, width, style);
            }
        }
    }
}
