// src/cursor.rs - Dual-coordinate cursor and the one algorithm that moves it

use crate::buffer::TextBuffer;
use crate::viewport::{ScrollDelta, Viewport};

/// Cursor position in screen and document coordinates.
///
/// Only [`CursorController`] produces these; everyone else gets a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub screen_x: usize,
    pub screen_y: usize,
    pub doc_x: usize,
    pub doc_y: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    /// Re-clamp and re-place without moving.
    Stay,
}

pub struct CursorController {
    cursor: Cursor,
}

impl CursorController {
    pub fn new() -> Self {
        Self {
            cursor: Cursor::default(),
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn apply(
        &mut self,
        motion: Motion,
        buffer: &TextBuffer,
        viewport: &mut Viewport,
    ) -> ScrollDelta {
        let Cursor { doc_x, doc_y, .. } = self.cursor;
        let (doc_y, doc_x) = match motion {
            Motion::Left => (doc_y, doc_x.saturating_sub(1)),
            Motion::Right => (doc_y, doc_x + 1),
            Motion::Up => (doc_y.saturating_sub(1), doc_x),
            Motion::Down => (doc_y + 1, doc_x),
            Motion::Stay => (doc_y, doc_x),
        };
        self.place(doc_y, doc_x, buffer, viewport)
    }

    pub fn after_insert(&mut self, buffer: &TextBuffer, viewport: &mut Viewport) -> ScrollDelta {
        let Cursor { doc_x, doc_y, .. } = self.cursor;
        self.place(doc_y, doc_x + 1, buffer, viewport)
    }

    pub fn after_split(&mut self, buffer: &TextBuffer, viewport: &mut Viewport) -> ScrollDelta {
        self.place(self.cursor.doc_y + 1, 0, buffer, viewport)
    }

    pub fn after_delete(&mut self, buffer: &TextBuffer, viewport: &mut Viewport) -> ScrollDelta {
        let Cursor { doc_x, doc_y, .. } = self.cursor;
        self.place(doc_y, doc_x.saturating_sub(1), buffer, viewport)
    }

    pub fn jump_to(
        &mut self,
        doc_y: usize,
        doc_x: usize,
        buffer: &TextBuffer,
        viewport: &mut Viewport,
    ) -> ScrollDelta {
        self.place(doc_y, doc_x, buffer, viewport)
    }

    /// Re-place at the current position, e.g. after the viewport was resized
    /// or the buffer shrank underneath the cursor.
    pub fn refresh(&mut self, buffer: &TextBuffer, viewport: &mut Viewport) -> ScrollDelta {
        self.apply(Motion::Stay, buffer, viewport)
    }

    fn place(
        &mut self,
        doc_y: usize,
        doc_x: usize,
        buffer: &TextBuffer,
        viewport: &mut Viewport,
    ) -> ScrollDelta {
        let doc_y = doc_y.min(buffer.line_count() - 1);
        let columns = buffer.column_count(doc_y).unwrap_or(0);
        // No horizontal scrolling: the last display column is a hard ceiling
        let ceiling = viewport.width().saturating_sub(1);
        let doc_x = doc_x.min(columns).min(ceiling);

        let delta = viewport.scroll_to_show(doc_y);
        let screen_y = doc_y - viewport.top_line();

        self.cursor = Cursor {
            screen_x: doc_x,
            screen_y,
            doc_x,
            doc_y,
        };
        debug_assert_eq!(self.cursor.doc_y, viewport.top_line() + self.cursor.screen_y);
        delta
    }
}

impl Default for CursorController {
    fn default() -> Self {
        Self::new()
    }
}
