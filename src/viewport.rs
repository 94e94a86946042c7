use std::ops::Range;

/// A document row paired with the screen row it is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMapping {
    pub doc_row: usize,
    pub screen_row: usize,
}

/// Result of a scroll decision.
///
/// `lines` is positive when the view moved down the document. `exposed`
/// lists the rows that scrolled into view and must be drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollDelta {
    pub lines: isize,
    pub exposed: Vec<RowMapping>,
}

impl ScrollDelta {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.lines == 0
    }
}

pub struct Viewport {
    top_line: usize,
    height: usize,
    width: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            top_line: 0,
            height: height.max(1),
            width,
        }
    }

    pub fn top_line(&self) -> usize {
        self.top_line
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Adopt new display dimensions. The caller re-places the cursor
    /// afterwards so `top_line` follows it.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height.max(1);
    }

    /// Move `top_line` just far enough that `doc_y` is on screen.
    pub fn scroll_to_show(&mut self, doc_y: usize) -> ScrollDelta {
        let old_top = self.top_line;
        if doc_y < self.top_line {
            self.top_line = doc_y;
        } else if doc_y >= self.top_line + self.height {
            self.top_line = doc_y + 1 - self.height;
        } else {
            return ScrollDelta::none();
        }

        let lines = self.top_line as isize - old_top as isize;
        let count = lines.unsigned_abs().min(self.height);
        let screen_rows = if lines > 0 {
            self.height - count..self.height
        } else {
            0..count
        };
        let exposed = screen_rows
            .map(|screen_row| RowMapping {
                doc_row: self.top_line + screen_row,
                screen_row,
            })
            .collect();

        log::trace!("scrolled {} lines, top line now {}", lines, self.top_line);
        ScrollDelta { lines, exposed }
    }

    /// Document rows currently backed by buffer content.
    pub fn visible_range(&self, line_count: usize) -> Range<usize> {
        let end = (self.top_line + self.height).min(line_count);
        self.top_line..end.max(self.top_line)
    }

    /// Every screen row with the document row it shows, including rows
    /// past the end of the buffer.
    pub fn rows(&self) -> impl Iterator<Item = RowMapping> + '_ {
        (0..self.height).map(|screen_row| RowMapping {
            doc_row: self.top_line + screen_row,
            screen_row,
        })
    }

    pub fn screen_row(&self, doc_y: usize) -> Option<usize> {
        if doc_y >= self.top_line && doc_y < self.top_line + self.height {
            Some(doc_y - self.top_line)
        } else {
            None
        }
    }
}
