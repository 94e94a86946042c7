// src/display.rs - Screen interface consumed by the editor session

#[derive(thiserror::Error, Debug)]
pub enum DisplayError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Keys the editor distinguishes. Anything else is dropped by the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Esc,
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(Key),
    /// New text-area dimensions.
    Resize { width: usize, height: usize },
}

/// A rectangular text area plus a status line and a key source.
///
/// Rows and columns are relative to the text area; any gutter or status row
/// the implementation draws lies outside it.
pub trait Display {
    /// `(width, height)` of the text area.
    fn dimensions(&self) -> (usize, usize);

    fn draw_line(&mut self, screen_row: usize, text: &str) -> Result<(), DisplayError>;

    /// Label a screen row with its 0-based document row, or blank it.
    fn draw_line_number(
        &mut self,
        _screen_row: usize,
        _doc_row: Option<usize>,
    ) -> Result<(), DisplayError> {
        Ok(())
    }

    /// Shift drawn rows by `lines` (positive moves content up). Returns
    /// `false` when unsupported, in which case the caller redraws everything.
    fn scroll(&mut self, _lines: isize) -> Result<bool, DisplayError> {
        Ok(false)
    }

    fn move_cursor(&mut self, screen_row: usize, screen_col: usize) -> Result<(), DisplayError>;

    fn set_status(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Present everything drawn since the last flush.
    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    /// Wait up to the idle poll interval for the next event. `None` means
    /// nothing arrived.
    fn read_key(&mut self) -> Result<Option<Event>, DisplayError>;

    fn close(&mut self) -> Result<(), DisplayError>;
}
