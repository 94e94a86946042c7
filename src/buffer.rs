// src/buffer.rs - Line-addressed text storage backed by a rope

use ropey::Rope;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("row {row} out of range (line count {line_count})")]
    RowOutOfRange { row: usize, line_count: usize },
    #[error("column {col} out of range for row {row} (length {len})")]
    ColumnOutOfRange { row: usize, col: usize, len: usize },
    #[error("line breaks can only be inserted by splitting a line")]
    LineBreak,
}

/// The document: an ordered, never-empty sequence of lines.
///
/// Lines are separated by `'\n'` inside the rope and no separator is stored
/// after the last line, so an empty rope is one empty line.
pub struct TextBuffer {
    rope: Rope,
    modified: bool,
    version: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            modified: false,
            version: 0,
        }
    }

    /// Build a buffer from already-normalized lines (no embedded newlines).
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            debug_assert!(!line.as_ref().contains('\n'));
            text.push_str(line.as_ref());
        }
        Self {
            rope: Rope::from_str(&text),
            modified: false,
            version: 0,
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn column_count(&self, row: usize) -> Result<usize, BufferError> {
        self.check_row(row)?;
        let len = self.rope.line(row).len_chars();
        // Every line but the last carries its separator
        if row + 1 < self.line_count() {
            Ok(len - 1)
        } else {
            Ok(len)
        }
    }

    pub fn line(&self, row: usize) -> Option<String> {
        if row < self.line_count() {
            let line = self.rope.line(row).to_string();
            Some(line.trim_end_matches('\n').to_string())
        } else {
            None
        }
    }

    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count()).filter_map(|row| self.line(row)).collect()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    pub fn version(&self) -> usize {
        self.version
    }

    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) -> Result<(), BufferError> {
        if ch == '\n' {
            return Err(BufferError::LineBreak);
        }
        let idx = self.char_index(row, col)?;
        self.rope.insert_char(idx, ch);
        self.touch();
        Ok(())
    }

    /// Split `row` at `col` into a prefix line and a suffix line.
    ///
    /// An empty suffix becomes a single space so the new row always has an
    /// addressable character.
    pub fn split_line(&mut self, row: usize, col: usize) -> Result<(), BufferError> {
        let idx = self.char_index(row, col)?;
        let len = self.column_count(row)?;
        if col == len {
            self.rope.insert(idx, "\n ");
        } else {
            self.rope.insert_char(idx, '\n');
        }
        self.touch();
        Ok(())
    }

    /// Backspace semantics: remove the character before `col`.
    ///
    /// Column 0 is a no-op; joining with the previous line is `join_lines`.
    pub fn delete_char(&mut self, row: usize, col: usize) -> Result<(), BufferError> {
        let idx = self.char_index(row, col)?;
        if col == 0 {
            return Ok(());
        }
        self.rope.remove(idx - 1..idx);
        self.touch();
        Ok(())
    }

    /// Append line `row + 1` onto line `row`.
    pub fn join_lines(&mut self, row: usize) -> Result<(), BufferError> {
        let line_count = self.line_count();
        if row + 1 >= line_count {
            return Err(BufferError::RowOutOfRange {
                row: row + 1,
                line_count,
            });
        }
        let separator = self.rope.line_to_char(row + 1) - 1;
        self.rope.remove(separator..separator + 1);
        self.touch();
        Ok(())
    }

    fn check_row(&self, row: usize) -> Result<(), BufferError> {
        let line_count = self.line_count();
        if row >= line_count {
            return Err(BufferError::RowOutOfRange { row, line_count });
        }
        Ok(())
    }

    fn char_index(&self, row: usize, col: usize) -> Result<usize, BufferError> {
        let len = self.column_count(row)?;
        if col > len {
            return Err(BufferError::ColumnOutOfRange { row, col, len });
        }
        Ok(self.rope.line_to_char(row) + col)
    }

    fn touch(&mut self) {
        self.modified = true;
        self.version += 1;
    }
}
