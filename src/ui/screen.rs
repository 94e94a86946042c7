// ui/screen.rs - In-memory copy of what the text area should show

/// Rows, gutter labels, status text and cursor as last drawn.
///
/// The terminal display renders this on every flush; tests inspect it
/// directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    rows: Vec<String>,
    numbers: Vec<Option<usize>>,
    status: String,
    cursor: (usize, usize),
}

impl Screen {
    pub fn new(height: usize) -> Self {
        Self {
            rows: vec![String::new(); height],
            numbers: vec![None; height],
            status: String::new(),
            cursor: (0, 0),
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn numbers(&self) -> &[Option<usize>] {
        &self.numbers
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Rows beyond the text area are ignored.
    pub fn draw_line(&mut self, screen_row: usize, text: &str) {
        if let Some(row) = self.rows.get_mut(screen_row) {
            row.clear();
            row.push_str(text);
        }
    }

    pub fn draw_line_number(&mut self, screen_row: usize, doc_row: Option<usize>) {
        if let Some(number) = self.numbers.get_mut(screen_row) {
            *number = doc_row;
        }
    }

    pub fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    pub fn move_cursor(&mut self, screen_row: usize, screen_col: usize) {
        self.cursor = (screen_row, screen_col);
    }

    /// Shift content by `lines` rows (positive moves it up) and blank the
    /// rows that were vacated.
    pub fn scroll(&mut self, lines: isize) {
        let count = lines.unsigned_abs().min(self.height());
        let height = self.height();
        if lines > 0 {
            self.rows.rotate_left(count);
            self.numbers.rotate_left(count);
            self.blank(height - count..height);
        } else {
            self.rows.rotate_right(count);
            self.numbers.rotate_right(count);
            self.blank(0..count);
        }
    }

    /// Change the row count, keeping the top rows.
    pub fn resize(&mut self, height: usize) {
        self.rows.resize(height, String::new());
        self.numbers.resize(height, None);
    }

    fn blank(&mut self, rows: std::ops::Range<usize>) {
        for i in rows {
            self.rows[i].clear();
            self.numbers[i] = None;
        }
    }
}
