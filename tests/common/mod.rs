// Common test utilities: a scripted display and session builders

use std::collections::VecDeque;
use std::io;

use tvi::config::EditorConfig;
use tvi::display::{Display, DisplayError, Event, Key};
use tvi::editor::EditorSession;
use tvi::source::MemorySource;
use tvi::ui::Screen;

/// A display that replays queued events and records what was drawn.
///
/// Once the queue is empty `read_key` fails, which ends `EditorSession::run`
/// if the script forgot to quit.
pub struct ScriptedDisplay {
    pub screen: Screen,
    width: usize,
    events: VecDeque<Option<Event>>,
    scroll_support: bool,
    pub scrolls: Vec<isize>,
    pub lines_drawn: usize,
    pub flushes: usize,
    pub closed: bool,
}

#[allow(dead_code)]
impl ScriptedDisplay {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            screen: Screen::new(height),
            width,
            events: VecDeque::new(),
            scroll_support: true,
            scrolls: Vec::new(),
            lines_drawn: 0,
            flushes: 0,
            closed: false,
        }
    }

    /// Behave like a display that can only redraw rows.
    pub fn without_scroll(mut self) -> Self {
        self.scroll_support = false;
        self
    }

    pub fn push_keys(&mut self, keys: &[Key]) {
        self.events
            .extend(keys.iter().map(|key| Some(Event::Key(*key))));
    }

    pub fn push_text(&mut self, text: &str) {
        self.push_keys(&keys(text));
    }

    /// An idle poll wakeup with no event.
    pub fn push_idle(&mut self) {
        self.events.push_back(None);
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(Some(event));
    }
}

impl Display for ScriptedDisplay {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.screen.height())
    }

    fn draw_line(&mut self, screen_row: usize, text: &str) -> Result<(), DisplayError> {
        self.lines_drawn += 1;
        self.screen.draw_line(screen_row, text);
        Ok(())
    }

    fn draw_line_number(
        &mut self,
        screen_row: usize,
        doc_row: Option<usize>,
    ) -> Result<(), DisplayError> {
        self.screen.draw_line_number(screen_row, doc_row);
        Ok(())
    }

    fn scroll(&mut self, lines: isize) -> Result<bool, DisplayError> {
        if !self.scroll_support {
            return Ok(false);
        }
        self.scrolls.push(lines);
        self.screen.scroll(lines);
        Ok(true)
    }

    fn move_cursor(&mut self, screen_row: usize, screen_col: usize) -> Result<(), DisplayError> {
        self.screen.move_cursor(screen_row, screen_col);
        Ok(())
    }

    fn set_status(&mut self, text: &str) -> Result<(), DisplayError> {
        self.screen.set_status(text);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.flushes += 1;
        Ok(())
    }

    fn read_key(&mut self) -> Result<Option<Event>, DisplayError> {
        match self.events.pop_front() {
            Some(event) => Ok(event),
            None => Err(DisplayError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "key script exhausted",
            ))),
        }
    }

    fn close(&mut self) -> Result<(), DisplayError> {
        self.closed = true;
        Ok(())
    }
}

/// One `Key::Char` per character.
#[allow(dead_code)]
pub fn keys(text: &str) -> Vec<Key> {
    text.chars().map(Key::Char).collect()
}

/// Build a session over an in-memory source; the returned source handle
/// sees everything the session saves.
#[allow(dead_code)]
pub fn session_with<S: AsRef<str>>(
    lines: &[S],
    width: usize,
    height: usize,
) -> (EditorSession, MemorySource) {
    session_with_config(lines, &EditorConfig::default(), width, height)
}

#[allow(dead_code)]
pub fn session_with_config<S: AsRef<str>>(
    lines: &[S],
    config: &EditorConfig,
    width: usize,
    height: usize,
) -> (EditorSession, MemorySource) {
    let source = MemorySource::new("test.txt", lines.iter().map(|l| l.as_ref().to_string()));
    let (session, _waiter) =
        EditorSession::open(Box::new(source.clone()), config, (width, height)).unwrap();
    (session, source)
}

/// `count` lines named "line 0", "line 1", ...
#[allow(dead_code)]
pub fn numbered_lines(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("line {}", i)).collect()
}

#[allow(dead_code)]
pub fn press(session: &mut EditorSession, display: &mut ScriptedDisplay, keys: &[Key]) {
    for key in keys {
        session.handle_key(*key, display).unwrap();
    }
}

/// Validation utilities for checking invariants
pub mod validation {
    use super::*;

    /// The cursor addresses a real position and both coordinate pairs agree.
    #[allow(dead_code)]
    pub fn assert_cursor_valid(session: &EditorSession) {
        let cursor = session.cursor();
        let buffer = session.buffer();
        let viewport = session.viewport();
        assert!(
            cursor.doc_y < buffer.line_count(),
            "doc_y {} outside {} lines",
            cursor.doc_y,
            buffer.line_count()
        );
        let columns = buffer.column_count(cursor.doc_y).unwrap();
        assert!(
            cursor.doc_x <= columns,
            "doc_x {} past line length {}",
            cursor.doc_x,
            columns
        );
        assert_eq!(cursor.screen_y, cursor.doc_y - viewport.top_line());
        assert!(cursor.screen_y < viewport.height());
        assert_eq!(cursor.screen_x, cursor.doc_x);
    }

    /// Every screen row shows the buffer line it maps to.
    #[allow(dead_code)]
    pub fn assert_screen_matches(session: &EditorSession, display: &ScriptedDisplay) {
        let top = session.viewport().top_line();
        for (i, row) in display.screen.rows().iter().enumerate() {
            let expected = session.buffer().line(top + i).unwrap_or_default();
            assert_eq!(row, &expected, "screen row {} (doc row {})", i, top + i);
            let number = (top + i < session.buffer().line_count()).then_some(top + i);
            assert_eq!(display.screen.numbers()[i], number, "gutter row {}", i);
        }
        let cursor = session.cursor();
        assert_eq!(display.screen.cursor(), (cursor.screen_y, cursor.screen_x));
    }
}
