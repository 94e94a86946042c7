// src/editor.rs - Core editor coordinator

use crate::buffer::{BufferError, TextBuffer};
use crate::command::Command;
use crate::config::EditorConfig;
use crate::cursor::{Cursor, CursorController};
use crate::display::{Display, DisplayError, Event, Key};
use crate::mode::{Mode, ModeMachine};
use crate::shutdown::{Shutdown, ShutdownWaiter};
use crate::source::{Source, SourceError};
use crate::viewport::{RowMapping, ScrollDelta, Viewport};

/// Which document rows an edit invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Damage {
    Nothing,
    Line(usize),
    /// This row and everything under it on screen.
    Below(usize),
    All,
}

pub struct EditorSession {
    buffer: TextBuffer,
    viewport: Viewport,
    cursor: CursorController,
    machine: ModeMachine,
    source: Box<dyn Source + Send>,
    shutdown: Shutdown,
    status_message: Option<String>,
    backspace_joins_lines: bool,
}

impl EditorSession {
    /// `dimensions` is the display's `(width, height)`.
    pub fn new(
        lines: Vec<String>,
        source: Box<dyn Source + Send>,
        config: &EditorConfig,
        dimensions: (usize, usize),
    ) -> (Self, ShutdownWaiter) {
        let (width, height) = dimensions;
        let (shutdown, waiter) = Shutdown::new();
        let mut session = Self {
            buffer: TextBuffer::from_lines(lines),
            viewport: Viewport::new(width, height),
            cursor: CursorController::new(),
            machine: ModeMachine::new(),
            source,
            shutdown,
            status_message: None,
            backspace_joins_lines: config.backspace_joins_lines,
        };
        session.cursor.refresh(&session.buffer, &mut session.viewport);
        (session, waiter)
    }

    /// Load the document from `source` and build a session around it.
    pub fn open(
        mut source: Box<dyn Source + Send>,
        config: &EditorConfig,
        dimensions: (usize, usize),
    ) -> Result<(Self, ShutdownWaiter), SourceError> {
        let lines = source.load()?;
        Ok(Self::new(lines, source, config, dimensions))
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor.cursor()
    }

    pub fn mode(&self) -> Mode {
        self.machine.mode()
    }

    pub fn is_terminated(&self) -> bool {
        self.shutdown.is_triggered()
    }

    /// Draw the first frame, then dispatch events until `q` is pressed.
    pub fn run(&mut self, display: &mut dyn Display) -> Result<(), DisplayError> {
        self.render(display)?;
        while !self.is_terminated() {
            // Idle wakeups carry no event
            if let Some(event) = display.read_key()? {
                self.handle_event(event, display)?;
            }
        }
        log::info!("session finished");
        Ok(())
    }

    pub fn handle_event(
        &mut self,
        event: Event,
        display: &mut dyn Display,
    ) -> Result<(), DisplayError> {
        match event {
            Event::Key(key) => self.handle_key(key, display),
            Event::Resize { width, height } => {
                log::debug!("resize to {}x{}", width, height);
                self.viewport.resize(width, height);
                self.cursor.refresh(&self.buffer, &mut self.viewport);
                self.present(Damage::All, ScrollDelta::none(), display)
            }
        }
    }

    pub fn handle_key(&mut self, key: Key, display: &mut dyn Display) -> Result<(), DisplayError> {
        self.status_message = None;
        let (damage, scroll) = match self.machine.handle_key(key) {
            Some(command) => self.execute(command),
            None => (Damage::Nothing, ScrollDelta::none()),
        };
        self.present(damage, scroll, display)
    }

    /// Redraw every row, the status line and the cursor.
    pub fn render(&mut self, display: &mut dyn Display) -> Result<(), DisplayError> {
        self.present(Damage::All, ScrollDelta::none(), display)
    }

    pub fn status_line(&self) -> String {
        if self.mode() == Mode::Cmdline {
            return self.machine.pending_command().to_string();
        }
        let cursor = self.cursor();
        let modified = if self.buffer.is_modified() { " [+]" } else { "" };
        let status = format!(
            "{} | {}{} | {}:{}",
            self.mode().label(),
            self.source.name(),
            modified,
            cursor.doc_y + 1,
            cursor.doc_x + 1
        );
        match &self.status_message {
            Some(message) => format!("{} | {}", status, message),
            None => status,
        }
    }

    fn execute(&mut self, command: Command) -> (Damage, ScrollDelta) {
        let Cursor { doc_x, doc_y, .. } = self.cursor();
        match command {
            Command::Move(motion) => (
                Damage::Nothing,
                self.cursor.apply(motion, &self.buffer, &mut self.viewport),
            ),
            // The cursor could not follow the character past the last column
            Command::InsertChar(_) if doc_x + 1 >= self.viewport.width() => {
                log::warn!("insert refused at column {}: display width reached", doc_x);
                self.status_message = Some("line is at the display width".to_string());
                (Damage::Nothing, ScrollDelta::none())
            }
            Command::InsertChar(ch) => match self.buffer.insert_char(doc_y, doc_x, ch) {
                Ok(()) => (
                    Damage::Line(doc_y),
                    self.cursor.after_insert(&self.buffer, &mut self.viewport),
                ),
                Err(e) => self.reject(e),
            },
            Command::SplitLine => match self.buffer.split_line(doc_y, doc_x) {
                Ok(()) => (
                    Damage::Below(doc_y),
                    self.cursor.after_split(&self.buffer, &mut self.viewport),
                ),
                Err(e) => self.reject(e),
            },
            Command::DeleteChar if doc_x == 0 && doc_y > 0 && self.backspace_joins_lines => {
                self.join_with_previous(doc_y)
            }
            Command::DeleteChar => match self.buffer.delete_char(doc_y, doc_x) {
                Ok(()) => (
                    Damage::Line(doc_y),
                    self.cursor.after_delete(&self.buffer, &mut self.viewport),
                ),
                Err(e) => self.reject(e),
            },
            Command::Save => {
                self.save();
                (Damage::Nothing, ScrollDelta::none())
            }
            Command::Quit => {
                self.shutdown.trigger();
                (Damage::Nothing, ScrollDelta::none())
            }
        }
    }

    fn join_with_previous(&mut self, doc_y: usize) -> (Damage, ScrollDelta) {
        let previous = doc_y - 1;
        let joined_at = match self.buffer.column_count(previous) {
            Ok(len) => len,
            Err(e) => return self.reject(e),
        };
        if let Err(e) = self.buffer.join_lines(previous) {
            return self.reject(e);
        }
        let scroll = self
            .cursor
            .jump_to(previous, joined_at, &self.buffer, &mut self.viewport);
        (Damage::Below(previous), scroll)
    }

    fn save(&mut self) {
        let lines = self.buffer.lines();
        match self.source.save(&lines) {
            Ok(()) => {
                self.buffer.mark_saved();
                self.status_message = Some(format!("{}L written", lines.len()));
            }
            Err(e) => {
                // Edits stay in memory; the user can retry
                log::error!("save failed: {}", e);
                self.status_message = Some(format!("save failed: {}", e));
            }
        }
    }

    /// Buffer contract violations mean the cursor and buffer disagree. They
    /// abort debug builds and are dropped in release builds.
    fn reject(&mut self, error: BufferError) -> (Damage, ScrollDelta) {
        log::error!("edit rejected at {:?}: {}", self.cursor(), error);
        if cfg!(debug_assertions) {
            panic!("edit rejected: {}", error);
        }
        (
            Damage::All,
            self.cursor.refresh(&self.buffer, &mut self.viewport),
        )
    }

    fn present(
        &mut self,
        damage: Damage,
        scroll: ScrollDelta,
        display: &mut dyn Display,
    ) -> Result<(), DisplayError> {
        let mut damage = damage;
        if !scroll.is_zero() && damage != Damage::All {
            if display.scroll(scroll.lines)? {
                for mapping in &scroll.exposed {
                    self.draw_row(*mapping, display)?;
                }
            } else {
                damage = Damage::All;
            }
        }

        let rows: Vec<RowMapping> = match damage {
            Damage::Nothing => Vec::new(),
            Damage::Line(doc_row) => self
                .viewport
                .screen_row(doc_row)
                .map(|screen_row| RowMapping {
                    doc_row,
                    screen_row,
                })
                .into_iter()
                .collect(),
            Damage::Below(doc_row) => self
                .viewport
                .rows()
                .filter(|mapping| mapping.doc_row >= doc_row)
                .collect(),
            Damage::All => self.viewport.rows().collect(),
        };
        for mapping in rows {
            self.draw_row(mapping, display)?;
        }

        display.set_status(&self.status_line())?;
        let cursor = self.cursor();
        display.move_cursor(cursor.screen_y, cursor.screen_x)?;
        display.flush()
    }

    fn draw_row(&self, mapping: RowMapping, display: &mut dyn Display) -> Result<(), DisplayError> {
        let RowMapping {
            doc_row,
            screen_row,
        } = mapping;
        match self.buffer.line(doc_row) {
            Some(text) => {
                display.draw_line(screen_row, &text)?;
                display.draw_line_number(screen_row, Some(doc_row))
            }
            None => {
                display.draw_line(screen_row, "")?;
                display.draw_line_number(screen_row, None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemorySource;

    /// Keeps only what the status line and cursor tests look at.
    #[derive(Default)]
    struct StatusOnly {
        status: String,
        cursor: (usize, usize),
    }

    impl Display for StatusOnly {
        fn dimensions(&self) -> (usize, usize) {
            (80, 24)
        }
        fn draw_line(&mut self, _screen_row: usize, _text: &str) -> Result<(), DisplayError> {
            Ok(())
        }
        fn move_cursor(&mut self, row: usize, col: usize) -> Result<(), DisplayError> {
            self.cursor = (row, col);
            Ok(())
        }
        fn set_status(&mut self, text: &str) -> Result<(), DisplayError> {
            self.status = text.to_string();
            Ok(())
        }
        fn read_key(&mut self) -> Result<Option<Event>, DisplayError> {
            Ok(None)
        }
        fn close(&mut self) -> Result<(), DisplayError> {
            Ok(())
        }
    }

    fn session(lines: &[&str]) -> EditorSession {
        let source = MemorySource::new("memo.txt", lines.iter().copied());
        let lines = source.contents();
        let (session, _waiter) =
            EditorSession::new(lines, Box::new(source), &EditorConfig::default(), (80, 24));
        session
    }

    #[test]
    fn test_status_line_tracks_mode_and_position() {
        let mut session = session(&["abc", "def"]);
        let mut display = StatusOnly::default();
        session.render(&mut display).unwrap();
        assert_eq!(display.status, "NORMAL | memo.txt | 1:1");

        session.handle_key(Key::Char('j'), &mut display).unwrap();
        session.handle_key(Key::Char('i'), &mut display).unwrap();
        session.handle_key(Key::Char('x'), &mut display).unwrap();
        assert_eq!(display.status, "INSERT | memo.txt [+] | 2:2");
        assert_eq!(display.cursor, (1, 1));
    }

    #[test]
    fn test_status_line_in_cmdline_shows_prompt() {
        let mut session = session(&["abc"]);
        let mut display = StatusOnly::default();
        session.handle_key(Key::Char(':'), &mut display).unwrap();
        assert_eq!(display.status, ":");
        session.handle_key(Key::Esc, &mut display).unwrap();
        assert_eq!(display.status, "NORMAL | memo.txt | 1:1");
    }

    #[test]
    fn test_save_message_clears_on_next_key() {
        let mut session = session(&["abc"]);
        let mut display = StatusOnly::default();
        session.handle_key(Key::Char(':'), &mut display).unwrap();
        session.handle_key(Key::Char('w'), &mut display).unwrap();
        assert_eq!(display.status, "NORMAL | memo.txt | 1:1 | 1L written");
        session.handle_key(Key::Char('l'), &mut display).unwrap();
        assert_eq!(display.status, "NORMAL | memo.txt | 1:2");
    }

    #[test]
    fn test_quit_terminates_once() {
        let mut session = session(&["abc"]);
        let mut display = StatusOnly::default();
        assert!(!session.is_terminated());
        session.handle_key(Key::Char('q'), &mut display).unwrap();
        assert!(session.is_terminated());
        session.handle_key(Key::Char('q'), &mut display).unwrap();
        assert!(session.is_terminated());
    }

    #[test]
    fn test_resize_keeps_cursor_visible() {
        let lines: Vec<String> = (0..50).map(|i| format!("{}", i)).collect();
        let source = MemorySource::new("n", lines.clone());
        let (mut session, _waiter) =
            EditorSession::new(lines, Box::new(source), &EditorConfig::default(), (80, 20));
        let mut display = StatusOnly::default();
        for _ in 0..15 {
            session.handle_key(Key::Char('j'), &mut display).unwrap();
        }
        session
            .handle_event(
                Event::Resize {
                    width: 80,
                    height: 5,
                },
                &mut display,
            )
            .unwrap();
        assert_eq!(session.viewport().top_line(), 11);
        assert_eq!(session.cursor().screen_y, 4);
    }
}
