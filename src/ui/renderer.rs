// ui/renderer.rs - Ratatui-based terminal display

use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::Stdout;
use std::time::Duration;

use crate::config::EditorConfig;
use crate::display::{Display, DisplayError, Event, Key};
use crate::ui::screen::Screen;
use crate::ui::theme::Theme;
use crate::ui::widgets::editor_pane::EditorPane;
use crate::ui::widgets::gutter::Gutter;
use crate::ui::widgets::status_bar::StatusBar;

/// Room for five-digit line numbers plus a separating space.
const GUTTER_WIDTH: u16 = 6;

/// Full-screen display on the controlling terminal.
///
/// Draw calls update an in-memory [`Screen`]; `flush` renders it with
/// ratatui, which only writes the cells that changed.
pub struct TerminalDisplay {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    screen: Screen,
    gutter_width: u16,
    text_width: usize,
    poll_interval: Duration,
    closed: bool,
}

impl TerminalDisplay {
    /// Enter raw mode and the alternate screen.
    pub fn new(config: &EditorConfig) -> Result<Self, DisplayError> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        crossterm::execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        let size = terminal.size()?;

        let mut display = Self {
            terminal,
            theme: Theme::default(),
            screen: Screen::default(),
            gutter_width: if config.line_numbers { GUTTER_WIDTH } else { 0 },
            text_width: 0,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            closed: false,
        };
        display.fit(size.width, size.height);
        Ok(display)
    }

    /// Recompute the text area for a terminal of `cols` x `rows`.
    fn fit(&mut self, cols: u16, rows: u16) -> (usize, usize) {
        // Last row is the status bar
        let height = rows.saturating_sub(1) as usize;
        self.text_width = cols.saturating_sub(self.gutter_width) as usize;
        self.screen.resize(height);
        (self.text_width, height)
    }
}

impl Display for TerminalDisplay {
    fn dimensions(&self) -> (usize, usize) {
        (self.text_width, self.screen.height())
    }

    fn draw_line(&mut self, screen_row: usize, text: &str) -> Result<(), DisplayError> {
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
        let screen = &self.screen;
        let theme = &self.theme;
        let gutter_width = self.gutter_width;
        self.terminal.draw(|f| {
            let size = f.size();

            // Create main layout: editor area + status bar
            let vertical_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            // Split editor area: gutter + text
            let editor_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(gutter_width), Constraint::Min(1)])
                .split(vertical_chunks[0]);

            if gutter_width > 0 {
                f.render_widget(Gutter::new(screen.numbers(), theme), editor_chunks[0]);
            }
            let text_area = editor_chunks[1];
            f.render_widget(EditorPane::new(screen.rows(), theme), text_area);
            f.render_widget(StatusBar::new(screen.status(), theme), vertical_chunks[1]);

            let (row, col) = screen.cursor();
            if row < text_area.height as usize && col < text_area.width as usize {
                f.set_cursor(text_area.x + col as u16, text_area.y + row as u16);
            }
        })?;
        Ok(())
    }

    fn read_key(&mut self) -> Result<Option<Event>, DisplayError> {
        if !event::poll(self.poll_interval)? {
            return Ok(None);
        }
        match event::read()? {
            TermEvent::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                Ok(translate_key(key_event).map(Event::Key))
            }
            TermEvent::Resize(cols, rows) => {
                let (width, height) = self.fit(cols, rows);
                Ok(Some(Event::Resize { width, height }))
            }
            _ => Ok(None),
        }
    }

    fn close(&mut self) -> Result<(), DisplayError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        crossterm::execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        disable_raw_mode()?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        // Restore the terminal even when the input task panicked
        let _ = self.close();
    }
}

fn translate_key(key_event: KeyEvent) -> Option<Key> {
    if key_event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key_event.code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        _ => None,
    }
}
