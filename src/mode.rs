use crate::command::Command;
use crate::cursor::Motion;
use crate::display::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Insert,
    Visual,
    Cmdline,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::Visual => "VISUAL",
            Mode::Cmdline => "COMMAND",
        }
    }
}

/// Routes keys by the current mode. Mode changes happen here and nowhere
/// else; anything with a side effect on the document comes back as a
/// [`Command`] for the session to run.
pub struct ModeMachine {
    mode: Mode,
    pending: String,
}

impl Default for ModeMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeMachine {
    pub fn new() -> Self {
        Self {
            mode: Mode::Normal,
            pending: String::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Command-line text typed so far (empty outside Cmdline).
    pub fn pending_command(&self) -> &str {
        &self.pending
    }

    /// Keys without a row in the current mode's table are ignored.
    pub fn handle_key(&mut self, key: Key) -> Option<Command> {
        match self.mode {
            Mode::Normal => self.normal_key(key),
            Mode::Insert => self.insert_key(key),
            Mode::Visual => self.visual_key(key),
            Mode::Cmdline => self.cmdline_key(key),
        }
    }

    fn normal_key(&mut self, key: Key) -> Option<Command> {
        match key {
            Key::Char('i') => self.transition(Mode::Insert),
            Key::Char('v') => self.transition(Mode::Visual),
            Key::Char(':') => {
                self.pending.push(':');
                self.transition(Mode::Cmdline)
            }
            Key::Char('q') => Some(Command::Quit),
            Key::Backspace => Some(Command::Move(Motion::Left)),
            _ => navigation(key).map(Command::Move),
        }
    }

    fn insert_key(&mut self, key: Key) -> Option<Command> {
        match key {
            Key::Esc => self.transition(Mode::Normal),
            Key::Enter => Some(Command::SplitLine),
            Key::Backspace | Key::Delete => Some(Command::DeleteChar),
            Key::Left => Some(Command::Move(Motion::Left)),
            Key::Right => Some(Command::Move(Motion::Right)),
            Key::Up => Some(Command::Move(Motion::Up)),
            Key::Down => Some(Command::Move(Motion::Down)),
            Key::Char(c) if !c.is_control() => Some(Command::InsertChar(c)),
            Key::Char(_) => None,
        }
    }

    fn visual_key(&mut self, key: Key) -> Option<Command> {
        match key {
            Key::Esc => self.transition(Mode::Normal),
            _ => navigation(key).map(Command::Move),
        }
    }

    fn cmdline_key(&mut self, key: Key) -> Option<Command> {
        match key {
            Key::Char('w') => {
                self.pending.clear();
                self.transition(Mode::Normal);
                Some(Command::Save)
            }
            Key::Esc | Key::Backspace | Key::Delete => {
                self.pending.clear();
                self.transition(Mode::Normal)
            }
            _ => None,
        }
    }

    fn transition(&mut self, next: Mode) -> Option<Command> {
        log::debug!("mode {:?} -> {:?}", self.mode, next);
        self.mode = next;
        None
    }
}

/// Movement keys shared by Normal and Visual mode.
fn navigation(key: Key) -> Option<Motion> {
    match key {
        Key::Char('h') | Key::Left => Some(Motion::Left),
        Key::Char('j') | Key::Down | Key::Enter => Some(Motion::Down),
        Key::Char('k') | Key::Up => Some(Motion::Up),
        Key::Char('l') | Key::Right => Some(Motion::Right),
        _ => None,
    }
}
