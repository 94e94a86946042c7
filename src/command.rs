use crate::cursor::Motion;

/// Work the mode machine hands to the session for one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Motion),
    InsertChar(char),
    SplitLine,
    DeleteChar,
    Save,
    Quit,
}

