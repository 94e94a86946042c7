// Cursor bounds validation tests
// The cursor never addresses a position outside the buffer or the display

mod common;
use common::{ScriptedDisplay, keys, numbered_lines, press, session_with, validation};

use tvi::display::Key;

/// Right stops one past the last character
#[test]
fn test_right_stops_at_line_end() {
    let (mut session, _source) = session_with(&["abc"], 80, 10);
    let mut display = ScriptedDisplay::new(80, 10);
    press(&mut session, &mut display, &keys("llllll"));
    assert_eq!(session.cursor().doc_x, 3);
    validation::assert_cursor_valid(&session);
}

/// Left stops at column zero
#[test]
fn test_left_stops_at_line_start() {
    let (mut session, _source) = session_with(&["abc"], 80, 10);
    let mut display = ScriptedDisplay::new(80, 10);
    press(&mut session, &mut display, &keys("lhhhh"));
    assert_eq!(session.cursor().doc_x, 0);
}

/// Down stops on the last row and Up on the first
#[test]
fn test_vertical_moves_stop_at_buffer_edges() {
    let (mut session, _source) = session_with(&["a", "b", "c"], 80, 10);
    let mut display = ScriptedDisplay::new(80, 10);
    press(&mut session, &mut display, &keys("jjjjj"));
    assert_eq!(session.cursor().doc_y, 2);
    press(&mut session, &mut display, &keys("kkkkk"));
    assert_eq!(session.cursor().doc_y, 0);
    validation::assert_cursor_valid(&session);
}

/// Moving onto a shorter line pulls the column back
#[test]
fn test_shorter_line_truncates_column() {
    let (mut session, _source) = session_with(&["abcdef", "ab", "abcdef"], 80, 10);
    let mut display = ScriptedDisplay::new(80, 10);
    press(&mut session, &mut display, &keys("lllll"));
    assert_eq!(session.cursor().doc_x, 5);

    press(&mut session, &mut display, &[Key::Down]);
    assert_eq!(session.cursor().doc_x, 2);
    validation::assert_cursor_valid(&session);

    // The column is not remembered across the short line
    press(&mut session, &mut display, &[Key::Down]);
    assert_eq!(session.cursor().doc_x, 2);
}

/// Onto an empty line the column is zero
#[test]
fn test_empty_line_column_zero() {
    let (mut session, _source) = session_with(&["abc", "", "abc"], 80, 10);
    let mut display = ScriptedDisplay::new(80, 10);
    press(&mut session, &mut display, &keys("llj"));
    assert_eq!(session.cursor().doc_x, 0);
    validation::assert_cursor_valid(&session);
}

/// Lines wider than the display stop the cursor at the last column
#[test]
fn test_width_ceiling_on_long_line() {
    let (mut session, _source) = session_with(&["abcdefghijklmnop"], 8, 4);
    let mut display = ScriptedDisplay::new(8, 4);
    press(&mut session, &mut display, &keys(&"l".repeat(20)));
    assert_eq!(session.cursor().doc_x, 7);
    assert_eq!(session.cursor().screen_x, 7);
    validation::assert_cursor_valid(&session);
}

/// A one-column display pins the cursor to column zero
#[test]
fn test_single_column_display() {
    let (mut session, _source) = session_with(&["abc", "def"], 1, 1);
    let mut display = ScriptedDisplay::new(1, 1);
    press(&mut session, &mut display, &keys("lllj"));
    let cursor = session.cursor();
    assert_eq!((cursor.doc_y, cursor.doc_x), (1, 0));
    assert_eq!(session.viewport().top_line(), 1);
    validation::assert_cursor_valid(&session);
}

/// The cursor stays inside the viewport walking the whole document
#[test]
fn test_walk_entire_document() {
    let lines = numbered_lines(40);
    let (mut session, _source) = session_with(&lines, 80, 7);
    let mut display = ScriptedDisplay::new(80, 7);
    session.render(&mut display).unwrap();
    for _ in 0..45 {
        press(&mut session, &mut display, &[Key::Down]);
        validation::assert_cursor_valid(&session);
    }
    assert_eq!(session.cursor().doc_y, 39);
    assert_eq!(session.viewport().top_line(), 33);

    for _ in 0..45 {
        press(&mut session, &mut display, &[Key::Up]);
        validation::assert_cursor_valid(&session);
    }
    assert_eq!(session.viewport().top_line(), 0);
    validation::assert_screen_matches(&session, &display);
}

/// Deleting back to column zero never goes negative
#[test]
fn test_backspace_run_stops_at_zero() {
    let (mut session, _source) = session_with(&["abc"], 80, 10);
    let mut display = ScriptedDisplay::new(80, 10);
    press(&mut session, &mut display, &keys("lli"));
    for _ in 0..5 {
        press(&mut session, &mut display, &[Key::Backspace]);
        validation::assert_cursor_valid(&session);
    }
    assert_eq!(session.buffer().line(0).unwrap(), "c");
    assert_eq!(session.cursor().doc_x, 0);
}
