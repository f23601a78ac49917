//! Abstract key events delivered to the state machine
//!
//! The platform layer translates its own events into `Key`; screens decide
//! what a key means in context (a `W` steers while playing but is a letter
//! during name entry).

use crate::sim::Direction;

/// A key-down event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Escape,
    Backspace,
    Char(char),
}

impl Key {
    /// Steering meaning: arrows and WASD (either case)
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up | Key::Char('w' | 'W') => Some(Direction::Up),
            Key::Down | Key::Char('s' | 'S') => Some(Direction::Down),
            Key::Left | Key::Char('a' | 'A') => Some(Direction::Left),
            Key::Right | Key::Char('d' | 'D') => Some(Direction::Right),
            _ => None,
        }
    }

    /// Enter or Space
    pub fn is_confirm(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }

    pub fn is_cancel(self) -> bool {
        self == Key::Escape
    }

    /// Dedicated leaderboard key
    pub fn is_leaderboard(self) -> bool {
        matches!(self, Key::Char('l' | 'L'))
    }

    /// Character this key types during text entry
    pub fn printable(self) -> Option<char> {
        match self {
            Key::Space => Some(' '),
            Key::Char(c) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}
