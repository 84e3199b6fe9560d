use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d') | KeyCode::Right) => Some(Command::Right),
            _ => None,
        }
    }

    /// Return the direction the snake should turn to in response to this
    /// command, if any
    pub(crate) fn direction(self) -> Option<Direction> {
        match self {
            Command::Quit => None,
            Command::Up => Some(Direction::Top),
            Command::Down => Some(Direction::Bottom),
            Command::Left => Some(Direction::Left),
            Command::Right => Some(Direction::Right),
        }
    }
}
