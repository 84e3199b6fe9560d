//! Assorted constants & hard-coded configuration
use crate::game::Position;
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Default number of milliseconds between movements of the snake
pub(crate) const TICK_PERIOD_MS: u64 = 500;

/// How long the input thread waits for a key before checking whether the
/// game has stopped
pub(crate) const INPUT_POLL_PERIOD: Duration = Duration::from_millis(50);

/// Size of the playing field in cells.  Apples are only ever planted inside
/// this area, and only this area is drawn.
pub(crate) const FIELD_SIZE: Size = Size {
    width: 20,
    height: 20,
};

/// Where the snake's head starts out
pub(crate) const SNAKE_START: Position = Position::new(10, 10);

/// Number of segments in a new snake, including the head
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 3;

/// Glyph for cells covered by the snake
pub(crate) const SNAKE_SYMBOL: char = '*';

/// Glyph for the apple
pub(crate) const APPLE_SYMBOL: char = '0';

/// Glyph for empty cells
pub(crate) const BACKGROUND_SYMBOL: char = '.';

/// Style for the snake's segments
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the apple
pub(crate) const APPLE_STYLE: Style = Style::new().fg(Color::LightRed);
