use super::position::Position;
use super::snake::Snake;
use crate::consts;

/// The apple the snake is chasing.  There is only ever one, and it is moved
/// around in place rather than replaced.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Apple {
    pos: Position,
}

impl Apple {
    pub(crate) fn new(pos: Position) -> Apple {
        Apple { pos }
    }

    pub(crate) fn position(&self) -> Position {
        self.pos
    }

    /// Try to move the apple to a random cell of the field.
    ///
    /// `draw` is called once for the x coordinate and then once for the y
    /// coordinate; each result is reduced modulo the field's width or height,
    /// respectively.  If the resulting cell is occupied by `snake`, the apple
    /// is left where it is and `false` is returned; callers are expected to
    /// try again with fresh draws.
    pub(crate) fn plant<F: FnMut() -> i32>(&mut self, snake: &Snake, mut draw: F) -> bool {
        let x = draw().rem_euclid(i32::from(consts::FIELD_SIZE.width));
        let y = draw().rem_euclid(i32::from(consts::FIELD_SIZE.height));
        let pos = Position::new(x, y);
        if snake.occupies(pos) {
            return false;
        }
        self.pos = pos;
        true
    }

    /// Call [`Apple::plant()`] until it succeeds, and return the number of
    /// attempts made.
    ///
    /// This does not terminate if `draw` never produces a free cell, e.g.,
    /// when the snake covers the whole field.
    pub(crate) fn plant_until_free<F: FnMut() -> i32>(&mut self, snake: &Snake, mut draw: F) -> usize {
        let mut attempts = 1;
        while !self.plant(snake, &mut draw) {
            attempts += 1;
        }
        attempts
    }
}
