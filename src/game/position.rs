use super::direction::Heading;

/// A cell coordinate on the playing field.
///
/// Coordinates are not bounded by the field size; the snake is free to wander
/// off the visible grid, and anything outside of it is simply not drawn.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    pub(crate) const ORIGIN: Position = Position::new(0, 0);

    pub(crate) const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    /// Return the position one step away from `self` along `heading`
    pub(crate) fn offset(self, heading: Heading) -> Position {
        Position {
            x: self.x.wrapping_add(heading.dx),
            y: self.y.wrapping_add(heading.dy),
        }
    }
}
