use super::apple::Apple;
use super::chain::Chain;
use super::direction::{Direction, Heading};
use super::position::Position;
use crate::consts;

/// Snake state.  Snate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head.  This is always the same as the
    /// first segment of `chain`.
    head: Position,

    /// The step applied to the head on each move
    heading: Heading,

    /// Set once the game has been asked to stop
    quit: bool,

    /// All of the snake's segments, head first
    chain: Chain,
}

impl Snake {
    /// Create a new snake with its head at `head`, facing right, with the
    /// rest of its body trailing off to the left of the head.
    pub(crate) fn new(head: Position) -> Snake {
        Snake {
            head,
            heading: Direction::Right.heading(),
            quit: false,
            chain: Chain::trailing_from(head, consts::INITIAL_SNAKE_LENGTH),
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.head
    }

    pub(crate) fn heading(&self) -> Heading {
        self.heading
    }

    /// Return the number of segments in the snake's body, including the head
    pub(crate) fn len(&self) -> usize {
        self.chain.len()
    }

    /// Return an iterator over the positions of the snake's segments, head
    /// first
    pub(crate) fn segments(&self) -> std::slice::Iter<'_, Position> {
        self.chain.iter()
    }

    /// Change the snake's direction to `direction`
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.heading = direction.heading();
    }

    /// Move the snake forwards one cell in the current direction.  There are
    /// no walls; the snake may move to coordinates outside the field.
    pub(crate) fn step(&mut self) {
        self.head = self.head.offset(self.heading);
        self.chain.propagate(self.head);
    }

    /// If the snake's head is on `apple`, add a segment to the end of the
    /// snake and return `true`.
    pub(crate) fn try_eat(&mut self, apple: &Apple) -> bool {
        if self.head == apple.position() {
            self.chain.append_trailing();
            true
        } else {
            false
        }
    }

    /// Does any part of the snake lie at `pos`?
    pub(crate) fn occupies(&self, pos: Position) -> bool {
        self.chain.occupies(pos)
    }

    pub(crate) fn quit(&mut self) {
        self.quit = true;
    }

    pub(crate) fn is_quitting(&self) -> bool {
        self.quit
    }
}
