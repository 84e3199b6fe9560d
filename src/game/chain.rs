use super::position::Position;

/// The cells occupied by the snake's body, ordered from head to tail
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Chain(Vec<Position>);

impl Chain {
    /// Create a chain of `len` segments with its head at `head` and the rest
    /// trailing off in the negative x direction
    pub(super) fn trailing_from(head: Position, len: usize) -> Chain {
        Chain(
            std::iter::successors(Some(head), |p| Some(Position::new(p.x - 1, p.y)))
                .take(len)
                .collect(),
        )
    }

    pub(super) fn len(&self) -> usize {
        self.0.len()
    }

    pub(super) fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.0.iter()
    }

    /// Does any segment lie at `pos`?
    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Add a segment to the end of the chain on top of the current last
    /// segment.  It only becomes visible once the next call to
    /// [`Chain::propagate()`] drags the rest of the chain away from it.
    pub(super) fn append_trailing(&mut self) {
        if let Some(&last) = self.0.last() {
            self.0.push(last);
        }
    }

    /// Move the first segment to `new_head` and every other segment into the
    /// cell its predecessor occupied before the move.
    pub(super) fn propagate(&mut self, new_head: Position) {
        let mut prev = new_head;
        for seg in &mut self.0 {
            prev = std::mem::replace(seg, prev);
        }
    }
}
