//! Drawing the playing field
use crate::consts;
use crate::game::Position;
use crate::util::center_rect;
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Rect, Size},
    style::Style,
    widgets::Widget,
    Terminal,
};
use std::io;

/// What occupies a single cell of the field
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Tile {
    #[default]
    Empty,
    Apple,
    Snake,
}

impl Tile {
    pub(crate) fn symbol(self) -> char {
        match self {
            Tile::Empty => consts::BACKGROUND_SYMBOL,
            Tile::Apple => consts::APPLE_SYMBOL,
            Tile::Snake => consts::SNAKE_SYMBOL,
        }
    }

    pub(crate) fn style(self) -> Option<Style> {
        match self {
            Tile::Empty => None,
            Tile::Apple => Some(consts::APPLE_STYLE),
            Tile::Snake => Some(consts::SNAKE_STYLE),
        }
    }
}

/// A snapshot of every cell of the playing field, ready to be drawn
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Field {
    size: Size,
    /// Row-major
    tiles: Vec<Tile>,
}

impl Field {
    /// Create a field of the given size with every cell empty
    pub(crate) fn new(size: Size) -> Field {
        Field {
            size,
            tiles: vec![Tile::Empty; usize::from(size.width) * usize::from(size.height)],
        }
    }

    /// Set the cell at `pos` to `tile`.  Positions outside the field are
    /// ignored.
    pub(crate) fn set(&mut self, pos: Position, tile: Tile) {
        let Some(i) = self.index(pos) else {
            return;
        };
        if let Some(t) = self.tiles.get_mut(i) {
            *t = tile;
        }
    }

    /// Return the tile at `pos`.  Positions outside the field are always
    /// empty.
    pub(crate) fn get(&self, pos: Position) -> Tile {
        self.index(pos)
            .and_then(|i| self.tiles.get(i))
            .copied()
            .unwrap_or_default()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let x = u16::try_from(pos.x).ok().filter(|&x| x < self.size.width)?;
        let y = u16::try_from(pos.y).ok().filter(|&y| y < self.size.height)?;
        Some(usize::from(y) * usize::from(self.size.width) + usize::from(x))
    }
}

impl Widget for &Field {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = center_rect(area, self.size);
        for (y, row) in (area.y..area.bottom()).zip(0..) {
            for (x, col) in (area.x..area.right()).zip(0..) {
                let tile = self.get(Position::new(col, row));
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(tile.symbol());
                    if let Some(style) = tile.style() {
                        cell.set_style(Style::reset().patch(style));
                    }
                }
            }
        }
    }
}

/// Something that a [`Field`] can be shown on
pub(crate) trait Screen {
    /// Replace whatever is currently shown with `field`
    fn show(&mut self, field: &Field) -> io::Result<()>;
}

impl<B: Backend> Screen for Terminal<B> {
    fn show(&mut self, field: &Field) -> io::Result<()> {
        self.draw(|frame| frame.render_widget(field, frame.area()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn sample_field() -> Field {
        let mut field = Field::new(consts::FIELD_SIZE);
        field.set(Position::new(12, 4), Tile::Apple);
        for pos in [
            Position::new(2, 0),
            Position::new(1, 0),
            Position::new(0, 0),
            Position::new(-1, 0),
        ] {
            field.set(pos, Tile::Snake);
        }
        field
    }

    #[test]
    fn out_of_bounds_is_empty() {
        let mut field = Field::new(Size::new(4, 3));
        field.set(Position::new(4, 0), Tile::Snake);
        field.set(Position::new(0, 3), Tile::Snake);
        field.set(Position::new(-1, -1), Tile::Snake);
        assert_eq!(field, Field::new(Size::new(4, 3)));
        assert_eq!(field.get(Position::new(4, 0)), Tile::Empty);
        field.set(Position::new(3, 2), Tile::Apple);
        assert_eq!(field.get(Position::new(3, 2)), Tile::Apple);
    }

    #[test]
    fn render() {
        let field = sample_field();
        let area = Rect::new(0, 0, 24, 22);
        let mut buffer = Buffer::empty(area);
        field.render(area, &mut buffer);
        let mut expected = Buffer::with_lines([
            "",
            "  ***.................  ",
            "  ....................  ",
            "  ....................  ",
            "  ....................  ",
            "  ............0.......  ",
            "  ....................  ",
            "  ....................  ",
            "  ....................  ",
            "  ....................  ",
            "  ....................  ",
            "  ....................  ",
            "  ....................  ",
            "  ....................  ",
            "  ....................  ",
            "  ....................  ",
            "  ....................  ",
            "  ....................  ",
            "  ....................  ",
            "  ....................  ",
            "  ....................  ",
            "",
        ]);
        expected.set_style(Rect::new(2, 1, 3, 1), consts::SNAKE_STYLE);
        expected.set_style(Rect::new(14, 5, 1, 1), consts::APPLE_STYLE);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn show_on_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(20, 20)).unwrap();
        terminal.show(&sample_field()).unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].symbol(), "*");
        assert_eq!(buffer[(3, 0)].symbol(), ".");
        assert_eq!(buffer[(12, 4)].symbol(), "0");
        assert_eq!(buffer[(19, 19)].symbol(), ".");
    }
}
