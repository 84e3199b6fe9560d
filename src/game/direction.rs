use std::f64::consts::FRAC_PI_2;

/// One of the four directions the snake can face.  The discriminants count
/// quarter turns anticlockwise from facing right.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) enum Direction {
    #[default]
    Right = 0,
    Top = 1,
    Left = 2,
    Bottom = 3,
}

impl Direction {
    /// Return the number of anticlockwise quarter turns from
    /// [`Direction::Right`] to `self`
    pub(crate) fn quarter_turns(self) -> u8 {
        match self {
            Direction::Right => 0,
            Direction::Top => 1,
            Direction::Left => 2,
            Direction::Bottom => 3,
        }
    }

    /// Return the direction reached after turning anticlockwise `turns`
    /// quarter turns from [`Direction::Right`].  Four quarter turns make a
    /// full rotation, so every `u8` names some direction.
    pub(crate) fn from_quarter_turns(turns: u8) -> Direction {
        match turns % 4 {
            0 => Direction::Right,
            1 => Direction::Top,
            2 => Direction::Left,
            _ => Direction::Bottom,
        }
    }

    /// Return the unit vector for moving in this direction.  The screen's y
    /// axis points down, so the sine is negated.
    ///
    /// The angle is always an exact multiple of 90°, so after rounding, the
    /// cosine and sine are exactly -1, 0, or 1.
    // The rounded values are in -1..=1, so the casts cannot truncate.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn heading(self) -> Heading {
        let angle = f64::from(self.quarter_turns()) * FRAC_PI_2;
        Heading {
            dx: angle.cos().round() as i32,
            dy: (-angle.sin()).round() as i32,
        }
    }
}

/// A unit step along one of the grid axes
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Heading {
    pub(crate) dx: i32,
    pub(crate) dy: i32,
}
