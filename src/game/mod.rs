mod apple;
mod chain;
mod direction;
mod position;
mod snake;
pub(crate) use self::apple::Apple;
pub(crate) use self::direction::Direction;
pub(crate) use self::position::Position;
pub(crate) use self::snake::Snake;
use crate::consts;
use crate::field::{Field, Screen, Tile};
use crate::steering::Steering;
use rand::Rng;
use std::io;
use std::thread;
use std::time::Duration;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::StdRng> {
    rng: R,
    snake: Snake,
    apple: Apple,
}

impl<R: Rng> Game<R> {
    pub(crate) fn new(rng: R) -> Game<R> {
        let mut game = Game {
            rng,
            snake: Snake::new(consts::SNAKE_START),
            apple: Apple::new(Position::ORIGIN),
        };
        game.replant();
        game
    }

    /// Move the snake one cell and let it eat the apple if it lands on it, in
    /// which case the apple is moved to a new cell not covered by the snake.
    /// Returns `true` if the apple was eaten.
    pub(crate) fn advance(&mut self) -> bool {
        self.snake.step();
        if !self.snake.try_eat(&self.apple) {
            return false;
        }
        log::debug!(
            "Snake ate apple at {:?}; length is now {}",
            self.snake.head(),
            self.snake.len()
        );
        self.replant();
        true
    }

    fn replant(&mut self) {
        let rng = &mut self.rng;
        let attempts = self
            .apple
            .plant_until_free(&self.snake, || rng.random::<i32>());
        log::trace!(
            "Planted apple at {:?} after {attempts} attempt(s)",
            self.apple.position()
        );
    }

    /// Run the stepping loop: once per `period`, pick up the latest direction
    /// from `steering`, advance the game, and show the result on `screen`.
    /// Returns once `steering` has been told to stop.
    pub(crate) fn run<S: Screen>(
        &mut self,
        steering: &Steering,
        screen: &mut S,
        period: Duration,
    ) -> io::Result<()> {
        screen.show(&self.field())?;
        loop {
            thread::sleep(period);
            self.sync(steering);
            if self.snake.is_quitting() {
                break;
            }
            self.advance();
            screen.show(&self.field())?;
        }
        log::info!("Stepping loop finished; final length {}", self.snake.len());
        Ok(())
    }
}

impl<R> Game<R> {
    /// Copy the shared steering state into the snake
    fn sync(&mut self, steering: &Steering) {
        if steering.stopping() {
            self.snake.quit();
        }
        let direction = steering.direction();
        if direction.heading() != self.snake.heading() {
            log::trace!("Turning to {direction:?}");
            self.snake.set_direction(direction);
        }
    }

    /// Return a snapshot of the field with the apple and snake drawn on it.
    /// The snake is drawn over the apple.
    pub(crate) fn field(&self) -> Field {
        let mut field = Field::new(consts::FIELD_SIZE);
        field.set(self.apple.position(), Tile::Apple);
        for &pos in self.snake.segments() {
            field.set(pos, Tile::Snake);
        }
        field
    }
}
