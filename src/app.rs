use crate::field::Screen;
use crate::game::{Direction, Game};
use crate::input::{run_input, KeySource};
use crate::steering::Steering;
use rand::Rng;
use std::io;
use std::thread;
use std::time::Duration;

/// A game together with how fast it should run
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App<R> {
    game: Game<R>,
    tick_period: Duration,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(rng: R, tick_period: Duration) -> App<R> {
        App {
            game: Game::new(rng),
            tick_period,
        }
    }

    /// Play the game, drawing on `screen` and reading key presses from `keys`.
    ///
    /// Keys are read on a separate thread so that waiting for input never
    /// holds up the snake.  The two threads communicate solely through a
    /// [`Steering`] cell.  If either thread fails, the stop flag is raised so
    /// that the other winds down as well.
    pub(crate) fn run<S: Screen, K: KeySource + Send>(
        mut self,
        screen: &mut S,
        keys: K,
    ) -> io::Result<()> {
        let steering = Steering::new(Direction::Right);
        thread::scope(|scope| {
            let input = scope.spawn(|| {
                let r = run_input(keys, &steering);
                steering.stop();
                r
            });
            let r = self.game.run(&steering, screen, self.tick_period);
            steering.stop();
            let input_result = match input.join() {
                Ok(ir) => ir,
                Err(panic) => std::panic::resume_unwind(panic),
            };
            r.and(input_result)
        })
    }
}
