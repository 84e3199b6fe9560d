//! The state shared between the input thread and the stepping thread
use crate::game::Direction;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// The most recently requested direction plus a stop flag.
///
/// The input thread is the only writer of the direction and the stepping
/// thread is the only reader.  Neither side ever blocks: a new direction
/// simply overwrites the previous one, and the stepping thread picks up
/// whatever is current when its next tick comes around.  Nothing else is
/// published through this cell, so `Relaxed` ordering suffices.
#[derive(Debug, Default)]
pub(crate) struct Steering {
    /// A [`Direction`] stored as its number of quarter turns
    direction: AtomicU8,
    stop: AtomicBool,
}

impl Steering {
    pub(crate) fn new(direction: Direction) -> Steering {
        Steering {
            direction: AtomicU8::new(direction.quarter_turns()),
            stop: AtomicBool::new(false),
        }
    }

    pub(crate) fn turn(&self, direction: Direction) {
        self.direction
            .store(direction.quarter_turns(), Ordering::Relaxed);
    }

    pub(crate) fn direction(&self) -> Direction {
        Direction::from_quarter_turns(self.direction.load(Ordering::Relaxed))
    }

    /// Ask both threads to wind down
    pub(crate) fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    pub(crate) fn stopping(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}
