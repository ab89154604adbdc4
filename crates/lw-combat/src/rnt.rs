//! The random number table: uniform 0-9 draws.
//!
//! The draw is the only nondeterministic operation in the engine, so
//! it is injected rather than called ambiently. Play uses a seeded
//! [`StdRng`]; tests and replays script the exact sequence.

use rand::Rng;
use rand::rngs::StdRng;

/// A source of random number table draws.
pub trait RandomNumberTable {
    /// Draw one number in `0..=9`.
    fn draw(&mut self) -> u8;
}

impl RandomNumberTable for StdRng {
    fn draw(&mut self) -> u8 {
        self.random_range(0..=9)
    }
}

/// A predetermined sequence of draws. Cycles when exhausted; an empty
/// sequence always draws zero.
#[derive(Debug, Clone)]
pub struct ScriptedDraws {
    draws: Vec<u8>,
    next: usize,
}

impl ScriptedDraws {
    /// Create a source that yields the given draws in order.
    /// Values are reduced modulo ten to stay on the table.
    pub fn new(draws: Vec<u8>) -> Self {
        Self { draws, next: 0 }
    }
}

impl RandomNumberTable for ScriptedDraws {
    fn draw(&mut self) -> u8 {
        if self.draws.is_empty() {
            return 0;
        }
        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value % 10
    }
}
