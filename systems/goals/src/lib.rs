#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic goal system responsible for emitting goal draw commands.

use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ricochet_core::{Command, TargetToken};

/// Configuration parameters required to construct the goal system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided seed.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }
}

/// Pure system that picks the next goal uniformly from the undrawn tokens.
#[derive(Debug)]
pub struct Goals {
    rng: ChaCha8Rng,
}

impl Goals {
    /// Creates a new goal system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Emits a draw command for one of the undrawn tokens.
    ///
    /// Nothing is emitted once the bag is empty.
    pub fn handle(&mut self, undrawn: &[TargetToken], out: &mut Vec<Command>) {
        if let Some(token) = undrawn.choose(&mut self.rng) {
            out.push(Command::DrawGoal { token: *token });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bag_emits_nothing() {
        let mut goals = Goals::new(Config::new(1));
        let mut commands = Vec::new();
        goals.handle(&[], &mut commands);
        assert!(commands.is_empty());
    }

    #[test]
    fn single_token_is_always_drawn() {
        let mut goals = Goals::new(Config::new(1));
        let mut commands = Vec::new();
        goals.handle(&[TargetToken::Wild], &mut commands);
        assert_eq!(
            commands,
            vec![Command::DrawGoal {
                token: TargetToken::Wild
            }]
        );
    }
}
