use std::time::Duration;

use ricochet_core::{BoardError, BoardSize};
use ricochet_system_countdown::DEFAULT_DURATION;

/// Resolved settings a game session starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Board dimensions used by every new game of the session.
    pub size: BoardSize,
    /// Seed shared by the layout and goal randomizers.
    pub seed: u64,
    /// Length of the countdown started by [`crate::Game::toggle_timer`].
    pub countdown: Duration,
}

impl GameConfig {
    /// Creates a configuration for a board with the given dimensions.
    pub fn with_dimensions(columns: u32, rows: u32, seed: u64) -> Result<Self, BoardError> {
        Ok(Self {
            size: BoardSize::new(columns, rows)?,
            seed,
            countdown: DEFAULT_DURATION,
        })
    }

    /// Replaces the countdown length.
    #[must_use]
    pub fn with_countdown(mut self, countdown: Duration) -> Self {
        self.countdown = countdown;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BoardSize::STANDARD,
            seed: 0,
            countdown: DEFAULT_DURATION,
        }
    }
}
