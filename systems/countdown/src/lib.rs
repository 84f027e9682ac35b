#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Optional round timer advanced by explicit time deltas.
//!
//! The countdown never touches the world. It is cancelled whenever the move
//! count changes, so a running timer always measures the time left to announce
//! a solution for the position on the board.

use std::{fmt, time::Duration};

use ricochet_core::Event;

/// Default length of a countdown.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(30);

/// Snapshot of the time left, split the way timers are displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownReading {
    /// Whole seconds left.
    pub seconds: u64,
    /// Hundredths of a second left beyond `seconds`.
    pub hundredths: u32,
}

impl CountdownReading {
    fn from_remaining(remaining: Duration) -> Self {
        Self {
            seconds: remaining.as_secs(),
            hundredths: remaining.subsec_millis() / 10,
        }
    }
}

impl fmt::Display for CountdownReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.seconds, self.hundredths)
    }
}

/// Countdown that starts on request and stops on expiry or cancellation.
#[derive(Clone, Debug)]
pub struct Countdown {
    duration: Duration,
    remaining: Option<Duration>,
}

impl Countdown {
    /// Creates a stopped countdown of the provided length.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            remaining: None,
        }
    }

    /// Length the countdown starts from.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Starts a stopped countdown or cancels a running one.
    pub fn toggle(&mut self) {
        self.remaining = match self.remaining {
            Some(_) => None,
            None => Some(self.duration),
        };
    }

    /// Stops the countdown.
    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    /// Consumes elapsed time. Expired countdowns stay at zero until cancelled.
    pub fn advance(&mut self, dt: Duration) {
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining = remaining.saturating_sub(dt);
        }
    }

    /// Cancels the countdown when any event changes the move count.
    pub fn handle(&mut self, events: &[Event]) {
        if events.iter().any(resets_move_count) {
            self.cancel();
        }
    }

    /// Time left, if the countdown is running.
    #[must_use]
    pub const fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Reports whether the countdown was started and not cancelled.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    /// Reports whether a running countdown has reached zero.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining.is_some_and(|remaining| remaining.is_zero())
    }

    /// Display reading of the time left, if the countdown is running.
    #[must_use]
    pub fn reading(&self) -> Option<CountdownReading> {
        self.remaining.map(CountdownReading::from_remaining)
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

fn resets_move_count(event: &Event) -> bool {
    matches!(
        event,
        Event::RobotSlid { .. }
            | Event::MoveUndone { .. }
            | Event::MoveRedone { .. }
            | Event::RobotsReset { .. }
            | Event::GoalDrawn { .. }
            | Event::LayoutApplied
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_splits_seconds_and_hundredths() {
        let reading = CountdownReading::from_remaining(Duration::from_millis(12_345));
        assert_eq!(
            reading,
            CountdownReading {
                seconds: 12,
                hundredths: 34
            }
        );
        assert_eq!(reading.to_string(), "12.34");
        assert_eq!(
            CountdownReading::from_remaining(Duration::ZERO).to_string(),
            "0.00"
        );
    }
}
