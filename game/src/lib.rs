#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Game session facade that wires the world to the Ricochet Robots systems.
//!
//! [`Game`] owns the authoritative world together with the layout, goal and
//! countdown systems. Every player action becomes a [`Command`], the emitted
//! [`Event`]s are fed back to the systems and buffered for front ends, which
//! collect them through [`Game::drain_events`].

use std::time::Duration;

use ricochet_core::{
    BoardSize, CapacityError, CellCoord, Command, Direction, Event, Layout, LayoutError, RobotColor,
    TargetToken,
};
use ricochet_system_countdown::{Countdown, CountdownReading};
use ricochet_system_goals::{self as goals, Goals};
use ricochet_system_layout::{self as layout, LayoutGenerator};
use ricochet_system_movement as movement;
use ricochet_world::{self as world, query, World};
use thiserror::Error;

mod config;

pub use config::GameConfig;

/// Salt separating the goal draw stream from the layout stream of one seed.
const GOAL_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Failures surfaced by session level operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The randomizer could not place every robot and target.
    #[error(transparent)]
    Capacity(#[from] CapacityError),
    /// The world refused a layout.
    #[error("layout rejected: {0}")]
    Layout(#[from] LayoutError),
}

/// Single-player Ricochet Robots session.
#[derive(Debug)]
pub struct Game {
    world: World,
    generator: LayoutGenerator,
    goals: Goals,
    countdown: Countdown,
    layout: Layout,
    events: Vec<Event>,
}

impl Game {
    /// Creates a session and deals its first board.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let mut game = Self {
            world: World::with_size(config.size),
            generator: LayoutGenerator::new(layout::Config::new(config.seed)),
            goals: Goals::new(goals::Config::new(config.seed ^ GOAL_SEED_SALT)),
            countdown: Countdown::new(config.countdown),
            layout: Layout::default(),
            events: Vec::new(),
        };
        game.new_game()?;
        Ok(game)
    }

    /// Slides a robot until it is blocked, reporting whether it moved.
    pub fn slide(&mut self, robot: RobotColor, direction: Direction) -> bool {
        self.execute(Command::SlideRobot { robot, direction })
            .iter()
            .any(|event| matches!(event, Event::RobotSlid { .. }))
    }

    /// Reverts the most recent applied move, reporting whether one existed.
    pub fn undo(&mut self) -> bool {
        !self.execute(Command::UndoMove).is_empty()
    }

    /// Reapplies the most recently undone move, reporting whether one existed.
    pub fn redo(&mut self) -> bool {
        !self.execute(Command::RedoMove).is_empty()
    }

    /// Rewinds every move of the current round while keeping them redoable.
    pub fn reset_to_start(&mut self) {
        let _ = self.execute(Command::ResetRobots);
    }

    /// Deals a fresh board and refills the bag.
    ///
    /// On failure the current board is left untouched.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        let size = query::board_size(&self.world);
        let layout = self
            .generator
            .populate(size, &RobotColor::ALL, &TargetToken::all())
            .map_err(|error| {
                tracing::warn!(%error, "board randomization failed");
                error
            })?;
        self.install(size, layout)
    }

    /// Replaces the board with an externally supplied layout.
    ///
    /// The layout is validated against a fresh board of the given size before
    /// anything changes, so a rejected layout leaves the session untouched.
    pub fn load_layout(&mut self, size: BoardSize, layout: Layout) -> Result<(), GameError> {
        self.install(size, layout)
    }

    /// Draws the next goal from the bag, or `None` once the bag is empty.
    pub fn draw_goal(&mut self) -> Option<TargetToken> {
        let mut commands = Vec::new();
        self.goals
            .handle(query::bag(&self.world).tokens(), &mut commands);

        let mut drawn = None;
        for command in commands {
            for event in self.execute(command) {
                if let Event::GoalDrawn { token, .. } = event {
                    drawn = Some(*token);
                }
            }
        }
        drawn
    }

    /// Cells the robot would reach in each direction, leaving out blocked slides.
    ///
    /// Nothing is applied; the list follows [`Direction::ALL`] order.
    #[must_use]
    pub fn slide_preview(&self, robot: RobotColor) -> Vec<(Direction, CellCoord)> {
        movement::resolve_all(&query::board_view(&self.world), robot)
            .into_iter()
            .filter(|(_, resolution)| resolution.moved())
            .map(|(direction, resolution)| (direction, resolution.to))
            .collect()
    }

    /// Reports whether the robot matching the active goal stands on it.
    #[must_use]
    pub fn is_goal_met(&self) -> bool {
        query::is_goal_met(&self.world)
    }

    /// Number of moves applied in the current round.
    #[must_use]
    pub fn move_count(&self) -> usize {
        query::move_count(&self.world)
    }

    /// Reports whether [`Game::undo`] would change the board.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        query::can_undo(&self.world)
    }

    /// Reports whether [`Game::redo`] would change the board.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        query::can_redo(&self.world)
    }

    /// Reports whether a goal is left to draw.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        query::can_draw(&self.world)
    }

    /// Starts the countdown, or cancels it when already running.
    pub fn toggle_timer(&mut self) {
        self.countdown.toggle();
        tracing::debug!(running = self.countdown.is_running(), "countdown toggled");
    }

    /// Advances the countdown by the elapsed time.
    pub fn advance(&mut self, dt: Duration) {
        let was_expired = self.countdown.is_expired();
        self.countdown.advance(dt);
        if !was_expired && self.countdown.is_expired() {
            tracing::debug!("countdown expired");
        }
    }

    /// Time left on the countdown, if it is running.
    #[must_use]
    pub fn countdown(&self) -> Option<CountdownReading> {
        self.countdown.reading()
    }

    /// Active goal token, if one has been drawn.
    #[must_use]
    pub fn goal(&self) -> Option<TargetToken> {
        query::goal(&self.world)
    }

    /// Layout the current board was dealt from.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Read-only access to the authoritative world for scene building.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Takes every event emitted since the previous call.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    fn install(&mut self, size: BoardSize, layout: Layout) -> Result<(), GameError> {
        let mut staged = World::with_size(size);
        let mut events = Vec::new();
        world::apply(&mut staged, Command::ConfigureBoard { size }, &mut events);
        world::apply(
            &mut staged,
            Command::ApplyLayout {
                layout: layout.clone(),
            },
            &mut events,
        );

        if let Some(reason) = events.iter().find_map(|event| match event {
            Event::LayoutRejected { reason } => Some(*reason),
            _ => None,
        }) {
            tracing::warn!(%reason, "layout rejected");
            return Err(GameError::Layout(reason));
        }

        tracing::debug!(
            columns = size.columns(),
            rows = size.rows(),
            targets = layout.targets.len(),
            "new board installed"
        );
        self.world = staged;
        self.layout = layout;
        self.countdown.handle(&events);
        self.events.extend(events);
        Ok(())
    }

    fn execute(&mut self, command: Command) -> &[Event] {
        let start = self.events.len();
        world::apply(&mut self.world, command, &mut self.events);
        let emitted = &self.events[start..];
        self.countdown.handle(emitted);
        for event in emitted {
            trace_event(event);
        }
        emitted
    }
}

fn trace_event(event: &Event) {
    match event {
        Event::LayoutRejected { reason } => tracing::warn!(%reason, "layout rejected"),
        Event::GoalRejected { token, reason } => {
            tracing::warn!(%token, %reason, "goal draw rejected");
        }
        Event::SlideRejected { robot } => tracing::warn!(%robot, "robot is not on the board"),
        Event::RobotSlid {
            robot,
            direction,
            from,
            to,
        } => tracing::debug!(%robot, %direction, %from, %to, "robot slid"),
        Event::GoalReached { token, robot } => {
            tracing::debug!(%token, %robot, "goal reached");
        }
        other => tracing::debug!(event = ?other, "world event"),
    }
}
