#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative board state management for Ricochet Robots.
//!
//! The world owns robot positions, walls, target placements, the move log and
//! the bag of undrawn goals. It only changes through [`apply`], which reports
//! every outcome as an [`Event`], and is read through the [`query`] module.

use std::collections::{BTreeMap, BTreeSet};

use ricochet_core::{
    BoardSize, BoardView, CellCoord, Command, Event, GoalError, Layout, LayoutError, Move,
    RobotColor, TargetToken, WallPos, WELCOME_BANNER,
};
use ricochet_system_movement as movement;

mod bag;
mod log;
mod perimeter;

pub use bag::Bag;
pub use log::MoveLog;

/// Represents the authoritative Ricochet Robots board.
#[derive(Clone, Debug)]
pub struct World {
    banner: &'static str,
    size: BoardSize,
    perimeter: BTreeSet<WallPos>,
    walls: BTreeSet<WallPos>,
    robots: [Option<CellCoord>; 4],
    origins: [Option<CellCoord>; 4],
    targets: BTreeMap<TargetToken, CellCoord>,
    bag: Bag,
    goal: Option<TargetToken>,
    log: MoveLog,
}

impl World {
    /// Creates an empty standard board awaiting a layout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_size(BoardSize::STANDARD)
    }

    /// Creates an empty board of the provided size awaiting a layout.
    #[must_use]
    pub fn with_size(size: BoardSize) -> Self {
        let perimeter = perimeter::perimeter_walls(size);
        Self {
            banner: WELCOME_BANNER,
            size,
            walls: perimeter.clone(),
            perimeter,
            robots: [None; 4],
            origins: [None; 4],
            targets: BTreeMap::new(),
            bag: Bag::new(),
            goal: None,
            log: MoveLog::new(),
        }
    }

    fn view(&self) -> BoardView<'_> {
        BoardView::new(self.size, &self.walls, &self.robots)
    }

    fn place(&mut self, robot: RobotColor, cell: CellCoord) {
        self.robots[robot.index()] = Some(cell);
    }

    fn goal_reached(&self) -> Option<(TargetToken, RobotColor)> {
        let token = self.goal?;
        let cell = self.targets.get(&token).copied()?;
        RobotColor::ALL
            .into_iter()
            .find(|robot| token.accepts(*robot) && self.robots[robot.index()] == Some(cell))
            .map(|robot| (token, robot))
    }

    fn announce_goal(&self, out_events: &mut Vec<Event>) {
        if let Some((token, robot)) = self.goal_reached() {
            out_events.push(Event::GoalReached { token, robot });
        }
    }

    fn validate(&self, layout: &Layout) -> Result<(), LayoutError> {
        let mut placed: [Option<CellCoord>; 4] = [None; 4];
        for placement in &layout.robots {
            self.validate_cell(placement.cell)?;
            if placed[placement.robot.index()].is_some() {
                return Err(LayoutError::DuplicateRobot {
                    robot: placement.robot,
                });
            }
            if placed.contains(&Some(placement.cell)) {
                return Err(LayoutError::RobotsOverlap {
                    cell: placement.cell,
                });
            }
            placed[placement.robot.index()] = Some(placement.cell);
        }
        if let Some(robot) = RobotColor::ALL
            .into_iter()
            .find(|robot| placed[robot.index()].is_none())
        {
            return Err(LayoutError::MissingRobot { robot });
        }

        let mut tokens = BTreeSet::new();
        for placement in &layout.targets {
            self.validate_cell(placement.cell)?;
            if !tokens.insert(placement.token) {
                return Err(LayoutError::DuplicateTarget {
                    token: placement.token,
                });
            }
        }

        if let Some(wall) = layout.walls.iter().find(|wall| !wall.is_within(self.size)) {
            return Err(LayoutError::InvalidWall { wall: *wall });
        }
        Ok(())
    }

    fn validate_cell(&self, cell: CellCoord) -> Result<(), LayoutError> {
        if !self.size.contains(cell) {
            return Err(LayoutError::OutOfBounds { cell });
        }
        if self.size.is_center(cell) {
            return Err(LayoutError::CenterBlock { cell });
        }
        Ok(())
    }

    fn install(&mut self, layout: Layout) {
        self.walls = self.perimeter.clone();
        self.walls.extend(layout.walls);
        self.robots = [None; 4];
        for placement in layout.robots {
            self.place(placement.robot, placement.cell);
        }
        self.origins = self.robots;
        self.targets = layout
            .targets
            .into_iter()
            .map(|placement| (placement.token, placement.cell))
            .collect();
        self.bag.refill(self.targets.keys().copied());
        self.goal = None;
        self.log.clear();
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureBoard { size } => {
            *world = World::with_size(size);
            out_events.push(Event::BoardConfigured { size });
        }
        Command::ApplyLayout { layout } => match world.validate(&layout) {
            Ok(()) => {
                world.install(layout);
                out_events.push(Event::LayoutApplied);
            }
            Err(reason) => out_events.push(Event::LayoutRejected { reason }),
        },
        Command::SlideRobot { robot, direction } => {
            let Some(resolution) = movement::resolve(&world.view(), robot, direction) else {
                out_events.push(Event::SlideRejected { robot });
                return;
            };

            if !resolution.moved() {
                out_events.push(Event::SlideBlocked {
                    robot,
                    direction,
                    cell: resolution.from,
                });
                return;
            }

            world.place(robot, resolution.to);
            world
                .log
                .record(Move::new(robot, resolution.from, resolution.to));
            out_events.push(Event::RobotSlid {
                robot,
                direction,
                from: resolution.from,
                to: resolution.to,
            });
            world.announce_goal(out_events);
        }
        Command::UndoMove => {
            if let Some(record) = world.log.undo() {
                world.place(record.robot, record.from);
                out_events.push(Event::MoveUndone { record });
                world.announce_goal(out_events);
            }
        }
        Command::RedoMove => {
            if let Some(record) = world.log.redo() {
                world.place(record.robot, record.to);
                out_events.push(Event::MoveRedone { record });
                world.announce_goal(out_events);
            }
        }
        Command::ResetRobots => {
            let mut rewound = 0;
            while let Some(record) = world.log.undo() {
                world.place(record.robot, record.from);
                rewound += 1;
            }
            debug_assert_eq!(world.robots, world.origins);
            out_events.push(Event::RobotsReset { rewound });
        }
        Command::DrawGoal { token } => {
            let placed = world.targets.get(&token).copied();
            let Some(cell) = placed.filter(|_| world.bag.contains(token)) else {
                out_events.push(Event::GoalRejected {
                    token,
                    reason: GoalError::NotInBag,
                });
                return;
            };

            let _ = world.bag.take(token);
            world.goal = Some(token);
            world.log.clear();
            world.origins = world.robots;
            out_events.push(Event::GoalDrawn { token, cell });
            if world.bag.is_empty() {
                out_events.push(Event::BagEmptied);
            }
            world.announce_goal(out_events);
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::collections::{BTreeMap, BTreeSet};

    use ricochet_core::{BoardSize, BoardView, CellCoord, RobotColor, TargetToken, WallPos};

    use super::{Bag, MoveLog, World};

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Dimensions of the board.
    #[must_use]
    pub fn board_size(world: &World) -> BoardSize {
        world.size
    }

    /// Captures a read-only view of board geometry and robot positions.
    #[must_use]
    pub fn board_view(world: &World) -> BoardView<'_> {
        world.view()
    }

    /// Current cell of the robot, if a layout has placed it.
    #[must_use]
    pub fn robot(world: &World, robot: RobotColor) -> Option<CellCoord> {
        world.robots[robot.index()]
    }

    /// Every placed robot with its current cell, in palette order.
    #[must_use]
    pub fn robots(world: &World) -> Vec<(RobotColor, CellCoord)> {
        RobotColor::ALL
            .into_iter()
            .filter_map(|robot| world.robots[robot.index()].map(|cell| (robot, cell)))
            .collect()
    }

    /// Cell the robot occupied when the current round began.
    #[must_use]
    pub fn origin(world: &World, robot: RobotColor) -> Option<CellCoord> {
        world.origins[robot.index()]
    }

    /// Every wall on the board, perimeter walls included.
    #[must_use]
    pub fn walls(world: &World) -> &BTreeSet<WallPos> {
        &world.walls
    }

    /// Fixed walls installed on the outer ring of the board.
    #[must_use]
    pub fn perimeter_walls(world: &World) -> &BTreeSet<WallPos> {
        &world.perimeter
    }

    /// Target placements keyed by token.
    #[must_use]
    pub fn targets(world: &World) -> &BTreeMap<TargetToken, CellCoord> {
        &world.targets
    }

    /// Active goal token, if one has been drawn.
    #[must_use]
    pub fn goal(world: &World) -> Option<TargetToken> {
        world.goal
    }

    /// Cell of the active goal, if one has been drawn.
    #[must_use]
    pub fn goal_cell(world: &World) -> Option<CellCoord> {
        world
            .goal
            .and_then(|token| world.targets.get(&token).copied())
    }

    /// Reports whether a robot satisfying the active goal stands on its cell.
    #[must_use]
    pub fn is_goal_met(world: &World) -> bool {
        world.goal_reached().is_some()
    }

    /// Undrawn goal tokens.
    #[must_use]
    pub fn bag(world: &World) -> &Bag {
        &world.bag
    }

    /// Move history of the current round.
    #[must_use]
    pub fn move_log(world: &World) -> &MoveLog {
        &world.log
    }

    /// Number of moves applied in the current round.
    #[must_use]
    pub fn move_count(world: &World) -> usize {
        world.log.cursor()
    }

    /// Reports whether a move can be undone.
    #[must_use]
    pub fn can_undo(world: &World) -> bool {
        world.log.can_undo()
    }

    /// Reports whether an undone move can be redone.
    #[must_use]
    pub fn can_redo(world: &World) -> bool {
        world.log.can_redo()
    }

    /// Reports whether any goal remains to be drawn.
    #[must_use]
    pub fn can_draw(world: &World) -> bool {
        !world.bag.is_empty()
    }
}
