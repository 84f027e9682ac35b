//! Display positions of robots sliding towards their authoritative cells.

use std::{collections::VecDeque, time::Duration};

use glam::Vec2;
use ricochet_core::{CellCoord, Event, RobotColor};
use ricochet_world::{query, World};

use crate::geometry::cell_position;

/// Speed at which robots travel across the board.
pub const CELLS_PER_SECOND: f32 = 16.0;

/// Interpolates robot display positions, one robot at a time in event order.
///
/// Positions are expressed in cell units. Slides, undos and redos queue a
/// motion; configuring the board, applying a layout or resetting the robots
/// teleports every robot to its authoritative cell and drops pending motions.
#[derive(Clone, Debug, Default)]
pub struct MotionTracker {
    positions: [Option<Vec2>; 4],
    pending: VecDeque<(RobotColor, CellCoord)>,
}

impl MotionTracker {
    /// Creates a tracker with every robot snapped to its cell in the world.
    #[must_use]
    pub fn new(world: &World) -> Self {
        let mut tracker = Self::default();
        tracker.teleport(world);
        tracker
    }

    /// Queues motions and teleports for the provided world events.
    pub fn handle(&mut self, events: &[Event], world: &World) {
        for event in events {
            match event {
                Event::BoardConfigured { .. } | Event::LayoutApplied | Event::RobotsReset { .. } => {
                    self.teleport(world);
                }
                Event::RobotSlid { robot, to, .. } => self.pending.push_back((*robot, *to)),
                Event::MoveUndone { record } => {
                    self.pending.push_back((record.robot, record.from));
                }
                Event::MoveRedone { record } => self.pending.push_back((record.robot, record.to)),
                _ => {}
            }
        }
    }

    /// Moves the queued robots along for the elapsed time.
    ///
    /// Travel left over once a robot arrives carries on to the next queued motion.
    pub fn advance(&mut self, dt: Duration) {
        let mut budget = CELLS_PER_SECOND * dt.as_secs_f32();
        while let Some(&(robot, cell)) = self.pending.front() {
            let target = cell_position(cell);
            let slot = &mut self.positions[robot.index()];
            let current = slot.unwrap_or(target);
            let remaining = (target - current).abs().max_element();
            if remaining > budget {
                let step = (target - current).clamp(Vec2::splat(-budget), Vec2::splat(budget));
                *slot = Some(current + step);
                return;
            }
            *slot = Some(target);
            budget -= remaining;
            let _ = self.pending.pop_front();
        }
    }

    /// Completes every queued motion immediately.
    pub fn settle(&mut self) {
        while let Some((robot, cell)) = self.pending.pop_front() {
            self.positions[robot.index()] = Some(cell_position(cell));
        }
    }

    /// Display position of a robot, if it has been placed.
    #[must_use]
    pub fn position(&self, robot: RobotColor) -> Option<Vec2> {
        self.positions[robot.index()]
    }

    /// Reports whether no robot is travelling.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    fn teleport(&mut self, world: &World) {
        self.pending.clear();
        for robot in RobotColor::ALL {
            self.positions[robot.index()] = query::robot(world, robot).map(cell_position);
        }
    }
}
