#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure movement system that resolves where a sliding robot comes to rest.
//!
//! Resolution walks one cell at a time from the robot's current cell and stops
//! on the last cell before the board edge, another robot, a wall, or the
//! center block. It never inspects move history and never mutates the board.

use ricochet_core::{BoardView, CellCoord, Direction, RobotColor};

/// Outcome of resolving a slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Robot that was resolved.
    pub robot: RobotColor,
    /// Cell the robot started on.
    pub from: CellCoord,
    /// Cell the robot comes to rest on.
    pub to: CellCoord,
}

impl Resolution {
    /// Reports whether the slide changes the robot's cell.
    #[must_use]
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

/// Resolves the resting cell of `robot` when slid in `direction`.
///
/// Returns `None` when the robot has not been placed on the board.
#[must_use]
pub fn resolve(board: &BoardView<'_>, robot: RobotColor, direction: Direction) -> Option<Resolution> {
    let from = board.robot(robot)?;
    let size = board.size();
    let mut current = from;

    loop {
        let Some(candidate) = current.step(direction, size) else {
            break;
        };
        if board.occupant(candidate).is_some() {
            break;
        }
        if board.has_wall_between(current, candidate) {
            break;
        }
        if size.is_center(candidate) {
            break;
        }
        current = candidate;
    }

    Some(Resolution {
        robot,
        from,
        to: current,
    })
}

/// Resolves every direction for `robot`, in [`Direction::ALL`] order.
///
/// Useful to adapters that preview or highlight the available slides.
#[must_use]
pub fn resolve_all(board: &BoardView<'_>, robot: RobotColor) -> Vec<(Direction, Resolution)> {
    Direction::ALL
        .into_iter()
        .filter_map(|direction| resolve(board, robot, direction).map(|resolution| (direction, resolution)))
        .collect()
}
