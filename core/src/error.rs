//! Error taxonomy shared by the world, systems and adapters.

use thiserror::Error;

use crate::{CellCoord, RobotColor, TargetToken, WallPos};

/// Raised when adapter-supplied vocabulary cannot be mapped onto a command.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The provided text does not name a robot.
    #[error("unknown robot color `{0}`")]
    UnknownColor(String),
    /// The provided text does not name a cardinal direction.
    #[error("unknown direction `{0}`")]
    UnknownDirection(String),
    /// The provided text does not name a target shape.
    #[error("unknown target shape `{0}`")]
    UnknownShape(String),
}

/// Raised when a board cannot be constructed with the requested dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Both dimensions must leave room for the 2x2 center block.
    #[error("board must be at least 2x2 to fit the center block (received {columns}x{rows})")]
    TooSmall {
        /// Requested number of columns.
        columns: u32,
        /// Requested number of rows.
        rows: u32,
    },
    /// Neither dimension may exceed [`crate::MAX_BOARD_SIDE`].
    #[error("board sides are limited to {max} cells (received {columns}x{rows})", max = crate::MAX_BOARD_SIDE)]
    TooLarge {
        /// Requested number of columns.
        columns: u32,
        /// Requested number of rows.
        rows: u32,
    },
}

/// Reasons the world refuses to adopt a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A robot or target was placed outside the board.
    #[error("cell {cell} lies outside the board")]
    OutOfBounds {
        /// Offending cell.
        cell: CellCoord,
    },
    /// A robot or target was placed inside the impassable center block.
    #[error("cell {cell} lies inside the center block")]
    CenterBlock {
        /// Offending cell.
        cell: CellCoord,
    },
    /// Two robots were assigned the same cell.
    #[error("more than one robot occupies {cell}")]
    RobotsOverlap {
        /// Shared cell.
        cell: CellCoord,
    },
    /// A robot of the palette has no placement.
    #[error("the {robot} robot has no placement")]
    MissingRobot {
        /// Robot lacking a placement.
        robot: RobotColor,
    },
    /// A robot was placed more than once.
    #[error("the {robot} robot was placed more than once")]
    DuplicateRobot {
        /// Robot with multiple placements.
        robot: RobotColor,
    },
    /// A target token was placed more than once.
    #[error("target {token} was placed more than once")]
    DuplicateTarget {
        /// Token with multiple placements.
        token: TargetToken,
    },
    /// A wall does not separate two cells of the board.
    #[error("wall {wall} does not separate two board cells")]
    InvalidWall {
        /// Offending wall.
        wall: WallPos,
    },
}

/// Raised by the randomizer when the board cannot host every object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CapacityError {
    /// Candidate cells ran out before all objects were placed.
    #[error("board ran out of free cells after placing {placed} of {required} objects")]
    Exhausted {
        /// Number of robots and targets that needed a cell.
        required: usize,
        /// Number of objects placed before the candidates ran out.
        placed: usize,
    },
}

/// Reasons a goal draw request was rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GoalError {
    /// The requested token was already drawn or never placed.
    #[error("token is not in the bag")]
    NotInBag,
}
