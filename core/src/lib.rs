#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Ricochet Robots engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems and
//! presentation layers to react to. Systems read immutable views such as
//! [`BoardView`] and respond with new commands or derived values.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

mod error;

pub use error::{BoardError, CapacityError, GoalError, LayoutError, ParseError};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Ricochet Robots.";

/// Number of columns on the standard board.
pub const DEFAULT_COLUMNS: u32 = 16;

/// Number of rows on the standard board.
pub const DEFAULT_ROWS: u32 = 16;

/// Largest number of columns or rows a board may have.
pub const MAX_BOARD_SIDE: u32 = 255;

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replaces the board geometry, clearing robots, targets, goal and history.
    ConfigureBoard {
        /// Dimensions of the new board.
        size: BoardSize,
    },
    /// Adopts a freshly generated layout and starts a new game.
    ApplyLayout {
        /// Robot, target and wall placements to install.
        layout: Layout,
    },
    /// Slides a robot in a direction until it is blocked.
    SlideRobot {
        /// Robot to move.
        robot: RobotColor,
        /// Direction of travel.
        direction: Direction,
    },
    /// Reverts the most recent move that has not been undone.
    UndoMove,
    /// Reapplies the earliest undone move.
    RedoMove,
    /// Rewinds every move of the current round without discarding history.
    ResetRobots,
    /// Removes a token from the bag and makes it the active goal.
    DrawGoal {
        /// Token chosen by the goal system.
        token: TargetToken,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that the board geometry was replaced.
    BoardConfigured {
        /// Dimensions of the new board.
        size: BoardSize,
    },
    /// Confirms that a layout was installed and a new game began.
    LayoutApplied,
    /// Reports that a layout was refused, leaving the world unchanged.
    LayoutRejected {
        /// Specific reason the layout was refused.
        reason: LayoutError,
    },
    /// Confirms that a robot slid to a new cell.
    RobotSlid {
        /// Robot that moved.
        robot: RobotColor,
        /// Direction of travel.
        direction: Direction,
        /// Cell the robot occupied before sliding.
        from: CellCoord,
        /// Cell the robot came to rest on.
        to: CellCoord,
    },
    /// Reports that a slide left the robot where it was.
    SlideBlocked {
        /// Robot that attempted to move.
        robot: RobotColor,
        /// Direction of the attempted slide.
        direction: Direction,
        /// Cell the robot still occupies.
        cell: CellCoord,
    },
    /// Reports that a slide targeted a robot that has not been placed.
    SlideRejected {
        /// Robot lacking a placement.
        robot: RobotColor,
    },
    /// Confirms that a move was reverted.
    MoveUndone {
        /// Move that was reverted.
        record: Move,
    },
    /// Confirms that an undone move was reapplied.
    MoveRedone {
        /// Move that was reapplied.
        record: Move,
    },
    /// Confirms that every robot returned to its origin for the current round.
    RobotsReset {
        /// Number of moves rewound to reach the origin.
        rewound: usize,
    },
    /// Confirms that a goal was drawn from the bag.
    GoalDrawn {
        /// Token that became the active goal.
        token: TargetToken,
        /// Cell the token is bound to.
        cell: CellCoord,
    },
    /// Reports that a goal draw was refused.
    GoalRejected {
        /// Token requested by the draw.
        token: TargetToken,
        /// Specific reason the draw failed.
        reason: GoalError,
    },
    /// Announces that the final token left the bag.
    BagEmptied,
    /// Announces that a robot reached the active goal.
    GoalReached {
        /// Active goal token.
        token: TargetToken,
        /// Robot standing on the goal cell.
        robot: RobotColor,
    },
}

/// Robots identified by their color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RobotColor {
    /// The red robot.
    Red,
    /// The yellow robot.
    Yellow,
    /// The green robot.
    Green,
    /// The blue robot.
    Blue,
}

impl RobotColor {
    /// Every robot color in palette order.
    pub const ALL: [RobotColor; 4] = [Self::Red, Self::Yellow, Self::Green, Self::Blue];

    /// Position of the color within [`RobotColor::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Yellow => 1,
            Self::Green => 2,
            Self::Blue => 3,
        }
    }

    /// Lowercase name of the color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

impl fmt::Display for RobotColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RobotColor {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Self::Red),
            "yellow" | "y" => Ok(Self::Yellow),
            "green" | "g" => Ok(Self::Green),
            "blue" | "b" => Ok(Self::Blue),
            _ => Err(ParseError::UnknownColor(value.to_owned())),
        }
    }
}

/// Symbols that distinguish targets of the same color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shape {
    /// Square outline.
    Square,
    /// Circle outline.
    Circle,
    /// Triangle outline.
    Triangle,
    /// Diamond outline.
    Diamond,
}

impl Shape {
    /// Every shape in token order.
    pub const ALL: [Shape; 4] = [Self::Square, Self::Circle, Self::Triangle, Self::Diamond];

    /// Lowercase name of the shape.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Diamond => "diamond",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(Self::Square),
            "circle" => Ok(Self::Circle),
            "triangle" => Ok(Self::Triangle),
            "diamond" => Ok(Self::Diamond),
            _ => Err(ParseError::UnknownShape(value.to_owned())),
        }
    }
}

/// Cardinal directions a robot can slide in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
}

impl Direction {
    /// Every direction in clockwise order starting north.
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Direction pointing the opposite way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::North => "up",
            Self::East => "right",
            Self::South => "down",
            Self::West => "left",
        })
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "up" | "north" | "u" | "n" => Ok(Self::North),
            "right" | "east" | "r" | "e" => Ok(Self::East),
            "down" | "south" | "d" | "s" => Ok(Self::South),
            "left" | "west" | "l" | "w" => Ok(Self::West),
            _ => Err(ParseError::UnknownDirection(value.to_owned())),
        }
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.column().abs_diff(other.column()) + self.row().abs_diff(other.row())
    }

    /// Computes the Chebyshev (king move) distance between two cell coordinates.
    #[must_use]
    pub fn chebyshev_distance(self, other: CellCoord) -> u32 {
        self.column()
            .abs_diff(other.column())
            .max(self.row().abs_diff(other.row()))
    }

    /// Returns the neighbouring cell in `direction`, or `None` past the board edge.
    #[must_use]
    pub fn step(self, direction: Direction, size: BoardSize) -> Option<CellCoord> {
        let next = match direction {
            Direction::North => CellCoord::new(self.column, self.row.checked_sub(1)?),
            Direction::South => CellCoord::new(self.column, self.row.checked_add(1)?),
            Direction::West => CellCoord::new(self.column.checked_sub(1)?, self.row),
            Direction::East => CellCoord::new(self.column.checked_add(1)?, self.row),
        };
        size.contains(next).then_some(next)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Dimensions of the board measured in whole cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardSize {
    columns: u32,
    rows: u32,
}

impl BoardSize {
    /// The standard 16x16 board.
    pub const STANDARD: BoardSize = BoardSize {
        columns: DEFAULT_COLUMNS,
        rows: DEFAULT_ROWS,
    };

    /// Creates a board size, rejecting boards too small to hold the center block
    /// or with a side longer than [`MAX_BOARD_SIDE`].
    pub fn new(columns: u32, rows: u32) -> Result<Self, BoardError> {
        if columns < 2 || rows < 2 {
            return Err(BoardError::TooSmall { columns, rows });
        }
        if columns > MAX_BOARD_SIDE || rows > MAX_BOARD_SIDE {
            return Err(BoardError::TooLarge { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    /// Number of columns on the board.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows on the board.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells, center block included.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        let count = u64::from(self.columns) * u64::from(self.rows);
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    /// Reports whether the cell lies on the board.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.columns && cell.row() < self.rows
    }

    /// Reports whether the cell lies on the outermost ring of the board.
    #[must_use]
    pub const fn is_edge(&self, cell: CellCoord) -> bool {
        cell.column() == 0
            || cell.row() == 0
            || cell.column() + 1 == self.columns
            || cell.row() + 1 == self.rows
    }

    /// The four cells of the impassable center block.
    #[must_use]
    pub const fn center_block(&self) -> [CellCoord; 4] {
        let column = self.columns / 2;
        let row = self.rows / 2;
        [
            CellCoord::new(column - 1, row - 1),
            CellCoord::new(column - 1, row),
            CellCoord::new(column, row - 1),
            CellCoord::new(column, row),
        ]
    }

    /// Reports whether the cell belongs to the center block.
    #[must_use]
    pub const fn is_center(&self, cell: CellCoord) -> bool {
        let column = self.columns / 2;
        let row = self.rows / 2;
        (cell.column() + 1 == column || cell.column() == column)
            && (cell.row() + 1 == row || cell.row() == row)
    }

    /// Iterates every cell column by column.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> {
        let rows = self.rows;
        (0..self.columns).flat_map(move |column| (0..rows).map(move |row| CellCoord::new(column, row)))
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Wall segment on the doubled lattice of cell edges.
///
/// A wall between neighbouring cells `a` and `b` sits at
/// `(a.column + b.column, a.row + b.row)`. An odd `x` separates two columns and
/// an odd `y` separates two rows; exactly one of the two is odd.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WallPos {
    x: u32,
    y: u32,
}

impl WallPos {
    /// Creates the wall separating two orthogonally adjacent cells.
    #[must_use]
    pub fn between(first: CellCoord, second: CellCoord) -> Option<Self> {
        if first.manhattan_distance(second) != 1 {
            return None;
        }
        Some(Self {
            x: first.column() + second.column(),
            y: first.row() + second.row(),
        })
    }

    /// Creates the wall on the `direction` side of `cell`, if that side faces another cell.
    #[must_use]
    pub fn beside(cell: CellCoord, direction: Direction, size: BoardSize) -> Option<Self> {
        let neighbour = cell.step(direction, size)?;
        Self::between(cell, neighbour)
    }

    /// Horizontal lattice coordinate.
    #[must_use]
    pub const fn x(&self) -> u32 {
        self.x
    }

    /// Vertical lattice coordinate.
    #[must_use]
    pub const fn y(&self) -> u32 {
        self.y
    }

    /// Reports whether the wall separates two horizontally adjacent cells.
    #[must_use]
    pub const fn separates_columns(&self) -> bool {
        self.x % 2 == 1
    }

    /// The pair of cells on either side of the wall, lower coordinates first.
    ///
    /// Returns `None` for lattice points that do not describe a cell edge.
    #[must_use]
    pub fn cells(&self) -> Option<(CellCoord, CellCoord)> {
        match (self.x % 2, self.y % 2) {
            (1, 0) => Some((
                CellCoord::new(self.x / 2, self.y / 2),
                CellCoord::new(self.x / 2 + 1, self.y / 2),
            )),
            (0, 1) => Some((
                CellCoord::new(self.x / 2, self.y / 2),
                CellCoord::new(self.x / 2, self.y / 2 + 1),
            )),
            _ => None,
        }
    }

    /// Reports whether both cells separated by the wall lie on the board.
    #[must_use]
    pub fn is_within(&self, size: BoardSize) -> bool {
        self.cells()
            .is_some_and(|(first, second)| size.contains(first) && size.contains(second))
    }
}

impl fmt::Display for WallPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

/// Goal tokens drawn from the bag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TargetToken {
    /// Target that must be reached by the robot of the same color.
    Colored {
        /// Robot that satisfies the target.
        color: RobotColor,
        /// Symbol distinguishing the target from others of the same color.
        shape: Shape,
    },
    /// Target that any robot satisfies.
    Wild,
}

impl TargetToken {
    /// Every token of a full game: each color with each shape, then the wild token.
    #[must_use]
    pub fn all() -> Vec<TargetToken> {
        RobotColor::ALL
            .iter()
            .flat_map(|&color| {
                Shape::ALL
                    .iter()
                    .map(move |&shape| TargetToken::Colored { color, shape })
            })
            .chain(std::iter::once(TargetToken::Wild))
            .collect()
    }

    /// Color required to satisfy the token, `None` for the wild token.
    #[must_use]
    pub const fn color(self) -> Option<RobotColor> {
        match self {
            Self::Colored { color, .. } => Some(color),
            Self::Wild => None,
        }
    }

    /// Reports whether the robot may satisfy this token.
    #[must_use]
    pub fn accepts(self, robot: RobotColor) -> bool {
        !self.color().is_some_and(|color| color != robot)
    }
}

impl fmt::Display for TargetToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Colored { color, shape } => write!(f, "{color} {shape}"),
            Self::Wild => f.write_str("wild"),
        }
    }
}

/// Record of a slide that changed a robot's cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Robot that moved.
    pub robot: RobotColor,
    /// Cell the robot left.
    pub from: CellCoord,
    /// Cell the robot came to rest on.
    pub to: CellCoord,
}

impl Move {
    /// Creates a new move record.
    #[must_use]
    pub const fn new(robot: RobotColor, from: CellCoord, to: CellCoord) -> Self {
        Self { robot, from, to }
    }
}

/// Placement of a robot within a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotPlacement {
    /// Robot being placed.
    pub robot: RobotColor,
    /// Cell assigned to the robot.
    pub cell: CellCoord,
}

/// Placement of a target token within a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetPlacement {
    /// Token being placed.
    pub token: TargetToken,
    /// Cell the token is bound to.
    pub cell: CellCoord,
}

/// Randomized robot, target and wall placements for one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Robot placements in palette order.
    pub robots: Vec<RobotPlacement>,
    /// Target placements in token order.
    pub targets: Vec<TargetPlacement>,
    /// Walls accompanying the targets.
    pub walls: Vec<WallPos>,
}

/// Read-only view of the board consulted by the movement system.
#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a> {
    size: BoardSize,
    walls: &'a BTreeSet<WallPos>,
    robots: &'a [Option<CellCoord>; 4],
}

impl<'a> BoardView<'a> {
    /// Captures a new view over board geometry and robot positions.
    ///
    /// `robots` is indexed by [`RobotColor::index`].
    #[must_use]
    pub fn new(
        size: BoardSize,
        walls: &'a BTreeSet<WallPos>,
        robots: &'a [Option<CellCoord>; 4],
    ) -> Self {
        Self {
            size,
            walls,
            robots,
        }
    }

    /// Dimensions of the board.
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// Current cell of the robot, if it has been placed.
    #[must_use]
    pub fn robot(&self, robot: RobotColor) -> Option<CellCoord> {
        self.robots[robot.index()]
    }

    /// Robot standing on the cell, if any.
    #[must_use]
    pub fn occupant(&self, cell: CellCoord) -> Option<RobotColor> {
        RobotColor::ALL
            .into_iter()
            .find(|robot| self.robots[robot.index()] == Some(cell))
    }

    /// Reports whether a wall separates two adjacent cells.
    #[must_use]
    pub fn has_wall_between(&self, first: CellCoord, second: CellCoord) -> bool {
        WallPos::between(first, second).is_some_and(|wall| self.walls.contains(&wall))
    }

    /// Iterator over every wall on the board.
    pub fn walls(&self) -> impl Iterator<Item = &'a WallPos> {
        self.walls.iter()
    }
}
