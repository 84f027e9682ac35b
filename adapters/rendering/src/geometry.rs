//! Pixel geometry of the board.

use glam::Vec2;
use ricochet_core::{BoardSize, CellCoord, WallPos};

use crate::RenderingError;

/// Axis-aligned rectangle in screen space, `y` growing downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub min: Vec2,
    /// Bottom-right corner.
    pub max: Vec2,
}

impl Rect {
    /// Creates a rectangle from its corner coordinates.
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            min: Vec2::new(x1, y1),
            max: Vec2::new(x2, y2),
        }
    }

    /// Creates a square of the given half extent around a point.
    #[must_use]
    pub fn around(center: Vec2, half_extent: f32) -> Self {
        Self {
            min: center - Vec2::splat(half_extent),
            max: center + Vec2::splat(half_extent),
        }
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Midpoint of the rectangle.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Maps board coordinates onto screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardGeometry {
    size: BoardSize,
    cell_length: f32,
}

impl BoardGeometry {
    /// Creates the geometry of a board drawn with square cells of the given edge length.
    pub fn new(size: BoardSize, cell_length: f32) -> Result<Self, RenderingError> {
        if !cell_length.is_finite() || cell_length <= 0.0 {
            return Err(RenderingError::InvalidCellLength { cell_length });
        }
        Ok(Self { size, cell_length })
    }

    /// Board being drawn.
    #[must_use]
    pub const fn size(&self) -> BoardSize {
        self.size
    }

    /// Edge length of one cell in pixels.
    #[must_use]
    pub const fn cell_length(&self) -> f32 {
        self.cell_length
    }

    /// Width of the whole board in pixels.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.size.columns() as f32 * self.cell_length
    }

    /// Height of the whole board in pixels.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.size.rows() as f32 * self.cell_length
    }

    /// Screen rectangle covered by a cell.
    #[must_use]
    pub fn cell_rect(&self, cell: CellCoord) -> Rect {
        self.cell_fraction(cell_position(cell), 0.0, 1.0)
    }

    /// Inset disc drawn on every free cell.
    #[must_use]
    pub fn cell_inset(&self, cell: CellCoord) -> Rect {
        self.cell_fraction(cell_position(cell), 0.1, 0.9)
    }

    /// Bounding box of a target glyph drawn on its cell.
    #[must_use]
    pub fn target_rect(&self, cell: CellCoord) -> Rect {
        self.cell_fraction(cell_position(cell), 0.3, 0.7)
    }

    /// Bounding box of the enlarged goal glyph drawn over the center block.
    #[must_use]
    pub fn goal_rect(&self) -> Rect {
        let center = Vec2::new(
            (self.size.columns() / 2) as f32,
            (self.size.rows() / 2) as f32,
        ) * self.cell_length;
        Rect::around(center, 0.7 * self.cell_length)
    }

    /// Screen rectangle covered by the center block.
    #[must_use]
    pub fn center_rect(&self) -> Rect {
        let [top_left, .., bottom_right] = self.size.center_block();
        let first = self.cell_rect(top_left);
        let last = self.cell_rect(bottom_right);
        Rect {
            min: first.min,
            max: last.max,
        }
    }

    /// Disc of a robot whose display position is given in cell units.
    #[must_use]
    pub fn robot_rect(&self, position: Vec2) -> Rect {
        Rect::around((position + Vec2::splat(0.5)) * self.cell_length, 0.4 * self.cell_length)
    }

    /// Thin bar drawn for a wall.
    ///
    /// Walls separating columns become vertical bars spanning one cell edge;
    /// walls separating rows become horizontal bars.
    #[must_use]
    pub fn wall_rect(&self, wall: WallPos) -> Rect {
        let half = self.cell_length * 0.5;
        let x = wall.x() as f32;
        let y = wall.y() as f32;
        if wall.separates_columns() {
            Rect::new(
                (x + 0.9) * half,
                (y - 0.1) * half,
                (x + 1.1) * half,
                (y + 2.1) * half,
            )
        } else {
            Rect::new(
                (x - 0.1) * half,
                (y + 0.9) * half,
                (x + 2.1) * half,
                (y + 1.1) * half,
            )
        }
    }

    fn cell_fraction(&self, position: Vec2, from: f32, to: f32) -> Rect {
        Rect {
            min: (position + Vec2::splat(from)) * self.cell_length,
            max: (position + Vec2::splat(to)) * self.cell_length,
        }
    }
}

/// Cell coordinates expressed as a point in cell units.
#[must_use]
pub fn cell_position(cell: CellCoord) -> Vec2 {
    Vec2::new(cell.column() as f32, cell.row() as f32)
}
