#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Ricochet Robots adapters.
//!
//! Front ends receive a [`Scene`] snapshot each frame, turn it into
//! backend-agnostic [`Primitive`]s through the injected [`ShapeGlyphs`]
//! registry, and feed player intent back as [`FrameInput`].

use anyhow::Result as AnyResult;
use ricochet_core::{Direction, RobotColor};
use std::{error::Error, fmt, time::Duration};

mod geometry;
mod glyphs;
mod motion;
mod scene;

pub use geometry::{cell_position, BoardGeometry, Rect};
pub use glyphs::{circle, diamond, square, triangle, wild, GlyphFn, Paint, Primitive, ShapeGlyphs, Stroke};
pub use motion::{MotionTracker, CELLS_PER_SECOND};
pub use scene::{Hud, Scene, SceneRobot, SceneTarget};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

/// Colors shared by every front end.
pub mod palette {
    use ricochet_core::RobotColor;

    use crate::Color;

    /// Free cell background.
    pub const CELL: Color = Color::from_rgb_u8(0x7f, 0x7f, 0x7f);
    /// Disc drawn inside every free cell.
    pub const CELL_INSET: Color = Color::from_rgb_u8(0xcc, 0xcc, 0xcc);
    /// Walls and the center block.
    pub const WALL: Color = Color::from_rgb_u8(0x33, 0x33, 0x33);
    /// Color handed to the wild glyph.
    pub const WILD: Color = Color::from_rgb_u8(0xff, 0xff, 0xff);
    /// Window background.
    pub const BACKGROUND: Color = Color::from_rgb_u8(0xd9, 0xd9, 0xd9);

    /// Body color of a robot and of its targets.
    #[must_use]
    pub const fn robot(robot: RobotColor) -> Color {
        match robot {
            RobotColor::Red => Color::from_rgb_u8(0xff, 0x00, 0x00),
            RobotColor::Yellow => Color::from_rgb_u8(0xff, 0xff, 0x00),
            RobotColor::Green => Color::from_rgb_u8(0x00, 0x80, 0x00),
            RobotColor::Blue => Color::from_rgb_u8(0x00, 0x00, 0xff),
        }
    }
}

/// Player intent captured by an adapter between two frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerAction {
    /// Slide a robot in a direction.
    Slide {
        /// Robot to move.
        robot: RobotColor,
        /// Direction of travel.
        direction: Direction,
    },
    /// List where a robot would come to rest in each direction.
    Preview {
        /// Robot to inspect.
        robot: RobotColor,
    },
    /// Revert the latest move.
    Undo,
    /// Reapply the latest undone move.
    Redo,
    /// Rewind the robots to the start of the round.
    Reset,
    /// Draw the next goal.
    Draw,
    /// Start or cancel the countdown.
    ToggleTimer,
    /// Deal a fresh board.
    NewGame,
    /// Export the current board as a transfer string.
    ShareLayout,
    /// Replace the board with one decoded from a transfer string.
    LoadLayout {
        /// Transfer string supplied by the player.
        encoded: String,
    },
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Actions requested since the previous frame, oldest first.
    pub actions: Vec<PlayerAction>,
}

/// Everything a backend needs to open its output.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Geometry used to lay out the board.
    pub geometry: BoardGeometry,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(window_title: T, clear_color: Color, geometry: BoardGeometry, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            window_title: window_title.into(),
            clear_color,
            geometry,
            scene,
        }
    }
}

/// Rendering backend capable of presenting Ricochet Robots scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives the elapsed frame delta and
    /// the input captured by the adapter, and may mutate the scene before it
    /// is rendered.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq)]
pub enum RenderingError {
    /// Cells must have a positive, finite edge length.
    InvalidCellLength {
        /// Provided length that failed validation.
        cell_length: f32,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellLength { cell_length } => {
                write!(
                    f,
                    "cell length must be positive and finite (received {cell_length})"
                )
            }
        }
    }
}

impl Error for RenderingError {}
