//! Drawing primitives and the registry of target glyphs.

use glam::Vec2;
use ricochet_core::{RobotColor, Shape, TargetToken};

use crate::{geometry::Rect, palette, Color};

/// Outline applied to a primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Outline color.
    pub color: Color,
    /// Outline width in pixels.
    pub width: f32,
}

/// Fill and outline of a primitive.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Paint {
    /// Interior color, if filled.
    pub fill: Option<Color>,
    /// Outline, if stroked.
    pub stroke: Option<Stroke>,
}

impl Paint {
    /// Solid paint without an outline.
    #[must_use]
    pub const fn filled(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
        }
    }

    /// Outline-only paint.
    #[must_use]
    pub const fn outlined(color: Color, width: f32) -> Self {
        Self {
            fill: None,
            stroke: Some(Stroke { color, width }),
        }
    }
}

/// Backend-agnostic drawing primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Axis-aligned rectangle.
    Rectangle {
        /// Covered area.
        rect: Rect,
        /// Fill and outline.
        paint: Paint,
    },
    /// Ellipse inscribed in a rectangle.
    Ellipse {
        /// Bounding box of the ellipse.
        rect: Rect,
        /// Fill and outline.
        paint: Paint,
    },
    /// Closed polygon.
    Polygon {
        /// Vertices in drawing order.
        points: Vec<Vec2>,
        /// Fill and outline.
        paint: Paint,
    },
}

/// Pure function drawing a glyph of the given color inside a bounding box.
pub type GlyphFn = fn(Color, Rect) -> Vec<Primitive>;

/// Registry mapping every target shape, and the wild token, to its glyph.
#[derive(Clone, Copy, Debug)]
pub struct ShapeGlyphs {
    shapes: [GlyphFn; 4],
    wild: GlyphFn,
}

impl ShapeGlyphs {
    /// Replaces the glyph drawn for a shape.
    #[must_use]
    pub fn with_shape(mut self, shape: Shape, glyph: GlyphFn) -> Self {
        self.shapes[shape_index(shape)] = glyph;
        self
    }

    /// Replaces the glyph drawn for the wild token.
    #[must_use]
    pub fn with_wild(mut self, glyph: GlyphFn) -> Self {
        self.wild = glyph;
        self
    }

    /// Draws the glyph of a token inside the bounding box.
    #[must_use]
    pub fn draw(&self, token: TargetToken, bbox: Rect) -> Vec<Primitive> {
        match token {
            TargetToken::Colored { color, shape } => {
                self.shapes[shape_index(shape)](palette::robot(color), bbox)
            }
            TargetToken::Wild => (self.wild)(palette::WILD, bbox),
        }
    }
}

impl Default for ShapeGlyphs {
    fn default() -> Self {
        Self {
            shapes: [square, circle, triangle, diamond],
            wild,
        }
    }
}

const fn shape_index(shape: Shape) -> usize {
    match shape {
        Shape::Square => 0,
        Shape::Circle => 1,
        Shape::Triangle => 2,
        Shape::Diamond => 3,
    }
}

fn stroke_width(bbox: Rect) -> f32 {
    bbox.width() * 0.125
}

/// Outlined square filling the bounding box.
#[must_use]
pub fn square(color: Color, bbox: Rect) -> Vec<Primitive> {
    vec![Primitive::Rectangle {
        rect: bbox,
        paint: Paint::outlined(color, stroke_width(bbox)),
    }]
}

/// Outlined circle inscribed in the bounding box.
#[must_use]
pub fn circle(color: Color, bbox: Rect) -> Vec<Primitive> {
    vec![Primitive::Ellipse {
        rect: bbox,
        paint: Paint::outlined(color, stroke_width(bbox)),
    }]
}

/// Outlined triangle standing on the bottom edge with its apex just below the top.
#[must_use]
pub fn triangle(color: Color, bbox: Rect) -> Vec<Primitive> {
    let Rect { min, max } = bbox;
    vec![Primitive::Polygon {
        points: vec![
            Vec2::new(min.x, max.y),
            Vec2::new(max.x, max.y),
            Vec2::new((min.x + max.x) * 0.5, min.y * 0.85 + max.y * 0.15),
        ],
        paint: Paint::outlined(color, stroke_width(bbox)),
    }]
}

/// Outlined diamond touching the midpoint of every edge.
#[must_use]
pub fn diamond(color: Color, bbox: Rect) -> Vec<Primitive> {
    let Rect { min, max } = bbox;
    let middle = bbox.center();
    vec![Primitive::Polygon {
        points: vec![
            Vec2::new(min.x, middle.y),
            Vec2::new(middle.x, min.y),
            Vec2::new(max.x, middle.y),
            Vec2::new(middle.x, max.y),
        ],
        paint: Paint::outlined(color, stroke_width(bbox)),
    }]
}

/// Four filled triangles meeting in the middle, one per robot color.
///
/// The requested color is ignored: the wild glyph always shows the palette.
#[must_use]
pub fn wild(_color: Color, bbox: Rect) -> Vec<Primitive> {
    let Rect { min, max } = bbox;
    let middle = bbox.center();
    let wedge = |first: Vec2, second: Vec2, robot: RobotColor| Primitive::Polygon {
        points: vec![first, second, middle],
        paint: Paint::filled(palette::robot(robot)),
    };
    vec![
        wedge(min, Vec2::new(max.x, min.y), RobotColor::Red),
        wedge(Vec2::new(min.x, max.y), max, RobotColor::Yellow),
        wedge(min, Vec2::new(min.x, max.y), RobotColor::Green),
        wedge(Vec2::new(max.x, min.y), max, RobotColor::Blue),
    ]
}
