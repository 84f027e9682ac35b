//! Snapshot of everything a front end draws for one frame.

use glam::Vec2;
use ricochet_core::{BoardSize, CellCoord, RobotColor, TargetToken, WallPos};
use ricochet_game::Game;
use ricochet_system_countdown::CountdownReading;
use ricochet_world::query;

use crate::{
    geometry::{cell_position, BoardGeometry},
    glyphs::{Paint, Primitive, ShapeGlyphs},
    motion::MotionTracker,
    palette,
};

/// Target token bound to a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneTarget {
    /// Token printed on the cell.
    pub token: TargetToken,
    /// Cell carrying the token.
    pub cell: CellCoord,
}

/// Robot with its authoritative and displayed location.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneRobot {
    /// Robot identity.
    pub robot: RobotColor,
    /// Authoritative cell.
    pub cell: CellCoord,
    /// Cell the robot started the current round from.
    pub origin: CellCoord,
    /// Interpolated display position in cell units.
    pub position: Vec2,
}

/// Status panel values shown next to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Hud {
    /// Moves applied in the current round.
    pub moves: usize,
    /// Whether the active goal is satisfied.
    pub goal_met: bool,
    /// Whether undo is available.
    pub can_undo: bool,
    /// Whether redo is available.
    pub can_redo: bool,
    /// Whether goals are left in the bag.
    pub can_draw: bool,
    /// Countdown readout while the timer runs.
    pub countdown: Option<CountdownReading>,
}

impl Hud {
    /// Move counter caption: empty before the first move.
    #[must_use]
    pub fn move_label(&self) -> String {
        match self.moves {
            0 => String::new(),
            1 => "1 move".to_owned(),
            moves => format!("{moves} moves"),
        }
    }
}

/// Board content presented to the player.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Board dimensions.
    pub size: BoardSize,
    /// Every wall, perimeter walls included.
    pub walls: Vec<WallPos>,
    /// Every placed target.
    pub targets: Vec<SceneTarget>,
    /// Active goal, if one has been drawn.
    pub goal: Option<SceneTarget>,
    /// Placed robots in palette order.
    pub robots: Vec<SceneRobot>,
    /// Status panel.
    pub hud: Hud,
    /// One-line message left by the last action, if any.
    pub status: Option<String>,
}

impl Scene {
    /// Captures the current state of a game, using the tracker for robot display positions.
    #[must_use]
    pub fn capture(game: &Game, motion: &MotionTracker) -> Self {
        let world = game.world();
        let targets = query::targets(world);
        Self {
            size: query::board_size(world),
            walls: query::walls(world).iter().copied().collect(),
            targets: targets
                .iter()
                .map(|(token, cell)| SceneTarget {
                    token: *token,
                    cell: *cell,
                })
                .collect(),
            goal: query::goal(world).and_then(|token| {
                targets
                    .get(&token)
                    .map(|cell| SceneTarget { token, cell: *cell })
            }),
            robots: query::robots(world)
                .into_iter()
                .map(|(robot, cell)| SceneRobot {
                    robot,
                    cell,
                    origin: query::origin(world, robot).unwrap_or(cell),
                    position: motion
                        .position(robot)
                        .unwrap_or_else(|| cell_position(cell)),
                })
                .collect(),
            hud: Hud {
                moves: game.move_count(),
                goal_met: game.is_goal_met(),
                can_undo: game.can_undo(),
                can_redo: game.can_redo(),
                can_draw: game.can_draw(),
                countdown: game.countdown(),
            },
            status: None,
        }
    }

    /// Robot displayed at a cell once its motion has finished, if any.
    #[must_use]
    pub fn robot_at(&self, cell: CellCoord) -> Option<RobotColor> {
        self.robots
            .iter()
            .find(|robot| robot.position == cell_position(cell))
            .map(|robot| robot.robot)
    }

    /// Target printed on a cell, if any.
    #[must_use]
    pub fn target_at(&self, cell: CellCoord) -> Option<TargetToken> {
        self.targets
            .iter()
            .find(|target| target.cell == cell)
            .map(|target| target.token)
    }

    /// Draw list for the scene, back to front.
    #[must_use]
    pub fn primitives(&self, geometry: &BoardGeometry, glyphs: &ShapeGlyphs) -> Vec<Primitive> {
        let mut primitives = Vec::new();
        for cell in self.size.cells().filter(|cell| !self.size.is_center(*cell)) {
            primitives.push(Primitive::Rectangle {
                rect: geometry.cell_rect(cell),
                paint: Paint::filled(palette::CELL),
            });
            primitives.push(Primitive::Ellipse {
                rect: geometry.cell_inset(cell),
                paint: Paint::filled(palette::CELL_INSET),
            });
        }
        primitives.push(Primitive::Rectangle {
            rect: geometry.center_rect(),
            paint: Paint::filled(palette::WALL),
        });

        for target in &self.targets {
            primitives.extend(glyphs.draw(target.token, geometry.target_rect(target.cell)));
        }
        for wall in &self.walls {
            primitives.push(Primitive::Rectangle {
                rect: geometry.wall_rect(*wall),
                paint: Paint::filled(palette::WALL),
            });
        }

        let marker_width = geometry.cell_length() * 0.05;
        for robot in self.robots.iter().filter(|robot| robot.cell != robot.origin) {
            primitives.push(Primitive::Ellipse {
                rect: geometry.robot_rect(cell_position(robot.origin)),
                paint: Paint::outlined(palette::robot(robot.robot), marker_width),
            });
        }
        for robot in &self.robots {
            primitives.push(Primitive::Ellipse {
                rect: geometry.robot_rect(robot.position),
                paint: Paint::filled(palette::robot(robot.robot)),
            });
        }

        if let Some(goal) = self.goal {
            primitives.extend(glyphs.draw(goal.token, geometry.goal_rect()));
        }
        primitives
    }
}
