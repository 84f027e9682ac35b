//! Drives a [`Game`] from the actions collected by a front end.
//!
//! The line-based front end prints one frame per command, so queued robot
//! motions are settled at once instead of being interpolated.

use std::time::Duration;

use ricochet_game::Game;
use ricochet_rendering::{FrameInput, MotionTracker, PlayerAction, Scene};
use ricochet_world::query;

use crate::layout_transfer::LayoutSnapshot;

/// Game plus the robot display state derived from its events.
#[derive(Debug)]
pub(crate) struct Session {
    game: Game,
    motion: MotionTracker,
}

impl Session {
    pub(crate) fn new(mut game: Game) -> Self {
        let motion = MotionTracker::new(game.world());
        let _ = game.drain_events();
        Self { game, motion }
    }

    /// Scene describing the current state.
    pub(crate) fn scene(&self) -> Scene {
        Scene::capture(&self.game, &self.motion)
    }

    /// Advances time, applies the frame's actions and refreshes the scene.
    ///
    /// The scene status carries the message of the last action that produced one.
    pub(crate) fn update(&mut self, dt: Duration, input: FrameInput, scene: &mut Scene) {
        self.game.advance(dt);

        let mut status = None;
        for action in input.actions {
            if let Some(message) = self.apply(action) {
                status = Some(message);
            }
        }

        let events = self.game.drain_events();
        self.motion.handle(&events, self.game.world());
        self.motion.settle();

        *scene = self.scene();
        scene.status = status;
    }

    fn apply(&mut self, action: PlayerAction) -> Option<String> {
        match action {
            PlayerAction::Slide { robot, direction } => (!self.game.slide(robot, direction))
                .then(|| format!("the {robot} robot cannot move {direction}")),
            PlayerAction::Preview { robot } => {
                let reachable: Vec<String> = self
                    .game
                    .slide_preview(robot)
                    .into_iter()
                    .map(|(direction, cell)| format!("{direction} {cell}"))
                    .collect();
                Some(if reachable.is_empty() {
                    format!("the {robot} robot cannot move")
                } else {
                    format!("the {robot} robot can reach: {}", reachable.join(", "))
                })
            }
            PlayerAction::Undo => (!self.game.undo()).then(|| "nothing to undo".to_owned()),
            PlayerAction::Redo => (!self.game.redo()).then(|| "nothing to redo".to_owned()),
            PlayerAction::Reset => {
                self.game.reset_to_start();
                None
            }
            PlayerAction::Draw => Some(match self.game.draw_goal() {
                Some(token) => format!("new goal: {token}"),
                None => "every goal has been drawn; deal a new board".to_owned(),
            }),
            PlayerAction::ToggleTimer => {
                self.game.toggle_timer();
                None
            }
            PlayerAction::NewGame => Some(match self.game.new_game() {
                Ok(()) => "dealt a new board".to_owned(),
                Err(error) => format!("could not deal a new board: {error}"),
            }),
            PlayerAction::ShareLayout => {
                let snapshot = LayoutSnapshot {
                    size: query::board_size(self.game.world()),
                    layout: self.game.layout().clone(),
                };
                Some(match snapshot.encode() {
                    Ok(encoded) => encoded,
                    Err(error) => format!("could not export the layout: {error}"),
                })
            }
            PlayerAction::LoadLayout { encoded } => {
                let loaded = LayoutSnapshot::decode(&encoded)
                    .map_err(|error| error.to_string())
                    .and_then(|snapshot| {
                        self.game
                            .load_layout(snapshot.size, snapshot.layout)
                            .map_err(|error| error.to_string())
                    });
                Some(match loaded {
                    Ok(()) => "layout loaded".to_owned(),
                    Err(error) => format!("could not load the layout: {error}"),
                })
            }
        }
    }
}
