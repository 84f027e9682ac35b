//! Line-oriented text front end.

use std::{
    collections::HashSet,
    io::{BufRead, Write},
    time::Instant,
};

use anyhow::{Context, Result as AnyResult};
use ricochet_core::{CellCoord, Direction, RobotColor, Shape, TargetToken, WallPos};
use ricochet_rendering::{FrameInput, PlayerAction, Presentation, RenderingBackend, Scene};

const HELP: &str = "\
commands:
  <color> <direction>   slide a robot, e.g. `red up` or `b l`
  <color>               list where a robot can slide
  undo | redo           step through the move history
  reset                 return the robots to the start of the round
  draw                  draw the next goal
  timer                 start or cancel the countdown
  new                   deal a new board
  layout                print a transfer string for this board
  load <string>         replace the board with a shared one
  help                  show this message
  quit                  leave the game
";

/// Meaning of one line typed by the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Line {
    /// Forward an action to the game.
    Action(PlayerAction),
    /// Redraw without acting.
    Refresh,
    /// Print the command summary.
    Help,
    /// Stop the session.
    Quit,
}

/// Parses a player line into a [`Line`], describing the problem on failure.
pub(crate) fn parse_line(line: &str) -> Result<Line, String> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(Line::Refresh);
    };

    let action = match first.to_ascii_lowercase().as_str() {
        "quit" | "exit" | "q" => return Ok(Line::Quit),
        "help" | "?" => return Ok(Line::Help),
        "undo" | "z" => PlayerAction::Undo,
        "redo" => PlayerAction::Redo,
        "reset" => PlayerAction::Reset,
        "draw" => PlayerAction::Draw,
        "timer" => PlayerAction::ToggleTimer,
        "new" => PlayerAction::NewGame,
        "layout" | "share" => PlayerAction::ShareLayout,
        "load" => {
            let encoded = words
                .next()
                .ok_or_else(|| "load expects a layout string".to_owned())?;
            PlayerAction::LoadLayout {
                encoded: encoded.to_owned(),
            }
        }
        _ => {
            let robot: RobotColor = first.parse().map_err(|error| format!("{error}"))?;
            match words.next() {
                Some(direction) => PlayerAction::Slide {
                    robot,
                    direction: direction.parse().map_err(|error| format!("{error}"))?,
                },
                None => PlayerAction::Preview { robot },
            }
        }
    };

    if let Some(extra) = words.next() {
        return Err(format!("unexpected `{extra}`"));
    }
    Ok(Line::Action(action))
}

/// Text rendering of the board followed by the status panel.
pub(crate) fn render(scene: &Scene) -> String {
    let walls: HashSet<WallPos> = scene.walls.iter().copied().collect();
    let blocked = |first: CellCoord, second: CellCoord| {
        WallPos::between(first, second).is_some_and(|wall| walls.contains(&wall))
    };
    let columns = scene.size.columns();
    let rows = scene.size.rows();

    let mut text = String::new();
    text.push_str(&horizontal_edge(columns));
    for row in 0..rows {
        text.push('|');
        for column in 0..columns {
            let cell = CellCoord::new(column, row);
            text.push_str(&cell_glyph(scene, cell));
            let east = CellCoord::new(column + 1, row);
            text.push(if column + 1 == columns || blocked(cell, east) {
                '|'
            } else {
                ' '
            });
        }
        text.push('\n');

        if row + 1 == rows {
            text.push_str(&horizontal_edge(columns));
            break;
        }
        text.push('+');
        for column in 0..columns {
            let cell = CellCoord::new(column, row);
            let south = CellCoord::new(column, row + 1);
            text.push_str(if blocked(cell, south) { "--" } else { "  " });
            text.push('+');
        }
        text.push('\n');
    }

    text.push_str(&status_line(scene));
    text.push('\n');
    if let Some(status) = &scene.status {
        text.push_str(status);
        text.push('\n');
    }
    text
}

fn horizontal_edge(columns: u32) -> String {
    let mut edge = String::from("+");
    for _ in 0..columns {
        edge.push_str("--+");
    }
    edge.push('\n');
    edge
}

fn cell_glyph(scene: &Scene, cell: CellCoord) -> String {
    if scene.size.is_center(cell) {
        return "##".to_owned();
    }
    if let Some(robot) = scene.robot_at(cell) {
        return format!("{} ", color_letter(robot).to_ascii_uppercase());
    }
    match scene.target_at(cell) {
        Some(TargetToken::Colored { color, shape }) => {
            format!("{}{}", color_letter(color), shape_letter(shape))
        }
        Some(TargetToken::Wild) => "**".to_owned(),
        None => " .".to_owned(),
    }
}

fn status_line(scene: &Scene) -> String {
    let mut parts = Vec::new();
    let moves = scene.hud.move_label();
    if !moves.is_empty() {
        parts.push(moves);
    }
    match scene.goal {
        Some(goal) => parts.push(format!("goal: {} at {}", goal.token, goal.cell)),
        None if scene.hud.can_draw => parts.push("type `draw` for a goal".to_owned()),
        None => parts.push("no goals left".to_owned()),
    }
    if scene.hud.goal_met {
        parts.push("goal reached!".to_owned());
    }
    if let Some(reading) = scene.hud.countdown {
        parts.push(format!("timer {reading}"));
    }
    parts.join(" | ")
}

const fn color_letter(color: RobotColor) -> char {
    match color {
        RobotColor::Red => 'r',
        RobotColor::Yellow => 'y',
        RobotColor::Green => 'g',
        RobotColor::Blue => 'b',
    }
}

const fn shape_letter(shape: Shape) -> char {
    match shape {
        Shape::Square => 's',
        Shape::Circle => 'c',
        Shape::Triangle => 't',
        Shape::Diamond => 'd',
    }
}

/// Backend that reads commands line by line and prints the board after each one.
#[derive(Debug)]
pub(crate) struct TerminalBackend<R, W> {
    input: R,
    output: W,
}

impl<R, W> TerminalBackend<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R, W> RenderingBackend for TerminalBackend<R, W>
where
    R: BufRead,
    W: Write,
{
    fn run<F>(mut self, presentation: Presentation, mut update_scene: F) -> AnyResult<()>
    where
        F: FnMut(std::time::Duration, FrameInput, &mut Scene) + 'static,
    {
        let Presentation {
            window_title,
            mut scene,
            ..
        } = presentation;

        writeln!(self.output, "{window_title}")?;
        writeln!(self.output, "type `help` for the list of commands")?;
        write!(self.output, "{}", render(&scene))?;

        let mut last_frame = Instant::now();
        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush().context("failed to flush terminal output")?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read player input")?;
            if read == 0 {
                break;
            }

            let mut input = FrameInput::default();
            match parse_line(&line) {
                Ok(Line::Quit) => break,
                Ok(Line::Help) => {
                    write!(self.output, "{HELP}")?;
                    continue;
                }
                Ok(Line::Refresh) => {}
                Ok(Line::Action(action)) => input.actions.push(action),
                Err(message) => {
                    writeln!(self.output, "{message}")?;
                    continue;
                }
            }

            let now = Instant::now();
            update_scene(now.duration_since(last_frame), input, &mut scene);
            last_frame = now;
            write!(self.output, "{}", render(&scene))?;
        }

        tracing::debug!("terminal session closed");
        Ok(())
    }
}
