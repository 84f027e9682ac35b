#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plays Ricochet Robots in the terminal.

mod config;
mod layout_transfer;
mod session;
mod terminal;

use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use ricochet_game::Game;
use ricochet_rendering::{palette, BoardGeometry, Presentation, RenderingBackend};
use ricochet_world::query;

use crate::{
    config::FileConfig, layout_transfer::LayoutSnapshot, session::Session,
    terminal::TerminalBackend,
};

/// Edge length handed to the board geometry of the presentation.
const CELL_LENGTH: f32 = 40.0;

#[derive(Debug, Parser)]
#[command(name = "ricochet")]
#[command(about = "Solo Ricochet Robots puzzles in the terminal")]
struct CliArgs {
    /// Number of board columns.
    #[arg(long)]
    columns: Option<u32>,
    /// Number of board rows.
    #[arg(long)]
    rows: Option<u32>,
    /// Seed for board and goal randomization; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Length of the countdown in seconds.
    #[arg(long)]
    countdown_seconds: Option<u64>,
    /// TOML file providing defaults for the options above.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Transfer string of a shared board to start from.
    #[arg(long)]
    layout: Option<String>,
}

impl CliArgs {
    fn overrides(&self) -> FileConfig {
        FileConfig {
            columns: self.columns,
            rows: self.rows,
            seed: self.seed,
            countdown_seconds: self.countdown_seconds,
        }
    }
}

/// Entry point for the Ricochet Robots command-line interface.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let config = file.merge(args.overrides()).resolve(rand::random)?;
    tracing::info!(
        seed = config.seed,
        columns = config.size.columns(),
        rows = config.size.rows(),
        "starting session"
    );

    let mut game = Game::new(config).context("failed to deal the first board")?;
    if let Some(encoded) = &args.layout {
        let snapshot = LayoutSnapshot::decode(encoded).context("invalid --layout string")?;
        game.load_layout(snapshot.size, snapshot.layout)
            .context("failed to load the shared board")?;
    }

    let banner = query::welcome_banner(game.world());
    let mut session = Session::new(game);
    let scene = session.scene();
    let geometry = BoardGeometry::new(scene.size, CELL_LENGTH)?;
    let presentation = Presentation::new(banner, palette::BACKGROUND, geometry, scene);

    TerminalBackend::new(io::stdin().lock(), io::stdout().lock()).run(
        presentation,
        move |dt, input, scene| session.update(dt, input, scene),
    )
}
