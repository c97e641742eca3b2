//! Terminal movement demo (default binary).
//!
//! Walk `@` around a bordered 200x40 grid among ten static `X` objects with
//! WASD or the arrow keys; Q quits.

use anyhow::{Context, Result};
use tracing::info;

use tui_roam::app::{play, SleepPacer};
use tui_roam::config::{Config, SurfaceKind};
use tui_roam::logging;
use tui_roam::term::{AnsiSurface, CrosstermSurface};

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(config.log_path.as_deref())?;

    // Display setup comes first: no game state exists if it fails.
    let summary = match config.surface {
        SurfaceKind::Terminal => {
            let mut surface = CrosstermSurface::setup().context("display setup")?;
            let seed = config.seed_or_clock();
            info!(seed, surface = "terminal", "starting");
            play(&mut surface, seed, &mut SleepPacer, config.tick)?
        }
        SurfaceKind::Ansi => {
            let mut surface = AnsiSurface::setup().context("display setup")?;
            let seed = config.seed_or_clock();
            info!(seed, surface = "ansi", "starting");
            play(&mut surface, seed, &mut SleepPacer, config.tick)?
        }
    };

    info!(ticks = summary.ticks, frames = summary.frames, "clean exit");
    Ok(())
}
