//! Session runner: the program state machine around the tick loop.
//!
//! `Running` repeats poll -> resolve -> rebuild -> render -> sleep until the
//! quit latch is raised. The tick that raises it is still rendered; then the
//! screen is cleared once, refreshed, and the surface is released.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, trace};

use crate::core::{InteriorPos, Phase, Scene, Session};
use crate::term::{DisplaySurface, GameView};

/// End-of-tick suspension.
pub trait Pacer {
    fn pace(&mut self, tick: Duration);
}

/// Fixed sleep; no drift correction and no frame skipping.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pace(&mut self, tick: Duration) {
        thread::sleep(tick);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    /// Frames rendered inside the loop (banner and shutdown clear excluded).
    pub frames: u64,
    pub final_pos: InteriorPos,
}

/// Run a session on an already set-up surface and release the surface
/// afterwards, whether or not the loop succeeded.
pub fn run<S, P>(surface: &mut S, session: &mut Session, pacer: &mut P, tick: Duration) -> Result<RunSummary>
where
    S: DisplaySurface + ?Sized,
    P: Pacer + ?Sized,
{
    let result = drive(surface, session, pacer, tick);

    // Always try to restore terminal state.
    let restored = surface.teardown().context("restoring terminal");
    let summary = result?;
    restored?;

    session.finish();
    log_phase(session.phase());
    Ok(summary)
}

/// Build a fresh session for `seed` and run it on `surface`.
pub fn play<S, P>(surface: &mut S, seed: u32, pacer: &mut P, tick: Duration) -> Result<RunSummary>
where
    S: DisplaySurface + ?Sized,
    P: Pacer + ?Sized,
{
    let scene = Scene::from_seed(seed);
    debug!(entities = ?scene.entities(), "scene placed");
    let mut session = Session::new(scene);
    run(surface, &mut session, pacer, tick)
}

fn drive<S, P>(surface: &mut S, session: &mut Session, pacer: &mut P, tick: Duration) -> Result<RunSummary>
where
    S: DisplaySurface + ?Sized,
    P: Pacer + ?Sized,
{
    let view = GameView::default();

    session.start();
    log_phase(session.phase());

    view.render_banner(surface);
    surface.refresh().context("drawing start screen")?;
    surface.wait_for_key().context("waiting for start key")?;

    let mut frames = 0;
    while !session.quit_requested() {
        let keys = surface.poll_keys();
        let Some(frame) = session.tick(keys) else {
            break;
        };

        surface.clear();
        view.render(frame, surface);
        surface.refresh().context("rendering frame")?;
        frames += 1;

        let pos = session.player();
        trace!(tick = session.ticks(), x = pos.x(), y = pos.y(), "tick");

        pacer.pace(tick);
    }
    info!(ticks = session.ticks(), "quit requested");

    session.begin_shutdown();
    log_phase(session.phase());
    surface.clear();
    surface.refresh().context("clearing screen")?;

    Ok(RunSummary {
        ticks: session.ticks(),
        frames,
        final_pos: session.player(),
    })
}

fn log_phase(phase: Phase) {
    debug!(phase = phase.as_str(), "phase");
}
