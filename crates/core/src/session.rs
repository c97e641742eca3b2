//! Session state: scene, player, quit latch and program phase.
//!
//! The session owns everything the tick loop mutates. It knows nothing about
//! terminals; the runner feeds it key snapshots and hands its frame to a
//! display surface.

use crate::frame::Frame;
use crate::movement::{resolve, InteriorPos, QuitFlag};
use crate::scene::Scene;
use crate::types::KeyState;

/// Whole-program lifecycle.
///
/// `Uninitialized -> Running -> ShuttingDown -> Terminated`, no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Uninitialized,
    Running,
    ShuttingDown,
    Terminated,
}

impl Phase {
    /// The only legal successor; `Terminated` has none.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Uninitialized => Some(Phase::Running),
            Phase::Running => Some(Phase::ShuttingDown),
            Phase::ShuttingDown => Some(Phase::Terminated),
            Phase::Terminated => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Uninitialized => "uninitialized",
            Phase::Running => "running",
            Phase::ShuttingDown => "shutting_down",
            Phase::Terminated => "terminated",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    scene: Scene,
    player: InteriorPos,
    quit: QuitFlag,
    phase: Phase,
    frame: Frame,
    ticks: u64,
}

impl Session {
    pub fn new(scene: Scene) -> Self {
        Self::with_player(scene, InteriorPos::start())
    }

    pub fn with_player(scene: Scene, player: InteriorPos) -> Self {
        let mut frame = Frame::new();
        frame.rebuild(scene.entities(), player);
        Self {
            scene,
            player,
            quit: QuitFlag::default(),
            phase: Phase::Uninitialized,
            frame,
            ticks: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn player(&self) -> InteriorPos {
        self.player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn quit_requested(&self) -> bool {
        self.quit.is_raised()
    }

    /// Move to `target` if it is the next phase. Returns whether it moved.
    fn advance_to(&mut self, target: Phase) -> bool {
        if self.phase.next() == Some(target) {
            self.phase = target;
            true
        } else {
            false
        }
    }

    /// Display surface is ready: `Uninitialized -> Running`.
    pub fn start(&mut self) -> bool {
        self.advance_to(Phase::Running)
    }

    /// Quit observed: `Running -> ShuttingDown`.
    pub fn begin_shutdown(&mut self) -> bool {
        self.advance_to(Phase::ShuttingDown)
    }

    /// Surface released: `ShuttingDown -> Terminated`.
    pub fn finish(&mut self) -> bool {
        self.advance_to(Phase::Terminated)
    }

    /// Run one tick: resolve movement, then rebuild the frame.
    ///
    /// Returns `None` outside `Running`; the session is left untouched.
    pub fn tick(&mut self, keys: KeyState) -> Option<&Frame> {
        if self.phase != Phase::Running {
            return None;
        }
        let resolved = resolve(self.player, keys, self.quit);
        self.player = resolved.pos;
        self.quit = resolved.quit;
        self.frame.rebuild(self.scene.entities(), self.player);
        self.ticks += 1;
        Some(&self.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Glyph, Key};

    fn running() -> Session {
        let mut s = Session::new(Scene::from_seed(3));
        assert!(s.start());
        s
    }

    #[test]
    fn phases_only_move_forward() {
        let mut s = Session::new(Scene::from_seed(1));
        assert_eq!(s.phase(), Phase::Uninitialized);
        assert!(!s.begin_shutdown());
        assert!(!s.finish());

        assert!(s.start());
        assert!(!s.start());
        assert!(s.begin_shutdown());
        assert!(s.finish());
        assert_eq!(s.phase(), Phase::Terminated);
        assert_eq!(Phase::Terminated.next(), None);
    }

    #[test]
    fn tick_before_start_is_ignored() {
        let mut s = Session::new(Scene::from_seed(1));
        assert!(s.tick(KeyState::default().with(Key::Right)).is_none());
        assert_eq!(s.player(), InteriorPos::start());
        assert_eq!(s.ticks(), 0);
    }

    #[test]
    fn tick_moves_player_and_redraws() {
        let mut s = running();
        let frame = s.tick(KeyState::default().with(Key::Down)).unwrap();
        assert_eq!(frame.get(16, 12), Some(Glyph::Player));
        assert_ne!(frame.get(15, 12), Some(Glyph::Player));
        assert_eq!(s.ticks(), 1);
    }

    #[test]
    fn quit_sticks_across_ticks() {
        let mut s = running();
        s.tick(KeyState::default().with(Key::Quit));
        assert!(s.quit_requested());
        s.tick(KeyState::default());
        assert!(s.quit_requested());
    }

    #[test]
    fn initial_frame_already_shows_player() {
        let s = Session::new(Scene::new(Default::default()));
        assert_eq!(s.frame().get(15, 12), Some(Glyph::Player));
    }
}
