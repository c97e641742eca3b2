//! Movement resolver: held keys in, clamped player position out.

use crate::types::{KeyState, GRID_COLS, GRID_ROWS, PLAYER_START_X, PLAYER_START_Y};

const MIN_X: i32 = 1;
const MAX_X: i32 = GRID_COLS as i32 - 2;
const MIN_Y: i32 = 1;
const MAX_Y: i32 = GRID_ROWS as i32 - 2;

/// A player coordinate that is always strictly inside the border.
///
/// The only constructor clamps, so the frame builder can index with it
/// without checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InteriorPos {
    x: i32,
    y: i32,
}

impl InteriorPos {
    /// Snap `(x, y)` onto the nearest interior cell.
    pub fn clamped(x: i32, y: i32) -> Self {
        Self {
            x: x.clamp(MIN_X, MAX_X),
            y: y.clamp(MIN_Y, MAX_Y),
        }
    }

    pub fn start() -> Self {
        Self::clamped(PLAYER_START_X, PLAYER_START_Y)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub(crate) fn row(&self) -> usize {
        self.y as usize
    }

    pub(crate) fn col(&self) -> usize {
        self.x as usize
    }
}

impl Default for InteriorPos {
    fn default() -> Self {
        Self::start()
    }
}

/// One-way quit latch. Once raised it stays raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuitFlag(bool);

impl QuitFlag {
    pub fn raise(&mut self) {
        self.0 = true;
    }

    pub fn is_raised(&self) -> bool {
        self.0
    }
}

/// Result of resolving one tick of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub pos: InteriorPos,
    pub quit: QuitFlag,
}

/// Apply one tick of held keys to `pos`.
///
/// Each held direction moves its axis by one unit, then the result is
/// hard-clamped to the interior. A held quit key raises `quit`; an already
/// raised flag is carried through unchanged.
pub fn resolve(pos: InteriorPos, keys: KeyState, mut quit: QuitFlag) -> Resolved {
    let (dx, dy) = keys.delta();
    let pos = InteriorPos::clamped(pos.x + dx, pos.y + dy);
    if keys.quit {
        quit.raise();
    }
    Resolved { pos, quit }
}
