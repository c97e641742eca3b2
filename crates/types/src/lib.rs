//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (scene logic, terminal surfaces, tests).
//!
//! # Grid Dimensions
//!
//! The play grid is a fixed viewport:
//!
//! - **Rows**: 40 (indexed 0-39)
//! - **Columns**: 200 (indexed 0-199)
//! - **Interior**: rows 1-38, columns 1-198 (everything inside the border)
//! - **Player start**: (12, 15) as (x, y)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 10 | Sleep at the end of every tick (~100 Hz) |
//! | `KEY_RELEASE_TIMEOUT_MS` | 120 | Auto-release for terminals without release events |
//!
//! # Examples
//!
//! ```
//! use tui_roam_types::{Glyph, ColorClass, Key, KeyState, GRID_COLS, GRID_ROWS};
//!
//! assert_eq!(Glyph::Player.as_char(), '@');
//! assert_eq!(Glyph::Object.color_class(), ColorClass::Object);
//!
//! let keys = KeyState::default().with(Key::Up).with(Key::Left);
//! assert_eq!(keys.delta(), (-1, -1));
//!
//! assert_eq!(GRID_ROWS, 40);
//! assert_eq!(GRID_COLS, 200);
//! ```

/// Grid height in cells (40 rows)
pub const GRID_ROWS: usize = 40;

/// Grid width in cells (200 columns)
pub const GRID_COLS: usize = 200;

/// Number of static objects placed at startup
pub const ENTITY_COUNT: usize = 10;

/// Player start column
pub const PLAYER_START_X: i32 = 12;

/// Player start row
pub const PLAYER_START_Y: i32 = 15;

/// Fixed sleep at the end of every tick (10ms ≈ 100 Hz)
pub const TICK_MS: u64 = 10;

/// Without key-release events, a key counts as held for this long after its
/// last press or repeat event.
pub const KEY_RELEASE_TIMEOUT_MS: u64 = 120;

/// Instructions shown on the start screen and below every frame.
pub const BANNER: &str = "Use WASD or arrow keys to move, Q to quit";

/// Second line of the start screen.
pub const START_PROMPT: &str = "Press any key to start...";

/// Row the per-frame footer is drawn on (one blank row below the grid).
pub const FOOTER_ROW: usize = GRID_ROWS + 1;


/// A single displayable cell kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Glyph {
    Border,
    #[default]
    Empty,
    Object,
    Player,
}

impl Glyph {
    /// Character drawn for this glyph
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_roam_types::Glyph;
    ///
    /// assert_eq!(Glyph::Border.as_char(), '#');
    /// assert_eq!(Glyph::Empty.as_char(), ' ');
    /// assert_eq!(Glyph::Object.as_char(), 'X');
    /// ```
    pub fn as_char(&self) -> char {
        match self {
            Glyph::Border => '#',
            Glyph::Empty => ' ',
            Glyph::Object => 'X',
            Glyph::Player => '@',
        }
    }

    pub fn color_class(&self) -> ColorClass {
        match self {
            Glyph::Player => ColorClass::Player,
            Glyph::Object => ColorClass::Object,
            Glyph::Border | Glyph::Empty => ColorClass::None,
        }
    }
}

/// Color category a surface paints a cell with.
///
/// Surfaces map these to concrete colors (green player, red objects) and
/// ignore them entirely when the terminal has no color support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorClass {
    #[default]
    None,
    Player,
    Object,
}

/// Logical keys the demo reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Left,
    Down,
    Right,
    Quit,
}

impl Key {
    /// Number of logical keys.
    pub const COUNT: usize = 5;

    /// All keys, in polling order.
    pub const ALL: [Key; Key::COUNT] = [Key::Up, Key::Left, Key::Down, Key::Right, Key::Quit];

    /// Slot index for fixed-size per-key tables.
    pub fn index(&self) -> usize {
        match self {
            Key::Up => 0,
            Key::Left => 1,
            Key::Down => 2,
            Key::Right => 3,
            Key::Quit => 4,
        }
    }
}

/// Snapshot of which keys are held during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    pub up: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
    pub quit: bool,
}

impl KeyState {
    /// Builder-style helper that marks `key` as held.
    pub fn with(mut self, key: Key) -> Self {
        self.set(key, true);
        self
    }

    pub fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::Up => self.up = held,
            Key::Left => self.left = held,
            Key::Down => self.down = held,
            Key::Right => self.right = held,
            Key::Quit => self.quit = held,
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Left => self.left,
            Key::Down => self.down,
            Key::Right => self.right,
            Key::Quit => self.quit,
        }
    }

    pub fn any_direction(&self) -> bool {
        self.up || self.left || self.down || self.right
    }

    /// Per-tick `(dx, dy)` from the held direction keys.
    ///
    /// Each key contributes exactly one unit; opposing keys cancel.
    pub fn delta(&self) -> (i32, i32) {
        let dx = self.right as i32 - self.left as i32;
        let dy = self.down as i32 - self.up as i32;
        (dx, dy)
    }
}
