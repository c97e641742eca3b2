//! The display surface contract the tick loop renders through.

use crate::error::SurfaceError;
use crate::types::{ColorClass, Key, KeyState};

/// A text-mode display plus its key source.
///
/// Backends are constructed by their own fallible `setup()`; everything
/// after that goes through this trait. `put_*` and `clear` only touch a
/// virtual buffer; nothing reaches the terminal until `refresh`.
pub trait DisplaySurface {
    /// Non-blocking: is `key` held right now?
    fn poll_key(&mut self, key: Key) -> bool;

    fn put_glyph(&mut self, row: usize, col: usize, glyph: char, class: ColorClass);

    /// Blank the whole virtual buffer.
    fn clear(&mut self);

    /// Flush the virtual buffer to the physical display.
    fn refresh(&mut self) -> Result<(), SurfaceError>;

    /// Block until any key is pressed.
    fn wait_for_key(&mut self) -> Result<(), SurfaceError>;

    /// Restore the terminal. Safe to call more than once.
    fn teardown(&mut self) -> Result<(), SurfaceError>;

    /// Uncolored text starting at `(row, col)`, clipped by the surface.
    fn put_text(&mut self, row: usize, col: usize, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.put_glyph(row, col + i, ch, ColorClass::None);
        }
    }

    /// Poll every logical key once.
    fn poll_keys(&mut self) -> KeyState {
        let mut keys = KeyState::default();
        for key in Key::ALL {
            keys.set(key, self.poll_key(key));
        }
        keys
    }
}
