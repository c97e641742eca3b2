//! GameView: paints a core `Frame` onto a display surface.
//!
//! Pure with respect to the terminal: it only calls `put_*`/`clear` on the
//! surface, so it can be exercised against an in-memory surface.

use crate::core::Frame;
use crate::surface::DisplaySurface;
use crate::types::{BANNER, FOOTER_ROW, START_PROMPT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    show_footer: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self { show_footer: true }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_footer(mut self, show_footer: bool) -> Self {
        self.show_footer = show_footer;
        self
    }

    /// Put every grid cell, then the instructions footer.
    pub fn render<S: DisplaySurface + ?Sized>(&self, frame: &Frame, surface: &mut S) {
        for (row, col, glyph) in frame.iter() {
            surface.put_glyph(row, col, glyph.as_char(), glyph.color_class());
        }
        if self.show_footer {
            surface.put_text(FOOTER_ROW, 0, BANNER);
        }
    }

    /// Start screen: instructions and the press-any-key prompt.
    pub fn render_banner<S: DisplaySurface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        surface.put_text(0, 0, BANNER);
        surface.put_text(1, 0, START_PROMPT);
    }
}
