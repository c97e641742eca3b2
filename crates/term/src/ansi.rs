//! Escape-code fallback surface.
//!
//! Writes plain ANSI sequences to any `Write` and repaints the whole screen
//! on every refresh. No alternate screen and no terminal queries, so it
//! works on consoles that only understand basic VT100 output.

use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::error::SurfaceError;
use crate::fb::FrameBuffer;
use crate::renderer::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::surface::DisplaySurface;
use crate::tty::TtyInput;
use crate::types::{ColorClass, Key};

pub const RESET: &str = "\x1b[0m";
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const CLEAR: &str = "\x1b[2J\x1b[H";
pub const HOME: &str = "\x1b[H";
pub const HIDE_CURSOR: &str = "\x1b[?25l";
pub const SHOW_CURSOR: &str = "\x1b[?25h";

pub struct AnsiSurface<W: Write> {
    out: W,
    input: Option<TtyInput>,
    colors: bool,
    back: FrameBuffer,
    scratch: Vec<u8>,
    active: bool,
}

impl AnsiSurface<io::Stdout> {
    /// Raw keyboard input plus escape-code output on stdout.
    pub fn setup() -> Result<Self, SurfaceError> {
        let input = TtyInput::enable()?;
        let mut surface = Self::build(io::stdout(), Some(input));
        surface.enter().map_err(SurfaceError::setup("hide cursor"))?;
        info!("ansi fallback surface ready");
        Ok(surface)
    }
}

impl<W: Write> AnsiSurface<W> {
    /// Output-only surface over an arbitrary writer. No key is ever held and
    /// `wait_for_key` returns immediately.
    pub fn with_writer(out: W) -> Result<Self, SurfaceError> {
        let mut surface = Self::build(out, None);
        surface.enter().map_err(SurfaceError::setup("hide cursor"))?;
        Ok(surface)
    }

    fn build(out: W, input: Option<TtyInput>) -> Self {
        Self {
            out,
            input,
            colors: true,
            back: FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            scratch: Vec::new(),
            active: true,
        }
    }

    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn enter(&mut self) -> io::Result<()> {
        self.out.write_all(HIDE_CURSOR.as_bytes())?;
        self.out.write_all(CLEAR.as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> DisplaySurface for AnsiSurface<W> {
    fn poll_key(&mut self, key: Key) -> bool {
        self.input.as_mut().is_some_and(|i| i.poll_key(key))
    }

    fn put_glyph(&mut self, row: usize, col: usize, glyph: char, class: ColorClass) {
        self.back.put(row, col, glyph, class);
    }

    fn clear(&mut self) {
        self.back.clear();
    }

    fn refresh(&mut self) -> Result<(), SurfaceError> {
        self.scratch.clear();
        encode_ansi_into(&mut self.scratch, &self.back, self.colors);
        self.out.write_all(&self.scratch)?;
        self.out.flush()?;
        Ok(())
    }

    fn wait_for_key(&mut self) -> Result<(), SurfaceError> {
        match self.input.as_mut() {
            Some(input) => input.wait_for_key(),
            None => Ok(()),
        }
    }

    fn teardown(&mut self) -> Result<(), SurfaceError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let screen = self
            .out
            .write_all(RESET.as_bytes())
            .and_then(|_| self.out.write_all(SHOW_CURSOR.as_bytes()))
            .and_then(|_| self.out.flush());
        if let Some(input) = self.input.as_mut() {
            input.restore()?;
        }
        screen?;
        debug!("ansi surface released");
        Ok(())
    }
}

impl<W: Write> Drop for AnsiSurface<W> {
    fn drop(&mut self) {
        if let Err(e) = self.teardown() {
            warn!("terminal teardown failed: {e}");
        }
    }
}

fn class_code(class: ColorClass) -> &'static str {
    match class {
        ColorClass::None => RESET,
        ColorClass::Player => GREEN,
        ColorClass::Object => RED,
    }
}

/// Encode a full repaint of `fb`: cursor home, then every row separated by
/// CRLF (raw mode does not translate `\n`).
pub fn encode_ansi_into(out: &mut Vec<u8>, fb: &FrameBuffer, colors: bool) {
    out.extend_from_slice(HOME.as_bytes());

    let mut current = ColorClass::None;
    let mut utf8 = [0u8; 4];
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if colors && cell.class != current {
                out.extend_from_slice(class_code(cell.class).as_bytes());
                current = cell.class;
            }
            out.extend_from_slice(cell.ch.encode_utf8(&mut utf8).as_bytes());
        }
        if y + 1 < fb.height() {
            out.extend_from_slice(b"\r\n");
        }
    }

    if current != ColorClass::None {
        out.extend_from_slice(RESET.as_bytes());
    }
}
