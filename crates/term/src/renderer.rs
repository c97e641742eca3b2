//! Crossterm-backed display surface.
//!
//! The virtual buffer is diffed against the last frame actually sent, so a
//! tick in which only the player moved writes a handful of cells instead of
//! the full 200x40 grid.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};
use tracing::{debug, info, warn};

use crate::error::SurfaceError;
use crate::fb::{Cell, FrameBuffer};
use crate::surface::DisplaySurface;
use crate::tty::TtyInput;
use crate::types::{ColorClass, Key, FOOTER_ROW, GRID_COLS};

/// Width and height of the virtual screen: grid plus footer.
pub const SCREEN_WIDTH: u16 = GRID_COLS as u16;
pub const SCREEN_HEIGHT: u16 = FOOTER_ROW as u16 + 1;

pub struct CrosstermSurface {
    stdout: io::Stdout,
    input: TtyInput,
    colors: bool,
    back: FrameBuffer,
    last: Option<FrameBuffer>,
    active: bool,
}

impl CrosstermSurface {
    /// Enter raw mode and the alternate screen, hide the cursor and detect
    /// color support.
    ///
    /// Anything already switched on is switched back off before an error is
    /// returned.
    pub fn setup() -> Result<Self, SurfaceError> {
        let input = TtyInput::enable()?;
        let colors = style::available_color_count() >= 8;
        let mut surface = Self {
            stdout: io::stdout(),
            input,
            colors,
            back: FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            last: None,
            active: true,
        };
        surface.enter().map_err(SurfaceError::setup("enter alternate screen"))?;

        match terminal::size() {
            Ok((w, h)) if w < SCREEN_WIDTH || h < SCREEN_HEIGHT => {
                warn!(
                    width = w,
                    height = h,
                    "terminal smaller than {SCREEN_WIDTH}x{SCREEN_HEIGHT}; output will be clipped"
                );
            }
            Ok(_) => {}
            Err(e) => debug!("terminal size unavailable: {e}"),
        }
        info!(
            colors,
            release_events = surface.input.release_events(),
            "crossterm surface ready"
        );
        Ok(surface)
    }

    pub fn colors(&self) -> bool {
        self.colors
    }

    /// Forget what is on screen; the next refresh repaints everything.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    fn enter(&mut self) -> io::Result<()> {
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.flush()
    }

    fn exit(&mut self) -> io::Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()
    }
}

impl DisplaySurface for CrosstermSurface {
    fn poll_key(&mut self, key: Key) -> bool {
        self.input.poll_key(key)
    }

    fn put_glyph(&mut self, row: usize, col: usize, glyph: char, class: ColorClass) {
        self.back.put(row, col, glyph, class);
    }

    fn clear(&mut self) {
        self.back.clear();
    }

    fn refresh(&mut self) -> Result<(), SurfaceError> {
        if self.input.take_resized() {
            debug!("terminal resized; full repaint");
            self.invalidate();
        }
        match &self.last {
            Some(prev) => encode_diff_into(&mut self.stdout, prev, &self.back, self.colors)?,
            None => encode_full_into(&mut self.stdout, &self.back, self.colors)?,
        }
        self.stdout.flush()?;

        // Keep the sent frame for the next diff; reuse its allocation.
        match &mut self.last {
            Some(prev) => prev.clone_from(&self.back),
            None => self.last = Some(self.back.clone()),
        }
        Ok(())
    }

    fn wait_for_key(&mut self) -> Result<(), SurfaceError> {
        self.input.wait_for_key()
    }

    fn teardown(&mut self) -> Result<(), SurfaceError> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        // Restore input even if the screen reset failed.
        let screen = self.exit();
        self.input.restore()?;
        screen?;
        debug!("crossterm surface released");
        Ok(())
    }
}

impl Drop for CrosstermSurface {
    fn drop(&mut self) {
        if let Err(e) = self.teardown() {
            warn!("terminal teardown failed: {e}");
        }
    }
}

fn class_color(class: ColorClass) -> Option<Color> {
    match class {
        ColorClass::None => None,
        ColorClass::Player => Some(Color::Green),
        ColorClass::Object => Some(Color::Red),
    }
}

fn apply_class<W: Write + ?Sized>(out: &mut W, class: ColorClass) -> io::Result<()> {
    match class_color(class) {
        Some(color) => out.queue(SetForegroundColor(color))?,
        None => out.queue(ResetColor)?,
    };
    Ok(())
}

fn print_cell<W: Write + ?Sized>(
    out: &mut W,
    cell: Cell,
    current: &mut Option<ColorClass>,
    colors: bool,
) -> io::Result<()> {
    if colors && *current != Some(cell.class) {
        apply_class(out, cell.class)?;
        *current = Some(cell.class);
    }
    out.queue(Print(cell.ch))?;
    Ok(())
}

/// Queue a full redraw of `fb`. The caller flushes.
pub fn encode_full_into<W: Write + ?Sized>(out: &mut W, fb: &FrameBuffer, colors: bool) -> io::Result<()> {
    let mut current: Option<ColorClass> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            print_cell(out, fb.get(x, y).unwrap_or_default(), &mut current, colors)?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Queue only the runs of cells that differ between `prev` and `next`.
pub fn encode_diff_into<W: Write + ?Sized>(
    out: &mut W,
    prev: &FrameBuffer,
    next: &FrameBuffer,
    colors: bool,
) -> io::Result<()> {
    let mut current: Option<ColorClass> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        // Cursor move per run, then print cells in the run.
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            print_cell(out, next.get(x + dx, y).unwrap_or_default(), &mut current, colors)?;
        }
        Ok(())
    })?;

    if current.is_some() {
        out.queue(ResetColor)?;
    }
    Ok(())
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> io::Result<()>,
) -> io::Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
