//! Raw-mode keyboard input shared by both surfaces.

use std::io::{self, Write};

use crossterm::event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags};
use crossterm::{terminal, QueueableCommand};
use tracing::{debug, warn};

use crate::error::SurfaceError;
use crate::input::KeyPoller;
use crate::types::Key;

/// Owns raw mode and the key poller for a live terminal.
#[derive(Debug)]
pub struct TtyInput {
    poller: KeyPoller,
    raw: bool,
    enhanced: bool,
}

impl TtyInput {
    /// Enter raw, non-echoing input mode.
    ///
    /// Key-release reporting is requested when the terminal supports it;
    /// otherwise the poller falls back to its release timeout.
    pub fn enable() -> Result<Self, SurfaceError> {
        terminal::enable_raw_mode().map_err(SurfaceError::setup("enable raw mode"))?;
        let mut tty = Self {
            poller: KeyPoller::default(),
            raw: true,
            enhanced: false,
        };

        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            let mut out = io::stdout();
            out.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .and_then(|o| o.flush())
            .map_err(SurfaceError::setup("request key release events"))?;
            tty.enhanced = true;
            tty.poller.set_release_events(true);
        }
        debug!(release_events = tty.enhanced, "raw input enabled");
        Ok(tty)
    }

    pub fn release_events(&self) -> bool {
        self.enhanced
    }

    /// Drain pending input, then report `key`.
    ///
    /// A failed read is logged once; from then on only quit reads as held.
    pub fn poll_key(&mut self, key: Key) -> bool {
        match self.poller.drain() {
            Ok(transitions) => {
                for t in &transitions {
                    tracing::trace!(key = ?t.key, pressed = t.pressed, "key");
                }
            }
            Err(e) => warn!("input poll failed, treating as quit: {e}"),
        }
        self.poller.is_held(key)
    }

    /// Whether the terminal was resized since the last call.
    pub fn take_resized(&mut self) -> bool {
        self.poller.take_resized()
    }

    pub fn wait_for_key(&mut self) -> Result<(), SurfaceError> {
        self.poller.wait_for_key()?;
        Ok(())
    }

    /// Undo everything `enable` did. Idempotent.
    pub fn restore(&mut self) -> Result<(), SurfaceError> {
        if self.enhanced {
            let mut out = io::stdout();
            out.queue(PopKeyboardEnhancementFlags)?;
            out.flush()?;
            self.enhanced = false;
        }
        if self.raw {
            // Leave no queued keystrokes behind for the shell.
            if let Err(e) = self.poller.drain() {
                debug!("discarding pending input failed: {e}");
            }
            self.poller.reset();
            terminal::disable_raw_mode()?;
            self.raw = false;
        }
        Ok(())
    }
}

impl Drop for TtyInput {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("restoring terminal input failed: {e}");
        }
    }
}
