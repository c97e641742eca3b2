//! Non-blocking key polling on top of crossterm's event queue.

use std::io;
use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::held::HeldKeys;
use crate::map::map_key_event;
use crate::types::{Key, KeyState};

/// Upper bound on transitions reported per drain; extra events still update
/// the held state, they are just not reported.
pub const MAX_TRANSITIONS: usize = 32;

/// A change in a key's held state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTransition {
    pub key: Key,
    pub pressed: bool,
}

/// Drains terminal events and answers "is this key held right now?".
///
/// Once reading input has failed the poller is latched: nothing more is
/// read and `Key::Quit` reports held, so the loop can still end.
#[derive(Debug, Clone, Default)]
pub struct KeyPoller {
    held: HeldKeys,
    resized: bool,
    input_lost: bool,
}

impl KeyPoller {
    pub fn new(held: HeldKeys) -> Self {
        Self {
            held,
            resized: false,
            input_lost: false,
        }
    }

    pub fn held(&self) -> &HeldKeys {
        &self.held
    }

    pub fn set_release_events(&mut self, enabled: bool) {
        self.held.set_release_events(enabled);
    }

    /// Fold one terminal event into the held state.
    pub fn apply_event(&mut self, event: &Event, now: Instant) -> Option<KeyTransition> {
        match event {
            Event::Key(key) => self.apply_key(*key, now),
            Event::Resize(..) => {
                self.resized = true;
                None
            }
            _ => None,
        }
    }

    /// Fold a batch of events, reporting at most `MAX_TRANSITIONS` of them.
    pub fn apply_events<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a Event>,
        now: Instant,
    ) -> ArrayVec<KeyTransition, MAX_TRANSITIONS> {
        let mut transitions = ArrayVec::new();
        for ev in events {
            self.record(&mut transitions, ev, now);
        }
        transitions
    }

    fn record(
        &mut self,
        transitions: &mut ArrayVec<KeyTransition, MAX_TRANSITIONS>,
        ev: &Event,
        now: Instant,
    ) {
        if let Some(t) = self.apply_event(ev, now) {
            // Overflow only truncates the report; held state is already updated.
            let _ = transitions.try_push(t);
        }
    }

    /// Whether a resize arrived since the last call.
    pub fn take_resized(&mut self) -> bool {
        std::mem::take(&mut self.resized)
    }

    pub fn input_lost(&self) -> bool {
        self.input_lost
    }

    /// Latch the poller after a read failure.
    pub fn mark_input_lost(&mut self) {
        self.input_lost = true;
    }

    fn apply_key(&mut self, key: KeyEvent, now: Instant) -> Option<KeyTransition> {
        let logical = map_key_event(key)?;
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.held.press(logical, now);
                Some(KeyTransition {
                    key: logical,
                    pressed: true,
                })
            }
            KeyEventKind::Release => {
                self.held.release(logical);
                Some(KeyTransition {
                    key: logical,
                    pressed: false,
                })
            }
        }
    }

    /// Consume every event already queued, without blocking.
    ///
    /// A read error latches the poller; later calls return an empty batch.
    pub fn drain(&mut self) -> io::Result<ArrayVec<KeyTransition, MAX_TRANSITIONS>> {
        let mut transitions = ArrayVec::new();
        if self.input_lost {
            return Ok(transitions);
        }
        match self.drain_into(&mut transitions) {
            Ok(()) => Ok(transitions),
            Err(e) => {
                self.mark_input_lost();
                Err(e)
            }
        }
    }

    fn drain_into(
        &mut self,
        transitions: &mut ArrayVec<KeyTransition, MAX_TRANSITIONS>,
    ) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            self.record(transitions, &ev, Instant::now());
        }
        Ok(())
    }

    pub fn is_held(&self, key: Key) -> bool {
        (key == Key::Quit && self.input_lost) || self.held.is_held(key, Instant::now())
    }

    pub fn snapshot(&self) -> KeyState {
        let mut keys = self.held.snapshot(Instant::now());
        if self.input_lost {
            keys.set(Key::Quit, true);
        }
        keys
    }

    /// Block until any key is pressed. Release events are skipped.
    pub fn wait_for_key(&mut self) -> io::Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    self.apply_key(key, Instant::now());
                    return Ok(());
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.held.reset();
        self.resized = false;
    }
}
