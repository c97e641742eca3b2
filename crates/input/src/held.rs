//! Held-key tracking for terminal environments.
//!
//! Terminals report key events, not key state. Press and repeat events mark
//! a key held; a release event clears it. Terminals that never send release
//! events fall back to a timeout: a key stays held until no press or repeat
//! has arrived for `release_timeout`.

use std::time::{Duration, Instant};

use crate::types::{Key, KeyState, KEY_RELEASE_TIMEOUT_MS};

#[derive(Debug, Clone)]
pub struct HeldKeys {
    last_seen: [Option<Instant>; Key::COUNT],
    release_events: bool,
    release_timeout: Duration,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            last_seen: [None; Key::COUNT],
            release_events: false,
            release_timeout: Duration::from_millis(KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.release_timeout = Duration::from_millis(timeout_ms);
        self
    }

    pub fn release_timeout(&self) -> Duration {
        self.release_timeout
    }

    /// Tell the tracker whether the terminal reports key releases.
    ///
    /// When it does, held keys never time out.
    pub fn set_release_events(&mut self, enabled: bool) {
        self.release_events = enabled;
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    /// Press or repeat observed at `now`.
    pub fn press(&mut self, key: Key, now: Instant) {
        self.last_seen[key.index()] = Some(now);
    }

    pub fn release(&mut self, key: Key) {
        self.last_seen[key.index()] = None;
    }

    pub fn is_held(&self, key: Key, now: Instant) -> bool {
        match self.last_seen[key.index()] {
            None => false,
            Some(_) if self.release_events => true,
            Some(at) => now.saturating_duration_since(at) <= self.release_timeout,
        }
    }

    pub fn snapshot(&self, now: Instant) -> KeyState {
        let mut keys = KeyState::default();
        for key in Key::ALL {
            keys.set(key, self.is_held(key, now));
        }
        keys
    }

    pub fn reset(&mut self) {
        self.last_seen = [None; Key::COUNT];
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
