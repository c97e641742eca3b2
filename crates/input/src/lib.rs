//! Terminal input module (scene-facing).
//!
//! This module is independent of any rendering code. It maps `crossterm` key
//! events onto logical [`crate::types::Key`]s and turns the event stream
//! into a held-key snapshot, including on terminals without key-release
//! events.

pub mod held;
pub mod map;
pub mod poller;

pub use tui_roam_types as types;

pub use held::HeldKeys;
pub use map::{map_key_event, should_quit};
pub use poller::{KeyPoller, KeyTransition, MAX_TRANSITIONS};
