//! Core scene logic module - pure, deterministic, and testable
//!
//! This module contains the frame model and the input-to-state update
//! contract. It has **zero dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same scene
//! - **Testable**: Builder and resolver are total functions over bounded inputs
//! - **Portable**: Any display surface can consume a [`Frame`]
//!
//! # Module Structure
//!
//! - [`frame`]: 40x200 glyph grid rebuilt from scratch every tick
//! - [`movement`]: held keys to player position, clamped to the interior
//! - [`rng`]: seedable LCG for startup placement
//! - [`scene`]: the ten static objects
//! - [`session`]: program phase, quit latch and the per-tick update
//!
//! # Example
//!
//! ```
//! use tui_roam_core::{Scene, Session};
//! use tui_roam_types::{Glyph, Key, KeyState};
//!
//! let mut session = Session::new(Scene::from_seed(12345));
//! session.start();
//!
//! let frame = session
//!     .tick(KeyState::default().with(Key::Up).with(Key::Left))
//!     .unwrap();
//! assert_eq!(frame.get(14, 11), Some(Glyph::Player));
//! assert_eq!(frame.get(0, 0), Some(Glyph::Border));
//! ```

pub mod frame;
pub mod movement;
pub mod rng;
pub mod scene;
pub mod session;

pub use tui_roam_types as types;

// Re-export commonly used types for convenience
pub use frame::{build_frame, is_border, Frame};
pub use movement::{resolve, InteriorPos, QuitFlag, Resolved};
pub use rng::{clock_seed, SimpleRng};
pub use scene::{Entity, Scene};
pub use session::{Phase, Session};
