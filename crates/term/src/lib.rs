//! Terminal display surfaces.
//!
//! The scene loop talks to the terminal only through [`DisplaySurface`]:
//! put glyphs into a virtual buffer, refresh, poll keys. Two backends
//! implement it and are chosen at startup:
//!
//! - [`CrosstermSurface`]: alternate screen, color detection, diffed redraws
//! - [`AnsiSurface`]: raw escape codes over any writer, full repaint per frame
//!
//! Both undo their terminal changes on `teardown` and again from `Drop`, so
//! an early return or a panic still leaves a usable shell behind.

pub mod ansi;
pub mod error;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod surface;
pub mod tty;

pub use tui_roam_core as core;
pub use tui_roam_input as input;
pub use tui_roam_types as types;

pub use ansi::{encode_ansi_into, AnsiSurface};
pub use error::SurfaceError;
pub use fb::{Cell, FrameBuffer};
pub use game_view::GameView;
pub use renderer::{encode_diff_into, encode_full_into, CrosstermSurface, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use surface::DisplaySurface;
pub use tty::TtyInput;
