//! tui-roam (workspace facade crate).
//!
//! Re-exports the member crates as `tui_roam::{core,input,term,types}` and
//! adds the pieces that only the binary needs: runtime configuration, log
//! setup and the session runner.

pub use tui_roam_core as core;
pub use tui_roam_input as input;
pub use tui_roam_term as term;
pub use tui_roam_types as types;

pub mod app;
pub mod config;
pub mod logging;
