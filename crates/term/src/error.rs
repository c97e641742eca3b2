use std::io;

use thiserror::Error;

/// Errors raised by display surfaces.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The terminal could not be put into the mode the demo needs.
    /// Fatal: the tick loop is never entered.
    #[error("display setup failed ({step}): {source}")]
    Setup {
        step: &'static str,
        #[source]
        source: io::Error,
    },

    /// Writing to or restoring the terminal failed after setup.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl SurfaceError {
    /// Adapter for `map_err` on setup steps.
    pub fn setup(step: &'static str) -> impl FnOnce(io::Error) -> SurfaceError {
        move |source| SurfaceError::Setup { step, source }
    }

    pub fn is_setup(&self) -> bool {
        matches!(self, SurfaceError::Setup { .. })
    }
}
