//! Runtime settings.
//!
//! Everything has a default, and with no variables set the demo behaves
//! exactly as documented: 10ms ticks, clock-seeded scene, crossterm
//! surface, no log file. Unparseable values fall back to the default.

use std::path::PathBuf;
use std::time::Duration;

use crate::core::clock_seed;
use crate::types::TICK_MS;

pub const ENV_TICK_MS: &str = "TUI_ROAM_TICK_MS";
pub const ENV_SEED: &str = "TUI_ROAM_SEED";
pub const ENV_SURFACE: &str = "TUI_ROAM_SURFACE";
pub const ENV_LOG_PATH: &str = "TUI_ROAM_LOG_PATH";

/// Which display surface backend to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceKind {
    #[default]
    Terminal,
    Ansi,
}

impl SurfaceKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "terminal" | "crossterm" => Some(SurfaceKind::Terminal),
            "ansi" | "fallback" => Some(SurfaceKind::Ansi),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tick: Duration,
    pub seed: Option<u32>,
    pub surface: SurfaceKind,
    pub log_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS),
            seed: None,
            surface: SurfaceKind::Terminal,
            log_path: None,
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick = lookup(ENV_TICK_MS)
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick);

        let seed = lookup(ENV_SEED).and_then(|s| s.trim().parse().ok());

        let surface = lookup(ENV_SURFACE)
            .and_then(|s| SurfaceKind::from_str(&s))
            .unwrap_or(defaults.surface);

        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            tick,
            seed,
            surface,
            log_path,
        }
    }

    /// The configured seed, or wall-clock seconds.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
        assert_eq!(Config::default().tick, Duration::from_millis(10));
    }

    #[test]
    fn values_are_parsed() {
        let cfg = Config::from_lookup(lookup(&[
            (ENV_TICK_MS, "25"),
            (ENV_SEED, " 77 "),
            (ENV_SURFACE, "ANSI"),
            (ENV_LOG_PATH, "/tmp/roam.log"),
        ]));
        assert_eq!(cfg.tick, Duration::from_millis(25));
        assert_eq!(cfg.seed, Some(77));
        assert_eq!(cfg.seed_or_clock(), 77);
        assert_eq!(cfg.surface, SurfaceKind::Ansi);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/roam.log")));
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let cfg = Config::from_lookup(lookup(&[
            (ENV_TICK_MS, "fast"),
            (ENV_SEED, "-1"),
            (ENV_SURFACE, "opengl"),
            (ENV_LOG_PATH, "   "),
        ]));
        assert_eq!(cfg, Config::default());
    }
}
