//! Tracing subscriber setup for the command-line front end
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to binaries. `RUST_LOG` overrides the level chosen here.

use crate::io::error::{DungeonError, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor `--quiet` says otherwise
pub const fn default_level(quiet: bool) -> Level {
    if quiet { Level::ERROR } else { Level::INFO }
}

/// Build the event filter, preferring `RUST_LOG` when it parses
pub fn build_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Install a stderr formatting subscriber as the global default
///
/// # Errors
///
/// Returns `Logging` if a global subscriber is already installed
pub fn init_tracing(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| DungeonError::Logging {
            reason: e.to_string(),
        })
}
