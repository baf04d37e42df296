//! Input/output surfaces: command line, configuration, errors and logging

/// Command-line argument parsing and the survey runner
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Survey progress display
pub mod progress;
