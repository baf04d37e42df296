//! Coordinate utilities

/// World positions and world-to-cell conversion
pub mod world;
