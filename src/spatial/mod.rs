//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - The tile grid and its bounds-checked queries
//! - Tile classification
//! - Cell rectangles and entity footprints

/// Entity bounding boxes and corner probes
pub mod footprint;
/// Tile grid storage and queries
pub mod grid;
/// Integer rectangles in cell coordinates
pub mod rect;
/// Tile classification
pub mod tiles;

pub use grid::TileGrid;
pub use tiles::Tile;
