//! Seeded BSP dungeon generation with walkability and spawn queries
//!
//! A width, height and seed become a grid of walls and floors in which every
//! room is reachable from every other. The finished grid answers the point
//! and footprint queries movement, collision and spawning rely on.

#![forbid(unsafe_code)]

/// Partitioning, room placement, carving and spawn search
pub mod algorithm;
/// Connectivity checks and layout statistics
pub mod analysis;
/// Command-line front end, configuration, errors and logging
pub mod io;
/// World-space coordinates and conversion to cells
pub mod math;
/// Tile grid storage, rectangles and entity footprints
pub mod spatial;

pub use algorithm::generator::{DungeonGenerator, GeneratedDungeon, GeneratorConfig, generate};
pub use algorithm::spawn::{SpawnPhase, SpawnPoint};
pub use io::error::{DungeonError, Result};
pub use math::world::WorldPosition;
pub use spatial::{Tile, TileGrid};
