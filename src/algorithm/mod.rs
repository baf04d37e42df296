//! Dungeon generation algorithms: partitioning, carving, connection and spawning

/// Room and corridor carving plus subtree connection
pub mod carving;
/// Seeded generation pipeline and its configuration
pub mod generator;
/// Binary space partition tree and room placement
pub mod partition;
/// Three-phase spawn position search
pub mod spawn;
