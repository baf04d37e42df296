//! Seeded dungeon generation pipeline
//!
//! `split -> place rooms -> carve rooms -> connect` over a fresh partition
//! tree. The tree is dropped once the grid is carved; callers keep the grid
//! and, if they ask for it, the list of room rectangles.

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, warn};

use crate::algorithm::carving::{carve_rooms, connect_rooms};
use crate::algorithm::partition::{PartitionNode, RoomSizeRange};
use crate::io::configuration::{
    DEFAULT_MAX_ROOM_SIZE, DEFAULT_MIN_PARTITION_SIZE, DEFAULT_MIN_ROOM_SIZE, MAX_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::TileGrid;
use crate::spatial::rect::Rect;

/// Tunable parameters of the generator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Partition nodes with a side shorter than twice this stay unsplit
    pub min_partition_size: i32,
    /// Smallest room edge
    pub min_room_size: i32,
    /// Largest room edge
    pub max_room_size: i32,
}

impl GeneratorConfig {
    /// Check that the parameters can produce a layout
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - any size is below 1 or above `MAX_GRID_DIMENSION`
    /// - `max_room_size` is below `min_room_size`
    pub fn validate(&self) -> Result<()> {
        check_size("min_partition_size", self.min_partition_size)?;
        check_size("min_room_size", self.min_room_size)?;
        check_size("max_room_size", self.max_room_size)?;
        if self.max_room_size < self.min_room_size {
            return Err(invalid_parameter(
                "max_room_size",
                &self.max_room_size,
                &format!("must not be below min_room_size ({})", self.min_room_size),
            ));
        }
        Ok(())
    }

    /// Room edge bounds as a sampling range
    pub const fn room_sizes(&self) -> RoomSizeRange {
        RoomSizeRange::new(self.min_room_size, self.max_room_size)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_partition_size: DEFAULT_MIN_PARTITION_SIZE,
            min_room_size: DEFAULT_MIN_ROOM_SIZE,
            max_room_size: DEFAULT_MAX_ROOM_SIZE,
        }
    }
}

/// A carved grid together with the rooms placed in it
#[derive(Debug, Clone)]
pub struct GeneratedDungeon {
    /// The finished tile grid
    pub grid: TileGrid,
    /// Room rectangles in partition leaf order
    pub rooms: Vec<Rect>,
    /// Number of partition leaves, including those too small for a room
    pub leaf_count: usize,
    /// Number of corridors carved
    pub corridor_count: usize,
}

/// Seeded generator; successive calls continue the same random stream
pub struct DungeonGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl DungeonGenerator {
    /// Create a generator with default parameters
    pub fn new(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator with custom parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn with_config(seed: u64, config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Parameters in use
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a grid of the given size
    pub fn generate(&mut self, width: usize, height: usize) -> TileGrid {
        self.generate_dungeon(width, height).grid
    }

    /// Generate a grid and report the rooms carved into it
    ///
    /// Sizes beyond `MAX_GRID_DIMENSION` are clamped. Sizes too small to hold
    /// a room produce an all-wall grid.
    pub fn generate_dungeon(&mut self, width: usize, height: usize) -> GeneratedDungeon {
        let width = clamp_dimension("width", width);
        let height = clamp_dimension("height", height);
        let mut grid = TileGrid::new(width, height);

        let mut root = PartitionNode::new(Rect::new(0, 0, width as i32, height as i32));
        root.split(&mut self.rng, self.config.min_partition_size);
        let skipped = root.place_rooms(&mut self.rng, self.config.room_sizes());

        let room_count = carve_rooms(&mut grid, &root);
        let corridor_count = connect_rooms(&mut grid, &root, &mut self.rng);
        let leaf_count = root.leaf_count();

        debug!(
            width,
            height,
            leaves = leaf_count,
            rooms = room_count,
            skipped,
            corridors = corridor_count,
            "dungeon generated"
        );

        GeneratedDungeon {
            grid,
            rooms: root.rooms(),
            leaf_count,
            corridor_count,
        }
    }
}

fn check_size(parameter: &'static str, value: i32) -> Result<()> {
    if value < 1 {
        return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
    }
    if value > MAX_GRID_DIMENSION as i32 {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

fn clamp_dimension(name: &'static str, value: usize) -> usize {
    if value > MAX_GRID_DIMENSION {
        warn!(
            dimension = name,
            requested = value,
            limit = MAX_GRID_DIMENSION,
            "clamping grid dimension"
        );
        MAX_GRID_DIMENSION
    } else {
        value
    }
}

/// Generate a `width x height` dungeon from `seed` with default parameters
///
/// Identical arguments always yield identical grids.
pub fn generate(width: usize, height: usize, seed: u64) -> TileGrid {
    DungeonGenerator::new(seed).generate(width, height)
}
