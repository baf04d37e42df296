//! Generation constants and runtime configuration defaults

// World-space scale shared by every query
/// World units per tile edge
pub const TILE_SIZE: i32 = 32;

// Partition and room sizing
/// Minimum partition edge; nodes thinner than twice this stop splitting
pub const DEFAULT_MIN_PARTITION_SIZE: i32 = 8;
/// Smallest room edge drawn for a leaf
pub const DEFAULT_MIN_ROOM_SIZE: i32 = 4;
/// Largest room edge drawn for a leaf
pub const DEFAULT_MAX_ROOM_SIZE: i32 = 10;

/// Tiles carved on each side of a corridor's axis line (1 gives 3-wide corridors)
pub const CORRIDOR_HALF_WIDTH: i32 = 1;

// Spawn search
/// Random probes made before falling back to a raster scan
pub const SPAWN_PROBE_ATTEMPTS: usize = 1000;
/// Edge length of a spawned entity's bounding box in world units
pub const ENTITY_SIZE: f32 = 32.0;
/// Inset applied to footprint corners before walkability checks
pub const FOOTPRINT_MARGIN: f32 = 2.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default grid width in tiles
pub const DEFAULT_WIDTH: usize = 50;
/// Default grid height in tiles
pub const DEFAULT_HEIGHT: usize = 50;
/// Default number of layouts generated per CLI run
pub const DEFAULT_SURVEY_COUNT: usize = 1;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
