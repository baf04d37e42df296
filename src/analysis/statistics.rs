//! Layout statistics for single dungeons and batches of seeds

use std::fmt;

use crate::algorithm::generator::GeneratedDungeon;
use crate::algorithm::spawn::SpawnPhase;
use crate::analysis::connectivity::{count_regions, rooms_connected};
use crate::spatial::rect::Rect;

/// Measurements of one generated layout
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStatistics {
    /// Seed the layout was generated from
    pub seed: u64,
    /// Grid width in tiles
    pub width: usize,
    /// Grid height in tiles
    pub height: usize,
    /// Partition leaves, with or without a room
    pub leaf_count: usize,
    /// Rooms carved
    pub room_count: usize,
    /// Corridors carved
    pub corridor_count: usize,
    /// Floor cells in the grid
    pub floor_cells: usize,
    /// Separate 4-connected floor regions
    pub regions: usize,
    /// Whether every room reaches every other room
    pub connected: bool,
    /// Pairs of rooms sharing at least one cell
    pub overlapping_rooms: usize,
}

impl LayoutStatistics {
    /// Measure a generated dungeon
    pub fn measure(seed: u64, dungeon: &GeneratedDungeon) -> Self {
        let grid = &dungeon.grid;
        Self {
            seed,
            width: grid.width(),
            height: grid.height(),
            leaf_count: dungeon.leaf_count,
            room_count: dungeon.rooms.len(),
            corridor_count: dungeon.corridor_count,
            floor_cells: grid.floor_count(),
            regions: count_regions(grid),
            connected: rooms_connected(grid, &dungeon.rooms),
            overlapping_rooms: overlapping_room_pairs(&dungeon.rooms),
        }
    }

    /// Fraction of cells that are floor
    pub fn floor_ratio(&self) -> f64 {
        let cells = self.width * self.height;
        if cells == 0 {
            0.0
        } else {
            self.floor_cells as f64 / cells as f64
        }
    }
}

impl fmt::Display for LayoutStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seed {}: {}x{}, {} rooms in {} leaves, {} corridors, {:.1}% floor, {} region(s)",
            self.seed,
            self.width,
            self.height,
            self.room_count,
            self.leaf_count,
            self.corridor_count,
            self.floor_ratio() * 100.0,
            self.regions
        )
    }
}

/// Number of room pairs that share a cell
///
/// Rooms live in disjoint partition leaves, so any overlap means the
/// partition or placement step broke its bounds.
pub fn overlapping_room_pairs(rooms: &[Rect]) -> usize {
    rooms
        .iter()
        .enumerate()
        .map(|(i, room)| {
            rooms
                .iter()
                .skip(i + 1)
                .filter(|other| room.intersects(other))
                .count()
        })
        .sum()
}

/// Running totals over a batch of layouts
#[derive(Debug, Clone, Default)]
pub struct SurveyStatistics {
    /// Layouts recorded
    pub layouts: usize,
    /// Seeds whose layouts were not fully connected
    pub disconnected_seeds: Vec<u64>,
    /// Seeds whose layouts had no rooms at all
    pub empty_seeds: Vec<u64>,
    /// Seeds whose layouts had overlapping rooms
    pub overlapping_seeds: Vec<u64>,
    /// Rooms across all layouts
    pub total_rooms: usize,
    /// Lowest floor ratio seen
    pub min_floor_ratio: Option<f64>,
    /// Highest floor ratio seen
    pub max_floor_ratio: Option<f64>,
    floor_ratio_sum: f64,
    /// Spawn searches answered by random probing
    pub probe_spawns: usize,
    /// Spawn searches answered by the raster scan
    pub scan_spawns: usize,
    /// Spawn searches that fell back to the map center
    pub fallback_spawns: usize,
}

impl SurveyStatistics {
    /// Create an empty survey
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one layout's measurements
    pub fn record(&mut self, layout: &LayoutStatistics) {
        let ratio = layout.floor_ratio();
        self.layouts += 1;
        self.total_rooms += layout.room_count;
        self.floor_ratio_sum += ratio;
        self.min_floor_ratio = Some(self.min_floor_ratio.map_or(ratio, |min| min.min(ratio)));
        self.max_floor_ratio = Some(self.max_floor_ratio.map_or(ratio, |max| max.max(ratio)));

        if layout.room_count == 0 {
            self.empty_seeds.push(layout.seed);
        }
        if !layout.connected {
            self.disconnected_seeds.push(layout.seed);
        }
        if layout.overlapping_rooms > 0 {
            self.overlapping_seeds.push(layout.seed);
        }
    }

    /// Count which phase answered a spawn search
    pub const fn record_spawn(&mut self, phase: SpawnPhase) {
        match phase {
            SpawnPhase::Probe => self.probe_spawns += 1,
            SpawnPhase::Scan => self.scan_spawns += 1,
            SpawnPhase::Fallback => self.fallback_spawns += 1,
        }
    }

    /// Average floor ratio over recorded layouts
    pub fn mean_floor_ratio(&self) -> f64 {
        if self.layouts == 0 {
            0.0
        } else {
            self.floor_ratio_sum / self.layouts as f64
        }
    }

    /// Average room count over recorded layouts
    pub fn mean_rooms(&self) -> f64 {
        if self.layouts == 0 {
            0.0
        } else {
            self.total_rooms as f64 / self.layouts as f64
        }
    }

    /// Total spawn searches recorded
    pub const fn spawn_count(&self) -> usize {
        self.probe_spawns + self.scan_spawns + self.fallback_spawns
    }
}

impl fmt::Display for SurveyStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "layouts: {}", self.layouts)?;
        writeln!(f, "mean rooms: {:.2}", self.mean_rooms())?;
        writeln!(
            f,
            "floor ratio: mean {:.1}%, min {:.1}%, max {:.1}%",
            self.mean_floor_ratio() * 100.0,
            self.min_floor_ratio.unwrap_or(0.0) * 100.0,
            self.max_floor_ratio.unwrap_or(0.0) * 100.0
        )?;
        writeln!(f, "disconnected: {}", self.disconnected_seeds.len())?;
        writeln!(f, "without rooms: {}", self.empty_seeds.len())?;
        writeln!(f, "overlapping rooms: {}", self.overlapping_seeds.len())?;
        write!(
            f,
            "spawns: {} probe, {} scan, {} fallback",
            self.probe_spawns, self.scan_spawns, self.fallback_spawns
        )
    }
}
