//! Safe placement search for footprint-sized entities
//!
//! Three phases, cheapest first:
//! 1. bounded random probing for an open 3x3 area whose footprint checks out
//! 2. a row-major scan for the first open 3x3 area
//! 3. the map center, which may not be walkable
//!
//! The search always returns a position; callers must tolerate the phase 3
//! result landing in a wall.

use rand::Rng;
use tracing::{error, warn};

use crate::io::configuration::SPAWN_PROBE_ATTEMPTS;
use crate::math::world::WorldPosition;
use crate::spatial::footprint::Footprint;
use crate::spatial::grid::TileGrid;

/// Which phase of the search produced a spawn point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnPhase {
    /// Found by random probing with a footprint check
    Probe,
    /// Found by the exhaustive row-major scan
    Scan,
    /// Nothing open was found; the map center was used
    Fallback,
}

/// Result of a spawn search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPoint {
    /// Top-left corner of the entity in world space
    pub position: WorldPosition,
    /// Phase that produced the position
    pub phase: SpawnPhase,
}

/// Configurable spawn search over a finished grid
#[derive(Debug, Clone, Copy)]
pub struct SpawnLocator<'a> {
    grid: &'a TileGrid,
    attempts: usize,
    footprint: Footprint,
}

impl<'a> SpawnLocator<'a> {
    /// Locator with the default probe budget and a 32x32 footprint
    pub fn new(grid: &'a TileGrid) -> Self {
        Self {
            grid,
            attempts: SPAWN_PROBE_ATTEMPTS,
            footprint: Footprint::default(),
        }
    }

    /// Override the number of random probes
    #[must_use]
    pub const fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }

    /// Override the footprint validated in the probe phase
    #[must_use]
    pub const fn with_footprint(mut self, footprint: Footprint) -> Self {
        self.footprint = footprint;
        self
    }

    /// Run all three phases
    pub fn locate<R: Rng + ?Sized>(&self, rng: &mut R) -> SpawnPoint {
        if let Some(position) = self.probe(rng) {
            return SpawnPoint {
                position,
                phase: SpawnPhase::Probe,
            };
        }

        warn!(
            attempts = self.attempts,
            "random spawn probes exhausted, scanning entire map"
        );
        if let Some(position) = self.scan() {
            return SpawnPoint {
                position,
                phase: SpawnPhase::Scan,
            };
        }

        let position = self.grid.world_center();
        error!(%position, "no open area found for spawn, using map center");
        SpawnPoint {
            position,
            phase: SpawnPhase::Fallback,
        }
    }

    /// Interior column and row bounds, empty when the grid has no interior
    fn interior(&self) -> Option<([i32; 2], [i32; 2])> {
        let width = self.grid.width() as i32;
        let height = self.grid.height() as i32;
        (width > 2 && height > 2).then_some(([1, width - 1], [1, height - 1]))
    }

    /// Phase 1: random interior cells, re-checked against the footprint
    fn probe<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<WorldPosition> {
        let ([x_min, x_max], [y_min, y_max]) = self.interior()?;

        for _ in 0..self.attempts {
            let x = rng.random_range(x_min..x_max);
            let y = rng.random_range(y_min..y_max);
            if !self.grid.is_open_area(x, y) {
                continue;
            }

            let position = TileGrid::cell_origin(x, y);
            if self.grid.is_footprint_walkable(position, &self.footprint) {
                return Some(position);
            }
        }

        None
    }

    /// Phase 2: first open cell in row-major order
    fn scan(&self) -> Option<WorldPosition> {
        let ([x_min, x_max], [y_min, y_max]) = self.interior()?;

        (y_min..y_max)
            .flat_map(|y| (x_min..x_max).map(move |x| [x, y]))
            .find(|&[x, y]| self.grid.is_open_area(x, y))
            .map(|[x, y]| TileGrid::cell_origin(x, y))
    }
}

impl TileGrid {
    /// Find a world position where a 32x32 entity can be placed
    ///
    /// Never fails. If the grid has no open 3x3 area anywhere the exact map
    /// center is returned, which may be a wall.
    pub fn find_floor_position<R: Rng + ?Sized>(&self, rng: &mut R) -> WorldPosition {
        self.locate_spawn(rng).position
    }

    /// Like [`TileGrid::find_floor_position`] but reports the phase used
    pub fn locate_spawn<R: Rng + ?Sized>(&self, rng: &mut R) -> SpawnPoint {
        SpawnLocator::new(self).locate(rng)
    }
}
