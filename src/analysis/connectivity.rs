//! Flood-fill connectivity over floor cells
//!
//! Regions are 4-connected: diagonal contact between floor cells does not
//! join them, matching how an entity would have to walk between them.

use bitvec::prelude::*;

use crate::spatial::grid::TileGrid;
use crate::spatial::rect::Rect;

/// Set of cells reached by a flood fill, one bit per grid cell
#[derive(Clone, Debug)]
pub struct ReachableSet {
    bits: BitVec,
    width: usize,
}

impl ReachableSet {
    fn empty(grid: &TileGrid) -> Self {
        Self {
            bits: bitvec![0; grid.width() * grid.height()],
            width: grid.width(),
        }
    }

    fn offset(&self, cell: [i32; 2]) -> Option<usize> {
        let x = usize::try_from(cell[0]).ok()?;
        let y = usize::try_from(cell[1]).ok()?;
        (x < self.width).then(|| y * self.width + x)
    }

    /// Mark a cell, returning whether it was newly added
    fn insert(&mut self, cell: [i32; 2]) -> bool {
        match self.offset(cell) {
            Some(offset) if offset < self.bits.len() => !self.bits.replace(offset, true),
            _ => false,
        }
    }

    /// Whether the cell `[x, y]` was reached
    pub fn contains(&self, cell: [i32; 2]) -> bool {
        self.offset(cell)
            .and_then(|offset| self.bits.get(offset).as_deref().copied())
            .unwrap_or(false)
    }

    /// Number of reached cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether no cell was reached
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }
}

/// Every floor cell 4-connected to `start`
///
/// Empty when `start` is not a floor cell.
pub fn flood_fill(grid: &TileGrid, start: [i32; 2]) -> ReachableSet {
    let mut reached = ReachableSet::empty(grid);
    if !grid.tile_at(start[0], start[1]).is_floor() {
        return reached;
    }

    reached.insert(start);
    let mut frontier = vec![start];
    while let Some([x, y]) = frontier.pop() {
        for next in [[x + 1, y], [x - 1, y], [x, y + 1], [x, y - 1]] {
            if grid.tile_at(next[0], next[1]).is_floor() && reached.insert(next) {
                frontier.push(next);
            }
        }
    }

    reached
}

/// Number of separate 4-connected floor regions
pub fn count_regions(grid: &TileGrid) -> usize {
    let mut seen = ReachableSet::empty(grid);
    let mut regions = 0;

    for (cell, tile) in grid.cells() {
        if !tile.is_floor() || seen.contains(cell) {
            continue;
        }
        regions += 1;
        let region = flood_fill(grid, cell);
        seen.bits |= &region.bits;
    }

    regions
}

/// Whether every room can be reached on foot from every other room
///
/// Trivially true for zero or one room.
pub fn rooms_connected(grid: &TileGrid, rooms: &[Rect]) -> bool {
    let Some(first) = rooms.first() else {
        return true;
    };

    let reached = flood_fill(grid, first.center());
    rooms.iter().all(|room| reached.contains(room.center()))
}
