//! Tile grid storage with bounds-checked point and footprint queries
//!
//! The grid is the long-lived artifact of generation. It is written while a
//! dungeon is carved and read many times per frame afterwards, so every
//! accessor treats out-of-range input as a defined default instead of an
//! error: reads outside the grid see `Wall`, writes outside it are dropped.

use ndarray::Array2;
use std::fmt;

use crate::io::configuration::TILE_SIZE;
use crate::math::world::WorldPosition;
use crate::spatial::footprint::Footprint;
use crate::spatial::rect::Rect;
use crate::spatial::tiles::Tile;

/// Dense `width x height` map of tile classifications
///
/// Stored row-major as `[row, col]`, i.e. `[y, x]`. Public coordinates are
/// always given as `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    tiles: Array2<Tile>,
}

impl TileGrid {
    /// World units per tile edge
    pub const TILE_SIZE: i32 = TILE_SIZE;

    /// Create a grid with every cell set to `Wall`
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            tiles: Array2::from_elem((height, width), Tile::Wall),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.tiles.nrows()
    }

    /// World units per tile edge
    pub const fn tile_size(&self) -> i32 {
        Self::TILE_SIZE
    }

    /// Array index for a cell; negative coordinates have none
    fn index(x: i32, y: i32) -> Option<[usize; 2]> {
        let col = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        Some([row, col])
    }

    /// Whether `(x, y)` names a cell inside the grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        Self::index(x, y).is_some_and(|index| self.tiles.get(index).is_some())
    }

    /// Tile at `(x, y)`, or `Wall` outside the grid
    pub fn tile_at(&self, x: i32, y: i32) -> Tile {
        Self::index(x, y)
            .and_then(|index| self.tiles.get(index))
            .copied()
            .unwrap_or(Tile::Wall)
    }

    /// Overwrite the tile at `(x, y)`; ignored outside the grid
    pub fn set_tile(&mut self, x: i32, y: i32, tile: Tile) {
        if let Some(cell) = Self::index(x, y).and_then(|index| self.tiles.get_mut(index)) {
            *cell = tile;
        }
    }

    /// Overwrite every in-bounds cell of `rect`
    pub fn fill_rect(&mut self, rect: &Rect, tile: Tile) {
        for [x, y] in rect.cells() {
            self.set_tile(x, y, tile);
        }
    }

    /// Whether the cell containing a world position is floor
    ///
    /// Positions left of or above the origin floor-divide into negative cells
    /// and are never walkable.
    pub fn is_walkable(&self, position: WorldPosition) -> bool {
        position
            .to_cell(Self::TILE_SIZE)
            .is_some_and(|[x, y]| self.tile_at(x, y).is_floor())
    }

    /// Whether all four inset corners of a footprint at `origin` are walkable
    pub fn is_footprint_walkable(&self, origin: WorldPosition, footprint: &Footprint) -> bool {
        footprint
            .corners(origin)
            .iter()
            .all(|&corner| self.is_walkable(corner))
    }

    /// Whether `(x, y)` and its eight neighbours are all floor
    pub fn is_open_area(&self, x: i32, y: i32) -> bool {
        (-1..=1).all(|dy| (-1..=1).all(|dx| self.tile_at(x + dx, y + dy).is_floor()))
    }

    /// Number of floor cells
    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_floor()).count()
    }

    /// Every cell as `([x, y], tile)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = ([i32; 2], Tile)> + '_ {
        self.tiles
            .indexed_iter()
            .map(|((row, col), &tile)| ([col as i32, row as i32], tile))
    }

    /// World position of a cell's top-left corner
    pub fn cell_origin(x: i32, y: i32) -> WorldPosition {
        WorldPosition::from_cell([x, y], Self::TILE_SIZE)
    }

    /// Exact world-space center of the whole map
    pub fn world_center(&self) -> WorldPosition {
        let tile = Self::TILE_SIZE as usize;
        WorldPosition::new(
            (self.width() * tile / 2) as f32,
            (self.height() * tile / 2) as f32,
        )
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.rows() {
            for tile in row {
                write!(f, "{tile}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
