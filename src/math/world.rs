//! World-space positions and conversion to grid cells
//!
//! World coordinates are continuous (pixels); cells are integer indices.
//! Conversion always floors, so positions just left of or above the origin
//! land in cell -1 rather than being truncated into cell 0.

use std::fmt;

/// A point in world space measured in world units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPosition {
    /// Horizontal coordinate, increasing rightwards
    pub x: f32,
    /// Vertical coordinate, increasing downwards
    pub y: f32,
}

impl WorldPosition {
    /// Create a position from its components
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by the given deltas
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether both components are finite numbers
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// World position of a cell's top-left corner
    pub fn from_cell(cell: [i32; 2], tile_size: i32) -> Self {
        Self::new(
            (cell[0] * tile_size) as f32,
            (cell[1] * tile_size) as f32,
        )
    }

    /// Cell `[x, y]` containing this position
    ///
    /// Returns `None` for non-finite positions, which belong to no cell.
    pub fn to_cell(self, tile_size: i32) -> Option<[i32; 2]> {
        self.is_finite().then(|| {
            [
                world_to_cell(self.x, tile_size),
                world_to_cell(self.y, tile_size),
            ]
        })
    }
}

impl fmt::Display for WorldPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Floor-divide a world coordinate by the tile size
///
/// Values beyond the `i32` range saturate, which keeps them out of bounds.
pub fn world_to_cell(coordinate: f32, tile_size: i32) -> i32 {
    (coordinate / tile_size as f32).floor() as i32
}
