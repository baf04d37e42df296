//! Tile classification

use std::fmt;

/// Classification of a single grid cell
///
/// Cells start as walls; generation carves floor into them. There are no
/// other states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    /// Solid rock, blocks movement
    #[default]
    Wall,
    /// Open ground, walkable
    Floor,
}

impl Tile {
    /// Whether entities may stand on this tile
    pub const fn is_floor(self) -> bool {
        matches!(self, Self::Floor)
    }

    /// Single-character glyph used by text previews
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => '.',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
