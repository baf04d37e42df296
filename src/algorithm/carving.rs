//! Carving rooms and corridors into the tile grid
//!
//! Every write here turns wall into floor and nothing turns floor back into
//! wall, so the order in which rooms and corridors are stamped does not
//! affect the final grid.

use rand::Rng;

use crate::algorithm::partition::PartitionNode;
use crate::io::configuration::CORRIDOR_HALF_WIDTH;
use crate::spatial::grid::TileGrid;
use crate::spatial::rect::Rect;
use crate::spatial::tiles::Tile;

/// Order of the two legs of an L-shaped corridor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorridorShape {
    /// Horizontal leg along the first center's row, then vertical along the second's column
    HorizontalFirst,
    /// Vertical leg along the first center's column, then horizontal along the second's row
    VerticalFirst,
}

impl CorridorShape {
    /// Pick a shape with a fair coin
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::HorizontalFirst
        } else {
            Self::VerticalFirst
        }
    }
}

/// Mark every cell of `rect` as floor
pub fn carve_rect(grid: &mut TileGrid, rect: &Rect) {
    grid.fill_rect(rect, Tile::Floor);
}

/// Carve the room of every leaf; returns how many rooms were carved
pub fn carve_rooms(grid: &mut TileGrid, root: &PartitionNode) -> usize {
    let rooms = root.rooms();
    for room in &rooms {
        carve_rect(grid, room);
    }
    rooms.len()
}

/// Rectangle covered by a horizontal corridor leg at row `y`
pub fn horizontal_leg(x1: i32, x2: i32, y: i32) -> Rect {
    let start = x1.min(x2);
    Rect::new(
        start,
        y - CORRIDOR_HALF_WIDTH,
        x1.max(x2) - start + 1,
        CORRIDOR_HALF_WIDTH * 2 + 1,
    )
}

/// Rectangle covered by a vertical corridor leg at column `x`
pub fn vertical_leg(x: i32, y1: i32, y2: i32) -> Rect {
    let start = y1.min(y2);
    Rect::new(
        x - CORRIDOR_HALF_WIDTH,
        start,
        CORRIDOR_HALF_WIDTH * 2 + 1,
        y1.max(y2) - start + 1,
    )
}

/// The two legs joining cell `from` to cell `to`
pub fn corridor_legs(from: [i32; 2], to: [i32; 2], shape: CorridorShape) -> [Rect; 2] {
    let [x1, y1] = from;
    let [x2, y2] = to;
    match shape {
        CorridorShape::HorizontalFirst => [horizontal_leg(x1, x2, y1), vertical_leg(x2, y1, y2)],
        CorridorShape::VerticalFirst => [vertical_leg(x1, y1, y2), horizontal_leg(x1, x2, y2)],
    }
}

/// Carve an L-shaped corridor between two cells
pub fn carve_corridor(grid: &mut TileGrid, from: [i32; 2], to: [i32; 2], shape: CorridorShape) {
    for leg in corridor_legs(from, to, shape) {
        carve_rect(grid, &leg);
    }
}

/// Join sibling subtrees with corridors, bottom-up over every branch
///
/// At each branch one representative room is drawn from each child and the
/// two centers are linked. A branch whose child holds no room anywhere is
/// left unconnected, since that child has no floor to reach. Returns the
/// number of corridors carved.
pub fn connect_rooms<R: Rng + ?Sized>(
    grid: &mut TileGrid,
    node: &PartitionNode,
    rng: &mut R,
) -> usize {
    let Some([left, right]) = node.children() else {
        return 0;
    };

    let mut carved = connect_rooms(grid, left, rng) + connect_rooms(grid, right, rng);

    let left_room = left.representative_room(rng);
    let right_room = right.representative_room(rng);
    if let (Some(from), Some(to)) = (left_room, right_room) {
        let shape = CorridorShape::choose(rng);
        carve_corridor(grid, from.center(), to.center(), shape);
        carved += 1;
    } else {
        tracing::debug!(bounds = ?node.bounds(), "skipping connection for roomless subtree");
    }

    carved
}
