//! Integer rectangles in cell coordinates

/// Axis-aligned rectangle of cells
///
/// `x`/`y` name the top-left cell; the right and bottom edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Leftmost column
    pub x: i32,
    /// Topmost row
    pub y: i32,
    /// Width in cells
    pub width: i32,
    /// Height in cells
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from its top-left cell and size
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// First column past the right edge
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// First row past the bottom edge
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Center cell `[x, y]`, rounding toward the top-left
    pub const fn center(&self) -> [i32; 2] {
        [self.x + self.width / 2, self.y + self.height / 2]
    }

    /// Number of cells covered
    pub const fn area(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.width as i64 * self.height as i64
        }
    }

    /// Whether the rectangle covers no cells
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether the cell `[x, y]` lies inside
    pub const fn contains(&self, cell: [i32; 2]) -> bool {
        cell[0] >= self.x && cell[0] < self.right() && cell[1] >= self.y && cell[1] < self.bottom()
    }

    /// Whether `inner` fits inside with at least `margin` cells spare on every side
    pub const fn contains_with_margin(&self, inner: &Self, margin: i32) -> bool {
        inner.x >= self.x + margin
            && inner.y >= self.y + margin
            && inner.right() <= self.right() - margin
            && inner.bottom() <= self.bottom() - margin
    }

    /// Whether the two rectangles share at least one cell
    pub const fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Every covered cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = [i32; 2]> + use<> {
        let (x, right) = (self.x, self.right());
        (self.y..self.bottom()).flat_map(move |y| (x..right).map(move |cx| [cx, y]))
    }
}
