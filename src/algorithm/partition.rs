//! Binary space partition tree and room placement
//!
//! The map rectangle is split recursively into non-overlapping regions. Every
//! split produces exactly two children, and only leaves may hold a room, so
//! both rules are carried by the node type rather than checked at runtime.
//! Traversals that may run deep (splitting, leaf walks) use an explicit stack.

use rand::Rng;

use crate::spatial::rect::Rect;

/// Direction of the cut dividing a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAxis {
    /// Cut along a vertical line: children are left and right
    Vertical,
    /// Cut along a horizontal line: children are top and bottom
    Horizontal,
}

impl SplitAxis {
    /// Split across the longer side; a coin flip for squares
    pub fn choose<R: Rng + ?Sized>(bounds: &Rect, rng: &mut R) -> Self {
        if bounds.width > bounds.height {
            Self::Vertical
        } else if bounds.height > bounds.width {
            Self::Horizontal
        } else if rng.random_bool(0.5) {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    /// Length of `bounds` along the cut direction
    pub const fn span(self, bounds: &Rect) -> i32 {
        match self {
            Self::Vertical => bounds.width,
            Self::Horizontal => bounds.height,
        }
    }

    /// Divide `bounds` at `offset` cells from its top-left edge
    pub const fn partition(self, bounds: &Rect, offset: i32) -> (Rect, Rect) {
        match self {
            Self::Vertical => (
                Rect::new(bounds.x, bounds.y, offset, bounds.height),
                Rect::new(
                    bounds.x + offset,
                    bounds.y,
                    bounds.width - offset,
                    bounds.height,
                ),
            ),
            Self::Horizontal => (
                Rect::new(bounds.x, bounds.y, bounds.width, offset),
                Rect::new(
                    bounds.x,
                    bounds.y + offset,
                    bounds.width,
                    bounds.height - offset,
                ),
            ),
        }
    }
}

/// Inclusive bounds on room edge lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSizeRange {
    /// Smallest allowed edge
    pub min: i32,
    /// Largest allowed edge
    pub max: i32,
}

impl RoomSizeRange {
    /// Create a size range
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Draw a room rectangle inside `bounds` leaving a one-cell border
    ///
    /// Returns `None` when `bounds` cannot hold the minimum room plus border;
    /// no random draw is made in that case.
    pub fn draw<R: Rng + ?Sized>(&self, bounds: &Rect, rng: &mut R) -> Option<Rect> {
        let max_width = self.max.min(bounds.width - 2);
        let max_height = self.max.min(bounds.height - 2);
        if self.min < 1 || max_width < self.min || max_height < self.min {
            return None;
        }

        let width = rng.random_range(self.min..=max_width);
        let height = rng.random_range(self.min..=max_height);
        let x = bounds.x + rng.random_range(1..=bounds.width - width - 1);
        let y = bounds.y + rng.random_range(1..=bounds.height - height - 1);

        Some(Rect::new(x, y, width, height))
    }
}

#[derive(Debug, Clone)]
enum NodeKind {
    Leaf { room: Option<Rect> },
    Branch {
        axis: SplitAxis,
        children: Box<[PartitionNode; 2]>,
    },
}

/// A node of the partition tree
#[derive(Debug, Clone)]
pub struct PartitionNode {
    bounds: Rect,
    kind: NodeKind,
}

impl PartitionNode {
    /// Create an unsplit, roomless leaf
    pub const fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            kind: NodeKind::Leaf { room: None },
        }
    }

    /// Region covered by this node
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Room held by this node; always `None` for branches
    pub const fn room(&self) -> Option<Rect> {
        match self.kind {
            NodeKind::Leaf { room } => room,
            NodeKind::Branch { .. } => None,
        }
    }

    /// The two children of a branch
    pub fn children(&self) -> Option<&[Self; 2]> {
        match &self.kind {
            NodeKind::Branch { children, .. } => Some(&**children),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Direction of this node's cut, if it was split
    pub const fn axis(&self) -> Option<SplitAxis> {
        match self.kind {
            NodeKind::Branch { axis, .. } => Some(axis),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Whether this node has no children
    pub const fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    /// Split recursively until every leaf is too small to divide
    ///
    /// A node stops when either side is shorter than `2 * min_size`. Nodes are
    /// visited depth-first, left subtree before right, which fixes the order
    /// of random draws for a given seed. A `min_size` below 1 is raised to 1.
    pub fn split<R: Rng + ?Sized>(&mut self, rng: &mut R, min_size: i32) {
        let min_size = min_size.max(1);
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            if let Some([left, right]) = node.divide(rng, min_size) {
                pending.push(right);
                pending.push(left);
            }
        }
    }

    /// Split this node once, returning the new children
    fn divide<R: Rng + ?Sized>(&mut self, rng: &mut R, min_size: i32) -> Option<&mut [Self; 2]> {
        if !matches!(self.kind, NodeKind::Leaf { room: None })
            || self.bounds.width / 2 < min_size
            || self.bounds.height / 2 < min_size
        {
            return None;
        }

        let axis = SplitAxis::choose(&self.bounds, rng);
        let span = axis.span(&self.bounds);
        // A span of exactly 2 * min_size leaves a single legal cut
        let offset = if span - min_size > min_size {
            rng.random_range(min_size..span - min_size)
        } else {
            min_size
        };

        let (first, second) = axis.partition(&self.bounds, offset);
        self.kind = NodeKind::Branch {
            axis,
            children: Box::new([Self::new(first), Self::new(second)]),
        };

        match &mut self.kind {
            NodeKind::Branch { children, .. } => Some(&mut **children),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Place one room in every leaf, returning how many leaves got none
    pub fn place_rooms<R: Rng + ?Sized>(&mut self, rng: &mut R, sizes: RoomSizeRange) -> usize {
        let mut skipped = 0;
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            match &mut node.kind {
                NodeKind::Leaf { room } => {
                    *room = sizes.draw(&node.bounds, rng);
                    if room.is_none() {
                        skipped += 1;
                    }
                }
                NodeKind::Branch { children, .. } => {
                    let [left, right] = &mut **children;
                    pending.push(right);
                    pending.push(left);
                }
            }
        }

        skipped
    }

    /// All leaves in depth-first order, left before right
    pub fn leaves(&self) -> Vec<&Self> {
        let mut leaves = Vec::new();
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            match node.children() {
                Some([left, right]) => {
                    pending.push(right);
                    pending.push(left);
                }
                None => leaves.push(node),
            }
        }

        leaves
    }

    /// Rooms of all leaves that received one, in leaf order
    pub fn rooms(&self) -> Vec<Rect> {
        self.leaves().iter().filter_map(|leaf| leaf.room()).collect()
    }

    /// Number of leaves below (or at) this node
    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Length of the longest root-to-leaf path, counting nodes
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];

        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            if let Some([left, right]) = node.children() {
                pending.push((left, level + 1));
                pending.push((right, level + 1));
            }
        }

        deepest
    }

    /// Pick one room from this subtree to stand in for it
    ///
    /// Where both children offer a room the choice is a coin flip drawn from
    /// `rng`, so the result is reproducible for a seeded generator. Returns
    /// `None` when no leaf below this node holds a room.
    pub fn representative_room<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Rect> {
        match &self.kind {
            NodeKind::Leaf { room } => *room,
            NodeKind::Branch { children, .. } => {
                let [left, right] = &**children;
                let left_room = left.representative_room(rng);
                let right_room = right.representative_room(rng);
                match (left_room, right_room) {
                    (Some(l), Some(r)) => Some(if rng.random_bool(0.5) { l } else { r }),
                    (l, r) => l.or(r),
                }
            }
        }
    }
}
