//! Entity bounding boxes probed at their corners

use crate::io::configuration::{ENTITY_SIZE, FOOTPRINT_MARGIN};
use crate::math::world::WorldPosition;

/// Square bounding box of a movable entity anchored at its top-left corner
///
/// Walkability of a footprint is judged at its four corners, each pulled
/// inwards by `margin` so that an entity flush against a wall edge does not
/// sample the neighbouring cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    /// Edge length in world units
    pub size: f32,
    /// Inset applied to every corner
    pub margin: f32,
}

impl Footprint {
    /// Create a footprint with the given edge length and inset
    pub const fn new(size: f32, margin: f32) -> Self {
        Self { size, margin }
    }

    /// Corner probes for an entity whose top-left sits at `origin`
    ///
    /// Ordered top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self, origin: WorldPosition) -> [WorldPosition; 4] {
        let near = self.margin;
        let far = self.size - self.margin;
        [
            origin.offset(near, near),
            origin.offset(far, near),
            origin.offset(near, far),
            origin.offset(far, far),
        ]
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self::new(ENTITY_SIZE, FOOTPRINT_MARGIN)
    }
}
