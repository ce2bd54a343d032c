//! Axis-aligned hitbox overlap
//!
//! Sprites are drawn larger than they hit: each entity class shrinks its
//! rectangle by a fixed padding before testing overlap.

use glam::Vec2;

use super::state::Body;

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    /// Strict AABB intersection; rectangles that only share an edge do not overlap
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }
}

/// The padded collision rectangle for a body
pub fn hitbox(body: &Body) -> Rect {
    let padding = body.class.padding();
    Rect {
        pos: body.pos + Vec2::splat(padding),
        size: body.size - Vec2::splat(padding * 2.0),
    }
}

/// Check whether two bodies' hitboxes overlap
#[inline]
pub fn overlaps(a: &Body, b: &Body) -> bool {
    hitbox(a).intersects(&hitbox(b))
}
