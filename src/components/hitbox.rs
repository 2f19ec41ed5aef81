//! Per-actor collision geometry.

use glam::Vec2;

use crate::geom::Rect;

/// One local-space hitbox with its channel masks.
///
/// Masks are bitfields, one bit per collision channel. `emits` is the set of
/// channels this box projects onto other actors; `accepts` is the set it
/// reacts to. For a pair of actors the detector tests the lower-id actor's
/// `emits` against the higher-id actor's `accepts` — the lower id is always
/// the emitting side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub emits: u32,
    pub accepts: u32,
    /// Geometry relative to the owning actor's position.
    pub rect: Rect,
}

impl Hitbox {
    pub fn new(emits: u32, accepts: u32, rect: Rect) -> Self {
        Self {
            emits,
            accepts,
            rect,
        }
    }

    /// Hitbox emitting and accepting the same channels.
    pub fn symmetric(mask: u32, rect: Rect) -> Self {
        Self::new(mask, mask, rect)
    }

    /// The hitbox rectangle translated into world space.
    pub fn world_rect(&self, pos: Vec2) -> Rect {
        self.rect.translated(pos)
    }
}
