//! Axis-aligned collision testing
//!
//! Gates are full rectangles; the flyer uses a hitbox inset a couple of
//! pixels from its sprite so grazing contacts don't end the run.

use glam::Vec2;

use super::state::{Flyer, Gate};

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Shrink by `margin` on every side
    pub fn inset(&self, margin: f32) -> Rect {
        Rect {
            pos: self.pos + Vec2::splat(margin),
            size: self.size - Vec2::splat(2.0 * margin),
        }
    }

    /// Strict overlap: rectangles that merely share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// True iff the flyer's hitbox overlaps either half of the gate
pub fn flyer_hits_gate(flyer: &Flyer, gate: &Gate) -> bool {
    let hitbox = flyer.hitbox();
    hitbox.intersects(&gate.upper_rect()) || hitbox.intersects(&gate.lower_rect())
}
