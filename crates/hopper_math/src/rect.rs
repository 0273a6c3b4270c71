//! Axis-aligned rectangle type

use crate::Vec2;
use serde::{Serialize, Deserialize};

/// An axis-aligned rectangle in world space.
///
/// `x`/`y` is the top-left corner; the y axis points down. Extents may be
/// zero, which collision probes use to test a single edge of a body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, w: 0.0, h: 0.0 };

    /// Creates a rectangle from its top-left corner and extents.
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// World x of the right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// World y of the bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Top-left corner as a vector.
    #[inline]
    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Strict overlap test. Rectangles that merely share an edge or corner
    /// do not overlap, so a zero-extent probe sitting exactly on an edge
    /// reports no contact.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}
