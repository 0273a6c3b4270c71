//! Physics body for tile collision

use hopper_math::{Rect, Vec2};

const DEFAULT_MAX_SPEED: f32 = 5.0;
const DEFAULT_GRAVITY: f32 = 0.2;

/// A moving axis-aligned rectangle resolved against a
/// [`TileMap`](crate::TileMap).
///
/// The position is an anchor point, not a corner: `origin` gives the
/// anchor's normalized offset from the bounding box's top-left corner, so
/// the box is `(x - w * ox, y - h * oy, w, h)` at all times. Characters
/// anchor at bottom-center `(0.5, 1.0)`, which makes "standing on a tile"
/// mean `position.y` equals the tile's top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Anchor position in world pixels.
    pub position: Vec2,
    /// Velocity in pixels per tick.
    pub velocity: Vec2,
    /// Normalized anchor offset from the box's top-left corner.
    pub origin: Vec2,
    /// Bounding box extents in pixels.
    pub width: i32,
    pub height: i32,
    /// Per-axis speed caps in pixels per tick. The y cap limits falling
    /// speed only; upward velocity (negative y) is never capped, so jump
    /// impulses larger than the cap survive.
    pub max_speed: Vec2,
    /// Downward acceleration added to `velocity.y` each tick.
    pub gravity: f32,
    /// True when the last Y resolution pass rested this body on a tile.
    /// Written only by the collision resolver.
    pub grounded: bool,
}

impl Body {
    /// Creates a body anchored bottom-center at `position` with default
    /// gravity and speed caps.
    pub fn new(position: Vec2, width: i32, height: i32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            origin: Vec2::new(0.5, 1.0),
            width,
            height,
            max_speed: Vec2::new(DEFAULT_MAX_SPEED, DEFAULT_MAX_SPEED),
            gravity: DEFAULT_GRAVITY,
            grounded: false,
        }
    }

    /// Sets the normalized anchor offset.
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the per-axis speed caps.
    pub fn with_max_speed(mut self, max_speed: Vec2) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Sets the per-tick gravity.
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Bounding rectangle in world space, derived from the anchor.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.position.x - self.width as f32 * self.origin.x,
            self.position.y - self.height as f32 * self.origin.y,
            self.width as f32,
            self.height as f32,
        )
    }

    /// Adds gravity to the downward velocity, capped at `max_speed.y`.
    pub fn apply_gravity(&mut self) {
        self.velocity.y = (self.velocity.y + self.gravity).min(self.max_speed.y);
    }

    /// Advances the body one tick with no collision response: gravity,
    /// then the grounded horizontal speed clamp, then
    /// `position += velocity`. This is a pure prediction step; callers
    /// that need collision use [`resolve::step`](crate::resolve::step),
    /// which interleaves the axis passes with the displacement instead of
    /// applying it in one go.
    pub fn integrate(&mut self) {
        self.apply_gravity();
        if self.grounded {
            self.velocity.x = self.velocity.x.clamp(-self.max_speed.x, self.max_speed.x);
        }
        self.position += self.velocity;
    }
}
