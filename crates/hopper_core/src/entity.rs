//! Non-player entities simulated inside a level

use hopper_math::Vec2;
use hopper_physics::{resolve, Body, CueSink, TileMap};
use serde::{Serialize, Deserialize};
use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to an entity in a level's arena.
    ///
    /// Keys are generational: after an entity is despawned, lookups with
    /// its old key return `None` instead of aliasing whatever entity
    /// later reuses the slot.
    pub struct EntityKey;
}

/// Closed set of non-player entity kinds.
///
/// Behavior dispatches through a single `match` per operation, so adding
/// a kind makes the compiler point at every site that needs a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Small ground walker.
    Slime,
    /// Shelled walker, taller box.
    Snail,
    /// Stationary hazard; never moves, ignores gravity.
    Thorn,
}

impl EntityKind {
    /// Bounding box extents in pixels.
    pub fn size(&self) -> (i32, i32) {
        match self {
            EntityKind::Slime => (8, 6),
            EntityKind::Snail => (8, 12),
            EntityKind::Thorn => (16, 16),
        }
    }

    /// Whether this kind falls and rests on tiles.
    pub fn is_mobile(&self) -> bool {
        !matches!(self, EntityKind::Thorn)
    }
}

/// A non-player inhabitant of a level.
#[derive(Clone, Copy, Debug)]
pub struct Entity {
    pub kind: EntityKind,
    pub body: Body,
    /// Inactive entities keep their slot but skip updates.
    pub active: bool,
}

impl Entity {
    /// Creates an entity of `kind` anchored bottom-center at `position`.
    pub fn spawn(kind: EntityKind, position: Vec2) -> Self {
        let (width, height) = kind.size();
        Self {
            kind,
            body: Body::new(position, width, height),
            active: true,
        }
    }

    /// Runs one simulation tick.
    pub fn update(&mut self, map: &TileMap, cues: &mut dyn CueSink) {
        if !self.active {
            return;
        }
        match self.kind {
            EntityKind::Slime | EntityKind::Snail => resolve::step(&mut self.body, map, cues),
            EntityKind::Thorn => {}
        }
    }
}
