//! Gameplay core for the Hopper engine
//!
//! This crate ties the support crates together into a playable simulation:
//!
//! - [`Player`] - Input-driven avatar with acceleration, jumping, crouching
//! - [`Tuning`] - Movement constants, all expressed per tick
//! - [`Animation`] - Pose selected from physics state each tick
//! - [`Entity`] - Non-player actor in a level
//! - [`EntityKey`] - Generational key to an entity in its level
//! - [`Level`] - Running level: grid, player, entities, camera
//! - [`LevelData`] - Loadable/saveable level description
//! - [`Camera`] - Integer viewport tracking the player

mod animation;
mod camera;
mod entity;
mod level;
mod player;
mod tuning;

pub use animation::Animation;
pub use camera::Camera;
pub use entity::{Entity, EntityKey, EntityKind};
pub use level::{EntitySpawn, Level, LevelData, LevelLoadError};
pub use player::Player;
pub use tuning::{Tuning, TICKS_PER_SECOND};

// Re-export commonly used types from the support crates for convenience
pub use hopper_input::{Buttons, InputSnapshot, Pad};
pub use hopper_math::{Rect, Vec2};
pub use hopper_physics::{Body, CueSink, NullCues, SoundCue, Tile, TileMap};
