//! Hopper Physics
//!
//! Tile-grid collision for a 2D side-scrolling platformer:
//!
//! - [`TileMap`]: fixed-size grid of [`Tile`]s with total accessors
//!   (out-of-bounds reads are [`Tile::Air`], writes are ignored)
//! - [`Body`]: a moving rectangle with an anchor origin, per-axis speed
//!   caps and per-tick gravity
//! - [`resolve`]: the axis-separated resolver; [`resolve::step`] is the
//!   one-tick move-then-push-out entry point
//! - [`SoundCue`]/[`CueSink`]: fire-and-forget audio notifications,
//!   injected so the core never owns an audio backend
//!
//! Everything here runs at a fixed tick rate; velocities and gravity are
//! expressed in pixels per tick.

pub mod body;
pub mod cue;
pub mod resolve;
pub mod tilemap;

// Re-export commonly used types
pub use body::Body;
pub use cue::{CueSink, NullCues, SoundCue};
pub use tilemap::{Tile, TileMap};
