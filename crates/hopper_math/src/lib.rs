//! Hopper Math Library
//!
//! Small 2D math primitives shared by the physics and gameplay crates.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with components x, y (y points down)
//! - [`Rect`] - axis-aligned rectangle with a strict overlap test
//!
//! All types are plain `Copy` data with serde support so they can appear
//! directly in level and configuration files.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
