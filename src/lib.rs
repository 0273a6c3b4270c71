//! Hopper: a tile-based platformer simulation
//!
//! The workspace splits into focused crates; this root crate ties them
//! together with configuration loading and the demo binary:
//!
//! - [`hopper_math`] - Vectors and rectangles
//! - [`hopper_physics`] - Bodies, tile grids, collision resolution
//! - [`hopper_input`] - Pad snapshots with edge detection
//! - [`hopper_core`] - Player, entities, levels, camera
//! - [`config`] - Layered configuration (files plus environment)

pub mod config;

pub use config::{AppConfig, ConfigError, DisplayConfig, LevelConfig};

// Re-export the member crates so hosts can depend on this crate alone
pub use hopper_core as core;
pub use hopper_input as input;
pub use hopper_math as math;
pub use hopper_physics as physics;
