//! Hopper Input
//!
//! Device-independent input state for the movement core:
//!
//! - [`Buttons`]: digital button set
//! - [`InputSnapshot`]: one tick of axes + buttons
//! - [`Pad`]: current/previous snapshot pair with edge detection
//!
//! The crate deliberately knows nothing about keyboards or gamepads; the
//! host samples its devices into an [`InputSnapshot`] once per tick.

pub mod pad;

pub use pad::{Buttons, InputSnapshot, Pad};
