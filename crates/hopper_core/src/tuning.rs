//! Movement tuning constants

use serde::{Serialize, Deserialize};

/// Fixed simulation rate.
///
/// Every constant in [`Tuning`] is expressed in pixels (or pixels per
/// tick, or per tick squared) at this rate. A variable-timestep loop
/// cannot reuse them by dividing through `dt`; they would all need
/// re-deriving.
pub const TICKS_PER_SECOND: u32 = 60;

/// Movement constants for a player archetype.
///
/// These are configuration, not state: the controller reads them every
/// tick and never writes them. Defaults reproduce the feel the game was
/// tuned around.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Top speed without the run modifier.
    pub walk_speed: f32,
    /// Top speed with the run modifier held.
    pub run_speed: f32,
    /// Base upward impulse of a jump. The actual impulse adds
    /// `|xspd| / run_speed` on top, so running jumps go higher.
    pub jump_impulse: f32,
    /// Acceleration while input matches the direction of travel.
    pub accel: f32,
    /// Deceleration per tick with no input, on the ground.
    pub decel: f32,
    /// Deceleration per tick with no input, airborne.
    pub decel_air: f32,
    /// Turn rate while reversing against the direction of travel.
    pub turn: f32,
    /// Turn rate for hard reversals while airborne.
    pub turn_air: f32,
    /// Gravity while ascending with the jump button held.
    pub grav_jump: f32,
    /// Gravity while falling, or ascending after the button is released.
    pub grav_fall: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            walk_speed: 1.25,
            run_speed: 2.25,
            jump_impulse: 5.0,
            accel: 0.09375,
            decel: 0.0625,
            decel_air: 0.0125,
            turn: 0.15625,
            turn_air: 0.15625,
            grav_jump: 0.1875,
            grav_fall: 0.375,
        }
    }
}
