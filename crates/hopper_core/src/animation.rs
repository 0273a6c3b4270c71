//! Animation pose selection for the player sprite

use hopper_input::InputSnapshot;
use hopper_physics::Body;

/// What the player should look like this tick.
///
/// Pose variants carry their sub-selection (rising vs falling, idle vs
/// looking up) so the renderer receives semantic state, not sprite
/// indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Animation {
    #[default]
    Idle,
    /// Standing still with the up-axis held.
    LookUp,
    Walk,
    /// Grounded with input opposing the direction of travel.
    Skid,
    Crouch,
    /// Airborne and rising.
    Jump,
    /// Airborne and descending.
    Fall,
}

/// Selects the pose for an already-resolved body. First match wins:
/// crouch, airborne, skid, walk, then idle.
pub fn select(body: &Body, input: &InputSnapshot, crouching: bool) -> Animation {
    if crouching {
        return Animation::Crouch;
    }
    if !body.grounded {
        return if body.velocity.y > 0.0 {
            Animation::Fall
        } else {
            Animation::Jump
        };
    }
    if input.h as f32 * body.velocity.x < 0.0 {
        return Animation::Skid;
    }
    if body.velocity.x != 0.0 {
        return Animation::Walk;
    }
    if input.v < 0 {
        Animation::LookUp
    } else {
        Animation::Idle
    }
}
