//! Player movement controller

use crate::animation::{self, Animation};
use crate::tuning::Tuning;
use hopper_input::{Buttons, Pad};
use hopper_math::Vec2;
use hopper_physics::{resolve, Body, CueSink, SoundCue, TileMap};

const WIDTH: i32 = 8;
const STAND_HEIGHT: i32 = 18;
const CROUCH_HEIGHT: i32 = 10;

/// The player character: body, movement tuning, and presentation state.
pub struct Player {
    pub body: Body,
    pub tuning: Tuning,
    /// Facing, true when looking left. Follows the last directional
    /// input that drove the body.
    pub flip_x: bool,
    /// Crouch latch, re-evaluated only while grounded. A crouch jump
    /// therefore keeps the short box until landing.
    pub crouching: bool,
    /// Pose selected at the end of the most recent tick.
    pub animation: Animation,
    /// Frame counter for the renderer. Resets when the pose changes and
    /// advances only while walking, faster at higher speeds.
    pub image_index: f32,
}

impl Player {
    pub fn new(position: Vec2, tuning: Tuning) -> Self {
        Self {
            body: Body::new(position, WIDTH, STAND_HEIGHT),
            tuning,
            flip_x: false,
            crouching: false,
            animation: Animation::Idle,
            image_index: 0.0,
        }
    }

    /// Runs one full tick: movement decisions, the physics step with both
    /// resolution passes, then pose selection against the resolved body.
    pub fn update(&mut self, pad: &Pad, map: &TileMap, cues: &mut dyn CueSink) {
        self.movement(pad, cues);
        resolve::step(&mut self.body, map, cues);
        self.animate(pad);
    }

    fn movement(&mut self, pad: &Pad, cues: &mut dyn CueSink) {
        let t = self.tuning;
        let body = &mut self.body;
        let input = pad.current;

        // Gravity: full while falling, or while rising with the jump
        // button released. Letting go early shortens the arc.
        body.gravity = if body.velocity.y > 0.0
            || (body.velocity.y < 0.0 && !pad.held(Buttons::A))
        {
            t.grav_fall
        } else {
            t.grav_jump
        };

        // Jump: edge-triggered, grounded only. Horizontal speed feeds
        // the impulse, so running jumps rise higher.
        if body.grounded && pad.pressed(Buttons::A) {
            body.velocity.y = -(t.jump_impulse + (body.velocity.x / t.run_speed).abs());
            cues.play(SoundCue::Jump);
        }

        // Crouch latch. The box shrinks from the top; the anchor stays
        // on the ground.
        if body.grounded {
            self.crouching = input.v > 0;
        }
        body.height = if self.crouching {
            CROUCH_HEIGHT
        } else {
            STAND_HEIGHT
        };

        // Crouching swallows directional input for the tick.
        let h = if self.crouching { 0.0 } else { input.h as f32 };

        // Signed speed along the input direction; negative means the
        // input opposes travel.
        let hx = h * body.velocity.x;

        // Cap selection: run speed only with the modifier held, already
        // at walk speed, and pushing with the direction of travel.
        // Airborne against the direction of travel the cap drops to
        // zero, so air control can never build speed against momentum.
        let max_speed = if body.grounded || hx >= 0.0 {
            if pad.held(Buttons::B) && body.velocity.x.abs() >= t.walk_speed && hx > 0.0 {
                t.run_speed
            } else {
                t.walk_speed
            }
        } else {
            0.0
        };

        if h != 0.0 && hx < max_speed {
            self.flip_x = h < 0.0;
            if hx > 0.0 {
                body.velocity.x += h * t.accel;
            } else if body.grounded {
                // Skid: braking traction rises with the speed being
                // shed.
                let skid_factor = if body.velocity.x.abs() <= t.walk_speed {
                    1.0
                } else if body.velocity.x.abs() < t.run_speed {
                    2.0
                } else {
                    4.0
                };
                body.velocity.x += h * t.turn * skid_factor;
            } else if hx > -t.walk_speed {
                body.velocity.x += h * t.turn;
            } else {
                body.velocity.x += h * (t.turn_air * 2.0);
            }
        } else if h == 0.0 && body.velocity.x != 0.0 {
            let decel = if body.grounded { t.decel } else { t.decel_air };
            if body.velocity.x > 0.0 {
                body.velocity.x = (body.velocity.x - decel).max(0.0);
            } else {
                body.velocity.x = (body.velocity.x + decel).min(0.0);
            }
        }
    }

    fn animate(&mut self, pad: &Pad) {
        let next = animation::select(&self.body, &pad.current, self.crouching);
        if next != self.animation {
            self.animation = next;
            self.image_index = 0.0;
        }
        if self.animation == Animation::Walk {
            self.image_index += (self.body.velocity.x.abs() / 6.0).max(0.125);
        }
    }
}
