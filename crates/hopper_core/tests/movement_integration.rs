//! Integration tests for the movement pipeline
//!
//! These tests drive [`Level::update`] end to end and verify:
//! 1. Bodies rest on and land on tile tops without penetrating solids
//! 2. Sweeping into walls stops cleanly at any approach speed
//! 3. Jump arcs respond to button hold time and raise sound cues
//! 4. One-way platforms catch falling bodies but never rising ones
//! 5. Entities simulate inside the level and the camera tracks the player

use hopper_core::{
    Buttons, EntityKind, InputSnapshot, Level, NullCues, Pad, SoundCue, Tile, TileMap, Tuning,
    Vec2,
};

const FLAT_ROWS: [&str; 14] = [
    "........................",
    "........................",
    "........................",
    "........................",
    "........................",
    "........................",
    "........................",
    "........................",
    "........................",
    "........................",
    "........................",
    "........................",
    "........................",
    "########################",
];

/// A 384x224 arena with a full-width floor whose top edge is y=208,
/// player spawned standing on it.
fn flat_level() -> Level {
    let map = TileMap::from_rows(&FLAT_ROWS, 16);
    Level::new(map, Vec2::new(64.0, 208.0), Tuning::default(), 256, 224)
}

/// One empty-input tick so the spawn snap runs and `grounded` is set.
fn settle(level: &mut Level, pad: &mut Pad) {
    pad.push(InputSnapshot::default());
    level.update(pad, &mut NullCues);
    assert!(level.player.body.grounded, "player should settle onto the floor");
}

fn assert_no_solid_overlap(level: &Level) {
    let rect = level.player.body.rect();
    for y in 0..level.map.height() {
        for x in 0..level.map.width() {
            if level.map.get(x, y) == Tile::Solid {
                assert!(
                    !rect.overlaps(&level.map.rect_of(x, y)),
                    "player rect {:?} overlaps solid tile ({}, {})",
                    rect,
                    x,
                    y
                );
            }
        }
    }
}

// ==================== Resting and Landing ====================

/// Test that a body standing on the floor stays put, tick after tick
#[test]
fn test_player_rests_exactly_on_floor() {
    let mut level = flat_level();
    let mut pad = Pad::new();
    for _ in 0..60 {
        pad.push(InputSnapshot::default());
        level.update(&pad, &mut NullCues);
        assert_eq!(
            level.player.body.position,
            Vec2::new(64.0, 208.0),
            "resting position must not drift"
        );
    }
    assert!(level.player.body.grounded);
    assert_eq!(level.player.body.velocity.y, 0.0);
}

/// Test that a falling body caps at terminal speed and lands flush
#[test]
fn test_fall_caps_speed_and_lands_on_tile_top() {
    let map = TileMap::from_rows(&FLAT_ROWS, 16);
    let mut level = Level::new(map, Vec2::new(64.0, 48.0), Tuning::default(), 256, 224);
    let mut pad = Pad::new();

    let mut max_fall = 0.0f32;
    let mut ticks = 0;
    while !level.player.body.grounded && ticks < 100 {
        pad.push(InputSnapshot::default());
        level.update(&pad, &mut NullCues);
        max_fall = max_fall.max(level.player.body.velocity.y);
        ticks += 1;
    }

    assert!(level.player.body.grounded, "player should land within 100 ticks");
    assert_eq!(
        level.player.body.position.y, 208.0,
        "bottom edge must sit exactly on the tile top"
    );
    assert_eq!(max_fall, 5.0, "fall speed should reach the cap and never exceed it");
}

// ==================== Sweep Integrity ====================

/// Test that running full speed into a wall never leaves the body
/// overlapping a solid tile after any tick
#[test]
fn test_running_into_wall_never_overlaps_solids() {
    let mut rows = vec!["....................#..."; 13];
    rows.push("########################");
    let map = TileMap::from_rows(&rows, 16);
    let mut level = Level::new(map, Vec2::new(64.0, 208.0), Tuning::default(), 256, 224);
    let mut pad = Pad::new();
    settle(&mut level, &mut pad);

    for _ in 0..160 {
        pad.push(InputSnapshot::default().with_h(1).with_buttons(Buttons::B));
        level.update(&pad, &mut NullCues);
        assert_no_solid_overlap(&level);
    }

    // Pinned against the wall at tile x=320, body right edge touching it.
    assert_eq!(level.player.body.position.x, 316.0);
    assert_eq!(level.player.body.velocity.x, 0.0);
    assert!(level.player.body.grounded);
}

// ==================== Jumping ====================

/// Runs a standing jump holding the button for `hold_ticks`, returning
/// the apex (smallest y reached before landing again).
fn jump_apex(hold_ticks: u32) -> f32 {
    let mut level = flat_level();
    let mut pad = Pad::new();
    settle(&mut level, &mut pad);

    let mut apex = level.player.body.position.y;
    for tick in 0..200 {
        let snap = if tick < hold_ticks {
            InputSnapshot::default().with_buttons(Buttons::A)
        } else {
            InputSnapshot::default()
        };
        pad.push(snap);
        level.update(&pad, &mut NullCues);
        apex = apex.min(level.player.body.position.y);
        if tick > 0 && level.player.body.grounded {
            break;
        }
    }
    assert!(level.player.body.grounded, "jump should land within 200 ticks");
    apex
}

/// Test that holding the jump button carries the arc higher than a tap
#[test]
fn test_held_jump_rises_higher_than_tapped() {
    let tapped = jump_apex(3);
    let held = jump_apex(40);
    assert!(tapped < 208.0, "tapped jump should leave the ground. Apex: {}", tapped);
    assert!(
        held < tapped,
        "held jump should rise higher. Held apex: {}, tapped apex: {}",
        held,
        tapped
    );
}

/// Test that a jump into a low ceiling cues the bump and drops the player
#[test]
fn test_jump_into_ceiling_cues_bump() {
    let rows = [
        "........................",
        "........................",
        "........................",
        "........................",
        "........................",
        "........................",
        "........................",
        "........................",
        "........................",
        "..####..................",
        "........................",
        "........................",
        "........................",
        "########################",
    ];
    let map = TileMap::from_rows(&rows, 16);
    let mut level = Level::new(map, Vec2::new(64.0, 208.0), Tuning::default(), 256, 224);
    let mut pad = Pad::new();
    settle(&mut level, &mut pad);

    let mut cues: Vec<SoundCue> = Vec::new();
    for _ in 0..60 {
        pad.push(InputSnapshot::default().with_buttons(Buttons::A));
        level.update(&pad, &mut cues);
    }

    assert_eq!(cues, vec![SoundCue::Jump, SoundCue::Bump]);
    assert_eq!(
        level.player.body.position.y, 208.0,
        "player should fall back to the floor after the bump"
    );
    assert!(level.player.body.grounded);
}

// ==================== Running ====================

/// Test that the run modifier tops out at exactly the run speed
#[test]
fn test_run_reaches_exact_top_speed() {
    let mut level = flat_level();
    let mut pad = Pad::new();
    settle(&mut level, &mut pad);

    for _ in 0..60 {
        pad.push(InputSnapshot::default().with_h(1).with_buttons(Buttons::B));
        level.update(&pad, &mut NullCues);
    }

    assert_eq!(level.player.body.velocity.x, 2.25);
    // 24 ticks of ramp and 36 at full speed, every step exact in f32.
    assert_eq!(level.player.body.position.x, 173.125);
}

// ==================== One-way Platforms ====================

/// Test that a jump passes up through a platform and lands on top of it
#[test]
fn test_jump_through_platform_lands_on_top() {
    let rows = [
        "........................",
        "........................",
        "........................",
        "........................",
        "........................",
        "........................",
        "........................",
        "........................",
        "........................",
        "........................",
        "..------................",
        "........................",
        "........................",
        "########################",
    ];
    let map = TileMap::from_rows(&rows, 16);
    let mut level = Level::new(map, Vec2::new(64.0, 208.0), Tuning::default(), 256, 224);
    let mut pad = Pad::new();
    settle(&mut level, &mut pad);

    let mut cues: Vec<SoundCue> = Vec::new();
    let mut ticks = 0;
    loop {
        pad.push(InputSnapshot::default().with_buttons(Buttons::A));
        level.update(&pad, &mut cues);
        ticks += 1;
        if ticks > 1 && level.player.body.grounded {
            break;
        }
        assert!(ticks < 200, "jump should come back down");
    }

    // Landed on the platform's top edge (y=160), not back on the floor,
    // and the rising head never bumped.
    assert_eq!(level.player.body.position.y, 160.0);
    assert_eq!(cues, vec![SoundCue::Jump]);
}

// ==================== Entities and Camera ====================

/// Test that spawned entities fall and settle while hazards stay fixed
#[test]
fn test_entities_settle_while_hazards_stay_fixed() {
    let mut level = flat_level();
    let slime = level.spawn(EntityKind::Slime, Vec2::new(200.0, 100.0));
    let thorn = level.spawn(EntityKind::Thorn, Vec2::new(120.0, 80.0));

    let mut pad = Pad::new();
    for _ in 0..100 {
        pad.push(InputSnapshot::default());
        level.update(&pad, &mut NullCues);
    }

    let slime = level.entity(slime).unwrap();
    assert!(slime.body.grounded, "slime should land on the floor");
    assert_eq!(slime.body.position.y, 208.0);

    let thorn = level.entity(thorn).unwrap();
    assert_eq!(
        thorn.body.position,
        Vec2::new(120.0, 80.0),
        "hazards do not simulate"
    );
}

/// Test that the camera tracks the player and clamps at both level edges
#[test]
fn test_camera_tracks_and_clamps_to_level_edges() {
    let mut level = flat_level();
    let mut pad = Pad::new();

    // Near the left edge the view pins at zero.
    settle(&mut level, &mut pad);
    assert_eq!((level.camera.x, level.camera.y), (0, 0));

    // Mid-level the player is centered.
    level.player.body.position.x = 200.0;
    pad.push(InputSnapshot::default());
    level.update(&pad, &mut NullCues);
    assert_eq!(level.camera.x, 72);

    // Near the right edge the view pins at level width minus view width.
    level.player.body.position.x = 350.0;
    pad.push(InputSnapshot::default());
    level.update(&pad, &mut NullCues);
    assert_eq!(level.camera.x, 128);
}
