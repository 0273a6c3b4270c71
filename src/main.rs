//! Hopper - tile-based platformer simulation
//!
//! Runs a scripted input sequence through a level and logs what the
//! player does. Hosts that want a window render on top of the same
//! crates; this binary stays headless.

mod config;

use hopper_core::{Level, LevelData, TICKS_PER_SECOND};
use hopper_input::{Buttons, InputSnapshot, Pad};
use hopper_math::Vec2;
use hopper_physics::{CueSink, SoundCue};

use config::AppConfig;

/// Cue sink that forwards sound cues to the log.
struct LogCues;

impl CueSink for LogCues {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("cue: {:?}", cue);
    }
}

/// Fallback level used when the configured level file cannot be read.
fn builtin_level_data() -> LevelData {
    let rows = [
        "........................",
        "........................",
        "........................",
        "........................",
        "..........#.............",
        "..........#.............",
        "..........#.............",
        "......#####.............",
        "..######................",
        "...----.................",
        "#...................####",
        ".................###....",
        "...............##.......",
        "...............#........",
        "########.....##.........",
        "........#####...........",
    ];
    LevelData {
        name: "builtin".to_string(),
        tile_size: 16,
        rows: rows.iter().map(|row| row.to_string()).collect(),
        player_spawn: Vec2::new(32.0, 224.0),
        spawns: Vec::new(),
    }
}

/// One scripted stretch of held input.
struct Segment {
    ticks: u32,
    input: InputSnapshot,
    label: &'static str,
}

fn run_script(level: &mut Level, script: &[Segment]) {
    let mut pad = Pad::new();
    let mut cues = LogCues;
    let mut last_pose = level.player.animation;
    let mut tick = 0u32;

    for segment in script {
        for _ in 0..segment.ticks {
            pad.push(segment.input);
            level.update(&pad, &mut cues);
            tick += 1;

            if level.player.animation != last_pose {
                last_pose = level.player.animation;
                log::debug!("t={:04} pose -> {:?}", tick, last_pose);
            }
        }

        let body = &level.player.body;
        log::info!(
            "t={:04} {:<12} pos=({:7.2}, {:7.2}) vel=({:5.2}, {:5.2}) grounded={}",
            tick,
            segment.label,
            body.position.x,
            body.position.y,
            body.velocity.x,
            body.velocity.y,
            body.grounded
        );
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting Hopper");

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    // Load the level from the configured path
    let data = LevelData::load(&config.level.path).unwrap_or_else(|e| {
        log::warn!(
            "Failed to load level '{}': {}. Using the built-in level.",
            config.level.path,
            e
        );
        builtin_level_data()
    });

    let mut level = data.instantiate(
        config.tuning,
        config.display.view_width,
        config.display.view_height,
    );

    // A short demonstration run: settle, walk, run, jump over the gap,
    // brake into a skid, duck, stop.
    let script = [
        Segment {
            ticks: 30,
            input: InputSnapshot::default(),
            label: "settle",
        },
        Segment {
            ticks: 90,
            input: InputSnapshot::default().with_h(1),
            label: "walk right",
        },
        Segment {
            ticks: 60,
            input: InputSnapshot::default().with_h(1).with_buttons(Buttons::B),
            label: "run right",
        },
        Segment {
            ticks: 20,
            input: InputSnapshot::default()
                .with_h(1)
                .with_buttons(Buttons::A | Buttons::B),
            label: "running jump",
        },
        Segment {
            ticks: 60,
            input: InputSnapshot::default().with_h(1).with_buttons(Buttons::B),
            label: "land and run",
        },
        Segment {
            ticks: 30,
            input: InputSnapshot::default().with_h(-1),
            label: "skid back",
        },
        Segment {
            ticks: 30,
            input: InputSnapshot::default().with_v(1),
            label: "crouch",
        },
        Segment {
            ticks: 30,
            input: InputSnapshot::default(),
            label: "idle out",
        },
    ];

    let total: u32 = script.iter().map(|segment| segment.ticks).sum();
    log::info!(
        "Running a {}-tick script ({:.1}s at {} ticks/s)",
        total,
        total as f32 / TICKS_PER_SECOND as f32,
        TICKS_PER_SECOND
    );
    run_script(&mut level, &script);

    let body = &level.player.body;
    log::info!(
        "Finished: player at ({:.2}, {:.2}), pose {:?}, camera at ({}, {})",
        body.position.x,
        body.position.y,
        level.player.animation,
        level.camera.x,
        level.camera.y
    );
}
