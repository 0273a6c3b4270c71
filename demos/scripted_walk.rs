//! Scripted Walk
//!
//! Drives the player through a small level with a canned input script
//! and prints what happens, no window required.
//!
//! This example shows:
//! - Building a Level from rows of tile characters
//! - Feeding InputSnapshots through a Pad, one per tick
//! - Walking, running, jumping and landing on a one-way platform
//! - Entities simulating alongside the player
//!
//! Run with: `cargo run --example scripted_walk`

use hopper_core::{EntityKind, Level, Tile, TileMap, Tuning};
use hopper_input::{Buttons, InputSnapshot, Pad};
use hopper_math::Vec2;
use hopper_physics::NullCues;

fn render_ascii(level: &Level) {
    let px = (level.player.body.position.x / 16.0) as i32;
    let py = ((level.player.body.position.y - 1.0) / 16.0) as i32;

    for y in 0..level.map.height() {
        let mut line = String::new();
        for x in 0..level.map.width() {
            let entity_here = level.entities.values().any(|e| {
                (e.body.position.x / 16.0) as i32 == x
                    && ((e.body.position.y - 1.0) / 16.0) as i32 == y
            });
            let ch = if (px, py) == (x, y) {
                'P'
            } else if entity_here {
                's'
            } else {
                match level.map.get(x, y) {
                    Tile::Solid => '#',
                    Tile::Platform => '-',
                    Tile::Air => '.',
                }
            };
            line.push(ch);
        }
        println!("{}", line);
    }
}

fn main() {
    env_logger::init();

    let rows = [
        "................",
        "................",
        "................",
        "................",
        "..........###...",
        "................",
        "....----........",
        "................",
        "................",
        "################",
    ];
    let map = TileMap::from_rows(&rows, 16);
    let mut level = Level::new(map, Vec2::new(24.0, 144.0), Tuning::default(), 256, 160);
    level.spawn(EntityKind::Slime, Vec2::new(200.0, 32.0));

    // (ticks, input) pairs fed to the pad in order.
    let script = [
        (20, InputSnapshot::default()),
        (40, InputSnapshot::default().with_h(1)),
        (16, InputSnapshot::default().with_h(1).with_buttons(Buttons::A)),
        (40, InputSnapshot::default().with_h(1)),
        (24, InputSnapshot::default()),
    ];

    let mut pad = Pad::new();
    let mut tick = 0;
    for (ticks, input) in script {
        for _ in 0..ticks {
            pad.push(input);
            level.update(&pad, &mut NullCues);
            tick += 1;

            if tick % 10 == 0 {
                let body = &level.player.body;
                println!(
                    "t={:3} pos=({:6.2}, {:6.2}) vel=({:5.2}, {:5.2}) {:?}",
                    tick,
                    body.position.x,
                    body.position.y,
                    body.velocity.x,
                    body.velocity.y,
                    level.player.animation
                );
            }
        }
    }

    println!();
    render_ascii(&level);
    println!(
        "\nFinished after {} ticks at ({:.2}, {:.2}).",
        tick, level.player.body.position.x, level.player.body.position.y
    );
}
