//! Axis-separated collision resolution.
//!
//! Bodies move first and get pushed out afterwards: [`step`] applies the
//! X displacement, resolves it, then applies the Y displacement and
//! resolves that, so the Y pass always probes the X-corrected rectangle.
//! Each pass slides zero-extent probe rectangles along the body's edges
//! and scans the tile range the body spans with one tile of margin.
//!
//! The single-step sweep is sound only while per-tick displacement stays
//! below one tile edge. That is an invariant of the tuning constants
//! (speed caps at most the tile size), not something the resolver checks.

use crate::body::Body;
use crate::cue::{CueSink, SoundCue};
use crate::tilemap::{Tile, TileMap};
use hopper_math::Rect;

/// Pushes the body out of solid tiles along the X axis.
///
/// Probes and tile spans are computed once from the rectangle at entry.
/// Every overlapping tile in the scanned range may snap the body; the
/// last one scanned wins. Platforms never block horizontal movement.
pub fn resolve_x(body: &mut Body, map: &TileMap) {
    let rect = body.rect();
    let left_probe = Rect::new(rect.x, rect.y, 0.0, rect.h);
    let right_probe = Rect::new(rect.right(), rect.y, 0.0, rect.h);

    let ts = map.tile_size() as f32;
    let left = (rect.x / ts) as i32;
    let right = (rect.right() / ts) as i32;
    let top = (rect.y / ts) as i32;
    let bottom = (rect.bottom() / ts) as i32;

    for y in top - 1..=bottom + 1 {
        for x in left - 1..=left {
            if map.get(x, y) == Tile::Solid {
                let tile_rect = map.rect_of(x, y);
                if left_probe.overlaps(&tile_rect) {
                    body.position.x = tile_rect.right() + body.width as f32 * body.origin.x;
                    body.velocity.x = 0.0;
                }
            }
        }
        for x in right..=right + 1 {
            if map.get(x, y) == Tile::Solid {
                let tile_rect = map.rect_of(x, y);
                if right_probe.overlaps(&tile_rect) {
                    body.position.x = tile_rect.x - rect.w + body.width as f32 * body.origin.x;
                    body.velocity.x = 0.0;
                }
            }
        }
    }
}

/// Pushes the body out of tiles along the Y axis and re-derives
/// `grounded`.
///
/// `grounded` is reset before probing, so it is true after this call if
/// and only if the bottom probe rested on a tile this pass. The top probe
/// stops at solid tiles only and raises [`SoundCue::Bump`]; the bottom
/// probe stops at solids always and at platforms only while the body is
/// descending. Each probe returns on its first hit.
pub fn resolve_y(body: &mut Body, map: &TileMap, cues: &mut dyn CueSink) {
    body.grounded = false;

    let rect = body.rect();
    let top_probe = Rect::new(rect.x, rect.y, rect.w, 0.0);
    let bottom_probe = Rect::new(rect.x, rect.bottom(), rect.w, 0.0);

    let ts = map.tile_size() as f32;
    let left = (rect.x / ts) as i32;
    let right = (rect.right() / ts) as i32;
    let top = (rect.y / ts) as i32;
    let bottom = (rect.bottom() / ts) as i32;

    let descending = body.velocity.y >= 0.0;

    for x in left - 1..=right + 1 {
        for y in top - 1..=top {
            if map.get(x, y) == Tile::Solid {
                let tile_rect = map.rect_of(x, y);
                if top_probe.overlaps(&tile_rect) {
                    body.position.y = tile_rect.bottom() + body.height as f32 * body.origin.y;
                    body.velocity.y = 0.0;
                    cues.play(SoundCue::Bump);
                    return;
                }
            }
        }
        for y in bottom..=bottom + 1 {
            let tile = map.get(x, y);
            if tile == Tile::Solid || (tile == Tile::Platform && descending) {
                let tile_rect = map.rect_of(x, y);
                if bottom_probe.overlaps(&tile_rect) {
                    body.position.y = tile_rect.y - body.height as f32 * (1.0 - body.origin.y);
                    body.velocity.y = 0.0;
                    body.grounded = true;
                    return;
                }
            }
        }
    }
}

/// Advances a body one tick and resolves it against the grid.
///
/// Velocity preparation matches [`Body::integrate`]; the displacement is
/// then applied one axis at a time with its resolution pass in between.
pub fn step(body: &mut Body, map: &TileMap, cues: &mut dyn CueSink) {
    body.apply_gravity();
    if body.grounded {
        body.velocity.x = body.velocity.x.clamp(-body.max_speed.x, body.max_speed.x);
    }

    body.position.x += body.velocity.x;
    resolve_x(body, map);

    body.position.y += body.velocity.y;
    resolve_y(body, map, cues);
}
