//! Side-scrolling camera with level-edge clamping

use hopper_math::Vec2;
use hopper_physics::TileMap;

/// A viewport clamped inside the level bounds.
///
/// Positions are whole pixels, matching what a renderer consumes. The
/// camera keeps no state between ticks: [`follow`](Self::follow) fully
/// recomputes the position, so it is idempotent and indifferent to when
/// in the tick it runs, as long as the target has already been resolved.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    /// Top-left corner of the view in world pixels.
    pub x: i32,
    pub y: i32,
    pub view_width: i32,
    pub view_height: i32,
}

impl Camera {
    pub fn new(view_width: i32, view_height: i32) -> Self {
        Self {
            x: 0,
            y: 0,
            view_width,
            view_height,
        }
    }

    /// Centers the view on `target`, then clamps so the view never shows
    /// past the level edges.
    pub fn follow(&mut self, target: Vec2, map: &TileMap) {
        let mut cx = target.x as i32;
        let mut cy = target.y as i32;

        let level_w = map.pixel_width();
        let level_h = map.pixel_height();
        let half_w = self.view_width / 2;
        let half_h = self.view_height / 2;

        if cx < half_w {
            cx = half_w;
        } else if cx > level_w - half_w {
            cx = level_w - half_w;
        }
        if cy < half_h {
            cy = half_h;
        } else if cy > level_h - half_h {
            cy = level_h - half_h;
        }

        self.x = cx - half_w;
        self.y = cy - half_h;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_map() -> TileMap {
        // 768x256 pixels.
        TileMap::new(48, 16, 16)
    }

    #[test]
    fn test_centers_on_target() {
        let map = level_map();
        let mut camera = Camera::new(256, 224);
        camera.follow(Vec2::new(400.0, 128.0), &map);
        assert_eq!(camera.x, 272);
        assert_eq!(camera.y, 16);
    }

    #[test]
    fn test_clamps_at_level_start() {
        let map = level_map();
        let mut camera = Camera::new(256, 224);
        camera.follow(Vec2::new(50.0, 40.0), &map);
        assert_eq!(camera.x, 0);
        assert_eq!(camera.y, 0);
    }

    #[test]
    fn test_clamps_at_level_end() {
        let map = level_map();
        let mut camera = Camera::new(256, 224);
        camera.follow(Vec2::new(760.0, 250.0), &map);
        assert_eq!(camera.x, 768 - 256);
        assert_eq!(camera.y, 256 - 224);
    }

    #[test]
    fn test_follow_is_idempotent() {
        let map = level_map();
        let mut camera = Camera::new(256, 224);
        camera.follow(Vec2::new(400.0, 128.0), &map);
        let (x, y) = (camera.x, camera.y);
        camera.follow(Vec2::new(400.0, 128.0), &map);
        assert_eq!((camera.x, camera.y), (x, y));
    }
}
