//! Tile grid for collision queries

use hopper_math::Rect;

/// Collision class of one grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tile {
    /// Empty space, no collision.
    #[default]
    Air,
    /// One-way platform: stops descending bodies, passable from below and
    /// from the sides.
    Platform,
    /// Blocks movement in all four directions.
    Solid,
}

/// A fixed-size grid of [`Tile`]s with a uniform edge length in pixels.
///
/// Dimensions are set once at construction and never change. Every
/// accessor is total: reads outside the grid return [`Tile::Air`], writes
/// outside it do nothing, and [`rect_of`](Self::rect_of) collapses to a
/// zero-area rectangle. Collision sweeps rely on this to probe one tile
/// past the edges without bounds checks.
#[derive(Clone, Debug)]
pub struct TileMap {
    width: i32,
    height: i32,
    tile_size: i32,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Creates a grid of the given dimensions filled with [`Tile::Air`].
    pub fn new(width: i32, height: i32, tile_size: i32) -> Self {
        let cells = (width.max(0) * height.max(0)) as usize;
        Self {
            width,
            height,
            tile_size,
            tiles: vec![Tile::Air; cells],
        }
    }

    /// Builds a grid from rows of legend characters: `#` is solid, `-` is
    /// a one-way platform, anything else is air. The grid is as wide as
    /// the longest row; short rows are padded with air.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], tile_size: i32) -> Self {
        let width = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .max()
            .unwrap_or(0) as i32;
        let mut map = Self::new(width, rows.len() as i32, tile_size);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.as_ref().chars().enumerate() {
                let tile = match ch {
                    '#' => Tile::Solid,
                    '-' => Tile::Platform,
                    _ => Tile::Air,
                };
                map.set(x as i32, y as i32, tile);
            }
        }
        map
    }

    /// Grid width in tiles.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in tiles.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Edge length of one tile in pixels.
    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// Level width in pixels.
    pub fn pixel_width(&self) -> i32 {
        self.width * self.tile_size
    }

    /// Level height in pixels.
    pub fn pixel_height(&self) -> i32 {
        self.height * self.tile_size
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Returns the tile at `(x, y)`, or [`Tile::Air`] outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Tile {
        if self.in_bounds(x, y) {
            self.tiles[(y * self.width + x) as usize]
        } else {
            Tile::Air
        }
    }

    /// Places a tile at `(x, y)`. Writes outside the grid are ignored.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if self.in_bounds(x, y) {
            self.tiles[(y * self.width + x) as usize] = tile;
        }
    }

    /// World-space rectangle of the tile at `(x, y)`, or a zero-area
    /// rectangle outside the grid (which overlaps nothing).
    pub fn rect_of(&self, x: i32, y: i32) -> Rect {
        if self.in_bounds(x, y) {
            let ts = self.tile_size as f32;
            Rect::new(x as f32 * ts, y as f32 * ts, ts, ts)
        } else {
            Rect::ZERO
        }
    }
}
