//! Level container and RON level file loading

use crate::camera::Camera;
use crate::entity::{Entity, EntityKey, EntityKind};
use crate::player::Player;
use crate::tuning::Tuning;
use hopper_input::Pad;
use hopper_math::Vec2;
use hopper_physics::{CueSink, TileMap};
use serde::{Serialize, Deserialize};
use slotmap::SlotMap;
use std::fs;
use std::io;
use std::path::Path;

/// A running level: grid, player, entity arena, camera.
pub struct Level {
    pub map: TileMap,
    pub player: Player,
    pub entities: SlotMap<EntityKey, Entity>,
    pub camera: Camera,
}

impl Level {
    pub fn new(
        map: TileMap,
        player_spawn: Vec2,
        tuning: Tuning,
        view_width: i32,
        view_height: i32,
    ) -> Self {
        Self {
            map,
            player: Player::new(player_spawn, tuning),
            entities: SlotMap::with_key(),
            camera: Camera::new(view_width, view_height),
        }
    }

    /// Adds an entity, returning its stable key.
    pub fn spawn(&mut self, kind: EntityKind, position: Vec2) -> EntityKey {
        self.entities.insert(Entity::spawn(kind, position))
    }

    /// Removes an entity. The key is dead afterwards; lookups with it
    /// return `None` even after the slot is reused.
    pub fn despawn(&mut self, key: EntityKey) -> Option<Entity> {
        self.entities.remove(key)
    }

    pub fn entity(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    pub fn entity_mut(&mut self, key: EntityKey) -> Option<&mut Entity> {
        self.entities.get_mut(key)
    }

    /// Runs one simulation tick in fixed order: player (movement,
    /// collision, pose), then entities, then the camera against the
    /// player's resolved position.
    pub fn update(&mut self, pad: &Pad, cues: &mut dyn CueSink) {
        self.player.update(pad, &self.map, cues);
        for entity in self.entities.values_mut() {
            entity.update(&self.map, cues);
        }
        self.camera.follow(self.player.body.position, &self.map);
    }
}

/// Serializable level description, stored as RON.
///
/// Tile rows hold one character per cell: `#` solid, `-` one-way
/// platform, anything else air.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LevelData {
    pub name: String,
    #[serde(default = "default_tile_size")]
    pub tile_size: i32,
    pub rows: Vec<String>,
    pub player_spawn: Vec2,
    #[serde(default)]
    pub spawns: Vec<EntitySpawn>,
}

fn default_tile_size() -> i32 {
    16
}

/// One entity placement inside a [`LevelData`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct EntitySpawn {
    pub kind: EntityKind,
    pub position: Vec2,
}

impl LevelData {
    /// Reads and parses a level file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LevelLoadError> {
        let contents = fs::read_to_string(path)?;
        let data = ron::from_str(&contents)?;
        Ok(data)
    }

    /// Builds a running [`Level`] from this description.
    pub fn instantiate(&self, tuning: Tuning, view_width: i32, view_height: i32) -> Level {
        let map = TileMap::from_rows(&self.rows, self.tile_size);
        let mut level = Level::new(map, self.player_spawn, tuning, view_width, view_height);
        for spawn in &self.spawns {
            level.spawn(spawn.kind, spawn.position);
        }
        log::info!(
            "Loaded level '{}': {}x{} tiles, {} entities",
            self.name,
            level.map.width(),
            level.map.height(),
            level.entities.len()
        );
        level
    }
}

/// Error loading a level file
#[derive(Debug)]
pub enum LevelLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for LevelLoadError {
    fn from(e: io::Error) -> Self {
        LevelLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for LevelLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        LevelLoadError::Parse(e)
    }
}

impl std::fmt::Display for LevelLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelLoadError::Io(e) => write!(f, "IO error: {}", e),
            LevelLoadError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for LevelLoadError {}
