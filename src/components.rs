use crate::teleport::TeleporterId;
use glam::Vec2;

/// Position component - grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// World-space position of a marker, with `(0, 0)` at the grid centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldPosition(pub Vec2);

/// Where the player appears when entering the level
#[derive(Debug, Clone, Copy)]
pub struct PlayerStart;

/// Stepping here leads to the next floor
#[derive(Debug, Clone, Copy)]
pub struct Exit;

/// Monster spawn point
#[derive(Debug, Clone, Copy)]
pub struct EncounterSpawner;

/// One end of a teleporter pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Teleporter {
    pub id: TeleporterId,
    /// World-space position of the other end
    pub destination: Vec2,
}

/// Visual link between both ends of a pair, spawned once per pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeleporterLink {
    pub id: TeleporterId,
    pub from: Vec2,
    pub to: Vec2,
}

impl TeleporterLink {
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}
