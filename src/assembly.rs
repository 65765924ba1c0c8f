//! Dungeon assembly - turns a generated grid into world-space markers.
//!
//! World space puts `(0, 0)` at the grid centre, one unit per tile. Every special tile
//! (start, exit, encounter, teleporter) becomes an entity the presentation layer can
//! instantiate a model for, and the gameplay queries are answered in world space.

use crate::components::{
    EncounterSpawner, Exit, PlayerStart, Position, Teleporter, TeleporterLink, WorldPosition,
};
use crate::config::DungeonConfig;
use crate::dungeon_gen;
use crate::error::Result;
use crate::grid::Grid;
use crate::tile::TileType;
use glam::Vec2;
use hecs::World;

/// One assembled dungeon level.
pub struct Dungeon {
    grid: Grid,
    pub world: World,
    pub player_start: Vec2,
    pub exit: Option<Vec2>,
    pub spawners: Vec<Vec2>,
}

impl Dungeon {
    /// Generate and assemble a level from a config.
    pub fn generate(config: &DungeonConfig) -> Result<Self> {
        let grid = dungeon_gen::generate(
            config.strategy,
            config.width,
            config.height,
            &config.options,
        )?;
        Ok(Self::assemble(grid))
    }

    /// Walk the grid once and spawn an entity per special tile.
    pub fn assemble(grid: Grid) -> Self {
        let mut dungeon = Self {
            grid,
            world: World::new(),
            player_start: Vec2::ZERO,
            exit: None,
            spawners: Vec::new(),
        };

        for y in 0..dungeon.grid.height as i32 {
            for x in 0..dungeon.grid.width as i32 {
                dungeon.process_tile(x, y);
            }
        }
        dungeon.spawn_teleporter_links();

        log::debug!("Assembled dungeon:\n{}", dungeon.grid);
        dungeon
    }

    fn process_tile(&mut self, x: i32, y: i32) {
        let Some(tile) = self.grid.get(x, y) else {
            return;
        };
        let pos = Position::new(x, y);
        let world_pos = WorldPosition(self.tile_to_world(x, y));

        match tile {
            TileType::Start => {
                self.player_start = world_pos.0;
                self.world.spawn((pos, world_pos, PlayerStart));
            }
            TileType::Exit => {
                self.exit = Some(world_pos.0);
                self.world.spawn((pos, world_pos, Exit));
            }
            TileType::Encounter => {
                self.spawners.push(world_pos.0);
                self.world.spawn((pos, world_pos, EncounterSpawner));
            }
            TileType::Teleporter => {
                let Some(id) = self.grid.teleporter_id(x, y) else {
                    log::warn!("Teleporter at ({x}, {y}) has no partner");
                    return;
                };
                let Some((dx, dy)) = self.grid.teleporters.destination((x, y)) else {
                    return;
                };
                let destination = self.tile_to_world(dx, dy);
                self.world
                    .spawn((pos, world_pos, Teleporter { id, destination }));
            }
            TileType::Empty | TileType::Floor => {}
        }
    }

    fn spawn_teleporter_links(&mut self) {
        let links: Vec<TeleporterLink> = self
            .grid
            .teleporters
            .pairs()
            .map(|(id, a, b)| TeleporterLink {
                id,
                from: self.tile_to_world(a.0, a.1),
                to: self.tile_to_world(b.0, b.1),
            })
            .collect();
        for link in links {
            self.world.spawn((link,));
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width
    }

    pub fn height(&self) -> usize {
        self.grid.height
    }

    /// World-space position of a tile.
    pub fn tile_to_world(&self, x: i32, y: i32) -> Vec2 {
        Vec2::new(
            x as f32 - self.grid.width as f32 / 2.0,
            y as f32 - self.grid.height as f32 / 2.0,
        )
    }

    /// Tile containing a world-space point (nearest tile centre).
    pub fn world_to_tile(&self, pos: Vec2) -> (i32, i32) {
        (
            (pos.x + self.grid.width as f32 / 2.0 + 0.5).floor() as i32,
            (pos.y + self.grid.height as f32 / 2.0 + 0.5).floor() as i32,
        )
    }

    pub fn tile_at(&self, pos: Vec2) -> Result<TileType> {
        let (x, y) = self.world_to_tile(pos);
        self.grid.tile_at(x, y)
    }

    pub fn is_walkable(&self, pos: Vec2) -> Result<bool> {
        let (x, y) = self.world_to_tile(pos);
        self.grid.is_walkable(x, y)
    }

    pub fn is_exit(&self, pos: Vec2) -> Result<bool> {
        let (x, y) = self.world_to_tile(pos);
        self.grid.is_exit(x, y)
    }

    /// World-space position of the other end of the teleporter under `pos`.
    pub fn teleport_destination(&self, pos: Vec2) -> Result<Option<Vec2>> {
        let (x, y) = self.world_to_tile(pos);
        Ok(self
            .grid
            .teleport_destination(x, y)?
            .map(|(dx, dy)| self.tile_to_world(dx, dy)))
    }
}
