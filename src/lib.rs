//! Procedural dungeon generation for a roguelike.
//!
//! A level is a [`Grid`] of [`TileType`]s built by one of two layouts (see
//! [`dungeon_gen`]). [`Dungeon`] places the level in world space and [`FloorStack`]
//! chains levels together through their exits.

pub mod assembly;
pub mod components;
pub mod config;
pub mod constants;
pub mod dungeon_gen;
pub mod error;
pub mod floors;
pub mod grid;
pub mod teleport;
pub mod tile;

pub use assembly::Dungeon;
pub use config::{DungeonConfig, GenerationOptions, LayoutStrategy};
pub use dungeon_gen::{generate, generate_named, generate_with_rng, LayoutGenerator};
pub use error::{DungeonError, Result};
pub use floors::{FloorStack, StepOutcome};
pub use grid::Grid;
pub use teleport::{Coord, TeleporterId, TeleporterMap};
pub use tile::TileType;
