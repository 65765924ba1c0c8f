//! Fixed layout: one big room, start in the corner, exit in the centre.

use super::{validate_dimensions, LayoutGenerator};
use crate::config::GenerationOptions;
use crate::error::{DungeonError, Result};
use crate::grid::Grid;
use crate::tile::TileType;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLayout;

impl LayoutGenerator for StaticLayout {
    fn generate<R: Rng>(
        &self,
        width: usize,
        height: usize,
        options: &GenerationOptions,
        rng: &mut R,
    ) -> Result<Grid> {
        validate_dimensions(width, height)?;

        let mut grid = Grid::new(width, height);
        let (w, h) = (width as i32, height as i32);

        // Fill the space with floor, leaving a one tile empty border
        for y in 1..h - 1 {
            for x in 1..w - 1 {
                grid.set(x, y, TileType::Floor);
            }
        }

        grid.set(1, 1, TileType::Start);
        grid.set(w / 2, h / 2, TileType::Exit);

        let free = grid.positions(|t| t == TileType::Floor);
        if free.len() < options.num_encounters {
            return Err(DungeonError::InsufficientTiles {
                requested: options.num_encounters,
                available: free.len(),
            });
        }
        for &(x, y) in free.choose_multiple(rng, options.num_encounters) {
            grid.set(x, y, TileType::Encounter);
        }

        Ok(grid)
    }
}
