//! BSP layout: rooms, erosion, islands, then start/exit and teleporters.

use super::erosion::{erode, erosion_budget};
use super::islands::{find_islands, prune_islands, Island};
use super::rooms::{carve_rooms, cull_rooms, place_encounters, split};
use super::{validate_dimensions, LayoutGenerator};
use crate::config::GenerationOptions;
use crate::constants::*;
use crate::error::{DungeonError, Result};
use crate::grid::Grid;
use crate::teleport::Coord;
use crate::tile::TileType;
use rand::seq::SliceRandom;
use rand::Rng;

/// Room-and-cave layout whose disconnected parts are linked by teleporters.
#[derive(Debug, Clone, Copy, Default)]
pub struct BspLayout;

impl LayoutGenerator for BspLayout {
    fn generate<R: Rng>(
        &self,
        width: usize,
        height: usize,
        options: &GenerationOptions,
        rng: &mut R,
    ) -> Result<Grid> {
        validate_dimensions(width, height)?;
        options.validate()?;
        options.validate_extent(width, height)?;

        let mut grid = Grid::new(width, height);

        // Rooms start one tile in so the outer border stays empty
        let rooms = split(
            1,
            1,
            width as i32 - 1,
            height as i32 - 1,
            options.min_room_width,
            options.min_room_height,
            rng,
        );
        let rooms = cull_rooms(&rooms, rng);
        let num_tiles = carve_rooms(&mut grid, &rooms);
        log::debug!("Carved {} rooms ({num_tiles} tiles)", rooms.len());

        place_encounters(&mut grid, &rooms, options.num_encounters, rng)?;

        let budget = erosion_budget(num_tiles, options.erosion_rate);
        let removed = erode(&mut grid, budget, rng);
        log::debug!("Eroded {removed} of {budget} tiles");

        let mut islands = find_islands(&grid);
        prune_islands(&mut islands, MIN_ISLAND_SIZE);
        if islands.is_empty() {
            return Err(DungeonError::NoIslands {
                min_size: MIN_ISLAND_SIZE,
            });
        }

        place_start_and_exit(&mut grid, &islands, rng)?;
        let pairs = pair_teleporters(&mut grid, &islands, rng)?;
        log::debug!("{} islands linked by {pairs} teleporter pairs", islands.len());

        Ok(grid)
    }
}

/// Pick a random island, then a random tile of it that currently satisfies `pred`.
fn pick_tile<F>(grid: &Grid, island: &Island, pred: F, rng: &mut impl Rng) -> Result<Coord>
where
    F: Fn(TileType) -> bool,
{
    island
        .coords_where(grid, pred)
        .choose(rng)
        .copied()
        .ok_or(DungeonError::NoEligibleTile {
            island: island.index,
        })
}

/// Write the player start and the exit, each on a plain floor tile of a randomly
/// chosen island. Both may land in the same island.
pub fn place_start_and_exit(
    grid: &mut Grid,
    islands: &[Island],
    rng: &mut impl Rng,
) -> Result<(Coord, Coord)> {
    let mut placed = [(0, 0); 2];
    for (slot, tile) in placed.iter_mut().zip([TileType::Start, TileType::Exit]) {
        let island = islands.choose(rng).ok_or(DungeonError::NoIslands {
            min_size: MIN_ISLAND_SIZE,
        })?;
        let (x, y) = pick_tile(grid, island, |t| t == TileType::Floor, rng)?;
        grid.set(x, y, tile);
        *slot = (x, y);
    }
    Ok((placed[0], placed[1]))
}

/// Link every island to every other island with its own teleporter pair.
///
/// Returns the number of pairs created, `k * (k - 1) / 2` for `k` islands.
pub fn pair_teleporters(
    grid: &mut Grid,
    islands: &[Island],
    rng: &mut impl Rng,
) -> Result<usize> {
    let mut pairs = 0;
    for (i, island) in islands.iter().enumerate() {
        for other in &islands[i + 1..] {
            let a = pick_tile(grid, island, |t| t.is_floor(), rng)?;
            let b = pick_tile(grid, other, |t| t.is_floor(), rng)?;
            grid.set(a.0, a.1, TileType::Teleporter);
            grid.set(b.0, b.1, TileType::Teleporter);
            grid.teleporters.link(a, b);
            pairs += 1;
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn options() -> GenerationOptions {
        GenerationOptions::default()
    }

    /// First successful layout over a run of seeds; a single seed can legitimately
    /// fail when an island is too small to host all of its teleporters.
    fn generate_ok(width: usize, height: usize, opts: &GenerationOptions) -> Grid {
        (0..50)
            .find_map(|seed| {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                BspLayout.generate(width, height, opts, &mut rng).ok()
            })
            .expect("no seed produced a layout")
    }

    #[test]
    fn test_dungeon_generates_tiles() {
        let grid = generate_ok(50, 50, &options());
        assert_eq!(grid.tiles.len(), 50 * 50);
    }

    #[test]
    fn test_dungeon_has_one_start_and_one_exit() {
        let grid = generate_ok(50, 50, &options());
        assert_eq!(grid.count(TileType::Start), 1);
        assert_eq!(grid.count(TileType::Exit), 1);
    }

    #[test]
    fn test_border_stays_empty() {
        let opts = GenerationOptions {
            num_encounters: 2,
            ..options()
        };
        let grid = generate_ok(40, 30, &opts);
        for x in 0..40 {
            assert_eq!(grid.get(x, 0), Some(TileType::Empty));
            assert_eq!(grid.get(x, 29), Some(TileType::Empty));
        }
        for y in 0..30 {
            assert_eq!(grid.get(0, y), Some(TileType::Empty));
            assert_eq!(grid.get(39, y), Some(TileType::Empty));
        }
    }

    #[test]
    fn test_too_many_encounters_is_an_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let opts = GenerationOptions {
            num_encounters: 1000,
            ..options()
        };
        let err = BspLayout.generate(50, 50, &opts, &mut rng).unwrap_err();
        assert!(matches!(err, DungeonError::InsufficientRooms { requested: 1000, .. }));
    }

    #[test]
    fn test_rejects_tiny_grid() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert!(matches!(
            BspLayout.generate(3, 50, &options(), &mut rng),
            Err(DungeonError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_room_minimum_larger_than_grid() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let opts = GenerationOptions {
            min_room_width: i32::MAX,
            ..options()
        };
        assert!(matches!(
            BspLayout.generate(50, 50, &opts, &mut rng),
            Err(DungeonError::InvalidOptions(_))
        ));
        let opts = GenerationOptions {
            min_room_height: 49,
            ..options()
        };
        assert!(matches!(
            BspLayout.generate(50, 50, &opts, &mut rng),
            Err(DungeonError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_full_erosion_leaves_no_islands() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let opts = GenerationOptions {
            erosion_rate: 1.0,
            num_encounters: 0,
            ..options()
        };
        assert!(matches!(
            BspLayout.generate(30, 30, &opts, &mut rng),
            Err(DungeonError::NoIslands { .. })
        ));
    }

    #[test]
    fn test_pair_teleporters_links_every_pair() {
        let mut grid = Grid::from_symbols(&[
            "#####.#####",
            "...........",
            "#####.#####",
        ])
        .unwrap();
        let islands = find_islands(&grid);
        assert_eq!(islands.len(), 4);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let pairs = pair_teleporters(&mut grid, &islands, &mut rng).unwrap();
        assert_eq!(pairs, 6);
        assert_eq!(grid.count(TileType::Teleporter), 12);
        for (_, a, b) in grid.teleporters.pairs() {
            let island_a = islands.iter().position(|i| i.contains(a)).unwrap();
            let island_b = islands.iter().position(|i| i.contains(b)).unwrap();
            assert_ne!(island_a, island_b);
        }
    }

    #[test]
    fn test_pair_teleporters_runs_out_of_tiles() {
        // Island 0 has only two tiles but needs three teleporters
        let mut grid = Grid::from_symbols(&["##.##.##.##"]).unwrap();
        let islands = find_islands(&grid);
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        assert!(matches!(
            pair_teleporters(&mut grid, &islands, &mut rng),
            Err(DungeonError::NoEligibleTile { .. })
        ));
    }

    #[test]
    fn test_start_and_exit_skip_encounters() {
        let mut grid = Grid::from_symbols(&["$$#$$#$$"]).unwrap();
        let islands = find_islands(&grid);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let (start, exit) = place_start_and_exit(&mut grid, &islands, &mut rng).unwrap();
        assert_ne!(start, exit);
        assert!([(2, 0), (5, 0)].contains(&start));
        assert!([(2, 0), (5, 0)].contains(&exit));
        assert_eq!(grid.count(TileType::Encounter), 6);
    }
}
