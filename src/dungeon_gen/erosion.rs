//! Random erosion biased toward tiles that already border empty space.

use crate::constants::*;
use crate::grid::Grid;
use crate::tile::TileType;
use rand::Rng;

/// Number of tiles erosion removes from `num_tiles` rasterized floor tiles.
pub fn erosion_budget(num_tiles: usize, erosion_rate: f64) -> usize {
    (num_tiles as f64 * erosion_rate) as usize
}

/// Likelihood factor for removing the floor tile at `(x, y)`.
///
/// Starts at [`EROSION_BASE_FACTOR`] and grows with each empty 4-neighbour. Cells
/// outside the grid do not count as empty.
pub fn removal_factor(grid: &Grid, x: i32, y: i32) -> f64 {
    let empty_neighbors = [(0, -1), (0, 1), (-1, 0), (1, 0)]
        .iter()
        .filter(|(dx, dy)| grid.get(x + dx, y + dy) == Some(TileType::Empty))
        .count();
    EROSION_BASE_FACTOR + empty_neighbors as f64 * EROSION_EMPTY_NEIGHBOR_WEIGHT
}

/// Remove up to `budget` floor tiles and return how many were removed.
///
/// Each draw picks a uniformly random floor tile (`#` or `$`) and removes it when
/// `uniform() * factor` clears the threshold. Fewer than `budget` tiles are removed only
/// when the floor runs out or no remaining tile borders empty space.
pub fn erode(grid: &mut Grid, budget: usize, rng: &mut impl Rng) -> usize {
    let mut candidates = grid.positions(|t| t.is_floor());
    let mut removed = 0;
    let mut misses = 0;

    while removed < budget && !candidates.is_empty() {
        let idx = rng.gen_range(0..candidates.len());
        let (x, y) = candidates[idx];
        let factor = removal_factor(grid, x, y);

        if rng.gen::<f64>() * factor > EROSION_THRESHOLD {
            grid.set(x, y, TileType::Empty);
            candidates.swap_remove(idx);
            removed += 1;
            misses = 0;
            continue;
        }

        // A tile with no empty neighbour can never be removed; if that holds for all of
        // them the loop would spin forever.
        misses += 1;
        if misses > candidates.len() * 8 {
            let stuck = candidates
                .iter()
                .all(|&(cx, cy)| removal_factor(grid, cx, cy) <= EROSION_BASE_FACTOR);
            if stuck {
                break;
            }
            misses = 0;
        }
    }

    if removed < budget {
        log::warn!("Erosion stopped early: removed {removed} of {budget} tiles");
    }
    removed
}
