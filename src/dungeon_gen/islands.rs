//! Connected-component discovery over floor tiles.
//!
//! The search uses an explicit stack, so grid size is bounded by memory rather than by
//! call-stack depth.

use crate::grid::Grid;
use crate::teleport::Coord;
use crate::tile::TileType;

/// Traversal state of a floor tile during island discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    Unvisited,
    /// Discovered and waiting on the stack
    Visiting,
    Done,
}

/// A floor tile that belongs to an island.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    pub coord: Coord,
    /// Tile symbol at discovery time
    pub tile: TileType,
    pub island: usize,
}

/// A maximal 4-connected set of floor tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Island {
    pub index: usize,
    pub vertices: Vec<Vertex>,
}

impl Island {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.vertices.iter().any(|v| v.coord == coord)
    }

    /// Member coordinates whose *current* tile in `grid` satisfies `pred`.
    pub fn coords_where<F>(&self, grid: &Grid, pred: F) -> Vec<Coord>
    where
        F: Fn(TileType) -> bool,
    {
        self.vertices
            .iter()
            .filter(|v| grid.get(v.coord.0, v.coord.1).is_some_and(&pred))
            .map(|v| v.coord)
            .collect()
    }
}

const NEIGHBORS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Find every island of `#`/`$` tiles, ordered by their first tile in row-major order.
pub fn find_islands(grid: &Grid) -> Vec<Island> {
    let mut state = vec![VisitState::Unvisited; grid.width * grid.height];
    let mut islands = Vec::new();
    let mut stack: Vec<Coord> = Vec::new();

    let flat = |(x, y): Coord| y as usize * grid.width + x as usize;

    for seed in grid.positions(|t| t.is_floor()) {
        if state[flat(seed)] != VisitState::Unvisited {
            continue;
        }

        let index = islands.len();
        let mut vertices = Vec::new();
        state[flat(seed)] = VisitState::Visiting;
        stack.push(seed);

        while let Some(coord) = stack.pop() {
            let (x, y) = coord;
            for (dx, dy) in NEIGHBORS {
                let next = (x + dx, y + dy);
                let is_floor = grid.get(next.0, next.1).is_some_and(|t| t.is_floor());
                if is_floor && state[flat(next)] == VisitState::Unvisited {
                    state[flat(next)] = VisitState::Visiting;
                    stack.push(next);
                }
            }

            state[flat(coord)] = VisitState::Done;
            vertices.push(Vertex {
                coord,
                tile: grid.get(x, y).unwrap_or_default(),
                island: index,
            });
        }

        islands.push(Island { index, vertices });
    }

    islands
}

/// Drop islands with fewer than `min_size` tiles. Their tiles are left in the grid.
pub fn prune_islands(islands: &mut Vec<Island>, min_size: usize) {
    let before = islands.len();
    islands.retain(|island| island.len() >= min_size);
    if islands.len() < before {
        log::debug!(
            "Pruned {} islands smaller than {min_size} tiles",
            before - islands.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn islands_of(rows: &[&str]) -> Vec<Island> {
        find_islands(&Grid::from_symbols(rows).unwrap())
    }

    #[test]
    fn test_empty_grid_has_no_islands() {
        assert!(islands_of(&["....", "...."]).is_empty());
    }

    #[test]
    fn test_single_island() {
        let islands = islands_of(&[
            "......",
            ".##$#.",
            ".#..#.",
            "......",
        ]);
        assert_eq!(islands.len(), 1);
        assert_eq!(islands[0].len(), 6);
        assert!(islands[0].vertices.iter().all(|v| v.island == 0));
    }

    #[test]
    fn test_encounters_connect_floor() {
        let islands = islands_of(&[".#$#."]);
        assert_eq!(islands.len(), 1);
        let tiles: Vec<TileType> = islands[0].vertices.iter().map(|v| v.tile).collect();
        assert!(tiles.contains(&TileType::Encounter));
    }

    #[test]
    fn test_diagonal_is_not_adjacent() {
        let islands = islands_of(&[
            "#...",
            ".#..",
            "..##",
        ]);
        assert_eq!(islands.len(), 3);
        assert_eq!(islands[0].vertices[0].coord, (0, 0));
        assert_eq!(islands[1].vertices[0].coord, (1, 1));
        assert_eq!(islands[2].len(), 2);
    }

    #[test]
    fn test_special_tiles_block() {
        // Start and teleporter tiles are not part of the floor graph
        let islands = islands_of(&["##*##", "##0.0"]);
        assert_eq!(islands.len(), 2);
    }

    #[test]
    fn test_islands_partition_floor() {
        let grid = Grid::from_symbols(&[
            "##.##.#",
            "#..#..#",
            "..###.#",
            "#.....$",
        ])
        .unwrap();
        let islands = find_islands(&grid);
        let total: usize = islands.iter().map(Island::len).sum();
        assert_eq!(total, grid.floor_count());
        for (i, island) in islands.iter().enumerate() {
            assert_eq!(island.index, i);
        }
    }

    #[test]
    fn test_large_snake_does_not_overflow() {
        // One long winding corridor: deep recursion would need ~width*height frames
        let width = 400;
        let height = 400;
        let mut grid = Grid::new(width, height);
        for y in (0..height as i32).step_by(2) {
            for x in 0..width as i32 {
                grid.set(x, y, TileType::Floor);
            }
            let link_x = if (y / 2) % 2 == 0 { width as i32 - 1 } else { 0 };
            grid.set(link_x, y + 1, TileType::Floor);
        }
        let islands = find_islands(&grid);
        assert_eq!(islands.len(), 1);
        assert_eq!(islands[0].len(), grid.floor_count());
    }

    #[test]
    fn test_prune_drops_small_islands() {
        let mut islands = islands_of(&[
            "#####..##",
            ".........",
            "####.....",
        ]);
        assert_eq!(islands.len(), 3);
        prune_islands(&mut islands, 5);
        assert_eq!(islands.len(), 1);
        assert_eq!(islands[0].len(), 5);
        assert_eq!(islands[0].index, 0);
    }

    #[test]
    fn test_coords_where_reads_current_tiles() {
        let mut grid = Grid::from_symbols(&["#$##"]).unwrap();
        let islands = find_islands(&grid);
        grid.set(0, 0, TileType::Start);
        let plain = islands[0].coords_where(&grid, |t| t == TileType::Floor);
        assert_eq!(plain.len(), 2);
        assert!(!plain.contains(&(0, 0)));
        assert!(islands[0].contains((1, 0)));
    }
}
