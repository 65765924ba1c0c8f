use crate::error::{DungeonError, Result};
use crate::teleport::{Coord, TeleporterId, TeleporterMap};
use crate::tile::TileType;
use std::collections::BTreeMap;
use std::fmt;

/// A finished (or in-progress) dungeon tile map.
///
/// Tiles are stored row-major and addressed as `(x, y)`, with `x` the column and `y`
/// the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileType>,
    pub teleporters: TeleporterMap,
    /// Seed the generator ran with (0 for hand-built grids)
    pub seed: u64,
}

impl Grid {
    /// An all-empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileType::Empty; width * height],
            teleporters: TeleporterMap::new(),
            seed: 0,
        }
    }

    /// Build a grid from one string per row, one symbol per tile.
    ///
    /// Digits are teleporters; the two cells sharing a digit become a pair. Returns
    /// `None` for ragged rows, unknown symbols, or a digit that does not appear exactly
    /// twice.
    pub fn from_symbols(rows: &[&str]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = Self::new(width, height);
        let mut digits: BTreeMap<char, Vec<Coord>> = BTreeMap::new();

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return None;
            }
            for (x, symbol) in row.chars().enumerate() {
                let tile = TileType::from_symbol(symbol)?;
                let coord = (x as i32, y as i32);
                if symbol.is_ascii_digit() {
                    digits.entry(symbol).or_default().push(coord);
                }
                grid.set(coord.0, coord.1, tile);
            }
        }

        for coords in digits.values() {
            match coords.as_slice() {
                [a, b] => {
                    grid.teleporters.link(*a, *b);
                }
                _ => return None,
            }
        }

        Some(grid)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    pub fn get(&self, x: i32, y: i32) -> Option<TileType> {
        self.index(x, y).map(|idx| self.tiles[idx])
    }

    /// Overwrite a tile. Writes outside the grid are ignored.
    pub fn set(&mut self, x: i32, y: i32, tile: TileType) {
        if let Some(idx) = self.index(x, y) {
            self.tiles[idx] = tile;
        }
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> DungeonError {
        DungeonError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Checked tile lookup.
    pub fn tile_at(&self, x: i32, y: i32) -> Result<TileType> {
        self.get(x, y).ok_or_else(|| self.out_of_bounds(x, y))
    }

    pub fn is_walkable(&self, x: i32, y: i32) -> Result<bool> {
        Ok(self.tile_at(x, y)?.is_walkable())
    }

    pub fn is_exit(&self, x: i32, y: i32) -> Result<bool> {
        Ok(self.tile_at(x, y)? == TileType::Exit)
    }

    /// Where the teleporter at `(x, y)` leads, or `None` if there is no teleporter.
    pub fn teleport_destination(&self, x: i32, y: i32) -> Result<Option<Coord>> {
        if self.tile_at(x, y)? != TileType::Teleporter {
            return Ok(None);
        }
        Ok(self.teleporters.destination((x, y)))
    }

    pub fn teleporter_id(&self, x: i32, y: i32) -> Option<TeleporterId> {
        self.teleporters.id_at((x, y))
    }

    /// Coordinates of every tile matching `pred`, in row-major order.
    pub fn positions<F>(&self, pred: F) -> Vec<Coord>
    where
        F: Fn(TileType) -> bool,
    {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| pred(**tile))
            .map(|(idx, _)| ((idx % self.width) as i32, (idx / self.width) as i32))
            .collect()
    }

    pub fn find(&self, tile: TileType) -> Option<Coord> {
        self.positions(|t| t == tile).first().copied()
    }

    pub fn count(&self, tile: TileType) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }

    /// Number of `#` and `$` tiles.
    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_floor()).count()
    }

    /// Debug symbol for one cell; teleporters print their pair id.
    pub fn symbol_at(&self, x: i32, y: i32) -> Option<String> {
        let tile = self.get(x, y)?;
        match (tile, self.teleporter_id(x, y)) {
            (TileType::Teleporter, Some(id)) => Some(id.to_string()),
            _ => Some(tile.symbol().to_string()),
        }
    }
}

/// Row-by-row dump with space-separated symbols. Diagnostics only.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.symbol_at(x, y).unwrap_or_default())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
