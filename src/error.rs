//! Error type shared by generation, grid queries and configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while building or querying a dungeon.
#[derive(Error, Debug)]
pub enum DungeonError {
    #[error("unrecognized tile generator '{0}' (expected 'bsp' or 'static')")]
    UnknownStrategy(String),

    #[error("dungeon must be at least {min}x{min} tiles, got {width}x{height}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        min: usize,
    },

    #[error("invalid generation options: {0}")]
    InvalidOptions(String),

    #[error("insufficient room pool: {requested} encounters requested but only {available} rooms survived")]
    InsufficientRooms { requested: usize, available: usize },

    #[error("insufficient tile pool: {requested} encounters requested but only {available} floor tiles are free")]
    InsufficientTiles { requested: usize, available: usize },

    #[error("no island of at least {min_size} tiles survived erosion")]
    NoIslands { min_size: usize },

    #[error("no eligible tile left in island {island}")]
    NoEligibleTile { island: usize },

    #[error("tile ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("already on the top floor")]
    NoFloorAbove,

    #[error("could not read config '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse config '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl DungeonError {
    /// Whether a different seed could succeed with the same settings.
    pub fn is_layout_failure(&self) -> bool {
        matches!(
            self,
            DungeonError::InsufficientRooms { .. }
                | DungeonError::NoIslands { .. }
                | DungeonError::NoEligibleTile { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DungeonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_failures() {
        assert!(DungeonError::NoEligibleTile { island: 2 }.is_layout_failure());
        assert!(DungeonError::NoIslands { min_size: 5 }.is_layout_failure());
        assert!(!DungeonError::InvalidOptions("x".into()).is_layout_failure());
        assert!(!DungeonError::NoFloorAbove.is_layout_failure());
    }
}
