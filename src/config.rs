//! Generation parameters and the JSON config file the CLI reads.

use crate::constants::*;
use crate::error::{DungeonError, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Which layout algorithm builds the tile map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStrategy {
    #[default]
    Bsp,
    Static,
}

impl FromStr for LayoutStrategy {
    type Err = DungeonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bsp" => Ok(LayoutStrategy::Bsp),
            "static" => Ok(LayoutStrategy::Static),
            _ => Err(DungeonError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutStrategy::Bsp => write!(f, "bsp"),
            LayoutStrategy::Static => write!(f, "static"),
        }
    }
}

/// Knobs for a single `generate` call.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub min_room_width: i32,
    pub min_room_height: i32,
    /// Fraction of rasterized floor removed by erosion, in `[0, 1]`
    pub erosion_rate: f64,
    pub num_encounters: usize,
    /// Fixed seed for reproducible output; a random one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            min_room_width: DUNGEON_MIN_ROOM_WIDTH,
            min_room_height: DUNGEON_MIN_ROOM_HEIGHT,
            erosion_rate: DUNGEON_EROSION_RATE,
            num_encounters: DUNGEON_NUM_ENCOUNTERS,
            seed: None,
        }
    }
}

impl GenerationOptions {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_room_width < 1 || self.min_room_height < 1 {
            return Err(DungeonError::InvalidOptions(format!(
                "minimum room size must be positive, got {}x{}",
                self.min_room_width, self.min_room_height
            )));
        }
        let doubled_w = self.min_room_width.checked_mul(2);
        let doubled_h = self.min_room_height.checked_mul(2);
        if doubled_w.is_none() || doubled_h.is_none() {
            return Err(DungeonError::InvalidOptions(format!(
                "minimum room size {}x{} is too large",
                self.min_room_width, self.min_room_height
            )));
        }
        if !(0.0..=1.0).contains(&self.erosion_rate) {
            return Err(DungeonError::InvalidOptions(format!(
                "erosion rate must be within [0, 1], got {}",
                self.erosion_rate
            )));
        }
        Ok(())
    }

    /// Reject minimum room sizes that cannot fit inside the bordered `width x height` grid.
    pub fn validate_extent(&self, width: usize, height: usize) -> Result<()> {
        let inner_w = width.saturating_sub(2);
        let inner_h = height.saturating_sub(2);
        let fits = |min: i32, inner: usize| usize::try_from(min).is_ok_and(|m| m <= inner);
        if !fits(self.min_room_width, inner_w) || !fits(self.min_room_height, inner_h) {
            return Err(DungeonError::InvalidOptions(format!(
                "minimum room size {}x{} does not fit a {width}x{height} grid",
                self.min_room_width, self.min_room_height
            )));
        }
        Ok(())
    }
}

/// Everything needed to build one dungeon, as read from a config file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub strategy: LayoutStrategy,
    pub width: usize,
    pub height: usize,
    pub options: GenerationOptions,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            strategy: LayoutStrategy::default(),
            width: DUNGEON_DEFAULT_WIDTH,
            height: DUNGEON_DEFAULT_HEIGHT,
            options: GenerationOptions::default(),
        }
    }
}

impl DungeonConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json_str = std::fs::read_to_string(path).map_err(|source| DungeonError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json_str).map_err(|source| DungeonError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json_str: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}
