//! Dungeon generation constants.

/// Default minimum room width used by the BSP splitter
pub const DUNGEON_MIN_ROOM_WIDTH: i32 = 5;
/// Default minimum room height used by the BSP splitter
pub const DUNGEON_MIN_ROOM_HEIGHT: i32 = 5;
/// Default fraction of rasterized floor tiles removed by erosion
pub const DUNGEON_EROSION_RATE: f64 = 0.1;
/// Default number of encounter tiles
pub const DUNGEON_NUM_ENCOUNTERS: usize = 5;
/// Default dungeon width
pub const DUNGEON_DEFAULT_WIDTH: usize = 50;
/// Default dungeon height
pub const DUNGEON_DEFAULT_HEIGHT: usize = 50;
/// Smallest width or height either layout accepts
pub const DUNGEON_MIN_DIMENSION: usize = 4;

/// Split point bounds, as fractions of the extent being split
pub const SPLIT_MIN_FRACTION: f64 = 0.25;
pub const SPLIT_MAX_FRACTION: f64 = 0.75;

/// Encounters are placed around the room centre with this spread
pub const ENCOUNTER_MEAN: f64 = 0.5;
pub const ENCOUNTER_STD_DEV: f64 = 0.1;

/// Removal likelihood of a floor tile with no empty neighbours
pub const EROSION_BASE_FACTOR: f64 = 0.5;
/// Added to the likelihood for each empty neighbour
pub const EROSION_EMPTY_NEIGHBOR_WEIGHT: f64 = 1.0;
/// A tile is removed when `uniform * factor` exceeds this
pub const EROSION_THRESHOLD: f64 = 0.5;

/// Islands smaller than this are pruned
pub const MIN_ISLAND_SIZE: usize = 5;
