//! Floor stack constants.

/// Reseed attempts before a floor is given up on
pub const FLOOR_SEED_ATTEMPTS: usize = 8;
/// Multiplier of the step from a failed floor seed to the next candidate
pub const FLOOR_RESEED_MULTIPLIER: u64 = 6364136223846793005;
/// Squared distance from the arrival point the player must exceed before
/// another teleporter can fire
pub const TELEPORT_REARM_DISTANCE_SQ: f32 = 3.0;
