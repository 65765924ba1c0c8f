//! Procedural dungeon generation.
//!
//! [`generate`] is the entry point: it seeds a private random generator, runs the
//! chosen layout and returns the finished [`Grid`]. The individual stages are public so
//! they can be exercised and tested on their own.

pub mod bsp;
pub mod erosion;
pub mod islands;
pub mod rooms;
pub mod static_layout;

pub use bsp::BspLayout;
pub use islands::{find_islands, prune_islands, Island, Vertex, VisitState};
pub use rooms::{split, Rect};
pub use static_layout::StaticLayout;

use crate::config::{GenerationOptions, LayoutStrategy};
use crate::constants::DUNGEON_MIN_DIMENSION;
use crate::error::{DungeonError, Result};
use crate::grid::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A layout algorithm that turns grid dimensions into a finished tile map.
pub trait LayoutGenerator {
    fn generate<R: Rng>(
        &self,
        width: usize,
        height: usize,
        options: &GenerationOptions,
        rng: &mut R,
    ) -> Result<Grid>;
}

pub(crate) fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width < DUNGEON_MIN_DIMENSION || height < DUNGEON_MIN_DIMENSION {
        return Err(DungeonError::InvalidDimensions {
            width,
            height,
            min: DUNGEON_MIN_DIMENSION,
        });
    }
    Ok(())
}

/// The generator used for every seeded run.
pub fn rng_from_seed(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Run `strategy` with a caller-supplied random generator. The returned grid's `seed`
/// is left at 0.
pub fn generate_with_rng<R: Rng>(
    strategy: LayoutStrategy,
    width: usize,
    height: usize,
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<Grid> {
    match strategy {
        LayoutStrategy::Bsp => BspLayout.generate(width, height, options, rng),
        LayoutStrategy::Static => StaticLayout.generate(width, height, options, rng),
    }
}

/// Generate one dungeon level.
///
/// Uses `options.seed` when set; otherwise draws a fresh seed, which is logged and
/// stored on the returned grid so the level can be reproduced.
pub fn generate(
    strategy: LayoutStrategy,
    width: usize,
    height: usize,
    options: &GenerationOptions,
) -> Result<Grid> {
    let seed = options.seed.unwrap_or_else(rand::random);
    log::info!("Generating {strategy} dungeon ({width}x{height}) with seed: {seed}");

    let mut rng = rng_from_seed(seed);
    let mut grid = generate_with_rng(strategy, width, height, options, &mut rng)?;
    grid.seed = seed;

    log::debug!(
        "Generated {} walkable tiles, {} teleporter pairs",
        grid.positions(|t| t.is_walkable()).len(),
        grid.teleporters.len()
    );
    Ok(grid)
}

/// Like [`generate`], with the strategy given by name (`"bsp"` or `"static"`).
pub fn generate_named(
    strategy: &str,
    width: usize,
    height: usize,
    options: &GenerationOptions,
) -> Result<Grid> {
    generate(strategy.parse()?, width, height, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileType;

    #[test]
    fn test_unknown_strategy_fails_fast() {
        let err = generate_named("cellular", 20, 20, &GenerationOptions::default()).unwrap_err();
        assert!(matches!(err, DungeonError::UnknownStrategy(ref name) if name == "cellular"));
    }

    #[test]
    fn test_seed_is_recorded() {
        let options = GenerationOptions::default().with_seed(1234);
        let grid = generate(LayoutStrategy::Static, 12, 12, &options).unwrap();
        assert_eq!(grid.seed, 1234);
    }

    #[test]
    fn test_random_seed_reproduces_level() {
        let options = GenerationOptions {
            num_encounters: 3,
            ..Default::default()
        };
        let first = generate(LayoutStrategy::Static, 15, 15, &options).unwrap();
        let again = generate(LayoutStrategy::Static, 15, 15, &options.with_seed(first.seed)).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_same_seed_same_grid() {
        let options = GenerationOptions::default().with_seed(42);
        let a = generate(LayoutStrategy::Bsp, 50, 50, &options);
        let b = generate(LayoutStrategy::Bsp, 50, 50, &options);
        match (a, b) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
            _ => panic!("same seed gave different outcomes"),
        }
    }

    #[test]
    fn test_named_static() {
        let options = GenerationOptions::default().with_seed(3);
        let grid = generate_named("static", 11, 11, &options).unwrap();
        assert_eq!(grid.tile_at(1, 1).unwrap(), TileType::Start);
    }

    #[test]
    fn test_dimensions_validated_for_both_strategies() {
        let options = GenerationOptions::default().with_seed(3);
        for strategy in [LayoutStrategy::Bsp, LayoutStrategy::Static] {
            assert!(matches!(
                generate(strategy, 50, 2, &options),
                Err(DungeonError::InvalidDimensions { min: 4, .. })
            ));
        }
    }
}
