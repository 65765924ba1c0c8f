//! Generate a dungeon level and print its tile map.

use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;

use nitrogen_dungeon::{Dungeon, DungeonConfig, LayoutStrategy};

/// Procedural dungeon generator
#[derive(Parser, Debug)]
#[command(name = "nitrogen-dungeon")]
#[command(version, about = "Generate a dungeon level and print its tile map", long_about = None)]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Layout strategy (bsp or static)
    #[arg(short = 's', long = "strategy")]
    strategy: Option<LayoutStrategy>,

    #[arg(long = "width")]
    width: Option<usize>,

    #[arg(long = "height")]
    height: Option<usize>,

    /// Seed for reproducible output
    #[arg(long = "seed")]
    seed: Option<u64>,

    #[arg(long = "min-room-width")]
    min_room_width: Option<i32>,

    #[arg(long = "min-room-height")]
    min_room_height: Option<i32>,

    /// Fraction of floor removed by erosion (0 to 1)
    #[arg(long = "erosion")]
    erosion: Option<f64>,

    /// Number of encounter tiles
    #[arg(long = "encounters")]
    encounters: Option<usize>,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    fn apply(&self, config: &mut DungeonConfig) {
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        let options = &mut config.options;
        if let Some(seed) = self.seed {
            options.seed = Some(seed);
        }
        if let Some(w) = self.min_room_width {
            options.min_room_width = w;
        }
        if let Some(h) = self.min_room_height {
            options.min_room_height = h;
        }
        if let Some(rate) = self.erosion {
            options.erosion_rate = rate;
        }
        if let Some(n) = self.encounters {
            options.num_encounters = n;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        simplelog::ConfigBuilder::new()
            .set_target_level(LevelFilter::Off)
            .set_location_level(LevelFilter::Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let mut config = match &args.config {
        Some(path) => DungeonConfig::load(path)?,
        None => DungeonConfig::default(),
    };
    args.apply(&mut config);

    let dungeon = Dungeon::generate(&config)?;
    let grid = dungeon.grid();
    println!("{grid}");

    log::info!(
        "seed {}: {} walkable tiles, {} encounters, {} teleporter pairs",
        grid.seed,
        grid.positions(|t| t.is_walkable()).len(),
        dungeon.spawners.len(),
        grid.teleporters.len()
    );
    Ok(())
}
