//! Multi-floor dungeons: walking onto an exit generates the next level down.
//!
//! Floors are kept once generated, so going back up returns to the same layout. Floor
//! `n` is seeded with `base_seed + n`. A seed whose layout fails is replaced by
//! [`next_floor_seed`], so a whole run stays reproducible from the base seed alone.

use crate::assembly::Dungeon;
use crate::config::DungeonConfig;
use crate::constants::*;
use crate::error::{DungeonError, Result};
use glam::Vec2;

/// What happened when the player tried to enter a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Empty space or outside the map.
    Blocked,
    /// Plain move onto a walkable tile.
    Moved(Vec2),
    /// Stood on a teleporter and arrived at its partner.
    Teleported(Vec2),
    /// Took the exit; `start` is the player start on the new floor.
    Descended { floor: usize, start: Vec2 },
}

pub struct FloorStack {
    config: DungeonConfig,
    base_seed: u64,
    floors: Vec<Dungeon>,
    current: usize,
    /// Where the last teleport landed; teleporters stay inert until the player leaves it
    arrival: Option<Vec2>,
}

/// Check if a floor transition is valid.
pub fn can_ascend(current_floor: usize) -> bool {
    current_floor > 0
}

/// Candidate seed tried after `seed` produced no usable layout.
pub fn next_floor_seed(seed: u64) -> u64 {
    seed.wrapping_mul(FLOOR_RESEED_MULTIPLIER).wrapping_add(1)
}

impl FloorStack {
    /// Generate the first floor.
    pub fn new(config: DungeonConfig) -> Result<Self> {
        let base_seed = config.options.seed.unwrap_or_else(rand::random);
        let mut stack = Self {
            config,
            base_seed,
            floors: Vec::new(),
            current: 0,
            arrival: None,
        };
        let first = stack.build_floor(0)?;
        stack.floors.push(first);
        Ok(stack)
    }

    fn build_floor(&self, index: usize) -> Result<Dungeon> {
        let mut seed = self.base_seed.wrapping_add(index as u64);
        log::info!("Building floor {index}");
        let mut attempt = 1;
        loop {
            let config = DungeonConfig {
                options: self.config.options.with_seed(seed),
                ..self.config
            };
            match Dungeon::generate(&config) {
                Err(e) if e.is_layout_failure() && attempt < FLOOR_SEED_ATTEMPTS => {
                    log::warn!("Floor {index} has no layout for seed {seed} ({e}), reseeding");
                    seed = next_floor_seed(seed);
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    pub fn current(&self) -> &Dungeon {
        &self.floors[self.current]
    }

    /// Index of the current floor, 0 at the top.
    pub fn depth(&self) -> usize {
        self.current
    }

    /// Number of floors generated so far.
    pub fn generated(&self) -> usize {
        self.floors.len()
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Move one floor down, generating it on first visit.
    ///
    /// A failed generation leaves the stack on the current floor.
    pub fn descend(&mut self) -> Result<&Dungeon> {
        let next = self.current + 1;
        if next == self.floors.len() {
            let floor = self.build_floor(next)?;
            self.floors.push(floor);
        }
        self.current = next;
        self.arrival = None;
        log::debug!("Descended to floor {next}");
        Ok(self.current())
    }

    pub fn ascend(&mut self) -> Result<&Dungeon> {
        if !can_ascend(self.current) {
            return Err(DungeonError::NoFloorAbove);
        }
        self.current -= 1;
        self.arrival = None;
        log::debug!("Ascended to floor {}", self.current);
        Ok(self.current())
    }

    /// Resolve the player entering `pos` on the current floor.
    ///
    /// After a teleport, teleporters do nothing until the player has moved more than
    /// `sqrt(3)` units from the arrival point, so landing on the partner does not bounce
    /// straight back.
    pub fn step(&mut self, pos: Vec2) -> Result<StepOutcome> {
        let dungeon = self.current();
        match dungeon.is_walkable(pos) {
            Ok(true) => {}
            Ok(false) | Err(DungeonError::OutOfBounds { .. }) => return Ok(StepOutcome::Blocked),
            Err(e) => return Err(e),
        }

        if dungeon.is_exit(pos)? {
            let start = self.descend()?.player_start;
            return Ok(StepOutcome::Descended {
                floor: self.current,
                start,
            });
        }

        let destination = dungeon.teleport_destination(pos)?;

        if self
            .arrival
            .is_some_and(|arrival| arrival.distance_squared(pos) > TELEPORT_REARM_DISTANCE_SQ)
        {
            self.arrival = None;
        }

        match destination {
            Some(destination) if self.arrival.is_none() => {
                self.arrival = Some(destination);
                Ok(StepOutcome::Teleported(destination))
            }
            _ => Ok(StepOutcome::Moved(pos)),
        }
    }
}
