//! Room layout: BSP splitting, culling, rasterization and encounter placement.

use crate::constants::*;
use crate::error::{DungeonError, Result};
use crate::grid::Grid;
use crate::teleport::Coord;
use crate::tile::TileType;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// A rectangle representing a room or region. The far edges are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle spanning `[x0, x1) x [y0, y1)`.
    pub fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn area(&self) -> i32 {
        self.width * self.height
    }
}

/// A node in the BSP tree. Either a leaf (one room) or an internal node (two children).
struct BspNode {
    /// The region this node covers
    region: Rect,
    /// Left/top child after split
    left: Option<Box<BspNode>>,
    /// Right/bottom child after split
    right: Option<Box<BspNode>>,
}

impl BspNode {
    fn new(region: Rect) -> Self {
        Self {
            region,
            left: None,
            right: None,
        }
    }

    fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Recursively bisect along the longer axis until either extent is at most twice
    /// the minimum room size on that axis.
    fn split(&mut self, min_width: i32, min_height: i32, rng: &mut impl Rng) {
        let region = self.region;
        if region.width <= min_width.saturating_mul(2)
            || region.height <= min_height.saturating_mul(2)
        {
            return;
        }

        let (first, second) = if region.width > region.height {
            let part = split_point(region.width, rng);
            (
                Rect::new(region.x, region.y, part, region.height),
                Rect::new(region.x + part, region.y, region.width - part, region.height),
            )
        } else {
            let part = split_point(region.height, rng);
            (
                Rect::new(region.x, region.y, region.width, part),
                Rect::new(region.x, region.y + part, region.width, region.height - part),
            )
        };

        let mut left = Box::new(BspNode::new(first));
        let mut right = Box::new(BspNode::new(second));
        left.split(min_width, min_height, rng);
        right.split(min_width, min_height, rng);
        self.left = Some(left);
        self.right = Some(right);
    }

    /// Collect the leaf regions of this subtree, left to right.
    fn collect_rooms(&self, rooms: &mut Vec<Rect>) {
        if self.is_leaf() {
            rooms.push(self.region);
            return;
        }
        if let Some(ref left) = self.left {
            left.collect_rooms(rooms);
        }
        if let Some(ref right) = self.right {
            right.collect_rooms(rooms);
        }
    }
}

/// Split offset drawn from `[range/4, 3*range/4]`, never zero.
fn split_point(range: i32, rng: &mut impl Rng) -> i32 {
    let lo = ((range as f64 * SPLIT_MIN_FRACTION) as i32).max(1);
    let hi = ((range as f64 * SPLIT_MAX_FRACTION) as i32).max(lo);
    rng.gen_range(lo..=hi)
}

/// Partition `[x0, x1) x [y0, y1)` into candidate rooms.
///
/// The region must be non-empty and the minimum sizes positive.
pub fn split(
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    min_width: i32,
    min_height: i32,
    rng: &mut impl Rng,
) -> Vec<Rect> {
    let mut root = BspNode::new(Rect::from_corners(x0, y0, x1, y1));
    root.split(min_width, min_height, rng);

    let mut rooms = Vec::new();
    root.collect_rooms(&mut rooms);
    rooms
}

/// Keep a random half (rounded down) of the rooms.
pub fn cull_rooms(rooms: &[Rect], rng: &mut impl Rng) -> Vec<Rect> {
    rooms.choose_multiple(rng, rooms.len() / 2).copied().collect()
}

/// Write floor over every room and return the number of tiles written.
pub fn carve_rooms(grid: &mut Grid, rooms: &[Rect]) -> usize {
    let mut num_tiles = 0;
    for room in rooms {
        for y in room.y..room.y + room.height {
            for x in room.x..room.x + room.width {
                grid.set(x, y, TileType::Floor);
                num_tiles += 1;
            }
        }
    }
    num_tiles
}

/// Turn one tile near the centre of `count` distinct rooms into an encounter.
///
/// The tile is drawn from a normal distribution around the room centre and clamped
/// into the room; it is not checked for being plain floor.
pub fn place_encounters(
    grid: &mut Grid,
    rooms: &[Rect],
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Coord>> {
    if rooms.len() < count {
        return Err(DungeonError::InsufficientRooms {
            requested: count,
            available: rooms.len(),
        });
    }

    let spread = Normal::new(ENCOUNTER_MEAN, ENCOUNTER_STD_DEV)
        .map_err(|e| DungeonError::InvalidOptions(e.to_string()))?;

    let mut placed = Vec::with_capacity(count);
    for room in rooms.choose_multiple(rng, count) {
        let gy: f64 = spread.sample(rng);
        let gx: f64 = spread.sample(rng);
        let y = room.y + (room.height as f64 * gy) as i32;
        let x = room.x + (room.width as f64 * gx) as i32;
        let x = x.clamp(room.x, room.x + room.width - 1);
        let y = y.clamp(room.y, room.y + room.height - 1);

        grid.set(x, y, TileType::Encounter);
        placed.push((x, y));
    }
    Ok(placed)
}
