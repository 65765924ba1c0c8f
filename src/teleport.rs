//! Teleporter pairing table.
//!
//! Grid cells only say "teleporter here"; this table says which cell a teleporter
//! sends you to. Keeping the pairing out of the tile symbol means the number of pairs
//! is not limited by how many single-character ids exist.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A grid coordinate as `(x, y)`.
pub type Coord = (i32, i32);

/// Identifier shared by the two ends of one teleporter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TeleporterId(pub u32);

impl fmt::Display for TeleporterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeleporterMap {
    by_coord: HashMap<Coord, TeleporterId>,
    pairs: BTreeMap<TeleporterId, (Coord, Coord)>,
}

impl TeleporterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next call to [`TeleporterMap::link`] should use.
    pub fn next_id(&self) -> TeleporterId {
        TeleporterId(self.pairs.len() as u32)
    }

    /// Record a pair and return its id.
    pub fn link(&mut self, a: Coord, b: Coord) -> TeleporterId {
        let id = self.next_id();
        self.by_coord.insert(a, id);
        self.by_coord.insert(b, id);
        self.pairs.insert(id, (a, b));
        id
    }

    pub fn id_at(&self, coord: Coord) -> Option<TeleporterId> {
        self.by_coord.get(&coord).copied()
    }

    pub fn ends(&self, id: TeleporterId) -> Option<(Coord, Coord)> {
        self.pairs.get(&id).copied()
    }

    /// The other end of the teleporter standing at `coord`, never `coord` itself.
    pub fn destination(&self, coord: Coord) -> Option<Coord> {
        let (a, b) = self.ends(self.id_at(coord)?)?;
        if a == coord {
            Some(b)
        } else {
            Some(a)
        }
    }

    /// Pairs in id order.
    pub fn pairs(&self) -> impl Iterator<Item = (TeleporterId, Coord, Coord)> + '_ {
        self.pairs.iter().map(|(id, (a, b))| (*id, *a, *b))
    }

    /// Number of pairs (not endpoints).
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_assigns_increasing_ids() {
        let mut map = TeleporterMap::new();
        assert_eq!(map.link((1, 1), (5, 5)), TeleporterId(0));
        assert_eq!(map.link((2, 2), (7, 7)), TeleporterId(1));
        assert_eq!(map.len(), 2);
        assert_eq!(map.next_id(), TeleporterId(2));
    }

    #[test]
    fn test_destination_is_other_end() {
        let mut map = TeleporterMap::new();
        map.link((1, 1), (5, 5));
        assert_eq!(map.destination((1, 1)), Some((5, 5)));
        assert_eq!(map.destination((5, 5)), Some((1, 1)));
        assert_eq!(map.destination((3, 3)), None);
    }

    #[test]
    fn test_ids_past_single_digit() {
        let mut map = TeleporterMap::new();
        for i in 0..12 {
            map.link((i, 0), (i, 10));
        }
        // Pair 10 and pair 1 must not be confused
        assert_eq!(map.destination((10, 0)), Some((10, 10)));
        assert_eq!(map.destination((1, 0)), Some((1, 10)));
        assert_eq!(map.id_at((11, 10)), Some(TeleporterId(11)));
        assert_eq!(TeleporterId(11).to_string(), "11");
    }
}
