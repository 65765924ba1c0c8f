/// What occupies a single grid cell.
///
/// Teleporter cells only mark that a teleporter is there; which pair it belongs to is
/// kept in [`crate::teleport::TeleporterMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileType {
    #[default]
    Empty,
    Floor,
    /// Monster spawn point
    Encounter,
    /// Player start
    Start,
    Exit,
    Teleporter,
}

impl TileType {
    /// Debug symbol used in the textual dump.
    pub fn symbol(&self) -> char {
        match self {
            TileType::Empty => '.',
            TileType::Floor => '#',
            TileType::Encounter => '$',
            TileType::Start => '*',
            TileType::Exit => '&',
            TileType::Teleporter => 'T',
        }
    }

    /// Parse a debug symbol. Digits are read as teleporters.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(TileType::Empty),
            '#' => Some(TileType::Floor),
            '$' => Some(TileType::Encounter),
            '*' => Some(TileType::Start),
            '&' => Some(TileType::Exit),
            'T' => Some(TileType::Teleporter),
            c if c.is_ascii_digit() => Some(TileType::Teleporter),
            _ => None,
        }
    }

    /// Anything but empty space can be stood on.
    pub fn is_walkable(&self) -> bool {
        !matches!(self, TileType::Empty)
    }

    /// Floor and encounter tiles take part in erosion and island discovery.
    pub fn is_floor(&self) -> bool {
        matches!(self, TileType::Floor | TileType::Encounter)
    }

    /// Tiles the placement stages write on top of the plain layout.
    pub fn is_special(&self) -> bool {
        matches!(self, TileType::Start | TileType::Exit | TileType::Teleporter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_round_trip() {
        for tile in [
            TileType::Empty,
            TileType::Floor,
            TileType::Encounter,
            TileType::Start,
            TileType::Exit,
            TileType::Teleporter,
        ] {
            assert_eq!(TileType::from_symbol(tile.symbol()), Some(tile));
        }
    }

    #[test]
    fn test_digit_is_teleporter() {
        assert_eq!(TileType::from_symbol('7'), Some(TileType::Teleporter));
        assert_eq!(TileType::from_symbol('x'), None);
    }

    #[test]
    fn test_walkable_and_floor() {
        assert!(!TileType::Empty.is_walkable());
        assert!(TileType::Teleporter.is_walkable());
        assert!(TileType::Encounter.is_floor());
        assert!(!TileType::Start.is_floor());
        assert!(TileType::Exit.is_special());
        assert!(!TileType::Encounter.is_special());
    }
}
