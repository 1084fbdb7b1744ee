use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Kind and interaction state of a single map cell.
///
/// The variant at a position is fixed at load time; only the flags
/// inside a variant change during play.
#[derive(
    Copy, Clone, Default, Eq, PartialEq, Debug, EnumIter, Serialize,
    Deserialize, Hash,
)]
#[serde(try_from = "char", into = "char")]
pub enum TileKind {
    Floor,
    #[default]
    Wall,
    Door {
        open: bool,
    },
    /// Gives way under the first actor to step in, then stays sprung.
    Pit {
        sprung: bool,
    },
    /// Dims the sight of anyone who steps on it, every time.
    CursedFloor,
    /// Trips a linked mechanism on first entry, one-shot.
    PressurePlate {
        triggered: bool,
    },
    /// Solid engraved monolith, can only be examined from an adjacent
    /// cell.
    Obelisk,
}

use TileKind::*;

impl TileKind {
    pub fn blocks_sight(self) -> bool {
        matches!(self, Wall | Obelisk | Door { open: false })
    }

    pub fn is_walkable(self) -> bool {
        !self.blocks_movement()
    }

    pub fn blocks_movement(self) -> bool {
        matches!(self, Wall | Obelisk | Door { open: false })
    }

    /// Whether `other` is the same variant, ignoring internal flags.
    pub fn same_kind(self, other: TileKind) -> bool {
        std::mem::discriminant(&self) == std::mem::discriminant(&other)
    }
}

impl TryFrom<char> for TileKind {
    type Error = &'static str;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(Floor),
            '#' => Ok(Wall),
            '+' => Ok(Door { open: false }),
            '/' => Ok(Door { open: true }),
            '^' => Ok(Pit { sprung: false }),
            '!' => Ok(CursedFloor),
            '=' => Ok(PressurePlate { triggered: false }),
            'O' => Ok(Obelisk),
            _ => Err("invalid tile char"),
        }
    }
}

impl From<TileKind> for char {
    fn from(val: TileKind) -> Self {
        // NB. This must match TryFrom's inputs above. Internal flags
        // other than the door leaf are not expressible in map text.
        match val {
            Floor => '.',
            Wall => '#',
            Door { open: false } => '+',
            Door { open: true } => '/',
            Pit { .. } => '^',
            CursedFloor => '!',
            PressurePlate { .. } => '=',
            Obelisk => 'O',
        }
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn char_roundtrip() {
        // EnumIter fills variant fields with defaults, which is exactly
        // the freshly-loaded state of each kind.
        for kind in TileKind::iter() {
            let c = char::from(kind);
            assert_eq!(TileKind::try_from(c), Ok(kind));
        }

        assert_eq!(char::from(Door { open: true }), '/');
        assert_eq!(TileKind::try_from('/'), Ok(Door { open: true }));
        assert!(TileKind::try_from('n').is_err());
        assert!(TileKind::try_from('@').is_err());
    }

    #[test]
    fn predicates() {
        assert!(Wall.blocks_sight() && Wall.blocks_movement());
        assert!(Obelisk.blocks_sight() && Obelisk.blocks_movement());
        assert!(Door { open: false }.blocks_sight());
        assert!(!Door { open: true }.blocks_sight());
        assert!(Door { open: true }.is_walkable());

        for kind in [
            Floor,
            Pit { sprung: false },
            Pit { sprung: true },
            CursedFloor,
            PressurePlate { triggered: false },
            PressurePlate { triggered: true },
        ] {
            assert!(kind.is_walkable());
            assert!(!kind.blocks_sight());
        }
    }

    #[test]
    fn kind_identity() {
        assert!(Door { open: false }.same_kind(Door { open: true }));
        assert!(Pit { sprung: true }.same_kind(Pit { sprung: false }));
        assert!(!Floor.same_kind(CursedFloor));
        assert!(!Wall.same_kind(Obelisk));
    }
}
