//! Level grid and per-tile interaction state.

use std::path::Path;

use glam::{ivec2, IVec2};
use serde::{Deserialize, Serialize};

use crate::{Error, HashMap, MapParseError, TileKind};

/// Rectangular tile grid addressed by position.
///
/// The grid footprint and the kind of tile at every position are fixed
/// at load time. The only mutation the map ever accepts is a
/// kind-internal state change through [`Map::set_tile_state`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Map {
    width: i32,
    height: i32,
    /// Row-major cell storage, indexed `y * width + x`.
    tiles: Vec<TileKind>,
    /// Pressure plates wired to the door they actuate.
    plate_links: HashMap<IVec2, IVec2>,
}

impl Map {
    /// Parse a map from its text form, returning the map and the actor
    /// start position marked with `@`.
    pub fn parse(text: &str) -> Result<(Self, IVec2), MapParseError> {
        let mut tiles = Vec::new();
        let mut start = None;
        let mut width = None;
        let mut height = 0;

        for (y, line) in text.lines().enumerate() {
            let len = line.chars().count();
            match width {
                None => width = Some(len),
                Some(expected) if expected != len => {
                    return Err(MapParseError::RaggedRow {
                        row: y,
                        len,
                        expected,
                    });
                }
                Some(_) => {}
            }

            for (x, c) in line.chars().enumerate() {
                let kind = match c {
                    '@' => {
                        let pos = ivec2(x as i32, y as i32);
                        if start.replace(pos).is_some() {
                            return Err(MapParseError::MultipleStarts);
                        }
                        TileKind::Floor
                    }
                    c => TileKind::try_from(c).map_err(|_| {
                        MapParseError::UnknownSymbol {
                            symbol: c,
                            row: y,
                            col: x,
                        }
                    })?,
                };
                tiles.push(kind);
            }
            height += 1;
        }

        if tiles.is_empty() {
            return Err(MapParseError::Empty);
        }

        let Some(start) = start else {
            return Err(MapParseError::NoStart);
        };

        Ok((
            Map {
                width: width.unwrap_or(0) as i32,
                height,
                tiles,
                plate_links: Default::default(),
            },
            start,
        ))
    }

    /// Read and parse a map file.
    pub fn load(
        path: impl AsRef<Path>,
    ) -> Result<(Self, IVec2), MapParseError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    fn idx(&self, pos: IVec2) -> usize {
        (pos.y * self.width + pos.x) as usize
    }

    pub fn tile_at(&self, pos: IVec2) -> Result<TileKind, Error> {
        if !self.contains(pos) {
            return Err(Error::OutOfBounds(pos));
        }
        Ok(self.tiles[self.idx(pos)])
    }

    /// Whether sight lines stop at the position. Out-of-grid positions
    /// are opaque.
    pub fn is_opaque(&self, pos: IVec2) -> bool {
        self.tile_at(pos).map_or(true, |t| t.blocks_sight())
    }

    /// Whether the actor can stand on the position. Out-of-grid
    /// positions are not walkable.
    pub fn is_walkable(&self, pos: IVec2) -> bool {
        self.tile_at(pos).is_ok_and(|t| t.is_walkable())
    }

    /// Replace the mutable sub-state of the tile at `pos`.
    ///
    /// The new kind must be the same variant as the one in place; kind
    /// identity per position never changes after load.
    pub fn set_tile_state(
        &mut self,
        pos: IVec2,
        new_kind: TileKind,
    ) -> Result<(), Error> {
        let current = self.tile_at(pos)?;
        if !current.same_kind(new_kind) {
            return Err(Error::InvalidTransition {
                at: pos,
                from: current,
                to: new_kind,
            });
        }
        let idx = self.idx(pos);
        self.tiles[idx] = new_kind;
        Ok(())
    }

    /// Wire the pressure plate at `plate` to actuate the door at
    /// `door`. The text map format has no link syntax, so links are
    /// configured here after load.
    pub fn link_plate(
        &mut self,
        plate: IVec2,
        door: IVec2,
    ) -> Result<(), Error> {
        let plate_kind = self.tile_at(plate)?;
        let door_kind = self.tile_at(door)?;
        if !matches!(plate_kind, TileKind::PressurePlate { .. })
            || !matches!(door_kind, TileKind::Door { .. })
        {
            return Err(Error::InvalidTransition {
                at: plate,
                from: plate_kind,
                to: door_kind,
            });
        }
        self.plate_links.insert(plate, door);
        Ok(())
    }

    /// The door actuated by the plate at `plate`, if any.
    pub fn plate_link(&self, plate: IVec2) -> Option<IVec2> {
        self.plate_links.get(&plate).copied()
    }

    /// Iterate every position and its tile in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, TileKind)> + '_ {
        self.tiles.iter().enumerate().map(|(i, &t)| {
            (ivec2(i as i32 % self.width, i as i32 / self.width), t)
        })
    }
}
