//! Typed failure taxonomy for engine operations.

use glam::IVec2;

use crate::TileKind;

/// Failures surfaced by map queries, interactions and turn resolution.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Position outside the grid. Rejected, never fatal.
    #[error("position {0} is outside the map")]
    OutOfBounds(IVec2),

    /// Tile-state mutation incompatible with the kind in place. This is
    /// a resolver bug, not a gameplay outcome.
    #[error("tile at {at} cannot change from {from:?} to {to:?}")]
    InvalidTransition {
        at: IVec2,
        from: TileKind,
        to: TileKind,
    },

    /// Movement or interaction precondition unmet. Surfaced to the
    /// player as "nothing happens".
    #[error("blocked")]
    Blocked,

    #[error("map parse failed: {0}")]
    MapParse(#[from] MapParseError),
}

/// Failures loading the text map format.
#[derive(Debug, thiserror::Error)]
pub enum MapParseError {
    #[error("empty map")]
    Empty,

    #[error("row {row} has length {len}, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("unrecognized symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol {
        symbol: char,
        row: usize,
        col: usize,
    },

    #[error("no actor start position (@) in map")]
    NoStart,

    #[error("more than one actor start position (@) in map")]
    MultipleStarts,

    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),
}
