pub use crate::{
    Error, Event, GameState, HashMap, HashSet, Intent, Journal, Map,
    MapParseError, Sight, Snapshot, TileKind, TurnReport, Visibility,
    FOV_RADIUS,
};
pub use glam::{ivec2, IVec2};
