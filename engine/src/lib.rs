//! Turn-based dungeon engine core.

/// How far can the actor see with no curse in effect.
pub const FOV_RADIUS: i32 = 10;

/// For how many turns stepping on cursed ground dims the actor's sight.
pub const CURSE_DURATION: u32 = 5;

/// How much cursed ground subtracts from the sight radius.
pub const CURSE_SIGHT_PENALTY: i32 = 3;

/// How many messages the event journal retains.
pub const JOURNAL_CAPACITY: usize = 5;

mod action;
pub use action::{Event, Intent};

mod error;
pub use error::{Error, MapParseError};

mod fov;
pub use crate::fov::{Explored, Sight, Visibility};

mod interact;
pub use interact::{resolve, Outcome};

mod journal;
pub use journal::{Journal, Message, MessageKind};

mod map;
pub use map::Map;

pub mod prelude;

mod snapshot;
pub use snapshot::Snapshot;

mod tile;
pub use tile::TileKind;

mod turn;
pub use turn::{GameState, TurnReport};

/// Map with an efficient hash function.
pub type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;

/// Set with an efficient hash function.
pub type HashSet<V> = rustc_hash::FxHashSet<V>;
