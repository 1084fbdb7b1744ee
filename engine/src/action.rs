//! Actor intents and the events resolving them produces.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Atomic single-turn commands aimed one step away from the actor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Step into the adjacent cell, entering or tripping whatever is
    /// there.
    Move(IVec2),

    /// Pull open the door in the adjacent cell.
    Open(IVec2),

    /// Inspect the adjacent cell without touching it.
    Examine(IVec2),
}

impl Intent {
    /// The direction payload of the intent.
    pub fn dir(self) -> IVec2 {
        match self {
            Intent::Move(d) | Intent::Open(d) | Intent::Examine(d) => d,
        }
    }
}

/// What happened when an intent was resolved against a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Actor relocated to the given position.
    Moved(IVec2),

    /// A closed door at the position swung open.
    DoorOpened(IVec2),

    /// The pit at the position gave way under the actor.
    FellIntoPit(IVec2),

    /// Cursed ground at the position discharged into the actor.
    CursedEffectTriggered(IVec2),

    /// The pressure plate at the position tripped its mechanism.
    PlateTriggered(IVec2),

    /// The actor studied the tile at the position.
    Examined(IVec2),

    /// The intent was legitimate but changed nothing.
    NoEffect,
}
