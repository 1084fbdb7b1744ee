//! Read-only state view for rendering layers.

use glam::IVec2;

use crate::{HashSet, Map, Sight, Visibility};

/// Everything a renderer needs, borrowed immutably from the game state.
///
/// Renderers consume this between turns; nothing reachable from here
/// can mutate the engine, and the engine never calls back into a
/// renderer.
#[derive(Copy, Clone)]
pub struct Snapshot<'a> {
    map: &'a Map,
    visibility: &'a Visibility,
    actor_position: IVec2,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(
        map: &'a Map,
        visibility: &'a Visibility,
        actor_position: IVec2,
    ) -> Self {
        Snapshot {
            map,
            visibility,
            actor_position,
        }
    }

    /// The set of positions in view this turn.
    pub fn visible(&self) -> &'a HashSet<IVec2> {
        self.visibility.visible()
    }

    /// Positions seen earlier but out of view now.
    pub fn remembered(&self) -> impl Iterator<Item = IVec2> + 'a {
        self.visibility.remembered()
    }

    /// Read access to the tile grid.
    pub fn tiles(&self) -> &'a Map {
        self.map
    }

    pub fn actor_position(&self) -> IVec2 {
        self.actor_position
    }

    /// Per-position classification, for map-memory display.
    pub fn sight(&self, pos: IVec2) -> Sight {
        self.visibility.sight(pos)
    }
}
