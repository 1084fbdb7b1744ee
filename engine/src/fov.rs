//! Revealing and remembering terrain around the actor.

use derive_more::{Deref, DerefMut};
use glam::{ivec2, IVec2};
use serde::{Deserialize, Serialize};

use crate::{HashSet, Map};

/// Portions of the level that have been seen at some point.
#[derive(Clone, Default, Deref, DerefMut, Serialize, Deserialize)]
pub struct Explored(HashSet<IVec2>);

/// Visibility classification of one position.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Sight {
    /// Never been in view.
    Unknown,
    /// Seen before, not in view right now.
    Remembered,
    /// In view this turn.
    Visible,
}

/// Current and remembered visibility over a level.
///
/// A position only ever moves forward through `Unknown` → `Visible` →
/// `Remembered` → `Visible` → …; the explored set never shrinks, so
/// nothing regresses to `Unknown` within a level instance.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Visibility {
    visible: HashSet<IVec2>,
    explored: Explored,
}

impl Visibility {
    /// Positions visible from `origin` within `radius` on `map`.
    ///
    /// Pure and deterministic: the same map, origin and radius always
    /// produce the same set. Opaque tiles are included when in view
    /// (walls show up as boundaries), but nothing is seen through them.
    pub fn compute(
        map: &Map,
        origin: IVec2,
        radius: i32,
    ) -> HashSet<IVec2> {
        fov::visible_offsets(radius, |[dx, dy]| {
            map.is_opaque(origin + ivec2(dx, dy))
        })
        .into_iter()
        .map(|[dx, dy]| origin + ivec2(dx, dy))
        .filter(|&pos| map.contains(pos))
        .collect()
    }

    /// Install this turn's visible set and fold it into the explored
    /// memory. Called exactly once per turn, after the actor's position
    /// is final. Positions that fell out of view demote to
    /// `Remembered` by staying explored.
    pub fn update_explored(&mut self, visible: HashSet<IVec2>) {
        self.explored.extend(visible.iter().copied());
        self.visible = visible;
    }

    pub fn sight(&self, pos: IVec2) -> Sight {
        if self.visible.contains(&pos) {
            Sight::Visible
        } else if self.explored.contains(&pos) {
            Sight::Remembered
        } else {
            Sight::Unknown
        }
    }

    /// The set of positions in view this turn.
    pub fn visible(&self) -> &HashSet<IVec2> {
        &self.visible
    }

    /// Positions seen on an earlier turn but out of view now.
    pub fn remembered(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.explored
            .iter()
            .copied()
            .filter(move |pos| !self.visible.contains(pos))
    }
}
