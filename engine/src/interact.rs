//! Tile interaction state machines.
//!
//! Every tile kind has its own transition table here, matched
//! exhaustively; adding a kind means adding arms, not threading flags
//! through movement code.

use glam::IVec2;

use crate::{Error, Event, Intent, Map, TileKind};

/// Net result of resolving one intent against one tile.
///
/// `resolve` never mutates anything itself; the turn controller applies
/// the listed tile changes and relocation, so a failed resolution
/// trivially leaves the world untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outcome {
    pub events: Vec<Event>,
    pub tile_changes: Vec<(IVec2, TileKind)>,
    pub relocate_to: Option<IVec2>,
}

/// Chebyshev-adjacent, the 8-neighborhood.
fn adjacent(a: IVec2, b: IVec2) -> bool {
    let d = (b - a).abs();
    d.x.max(d.y) == 1
}

/// Apply the target tile's state machine to the actor's intent.
pub fn resolve(
    map: &Map,
    actor: IVec2,
    target: IVec2,
    intent: Intent,
) -> Result<Outcome, Error> {
    let tile = map.tile_at(target)?;
    if !adjacent(actor, target) {
        return Err(Error::Blocked);
    }

    use TileKind::*;

    let mut out = Outcome::default();
    match (intent, tile) {
        (Intent::Open(_), Door { open: false }) => {
            out.tile_changes.push((target, Door { open: true }));
            out.events.push(Event::DoorOpened(target));
        }
        (Intent::Open(_), Door { open: true }) => {
            out.events.push(Event::NoEffect);
        }
        (Intent::Open(_), _) => return Err(Error::Blocked),

        (Intent::Examine(_), Obelisk) => {
            out.events.push(Event::Examined(target));
        }
        // Examining mundane ground is legitimate and changes nothing.
        (Intent::Examine(_), _) => out.events.push(Event::NoEffect),

        (Intent::Move(_), Wall | Obelisk | Door { open: false }) => {
            return Err(Error::Blocked);
        }
        (Intent::Move(_), Floor | Door { open: true }) => {
            out.relocate_to = Some(target);
            out.events.push(Event::Moved(target));
        }
        (Intent::Move(_), Pit { sprung: false }) => {
            out.relocate_to = Some(target);
            out.tile_changes.push((target, Pit { sprung: true }));
            out.events.push(Event::FellIntoPit(target));
        }
        (Intent::Move(_), Pit { sprung: true }) => {
            out.relocate_to = Some(target);
            out.events.push(Event::NoEffect);
        }
        (Intent::Move(_), CursedFloor) => {
            out.relocate_to = Some(target);
            out.events.push(Event::CursedEffectTriggered(target));
        }
        (Intent::Move(_), PressurePlate { triggered: false }) => {
            out.relocate_to = Some(target);
            out.tile_changes
                .push((target, PressurePlate { triggered: true }));
            out.events.push(Event::PlateTriggered(target));

            if let Some(door) = map.plate_link(target) {
                if let Ok(Door { open: false }) = map.tile_at(door) {
                    out.tile_changes.push((door, Door { open: true }));
                    out.events.push(Event::DoorOpened(door));
                }
            }
        }
        (Intent::Move(_), PressurePlate { triggered: true }) => {
            out.relocate_to = Some(target);
            out.events.push(Event::NoEffect);
        }
    }

    Ok(out)
}
