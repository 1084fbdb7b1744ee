//! One-intent-per-turn sequencing over the whole game state.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::{
    interact, Error, Event, HashSet, Intent, Map, Snapshot, Visibility,
    CURSE_DURATION, CURSE_SIGHT_PENALTY, FOV_RADIUS,
};

/// Complete engine state for one level run.
///
/// Created at level start, destroyed at level exit, and threaded
/// explicitly through every turn; there is no ambient shared state
/// anywhere in the engine.
#[derive(Clone, Serialize, Deserialize)]
pub struct GameState {
    map: Map,
    visibility: Visibility,
    actor_position: IVec2,
    sight_radius: i32,
    curse_turns: u32,
    turn_count: u64,
}

/// What one completed turn did.
#[derive(Clone, Debug, Default)]
pub struct TurnReport {
    pub events: Vec<Event>,
    /// Positions that entered the visible set this turn.
    pub newly_visible: HashSet<IVec2>,
    /// Positions that left the visible set and demoted to remembered.
    pub newly_remembered: HashSet<IVec2>,
}

impl GameState {
    /// Start a level run on `map` with the actor at `start`.
    ///
    /// Runs the initial visibility pass so the actor never starts
    /// blind; the turn counter only counts completed `advance_turn`
    /// cycles.
    pub fn new(map: Map, start: IVec2) -> Result<Self, Error> {
        if !map.contains(start) {
            return Err(Error::OutOfBounds(start));
        }

        let mut state = GameState {
            map,
            visibility: Default::default(),
            actor_position: start,
            sight_radius: FOV_RADIUS,
            curse_turns: 0,
            turn_count: 0,
        };
        let visible = Visibility::compute(
            &state.map,
            state.actor_position,
            state.sight_radius(),
        );
        state.visibility.update_explored(visible);
        Ok(state)
    }

    /// Load a level run straight from map text.
    pub fn from_text(text: &str) -> Result<Self, Error> {
        let (map, start) = Map::parse(text)?;
        Self::new(map, start)
    }

    /// Effective sight radius, with curse dimming applied.
    pub fn sight_radius(&self) -> i32 {
        if self.curse_turns > 0 {
            (self.sight_radius - CURSE_SIGHT_PENALTY).max(1)
        } else {
            self.sight_radius
        }
    }

    pub fn actor_position(&self) -> IVec2 {
        self.actor_position
    }

    pub fn turn_count(&self) -> u64 {
        self.turn_count
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut Map {
        &mut self.map
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    /// Read-only view for renderers, valid between turns.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.map, &self.visibility, self.actor_position)
    }

    /// Run one complete turn: validate the intent, resolve the
    /// interaction, apply its effects, refresh visibility and advance
    /// the turn counter.
    ///
    /// Turns never partially commit. Every fallible step runs before
    /// the first mutation, so on any `Err` the state is exactly as it
    /// was.
    pub fn advance_turn(
        &mut self,
        intent: Intent,
    ) -> Result<TurnReport, Error> {
        let target = self.actor_position + intent.dir();
        let outcome =
            interact::resolve(&self.map, self.actor_position, target, intent)?;

        // Re-check every resolved transition before applying any of
        // them; a mismatch is a resolver bug and must not half-commit.
        for &(pos, kind) in &outcome.tile_changes {
            let current = self.map.tile_at(pos)?;
            if !current.same_kind(kind) {
                log::warn!(
                    "resolver produced invalid transition at {pos}: \
                     {current:?} -> {kind:?}"
                );
                return Err(Error::InvalidTransition {
                    at: pos,
                    from: current,
                    to: kind,
                });
            }
        }

        for &(pos, kind) in &outcome.tile_changes {
            self.map.set_tile_state(pos, kind)?;
        }

        if let Some(to) = outcome.relocate_to {
            self.actor_position = to;
        }

        // Stepping on cursed ground dims sight starting this turn;
        // otherwise an active curse wears off by one.
        if outcome
            .events
            .iter()
            .any(|e| matches!(e, Event::CursedEffectTriggered(_)))
        {
            self.curse_turns = CURSE_DURATION;
        } else {
            self.curse_turns = self.curse_turns.saturating_sub(1);
        }

        let visible = Visibility::compute(
            &self.map,
            self.actor_position,
            self.sight_radius(),
        );
        let newly_visible: HashSet<IVec2> = visible
            .difference(self.visibility.visible())
            .copied()
            .collect();
        let newly_remembered: HashSet<IVec2> = self
            .visibility
            .visible()
            .difference(&visible)
            .copied()
            .collect();
        self.visibility.update_explored(visible);

        self.turn_count += 1;

        Ok(TurnReport {
            events: outcome.events,
            newly_visible,
            newly_remembered,
        })
    }
}

#[cfg(test)]
mod test {
    use glam::ivec2;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Sight, TileKind};

    #[test]
    fn walkthrough_of_the_corner_room() {
        // Door at (0, 1), pit at (2, 1), actor start at (0, 2).
        let mut state = GameState::from_text("###\n+.^\n@.#").unwrap();
        assert_eq!(state.actor_position(), ivec2(0, 2));

        // Step onto plain floor.
        let report = state.advance_turn(Intent::Move(ivec2(1, 0))).unwrap();
        assert_eq!(report.events, vec![Event::Moved(ivec2(1, 2))]);
        assert_eq!(state.turn_count(), 1);

        // The door above the start is closed; walking into it fails.
        let mut state = GameState::from_text("###\n+.^\n@.#").unwrap();
        assert!(matches!(
            state.advance_turn(Intent::Move(ivec2(0, -1))),
            Err(Error::Blocked)
        ));
        // The failed turn committed nothing.
        assert_eq!(state.turn_count(), 0);
        assert_eq!(state.actor_position(), ivec2(0, 2));

        // Open it, then walk through.
        let report = state.advance_turn(Intent::Open(ivec2(0, -1))).unwrap();
        assert_eq!(report.events, vec![Event::DoorOpened(ivec2(0, 1))]);
        assert_eq!(
            state.map().tile_at(ivec2(0, 1)).unwrap(),
            TileKind::Door { open: true }
        );

        let report = state.advance_turn(Intent::Move(ivec2(0, -1))).unwrap();
        assert_eq!(report.events, vec![Event::Moved(ivec2(0, 1))]);
        assert_eq!(state.actor_position(), ivec2(0, 1));
        assert_eq!(state.turn_count(), 2);
    }

    #[test]
    fn failed_turns_leave_state_untouched() {
        let mut state = GameState::from_text("###\n#@#\n###").unwrap();
        let before_vis = state.visibility().visible().clone();

        for intent in [
            Intent::Move(ivec2(0, -1)),
            Intent::Open(ivec2(1, 0)),
            Intent::Move(ivec2(0, 0)),
        ] {
            assert!(state.advance_turn(intent).is_err());
            assert_eq!(state.turn_count(), 0);
            assert_eq!(state.actor_position(), ivec2(1, 1));
            assert_eq!(state.visibility().visible(), &before_vis);
        }
    }

    #[test]
    fn moving_out_of_the_grid_is_out_of_bounds() {
        let mut state = GameState::from_text("@.\n..").unwrap();
        assert!(matches!(
            state.advance_turn(Intent::Move(ivec2(-1, 0))),
            Err(Error::OutOfBounds(_))
        ));
        assert_eq!(state.turn_count(), 0);
    }

    #[test]
    fn visibility_report_tracks_the_door() {
        let mut state = GameState::from_text(
            "#####\n\
             #@+.#\n\
             #####",
        )
        .unwrap();
        let hidden = ivec2(3, 1);
        assert_eq!(state.visibility().sight(hidden), Sight::Unknown);

        let report = state.advance_turn(Intent::Open(ivec2(1, 0))).unwrap();
        assert!(report.newly_visible.contains(&hidden));
        assert_eq!(state.visibility().sight(hidden), Sight::Visible);
    }

    #[test]
    fn pit_falls_once_per_level() {
        let mut state = GameState::from_text("@^.").unwrap();

        let report = state.advance_turn(Intent::Move(ivec2(1, 0))).unwrap();
        assert_eq!(report.events, vec![Event::FellIntoPit(ivec2(1, 0))]);

        // Walk off and back on; the pit stays sprung.
        state.advance_turn(Intent::Move(ivec2(1, 0))).unwrap();
        let report = state.advance_turn(Intent::Move(ivec2(-1, 0))).unwrap();
        assert_eq!(report.events, vec![Event::NoEffect]);
    }

    #[test]
    fn curse_dims_sight_then_wears_off() {
        let mut state = GameState::from_text("@!........").unwrap();
        assert_eq!(state.sight_radius(), FOV_RADIUS);

        let report = state.advance_turn(Intent::Move(ivec2(1, 0))).unwrap();
        assert_eq!(
            report.events,
            vec![Event::CursedEffectTriggered(ivec2(1, 0))]
        );
        assert_eq!(state.sight_radius(), FOV_RADIUS - CURSE_SIGHT_PENALTY);

        // The curse fades after enough uncursed turns.
        for _ in 0..CURSE_DURATION {
            assert_eq!(
                state.sight_radius(),
                FOV_RADIUS - CURSE_SIGHT_PENALTY
            );
            state.advance_turn(Intent::Examine(ivec2(1, 0))).unwrap();
        }
        assert_eq!(state.sight_radius(), FOV_RADIUS);
    }

    #[test]
    fn dimmed_sight_shrinks_the_report() {
        // A long corridor: cursed ground at the start, floor beyond.
        let mut state =
            GameState::from_text("@!............").unwrap();
        let report = state.advance_turn(Intent::Move(ivec2(1, 0))).unwrap();

        // Sight dropped from FOV_RADIUS to the cursed radius while the
        // actor advanced one step: the far end of the corridor fell out
        // of view.
        let radius = state.sight_radius();
        for pos in &report.newly_remembered {
            let d = *pos - state.actor_position();
            assert!(d.x * d.x + d.y * d.y > radius * radius);
        }
        assert!(!report.newly_remembered.is_empty());
    }
}
