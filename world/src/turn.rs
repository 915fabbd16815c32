//! Turn phase tracking: PlayerTurn, KingTurn, LevelComplete.

use tactics_core::TurnPhase;

/// Tracks the current phase and the one-based turn counter.
///
/// Transition legality is enforced by the world's command handlers; this
/// tracker only records the sequence. `LevelComplete` is terminal: no
/// handler transitions out of it.
#[derive(Debug)]
pub(crate) struct TurnTracker {
    phase: TurnPhase,
    turn: u32,
}

impl TurnTracker {
    pub(crate) const fn new() -> Self {
        Self {
            phase: TurnPhase::PlayerTurn,
            turn: 1,
        }
    }

    pub(crate) const fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub(crate) const fn turn(&self) -> u32 {
        self.turn
    }

    pub(crate) fn begin_king_phase(&mut self) {
        debug_assert_eq!(self.phase, TurnPhase::PlayerTurn);
        self.phase = TurnPhase::KingTurn;
    }

    /// Loops back to the player phase, starting the next turn.
    pub(crate) fn begin_player_phase(&mut self) {
        debug_assert_eq!(self.phase, TurnPhase::KingTurn);
        self.phase = TurnPhase::PlayerTurn;
        self.turn = self.turn.saturating_add(1);
    }

    pub(crate) fn complete_level(&mut self) {
        self.phase = TurnPhase::LevelComplete;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_increments_the_turn_counter() {
        let mut tracker = TurnTracker::new();
        assert_eq!(tracker.phase(), TurnPhase::PlayerTurn);
        assert_eq!(tracker.turn(), 1);

        tracker.begin_king_phase();
        assert_eq!(tracker.phase(), TurnPhase::KingTurn);

        tracker.begin_player_phase();
        assert_eq!(tracker.phase(), TurnPhase::PlayerTurn);
        assert_eq!(tracker.turn(), 2);
    }

    #[test]
    fn completion_is_recorded() {
        let mut tracker = TurnTracker::new();
        tracker.begin_king_phase();
        tracker.complete_level();
        assert_eq!(tracker.phase(), TurnPhase::LevelComplete);
    }
}
