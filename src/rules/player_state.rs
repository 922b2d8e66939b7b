//! One player's progress through the current round.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Modifier, Number};

/// Per-round record for one seat.
///
/// Created once per seat for the whole game and cleared with
/// [`PlayerRoundState::reset_round`] at every round start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRoundState {
    /// Distinct number cards, in the order flipped.
    pub flipped: SmallVec<[Number; 8]>,
    pub modifiers: SmallVec<[Modifier; 4]>,
    pub has_second_chance: bool,
    /// Forced draws still owed from a Flip Three.
    pub pending_flips: u32,
    /// Cleared once the player stays, busts or is frozen.
    pub active: bool,
    pub need_flip_decision: bool,
    pub need_freeze_decision: bool,
    pub busted: bool,
}

impl PlayerRoundState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            flipped: SmallVec::new(),
            modifiers: SmallVec::new(),
            has_second_chance: false,
            pending_flips: 0,
            active: true,
            need_flip_decision: false,
            need_freeze_decision: false,
            busted: false,
        }
    }

    /// Back to round-start defaults. Idempotent.
    pub fn reset_round(&mut self) {
        self.flipped.clear();
        self.modifiers.clear();
        self.has_second_chance = false;
        self.pending_flips = 0;
        self.active = true;
        self.need_flip_decision = false;
        self.need_freeze_decision = false;
        self.busted = false;
    }

    #[must_use]
    pub fn has_flipped(&self, number: Number) -> bool {
        self.flipped.contains(&number)
    }

    /// Number of distinct values flipped.
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        let mask = self
            .flipped
            .iter()
            .fold(0u16, |mask, n| mask | (1 << n.value()));
        mask.count_ones() as usize
    }

    /// Sum of flipped face values.
    #[must_use]
    pub fn number_total(&self) -> u32 {
        self.flipped.iter().map(|n| u32::from(n.value())).sum()
    }

    /// A Keep/Pass choice is owed before anything else.
    #[must_use]
    pub fn awaiting_decision(&self) -> bool {
        self.need_flip_decision || self.need_freeze_decision
    }

    /// No decision and no forced draw outstanding.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.awaiting_decision() && self.pending_flips == 0
    }
}

impl Default for PlayerRoundState {
    fn default() -> Self {
        Self::new()
    }
}
