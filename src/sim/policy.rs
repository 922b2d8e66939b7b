//! Decision policies for the simulation driver.
//!
//! The engine only says which actions are legal. Which one gets played is
//! up to a `DecisionPolicy`, so strategies can be swapped without touching
//! the rules.

use crate::core::GameRng;
use crate::rules::{Action, GameState};

/// Chooses one of the legal actions for the current player.
pub trait DecisionPolicy {
    /// `legal` is never empty.
    fn choose(&mut self, state: &GameState, legal: &[Action], rng: &mut GameRng) -> Action;
}

/// Random play with a tunable lean towards Hit.
///
/// When both Hit and Stay are on offer, Hit is weighted `bias_hit` and Stay
/// `1 - bias_hit`. Every other choice is uniform.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    pub bias_hit: f64,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(bias_hit: f64) -> Self {
        Self {
            bias_hit: bias_hit.clamp(0.0, 1.0),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new(0.9)
    }
}

impl DecisionPolicy for RandomPolicy {
    fn choose(&mut self, _state: &GameState, legal: &[Action], rng: &mut GameRng) -> Action {
        let free_choice = legal.contains(&Action::Hit) && legal.contains(&Action::Stay);
        let index = if free_choice {
            let weights: Vec<f64> = legal
                .iter()
                .map(|&a| if a == Action::Hit { self.bias_hit } else { 1.0 - self.bias_hit })
                .collect();
            rng.choose_weighted(&weights)
        } else {
            None
        };

        index
            .map(|i| legal[i])
            .or_else(|| rng.choose(legal).copied())
            .unwrap_or(Action::Hit)
    }
}

/// Hits until the current round score reaches `stay_at`, then stays.
///
/// Keeps Flip Three and passes Freeze to the opponent.
#[derive(Clone, Debug)]
pub struct ThresholdPolicy {
    pub stay_at: u32,
}

impl DecisionPolicy for ThresholdPolicy {
    fn choose(&mut self, state: &GameState, legal: &[Action], _rng: &mut GameRng) -> Action {
        let score = state.compute_round_score(state.current_player());
        let preferred: &[Action] = if score >= self.stay_at {
            &[Action::Stay, Action::KeepFlipThree, Action::PassFreeze, Action::Hit]
        } else {
            &[Action::Hit, Action::KeepFlipThree, Action::PassFreeze, Action::Stay]
        };

        preferred
            .iter()
            .copied()
            .find(|a| legal.contains(a))
            .unwrap_or(legal[0])
    }
}
