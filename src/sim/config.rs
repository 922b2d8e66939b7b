//! Simulation parameters.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub player_count: usize,

    /// The game ends after the round in which any cumulative score
    /// reaches this.
    pub target_score: u32,

    /// Probability of Hit when both Hit and Stay are legal.
    pub bias_hit: f64,

    /// Seeds both the decks and the policy stream.
    pub seed: u64,

    /// Stop after this many rounds even if nobody reached the target.
    pub max_rounds: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            target_score: 100,
            bias_hit: 0.9,
            seed: 42,
            max_rounds: 1000,
        }
    }
}

impl SimConfig {
    #[must_use]
    pub fn with_players(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    #[must_use]
    pub fn with_bias_hit(mut self, bias_hit: f64) -> Self {
        self.bias_hit = bias_hit;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}
