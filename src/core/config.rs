//! Rule configuration.
//!
//! `GameConfig::new` gives the standard Flip7 numbers. The knobs exist for
//! variants and for tests; the card composition itself is fixed.

use serde::{Deserialize, Serialize};

/// Forced draws owed by whoever receives a Flip Three.
pub const FLIP_THREE_COUNT: u32 = 3;

/// Distinct numbers needed for the flip bonus.
pub const BONUS_THRESHOLD: usize = 7;

/// Points added for reaching [`BONUS_THRESHOLD`] distinct numbers.
pub const BONUS_POINTS: u32 = 15;

/// Table size and scoring constants for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub player_count: usize,
    pub flip_three_count: u32,
    pub bonus_threshold: usize,
    pub bonus_points: u32,
}

impl GameConfig {
    /// Standard rules for `player_count` seats.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            player_count,
            flip_three_count: FLIP_THREE_COUNT,
            bonus_threshold: BONUS_THRESHOLD,
            bonus_points: BONUS_POINTS,
        }
    }

    #[must_use]
    pub fn with_flip_three_count(mut self, count: u32) -> Self {
        self.flip_three_count = count;
        self
    }

    #[must_use]
    pub fn with_bonus(mut self, threshold: usize, points: u32) -> Self {
        self.bonus_threshold = threshold;
        self.bonus_points = points;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rules() {
        let config = GameConfig::default();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.flip_three_count, 3);
        assert_eq!(config.bonus_threshold, 7);
        assert_eq!(config.bonus_points, 15);
    }

    #[test]
    fn test_builders() {
        let config = GameConfig::new(4).with_flip_three_count(2).with_bonus(5, 10);
        assert_eq!(config.player_count, 4);
        assert_eq!(config.flip_three_count, 2);
        assert_eq!((config.bonus_threshold, config.bonus_points), (5, 10));
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_zero_players_rejected() {
        let _ = GameConfig::new(0);
    }
}
