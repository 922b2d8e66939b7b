//! Round scoring.
//!
//! A busted player scores 0. Otherwise:
//!
//! 1. sum the flipped number values,
//! 2. multiply by every multiplier held,
//! 3. add every additive modifier,
//! 4. add the flip bonus if enough distinct numbers were flipped.

use super::player_state::PlayerRoundState;
use crate::cards::ModifierKind;
use crate::core::GameConfig;

/// Score `player` would bank right now.
#[must_use]
pub fn round_score(player: &PlayerRoundState, config: &GameConfig) -> u32 {
    if player.busted {
        return 0;
    }

    let multiplied = player
        .modifiers
        .iter()
        .filter(|m| m.kind() == ModifierKind::Multiplier)
        .fold(player.number_total(), |total, m| total * m.amount());

    let added: u32 = player
        .modifiers
        .iter()
        .filter(|m| m.kind() == ModifierKind::Additive)
        .map(|m| m.amount())
        .sum();

    let bonus = if player.distinct_count() >= config.bonus_threshold {
        config.bonus_points
    } else {
        0
    };

    multiplied + added + bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Modifier, Number};

    fn player(numbers: &[u8], modifiers: &[Modifier]) -> PlayerRoundState {
        let mut state = PlayerRoundState::new();
        state
            .flipped
            .extend(numbers.iter().map(|&v| Number::new(v).unwrap()));
        state.modifiers.extend(modifiers.iter().copied());
        state
    }

    #[test]
    fn test_multiplier_then_additive() {
        let state = player(
            &[5, 6],
            &[Modifier::multiplier(2).unwrap(), Modifier::additive(3).unwrap()],
        );
        assert_eq!(round_score(&state, &GameConfig::default()), 25);
    }

    #[test]
    fn test_modifier_order_does_not_matter() {
        let state = player(
            &[5, 6],
            &[Modifier::additive(3).unwrap(), Modifier::multiplier(2).unwrap()],
        );
        assert_eq!(round_score(&state, &GameConfig::default()), 25);
    }

    #[test]
    fn test_multipliers_compose() {
        let x2 = Modifier::multiplier(2).unwrap();
        let state = player(&[4], &[x2, x2]);
        assert_eq!(round_score(&state, &GameConfig::default()), 16);
    }

    #[test]
    fn test_bust_scores_zero() {
        let mut state = player(&[7, 12], &[Modifier::additive(10).unwrap()]);
        state.busted = true;
        assert_eq!(round_score(&state, &GameConfig::default()), 0);
    }

    #[test]
    fn test_seven_distinct_bonus() {
        let state = player(&[0, 1, 2, 3, 4, 5, 6], &[]);
        assert_eq!(round_score(&state, &GameConfig::default()), 21 + 15);
    }

    #[test]
    fn test_six_distinct_no_bonus() {
        let state = player(&[1, 2, 3, 4, 5, 6], &[]);
        assert_eq!(round_score(&state, &GameConfig::default()), 21);
    }

    #[test]
    fn test_bonus_is_not_multiplied() {
        let state = player(&[0, 1, 2, 3, 4, 5, 6], &[Modifier::multiplier(2).unwrap()]);
        assert_eq!(round_score(&state, &GameConfig::default()), 42 + 15);
    }

    #[test]
    fn test_empty_hand_keeps_additives() {
        let state = player(&[], &[Modifier::additive(8).unwrap()]);
        assert_eq!(round_score(&state, &GameConfig::default()), 8);
    }
}
