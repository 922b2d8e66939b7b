//! Plays whole games with a [`DecisionPolicy`] and records what happened.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use super::config::SimConfig;
use super::policy::DecisionPolicy;
use crate::cards::Card;
use crate::core::{GameRng, PlayerId, PlayerMap, Result};
use crate::rules::{Action, ActionRecord, GameState};

/// Everything that happened in one round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub actions: Vec<ActionRecord>,
    pub hits: PlayerMap<u32>,
    /// Cards each player drew, in order.
    pub cards: PlayerMap<Vec<Card>>,
    /// Round score per player when the round ended.
    pub points: PlayerMap<u32>,
    /// Totals after this round.
    pub cumulative: PlayerMap<u32>,
}

impl fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Round {} Summary:", self.round)?;
        let actions: Vec<String> = self.actions.iter().map(ToString::to_string).collect();
        writeln!(f, "  Actions: [{}]", actions.join(", "))?;
        for (player, hits) in self.hits.iter() {
            let cards: Vec<String> = self.cards[player].iter().map(ToString::to_string).collect();
            writeln!(
                f,
                "  {player}: Hits={hits}, Cards=[{}], Points={}",
                cards.join(", "),
                self.points[player]
            )?;
        }
        let totals: Vec<String> = self.cumulative.values().map(ToString::to_string).collect();
        write!(f, "  Cumulative Scores: [{}]", totals.join(", "))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub rounds: Vec<RoundSummary>,
    pub final_scores: PlayerMap<u32>,
    pub winner: PlayerId,
    /// `false` if the round cap hit before anyone reached the target.
    pub completed: bool,
}

/// Highest score wins; ties go to the lowest seat.
#[must_use]
pub fn leader(scores: &PlayerMap<u32>) -> PlayerId {
    scores
        .iter()
        .fold((PlayerId::new(0), 0u32), |best, (player, &score)| {
            if score > best.1 {
                (player, score)
            } else {
                best
            }
        })
        .0
}

/// Drives a [`GameState`] with a policy.
///
/// Decks and the policy draw from separate seeded streams, so swapping the
/// policy does not change the order cards come out of a fresh deck.
pub struct Simulator<P: DecisionPolicy> {
    config: SimConfig,
    policy: P,
    deck_rng: GameRng,
    policy_rng: GameRng,
    state: GameState,
}

impl<P: DecisionPolicy> Simulator<P> {
    #[must_use]
    pub fn new(config: SimConfig, policy: P) -> Self {
        let root = GameRng::new(config.seed);
        let mut deck_rng = root.for_context("deck");
        let policy_rng = root.for_context("policy");
        let state = GameState::new(config.player_count, &mut deck_rng);
        Self {
            config,
            policy,
            deck_rng,
            policy_rng,
            state,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Play one round to completion.
    ///
    /// Starts a new round first if the previous one is already over.
    pub fn run_round(&mut self) -> Result<RoundSummary> {
        if !self.state.round_active() {
            self.state.start_new_round(&mut self.deck_rng);
        }

        let player_count = self.state.player_count();
        let mut actions = Vec::new();
        let mut hits = PlayerMap::with_value(player_count, 0u32);
        let mut cards: PlayerMap<Vec<Card>> = PlayerMap::with_default(player_count);

        while self.state.round_active() {
            let player = self.state.current_player();
            let legal = self.state.legal_actions();
            if legal.is_empty() {
                self.state.pass_turn();
                continue;
            }

            let action = self.policy.choose(&self.state, &legal, &mut self.policy_rng);
            debug!(%player, %action, "policy chose");
            actions.push(ActionRecord { player, action });
            if action == Action::Hit {
                hits[player] += 1;
            }

            if let Some(card) = self.state.apply(action)? {
                cards[player].push(card);
            }
        }

        let summary = RoundSummary {
            round: self.state.round_number(),
            actions,
            hits,
            cards,
            points: self.state.round_scores(),
            cumulative: self.state.cumulative_scores().clone(),
        };
        info!(round = summary.round, cumulative = ?summary.cumulative, "round finished");
        Ok(summary)
    }

    fn target_reached(&self) -> bool {
        self.state
            .cumulative_scores()
            .values()
            .any(|&score| score >= self.config.target_score)
    }

    /// Play rounds until someone reaches the target score.
    pub fn run_game(&mut self) -> Result<GameSummary> {
        self.run_game_with(|_| {})
    }

    /// Like [`run_game`](Self::run_game), calling `on_round` after each round.
    pub fn run_game_with(&mut self, mut on_round: impl FnMut(&RoundSummary)) -> Result<GameSummary> {
        let mut rounds = Vec::new();

        while !self.target_reached() && (rounds.len() as u32) < self.config.max_rounds {
            let summary = self.run_round()?;
            on_round(&summary);
            rounds.push(summary);
        }

        let final_scores = self.state.cumulative_scores().clone();
        let winner = leader(&final_scores);
        let completed = self.target_reached();
        info!(%winner, scores = ?final_scores, completed, "game over");

        Ok(GameSummary {
            rounds,
            final_scores,
            winner,
            completed,
        })
    }
}
