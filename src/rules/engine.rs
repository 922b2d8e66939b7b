//! Round and turn state machine.
//!
//! `GameState` owns the deck, one [`PlayerRoundState`] per seat and the
//! cumulative scores. Drivers loop on [`GameState::legal_actions`] and
//! [`GameState::apply`] until [`GameState::round_active`] turns false, then
//! call [`GameState::start_new_round`].
//!
//! ## Turn passing
//!
//! After a Hit the turn moves on only once the drawer is settled: no
//! Keep/Pass decision owed and no forced Flip Three draws left. The next
//! player is the next *active* seat in rotation, which may be the drawer
//! again if everyone else is out.
//!
//! A player who busts or is frozen while forced draws are still owed keeps
//! the turn index but has no legal actions. Drivers call
//! [`GameState::pass_turn`] when `legal_actions` comes back empty during an
//! active round.
//!
//! ## Decisions
//!
//! Drawing Flip Three or Freeze while another player is still active puts
//! the drawer into a decision sub-state (see [`TurnPhase`]). "Pass" always
//! targets the next active opponent in seat order.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::action::Action;
use super::player_state::PlayerRoundState;
use super::scoring::round_score;
use crate::cards::{ActionCard, Card, Deck};
use crate::core::{GameConfig, GameRng, PlayerId, PlayerMap, Result};

/// What the current player may do, derived from their round state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    RoundOver,
    /// The turn index points at a player who is already out.
    Inactive,
    AwaitingFlipDecision,
    AwaitingFreezeDecision,
    ForcedHit { remaining: u32 },
    FreeChoice,
}

impl TurnPhase {
    #[must_use]
    pub fn legal_actions(self) -> Vec<Action> {
        match self {
            TurnPhase::RoundOver | TurnPhase::Inactive => vec![],
            TurnPhase::AwaitingFlipDecision => vec![Action::KeepFlipThree, Action::PassFlipThree],
            TurnPhase::AwaitingFreezeDecision => vec![Action::KeepFreeze, Action::PassFreeze],
            TurnPhase::ForcedHit { .. } => vec![Action::Hit],
            TurnPhase::FreeChoice => vec![Action::Hit, Action::Stay],
        }
    }
}

/// Full game state: current round plus running totals.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    deck: Deck,
    players: PlayerMap<PlayerRoundState>,
    current: PlayerId,
    round_active: bool,
    round_number: u32,
    cumulative: PlayerMap<u32>,
}

impl GameState {
    /// Standard rules for `player_count` seats, first round dealt.
    #[must_use]
    pub fn new(player_count: usize, rng: &mut GameRng) -> Self {
        Self::with_config(GameConfig::new(player_count), rng)
    }

    #[must_use]
    pub fn with_config(config: GameConfig, rng: &mut GameRng) -> Self {
        let deck = Deck::new(rng);
        Self::with_deck(config, deck)
    }

    /// Start the first round on a prepared deck.
    #[must_use]
    pub fn with_deck(config: GameConfig, deck: Deck) -> Self {
        let player_count = config.player_count;
        info!(player_count, "starting game");
        Self {
            deck,
            players: PlayerMap::with_default(player_count),
            current: PlayerId::new(0),
            round_active: true,
            round_number: 1,
            cumulative: PlayerMap::with_value(player_count, 0),
            config,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<PlayerRoundState> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerRoundState {
        &self.players[player]
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn round_active(&self) -> bool {
        self.round_active
    }

    /// 1-based.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub fn cumulative_scores(&self) -> &PlayerMap<u32> {
        &self.cumulative
    }

    // === Round lifecycle ===

    /// Fresh deck, every seat reset, round active.
    ///
    /// The turn index carries over from the previous round.
    pub fn start_new_round(&mut self, rng: &mut GameRng) {
        self.deck = Deck::new(rng);
        for player in self.players.values_mut() {
            player.reset_round();
        }
        self.round_active = true;
        self.round_number += 1;
        info!(round = self.round_number, first = %self.current, "starting round");
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if !self.round_active {
            return TurnPhase::RoundOver;
        }
        let player = &self.players[self.current];
        if !player.active {
            TurnPhase::Inactive
        } else if player.need_flip_decision {
            TurnPhase::AwaitingFlipDecision
        } else if player.need_freeze_decision {
            TurnPhase::AwaitingFreezeDecision
        } else if player.pending_flips > 0 {
            TurnPhase::ForcedHit {
                remaining: player.pending_flips,
            }
        } else {
            TurnPhase::FreeChoice
        }
    }

    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.phase().legal_actions()
    }

    #[must_use]
    pub fn is_legal(&self, action: Action) -> bool {
        self.legal_actions().contains(&action)
    }

    /// What `player` would bank if their round ended now.
    #[must_use]
    pub fn compute_round_score(&self, player: PlayerId) -> u32 {
        round_score(&self.players[player], &self.config)
    }

    #[must_use]
    pub fn round_scores(&self) -> PlayerMap<u32> {
        PlayerMap::new(self.player_count(), |p| self.compute_round_score(p))
    }

    fn any_active(&self) -> bool {
        self.players.values().any(|p| p.active)
    }

    /// Next active seat after `from`, not counting `from` itself.
    fn next_active_opponent(&self, from: PlayerId) -> Option<PlayerId> {
        from.others(self.player_count())
            .find(|&p| self.players[p].active)
    }

    // === Transitions ===

    /// Apply one action for the current player.
    ///
    /// Returns the drawn card for a Hit. Actions outside
    /// [`legal_actions`](Self::legal_actions) change nothing and return
    /// `Ok(None)`. The only error is a deck with no cards left at all.
    pub fn apply(&mut self, action: Action) -> Result<Option<Card>> {
        if !self.is_legal(action) {
            warn!(%action, player = %self.current, phase = ?self.phase(), "ignoring illegal action");
            return Ok(None);
        }

        let current = self.current;
        match action {
            Action::KeepFlipThree => {
                let count = self.config.flip_three_count;
                let player = &mut self.players[current];
                player.need_flip_decision = false;
                player.pending_flips += count;
                debug!(player = %current, count, "keeps flip three");
                Ok(None)
            }
            Action::PassFlipThree => {
                self.players[current].need_flip_decision = false;
                let target = self.next_active_opponent(current).unwrap_or(current);
                self.players[target].pending_flips += self.config.flip_three_count;
                self.current = target;
                debug!(player = %current, %target, "passes flip three");
                Ok(None)
            }
            Action::KeepFreeze => {
                self.players[current].need_freeze_decision = false;
                self.bank(current);
                self.advance_or_end();
                Ok(None)
            }
            Action::PassFreeze => {
                self.players[current].need_freeze_decision = false;
                let target = self.next_active_opponent(current).unwrap_or(current);
                debug!(player = %current, %target, "passes freeze");
                self.bank(target);
                self.advance_or_end();
                Ok(None)
            }
            Action::Stay => {
                self.bank(current);
                self.advance_or_end();
                Ok(None)
            }
            Action::Hit => self.hit(current).map(Some),
        }
    }

    fn hit(&mut self, current: PlayerId) -> Result<Card> {
        let card = self.deck.draw()?;
        let opponent_active = self.next_active_opponent(current).is_some();
        let flip_three_count = self.config.flip_three_count;

        let mut frozen_alone = false;

        let player = &mut self.players[current];
        player.pending_flips = player.pending_flips.saturating_sub(1);
        debug!(player = %current, %card, "draws");

        match card {
            Card::Number(number) if player.has_flipped(number) => {
                if player.has_second_chance {
                    player.has_second_chance = false;
                    debug!(player = %current, %card, "second chance spent on duplicate");
                } else {
                    player.active = false;
                    player.busted = true;
                    debug!(player = %current, %card, "busts");
                }
            }
            Card::Number(number) => player.flipped.push(number),
            Card::Action(ActionCard::FlipThree) => {
                if opponent_active {
                    player.need_flip_decision = true;
                } else {
                    player.pending_flips += flip_three_count;
                }
            }
            Card::Action(ActionCard::Freeze) => {
                if opponent_active {
                    player.need_freeze_decision = true;
                } else {
                    frozen_alone = true;
                }
            }
            // A second copy while one is held changes nothing.
            Card::Action(ActionCard::SecondChance) => player.has_second_chance = true,
            Card::Modifier(modifier) => player.modifiers.push(modifier),
        }

        if frozen_alone {
            self.bank(current);
        }
        if self.players[current].is_settled() {
            self.advance_or_end();
        } else if !self.any_active() {
            self.end_round();
        }

        Ok(card)
    }

    /// Bank `player`'s round score and take them out of the round.
    fn bank(&mut self, player: PlayerId) {
        let points = self.compute_round_score(player);
        self.cumulative[player] += points;
        self.players[player].active = false;
        debug!(%player, points, total = self.cumulative[player], "banks");
    }

    fn advance_or_end(&mut self) {
        if self.any_active() {
            self.pass_turn();
        } else {
            self.end_round();
        }
    }

    fn end_round(&mut self) {
        self.round_active = false;
        info!(round = self.round_number, scores = ?self.cumulative, "round over");
    }

    /// Hand the turn to the next active seat in rotation.
    ///
    /// Falls back to the current seat if it is the only one still active.
    /// Does nothing once the round is over.
    pub fn pass_turn(&mut self) {
        if !self.round_active {
            return;
        }
        let next = self
            .next_active_opponent(self.current)
            .or_else(|| self.players[self.current].active.then_some(self.current));
        match next {
            Some(next) => {
                debug!(from = %self.current, to = %next, "turn passes");
                self.current = next;
            }
            None => self.end_round(),
        }
    }
}
