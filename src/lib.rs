//! # flip7
//!
//! A Flip7-style push-your-luck card game engine.
//!
//! Players take turns drawing from a shared 98-card deck, building a running
//! total of distinct numbers. Drawing a number already flipped is a bust
//! unless a Second Chance is held. Flip Three and Freeze cards force
//! immediate Keep/Pass decisions. A player can stay at any free turn to bank
//! the round score.
//!
//! ## Design Principles
//!
//! 1. **Seedable**: every shuffle draws from an explicit [`GameRng`]; one
//!    seed replays a whole game.
//!
//! 2. **N-Player Ready**: turn order and decision targets are "next active
//!    seat in rotation", never a two-seat toggle.
//!
//! 3. **Total State Machine**: [`GameState::apply`] ignores anything outside
//!    [`GameState::legal_actions`]. The only runtime error is an exhausted
//!    deck.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, rule configuration, errors
//! - `cards`: card model and deck
//! - `rules`: per-player round state, scoring, the turn state machine
//! - `sim`: driver with pluggable decision policies
//!
//! ## Example
//!
//! ```
//! use flip7::{GameRng, GameState};
//!
//! let mut rng = GameRng::new(7);
//! let mut game = GameState::new(2, &mut rng);
//!
//! while game.round_active() {
//!     let legal = game.legal_actions();
//!     match legal.first() {
//!         Some(&action) => {
//!             game.apply(action).unwrap();
//!         }
//!         None => game.pass_turn(),
//!     }
//! }
//! assert!(game.players().values().all(|p| !p.active));
//! ```

pub mod cards;
pub mod core;
pub mod rules;
pub mod sim;

pub use crate::core::{Flip7Error, GameConfig, GameRng, GameRngState, PlayerId, PlayerMap, Result};

pub use crate::cards::{ActionCard, Card, Deck, Modifier, ModifierKind, Number, DECK_SIZE};

pub use crate::rules::{Action, ActionRecord, GameState, PlayerRoundState, TurnPhase};

pub use crate::sim::{DecisionPolicy, GameSummary, RandomPolicy, RoundSummary, SimConfig, Simulator};
