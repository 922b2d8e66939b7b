//! Flip7 rules: per-player round state, scoring and the turn state machine.
//!
//! The engine owns every legality decision. Drivers only ever choose among
//! the actions it offers.

pub mod action;
pub mod engine;
pub mod player_state;
pub mod scoring;

pub use action::{Action, ActionRecord};
pub use engine::{GameState, TurnPhase};
pub use player_state::PlayerRoundState;
pub use scoring::round_score;
