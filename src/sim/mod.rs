//! Game driver: plays rounds with a pluggable policy until a target score.
//!
//! Nothing in here decides legality. The driver asks the engine for legal
//! actions, lets a [`DecisionPolicy`] pick one, and advances a stale turn
//! index with `GameState::pass_turn` when the engine offers nothing.

pub mod config;
pub mod policy;
pub mod simulator;

pub use config::SimConfig;
pub use policy::{DecisionPolicy, RandomPolicy, ThresholdPolicy};
pub use simulator::{leader, GameSummary, RoundSummary, Simulator};
