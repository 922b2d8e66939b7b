//! Engine errors.

use thiserror::Error;

/// The only ways an engine call can fail.
///
/// Illegal actions are not errors: `GameState::apply` ignores them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Flip7Error {
    /// A number or modifier card was built with a payload outside its range.
    #[error("invalid card construction: {reason}")]
    InvalidCardConstruction { reason: String },

    /// Both the draw pile and the discard pile are empty.
    #[error("deck exhausted: draw pile and discard pile are both empty")]
    DeckExhausted,
}

pub type Result<T> = std::result::Result<T, Flip7Error>;

/// An action token that names no known action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action token: {token:?}")]
pub struct ParseActionError {
    pub token: String,
}
