//! Action tokens accepted by the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{ParseActionError, PlayerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw a card.
    Hit,
    /// Bank the round score and drop out.
    Stay,
    /// Take the three forced draws yourself.
    KeepFlipThree,
    /// Give the three forced draws to the next active opponent.
    PassFlipThree,
    /// Freeze yourself: bank and drop out.
    KeepFreeze,
    /// Freeze the next active opponent.
    PassFreeze,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Hit,
        Action::Stay,
        Action::KeepFlipThree,
        Action::PassFlipThree,
        Action::KeepFreeze,
        Action::PassFreeze,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Hit => "Hit",
            Action::Stay => "Stay",
            Action::KeepFlipThree => "KeepFlipThree",
            Action::PassFlipThree => "PassFlipThree",
            Action::KeepFreeze => "KeepFreeze",
            Action::PassFreeze => "PassFreeze",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == token)
            .ok_or_else(|| ParseActionError {
                token: token.to_string(),
            })
    }
}

/// An action as it happened, for round logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub action: Action,
}

impl fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}:{}", self.player.0 + 1, self.action)
    }
}
