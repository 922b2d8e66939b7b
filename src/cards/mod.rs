//! Card model and the shared deck.

pub mod card;
pub mod deck;

pub use card::{ActionCard, Card, Modifier, ModifierKind, Number, MAX_NUMBER};
pub use deck::{standard_cards, Deck, DECK_SIZE};
