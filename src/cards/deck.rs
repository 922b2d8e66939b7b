//! Shared draw pile and discard pile.
//!
//! ## Composition
//!
//! | Card                 | Count |
//! |----------------------|-------|
//! | Number 0             | 1     |
//! | Number n (1..=12)    | n     |
//! | Flip Three           | 4     |
//! | Freeze               | 4     |
//! | Second Chance        | 4     |
//! | +2, +4, +6, +8, +10  | 1 each|
//! | x2                   | 2     |
//!
//! 98 cards in total. Every drawn card goes straight to the discard pile,
//! so `draw_pile().len() + discard_pile().len()` never changes. When the
//! draw pile runs dry the discard pile is shuffled back in.

use tracing::debug;

use super::card::{ActionCard, Card, Modifier, ModifierKind, Number};
use crate::core::{Flip7Error, GameRng, Result};

/// Cards in a standard deck.
pub const DECK_SIZE: usize = 98;

/// Copies of each action card.
pub const ACTION_COPIES: usize = 4;

/// The standard 98 cards, unshuffled.
#[must_use]
pub fn standard_cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for number in Number::all() {
        let copies = usize::from(number.value()).max(1);
        cards.extend(std::iter::repeat(Card::Number(number)).take(copies));
    }
    for action in ActionCard::ALL {
        cards.extend(std::iter::repeat(Card::Action(action)).take(ACTION_COPIES));
    }
    for amount in [2, 4, 6, 8, 10] {
        cards.push(Card::Modifier(Modifier::fixed(ModifierKind::Additive, amount)));
    }
    cards.extend(
        std::iter::repeat(Card::Modifier(Modifier::fixed(ModifierKind::Multiplier, 2))).take(2),
    );

    cards
}

/// A round's deck. Owns a forked RNG stream for its reshuffles.
#[derive(Clone, Debug)]
pub struct Deck {
    /// Top of the pile is the last element.
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
    rng: GameRng,
}

impl Deck {
    /// A freshly shuffled standard deck.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let mut deck = Self {
            draw_pile: standard_cards(),
            discard_pile: Vec::new(),
            rng: rng.fork(),
        };
        deck.shuffle();
        deck
    }

    /// A deck that deals `cards` in the given order, first element first.
    ///
    /// Nothing is shuffled until the pile runs out and the discards come
    /// back in. Used to replay known sequences.
    #[must_use]
    pub fn stacked(cards: Vec<Card>, rng: &mut GameRng) -> Self {
        let mut draw_pile = cards;
        draw_pile.reverse();
        Self {
            draw_pile,
            discard_pile: Vec::new(),
            rng: rng.fork(),
        }
    }

    /// Uniformly permute the draw pile.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.draw_pile);
    }

    /// Take the top card, reshuffling the discards in first if needed.
    ///
    /// The drawn card is recorded on the discard pile.
    pub fn draw(&mut self) -> Result<Card> {
        if self.draw_pile.is_empty() {
            if self.discard_pile.is_empty() {
                return Err(Flip7Error::DeckExhausted);
            }
            debug!(cards = self.discard_pile.len(), "reshuffling discard pile into draw pile");
            std::mem::swap(&mut self.draw_pile, &mut self.discard_pile);
            self.shuffle();
        }

        let card = self.draw_pile.pop().ok_or(Flip7Error::DeckExhausted)?;
        self.discard_pile.push(card);
        Ok(card)
    }

    #[must_use]
    pub fn draw_pile(&self) -> &[Card] {
        &self.draw_pile
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    /// Cards across both piles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
