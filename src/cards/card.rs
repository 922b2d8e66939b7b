//! The closed set of Flip7 cards.
//!
//! Payloads are validated at construction: a [`Number`] is always 0..=12
//! and a [`Modifier`] amount is always positive. Action cards carry no
//! payload at all.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Flip7Error, Result};

/// Highest number card value.
pub const MAX_NUMBER: u8 = 12;

/// Face value of a number card, 0..=12.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Number(u8);

impl Number {
    pub fn new(value: u8) -> Result<Self> {
        if value > MAX_NUMBER {
            return Err(Flip7Error::InvalidCardConstruction {
                reason: format!("number {value} is outside 0..={MAX_NUMBER}"),
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Every face value, lowest first.
    pub fn all() -> impl Iterator<Item = Number> {
        (0..=MAX_NUMBER).map(Number)
    }
}

impl TryFrom<u8> for Number {
    type Error = Flip7Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Number> for u8 {
    fn from(number: Number) -> Self {
        number.0
    }
}

/// Payload-free action cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionCard {
    FlipThree,
    Freeze,
    SecondChance,
}

impl ActionCard {
    pub const ALL: [ActionCard; 3] = [
        ActionCard::FlipThree,
        ActionCard::Freeze,
        ActionCard::SecondChance,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierKind {
    /// Added after multipliers.
    Additive,
    /// Multiplies the number total.
    Multiplier,
}

/// A modifier card with a positive amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ModifierRepr", into = "ModifierRepr")]
pub struct Modifier {
    kind: ModifierKind,
    amount: u32,
}

impl Modifier {
    pub fn new(kind: ModifierKind, amount: u32) -> Result<Self> {
        if amount == 0 {
            return Err(Flip7Error::InvalidCardConstruction {
                reason: format!("{kind:?} modifier amount must be positive"),
            });
        }
        Ok(Self { kind, amount })
    }

    pub fn additive(amount: u32) -> Result<Self> {
        Self::new(ModifierKind::Additive, amount)
    }

    pub fn multiplier(amount: u32) -> Result<Self> {
        Self::new(ModifierKind::Multiplier, amount)
    }

    /// Built-in composition values only; callers pass literal positive amounts.
    pub(crate) const fn fixed(kind: ModifierKind, amount: u32) -> Self {
        Self { kind, amount }
    }

    #[must_use]
    pub const fn kind(self) -> ModifierKind {
        self.kind
    }

    #[must_use]
    pub const fn amount(self) -> u32 {
        self.amount
    }
}

#[derive(Serialize, Deserialize)]
struct ModifierRepr {
    kind: ModifierKind,
    amount: u32,
}

impl TryFrom<ModifierRepr> for Modifier {
    type Error = Flip7Error;

    fn try_from(repr: ModifierRepr) -> Result<Self> {
        Self::new(repr.kind, repr.amount)
    }
}

impl From<Modifier> for ModifierRepr {
    fn from(modifier: Modifier) -> Self {
        Self {
            kind: modifier.kind,
            amount: modifier.amount,
        }
    }
}

/// Any card in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Number(Number),
    Action(ActionCard),
    Modifier(Modifier),
}

impl Card {
    /// A number card; fails outside 0..=12.
    pub fn number(value: u8) -> Result<Self> {
        Number::new(value).map(Card::Number)
    }

    pub fn additive(amount: u32) -> Result<Self> {
        Modifier::additive(amount).map(Card::Modifier)
    }

    pub fn multiplier(amount: u32) -> Result<Self> {
        Modifier::multiplier(amount).map(Card::Modifier)
    }

    #[must_use]
    pub const fn flip_three() -> Self {
        Card::Action(ActionCard::FlipThree)
    }

    #[must_use]
    pub const fn freeze() -> Self {
        Card::Action(ActionCard::Freeze)
    }

    #[must_use]
    pub const fn second_chance() -> Self {
        Card::Action(ActionCard::SecondChance)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Number(n) => write!(f, "Number({})", n.value()),
            Card::Action(action) => write!(f, "Action({action:?})"),
            Card::Modifier(m) => match m.kind() {
                ModifierKind::Additive => write!(f, "Modifier(+{})", m.amount()),
                ModifierKind::Multiplier => write!(f, "Modifier(x{})", m.amount()),
            },
        }
    }
}
