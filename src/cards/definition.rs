//! Card definitions: static payload data carried by hand items.
//!
//! A card is plain data. What it does is a `CardEffect` tag plus
//! parameters, and where it may be played is a `UseCase`; both are
//! interpreted by `resolve` alone.

use serde::{Deserialize, Serialize};

/// Identifier of a card definition (the "type" of card, not one copy).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Where a card may be played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UseCase {
    /// On one board slot; needs a slot target.
    #[default]
    Slot,
    /// On the player.
    Player,
    /// Affects the whole board.
    Global,
}

/// What a card does.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    Damage { amount: u32 },
    Support { amount: u32 },
    /// Several effects applied in order.
    Batch(Vec<CardEffect>),
}

impl CardEffect {
    /// Short name used in logs and errors.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Damage { amount } => format!("Damage({amount})"),
            Self::Support { amount } => format!("Support({amount})"),
            Self::Batch(effects) => format!("Batch[{}]", effects.len()),
        }
    }
}

/// Static card data.
///
/// ## Example
///
/// ```
/// use hand_layout::cards::{CardDefinition, CardEffect, CardId, UseCase};
///
/// let heal = CardDefinition::new(CardId::new(7), "Heal", CardEffect::Support { amount: 3 })
///     .with_energy_cost(2)
///     .with_use_case(UseCase::Player);
///
/// assert_eq!(heal.energy_cost, 2);
/// assert_eq!(heal.use_case, UseCase::Player);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub id: CardId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub energy_cost: u32,
    pub effect: CardEffect,
    #[serde(default)]
    pub use_case: UseCase,
}

impl CardDefinition {
    /// Create a slot card costing 1 energy.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, effect: CardEffect) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            energy_cost: 1,
            effect,
            use_case: UseCase::Slot,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_energy_cost(mut self, cost: u32) -> Self {
        self.energy_cost = cost;
        self
    }

    #[must_use]
    pub fn with_use_case(mut self, use_case: UseCase) -> Self {
        self.use_case = use_case;
        self
    }
}
