//! Card catalog and item bindings.
//!
//! The layout engine only knows `ItemId`s. The catalog keeps card payload
//! outside the engine: definitions keyed by `CardId`, and a binding from
//! each item on the table to the card it shows.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::core::{HandRng, ItemId};
use crate::error::{LayoutError, LayoutResult};

use super::definition::{CardDefinition, CardEffect, CardId, UseCase};

/// Definitions plus item bindings.
///
/// ## Example
///
/// ```
/// use hand_layout::cards::{CardCatalog, CardDefinition, CardEffect, CardId};
/// use hand_layout::core::ItemId;
///
/// let mut catalog = CardCatalog::new();
/// catalog
///     .register(CardDefinition::new(CardId::new(1), "Bolt", CardEffect::Damage { amount: 3 }))
///     .unwrap();
/// catalog.bind(ItemId(10), CardId::new(1)).unwrap();
///
/// assert_eq!(catalog.card_for(ItemId(10)).unwrap().name, "Bolt");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
    bindings: FxHashMap<ItemId, CardId>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The two starter cards: "Attack" and "Support".
    #[must_use]
    pub fn basic() -> Self {
        let mut catalog = Self::new();
        for card in [
            CardDefinition::new(CardId::new(0), "Attack", CardEffect::Damage { amount: 5 })
                .with_description("Causes 5 damage.")
                .with_use_case(UseCase::Slot),
            CardDefinition::new(CardId::new(1), "Support", CardEffect::Damage { amount: 5 })
                .with_description("Causes 5 damage and provides 3 energy.")
                .with_use_case(UseCase::Slot),
        ] {
            catalog.cards.insert(card.id, card);
        }
        catalog
    }

    /// Add a definition. Ids must be unique.
    pub fn register(&mut self, card: CardDefinition) -> LayoutResult<()> {
        if self.cards.contains_key(&card.id) {
            return Err(LayoutError::InvalidConfiguration(format!(
                "duplicate card id {}",
                card.id
            )));
        }
        debug!(card = %card.id, name = %card.name, "registered card");
        self.cards.insert(card.id, card);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// First definition with this name, by id order.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&CardDefinition> {
        self.ids()
            .into_iter()
            .filter_map(|id| self.cards.get(&id))
            .find(|card| card.name == name)
    }

    /// All card ids, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        let mut ids: Vec<_> = self.cards.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// A uniformly random card id, or `None` for an empty catalog.
    ///
    /// Deterministic for a given rng state.
    pub fn random_card(&self, rng: &mut HandRng) -> Option<CardId> {
        rng.choose(&self.ids()).copied()
    }

    /// Record that `item` shows `card`. Rebinding replaces the old card.
    pub fn bind(&mut self, item: ItemId, card: CardId) -> LayoutResult<()> {
        if !self.cards.contains_key(&card) {
            warn!(%item, %card, "bind to unknown card");
            return Err(LayoutError::InvalidConfiguration(format!("unknown card {card}")));
        }
        self.bindings.insert(item, card);
        Ok(())
    }

    /// Forget the card of `item` (it left the table).
    pub fn unbind(&mut self, item: ItemId) -> Option<CardId> {
        self.bindings.remove(&item)
    }

    #[must_use]
    pub fn card_id_for(&self, item: ItemId) -> Option<CardId> {
        self.bindings.get(&item).copied()
    }

    /// Definition shown by `item`.
    #[must_use]
    pub fn card_for(&self, item: ItemId) -> Option<&CardDefinition> {
        self.card_id_for(item).and_then(|id| self.cards.get(&id))
    }
}
