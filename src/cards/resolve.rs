//! Effect resolution.
//!
//! One function dispatches on the effect tag and the card's use case. It
//! reports what the card would do; applying damage or healing to a board is
//! the host game's job.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{LayoutError, LayoutResult};

use super::definition::{CardDefinition, CardEffect, UseCase};

/// What a card is being played on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectTarget {
    /// A board slot by index.
    Slot(usize),
    Player,
    /// Played with no particular target.
    Board,
}

/// Totals produced by resolving a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectOutcome {
    pub damage: u32,
    pub support: u32,
    /// Slot the effect landed on, for slot cards.
    pub slot: Option<usize>,
}

/// Resolve `card` against `target`.
///
/// Slot cards need a `Slot` target; player and global cards accept any.
///
/// ```
/// use hand_layout::cards::{resolve, CardCatalog, EffectTarget};
///
/// let catalog = CardCatalog::basic();
/// let attack = catalog.by_name("Attack").unwrap();
///
/// let outcome = resolve(attack, EffectTarget::Slot(4)).unwrap();
/// assert_eq!(outcome.damage, 5);
/// assert_eq!(outcome.slot, Some(4));
///
/// assert!(resolve(attack, EffectTarget::Player).is_err());
/// ```
pub fn resolve(card: &CardDefinition, target: EffectTarget) -> LayoutResult<EffectOutcome> {
    let slot = match (card.use_case, target) {
        (UseCase::Slot, EffectTarget::Slot(slot)) => Some(slot),
        (UseCase::Slot, _) => {
            warn!(card = %card.name, ?target, "slot card played without a slot");
            return Err(LayoutError::InvalidTarget {
                effect: card.effect.label(),
                use_case: card.use_case,
            });
        }
        (UseCase::Player | UseCase::Global, _) => None,
    };

    let mut outcome = EffectOutcome {
        slot,
        ..EffectOutcome::default()
    };
    accumulate(&card.effect, &mut outcome);
    debug!(card = %card.name, ?target, damage = outcome.damage, support = outcome.support, "resolved");
    Ok(outcome)
}

fn accumulate(effect: &CardEffect, outcome: &mut EffectOutcome) {
    match effect {
        CardEffect::Damage { amount } => outcome.damage = outcome.damage.saturating_add(*amount),
        CardEffect::Support { amount } => outcome.support = outcome.support.saturating_add(*amount),
        CardEffect::Batch(effects) => {
            for effect in effects {
                accumulate(effect, outcome);
            }
        }
    }
}
