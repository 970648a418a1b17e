//! Seeded randomness for shuffling hands and dealing cards.
//!
//! Every random hand operation takes a `HandRng` explicitly, so a replay
//! with the same seed deals and shuffles identically. The state is a seed
//! plus a ChaCha8 word position and can be saved at any point.
//!
//! ```
//! use hand_layout::core::{HandRng, ItemId};
//!
//! let hand: im::Vector<ItemId> = (0..5).map(ItemId).collect();
//!
//! let left = HandRng::new(7).shuffle_items(&hand);
//! let right = HandRng::new(7).shuffle_items(&hand);
//! assert_eq!(left, right);
//! ```

use im::Vector;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::item::ItemId;

/// Seeded RNG used wherever hand order is randomized.
#[derive(Clone, Debug)]
pub struct HandRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl HandRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A new order holding the same items, shuffled.
    pub fn shuffle_items(&mut self, items: &Vector<ItemId>) -> Vector<ItemId> {
        let mut order: Vec<ItemId> = items.iter().copied().collect();
        order.shuffle(&mut self.inner);
        order.into_iter().collect()
    }

    /// A random index below `len`, or `None` when `len` is zero.
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.inner.gen_range(0..len))
    }

    /// A random element of `slice`.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Capture the current position in the stream.
    #[must_use]
    pub fn state(&self) -> HandRngState {
        HandRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume exactly where `state` was captured.
    #[must_use]
    pub fn from_state(state: &HandRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Saved position of a `HandRng`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandRngState {
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
