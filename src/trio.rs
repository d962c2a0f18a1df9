//! Completed trios and the per-actor ledger.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::TrioError;

/// Three cards of one denomination, removed from play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trio {
    cards: [Card; 3],
}

impl Trio {
    /// Creates a trio from three cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the cards do not share one denomination.
    pub const fn new(cards: [Card; 3]) -> Result<Self, TrioError> {
        if cards[0].forms_trio(&cards[1], &cards[2]) {
            Ok(Self { cards })
        } else {
            Err(TrioError::MixedDenominations)
        }
    }

    /// The shared denomination of the trio.
    #[must_use]
    pub const fn denomination(&self) -> u8 {
        self.cards[0].denomination
    }

    /// The three cards of the trio.
    #[must_use]
    pub const fn cards(&self) -> &[Card; 3] {
        &self.cards
    }
}

/// Append-only record of completed trios, one list per actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrioLedger {
    trios: Vec<Vec<Trio>>,
}

impl TrioLedger {
    /// Creates an empty ledger for the given number of actors.
    #[must_use]
    pub fn new(actor_count: usize) -> Self {
        Self {
            trios: vec![Vec::new(); actor_count],
        }
    }

    /// Credits a trio to an actor. Out-of-range indices are ignored.
    pub fn add(&mut self, actor: usize, trio: Trio) {
        if let Some(list) = self.trios.get_mut(actor) {
            list.push(trio);
        }
    }

    /// Returns the trios credited to an actor, in completion order.
    ///
    /// Out-of-range indices return an empty slice.
    #[must_use]
    pub fn trios_for(&self, actor: usize) -> &[Trio] {
        self.trios.get(actor).map_or(&[], Vec::as_slice)
    }

    /// Returns the number of trios credited to an actor.
    #[must_use]
    pub fn count_for(&self, actor: usize) -> usize {
        self.trios_for(actor).len()
    }
}
