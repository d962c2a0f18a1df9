//! Card types, deck constants, and the denomination adjacency table.

/// Number of distinct denominations.
pub const DENOMINATION_COUNT: u8 = 12;

/// Physical copies of each denomination in the deck.
pub const COPIES_PER_DENOMINATION: u8 = 3;

/// Number of cards in the full deck.
pub const DECK_SIZE: usize = 36;

/// A physical playing card.
///
/// Equality and hashing use the card `id` only: two cards that share a
/// denomination are distinct physical cards and never compare equal.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    /// Stable identity within the deck (0..36 for engine-built decks).
    pub id: u8,
    /// The denomination of the card (1-12).
    pub denomination: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the denomination. Values outside
    /// 1..=12 are accepted but never appear in an engine-built deck.
    #[must_use]
    pub const fn new(id: u8, denomination: u8) -> Self {
        Self { id, denomination }
    }

    /// Returns whether this card and both arguments share one denomination.
    #[must_use]
    pub const fn forms_trio(&self, a: &Self, b: &Self) -> bool {
        self.denomination == a.denomination && self.denomination == b.denomination
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl core::hash::Hash for Card {
    fn hash<H: core::hash::Hasher>(&self, hasher: &mut H) {
        self.id.hash(hasher);
    }
}

/// Symmetric denomination adjacency, consulted only by the linked-trios
/// ("piquant") win rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborTable {
    /// Bit `k` of `masks[d]` is set when denominations `d` and `k` are
    /// adjacent.
    masks: [u16; DENOMINATION_COUNT as usize + 1],
}

impl NeighborTable {
    /// An empty table: no two denominations are adjacent.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            masks: [0; DENOMINATION_COUNT as usize + 1],
        }
    }

    /// The default table: consecutive denominations are adjacent.
    #[must_use]
    pub fn consecutive() -> Self {
        let mut table = Self::empty();
        for denomination in 1..DENOMINATION_COUNT {
            table.link(denomination, denomination + 1);
        }
        table
    }

    /// Builds a table from explicit symmetric pairs.
    ///
    /// Pairs naming denominations outside 1..=12 are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use triors::NeighborTable;
    ///
    /// let table = NeighborTable::from_pairs(&[(1, 12), (5, 9)]);
    /// assert!(table.are_neighbors(12, 1));
    /// assert!(!table.are_neighbors(5, 6));
    /// ```
    #[must_use]
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Self {
        let mut table = Self::empty();
        for &(a, b) in pairs {
            table.link(a, b);
        }
        table
    }

    /// Marks two denominations as adjacent, in both directions.
    pub const fn link(&mut self, a: u8, b: u8) {
        if a == 0 || b == 0 || a > DENOMINATION_COUNT || b > DENOMINATION_COUNT {
            return;
        }
        self.masks[a as usize] |= 1 << b;
        self.masks[b as usize] |= 1 << a;
    }

    /// Returns whether two denominations are adjacent.
    #[must_use]
    pub const fn are_neighbors(&self, a: u8, b: u8) -> bool {
        if a == 0 || b == 0 || a > DENOMINATION_COUNT || b > DENOMINATION_COUNT {
            return false;
        }
        self.masks[a as usize] & (1 << b) != 0
    }
}

impl Default for NeighborTable {
    fn default() -> Self {
        Self::consecutive()
    }
}
