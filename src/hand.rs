//! Per-actor hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::HandError;

/// An actor's hand, kept sorted ascending by denomination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand from dealt cards, sorting them by denomination.
    #[must_use]
    pub fn new(mut cards: Vec<Card>) -> Self {
        cards.sort_by_key(|card| card.denomination);
        Self { cards }
    }

    /// Inserts a card, preserving the denomination order.
    pub fn add_card(&mut self, card: Card) {
        let at = self
            .cards
            .partition_point(|held| held.denomination <= card.denomination);
        self.cards.insert(at, card);
    }

    /// Removes a specific card by identity.
    ///
    /// Returns `true` if the card was present.
    pub fn remove_card(&mut self, card: Card) -> bool {
        if let Some(at) = self.cards.iter().position(|held| *held == card) {
            self.cards.remove(at);
            true
        } else {
            false
        }
    }

    /// Returns the card with the lowest denomination.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is empty.
    pub fn smallest(&self) -> Result<Card, HandError> {
        self.cards.first().copied().ok_or(HandError::Empty)
    }

    /// Returns the card with the highest denomination.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is empty.
    pub fn largest(&self) -> Result<Card, HandError> {
        self.cards.last().copied().ok_or(HandError::Empty)
    }

    /// Returns whether the hand holds the specific card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.iter().any(|held| *held == card)
    }

    /// Returns the cards in the hand, in denomination order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
