//! The shuffled center pile and the dealing table.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, COPIES_PER_DENOMINATION, DECK_SIZE, DENOMINATION_COUNT};
use crate::error::ConfigError;

/// Cards each actor receives, by actor count and mode.
pub(crate) const fn hand_size(actor_count: usize, team_mode: bool) -> Option<usize> {
    if team_mode {
        match actor_count {
            4 => Some(9),
            6 => Some(6),
            _ => None,
        }
    } else {
        match actor_count {
            3 => Some(9),
            4 => Some(7),
            5 => Some(6),
            6 => Some(5),
            _ => None,
        }
    }
}

/// The face-down center pile: the shuffled deck before dealing, the
/// undealt remainder afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Center {
    cards: Vec<Card>,
}

impl Center {
    /// Builds the full 36-card deck and shuffles it.
    #[must_use]
    pub fn new(rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        let mut id = 0;
        for denomination in 1..=DENOMINATION_COUNT {
            for _ in 0..COPIES_PER_DENOMINATION {
                cards.push(Card::new(id, denomination));
                id += 1;
            }
        }
        cards.shuffle(rng);
        Self { cards }
    }

    /// Deals hands round-robin from the front of the pile.
    ///
    /// The undealt remainder stays in the center.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor count is not supported for the mode,
    /// or if the pile holds fewer cards than the deal requires.
    pub fn deal_hands(
        &mut self,
        actor_count: usize,
        team_mode: bool,
    ) -> Result<Vec<Vec<Card>>, ConfigError> {
        let per_actor = hand_size(actor_count, team_mode).ok_or(if team_mode {
            ConfigError::UnsupportedTeamCount(actor_count)
        } else {
            ConfigError::UnsupportedSoloCount(actor_count)
        })?;

        if self.cards.len() < per_actor * actor_count {
            return Err(ConfigError::NotEnoughCards);
        }

        let mut hands: Vec<Vec<Card>> = (0..actor_count)
            .map(|_| Vec::with_capacity(per_actor))
            .collect();
        for _ in 0..per_actor {
            for hand in &mut hands {
                if let Some(card) = self.draw() {
                    hand.push(card);
                }
            }
        }

        Ok(hands)
    }

    /// Draws the front card of the pile.
    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Removes a specific card by identity.
    ///
    /// Returns `true` if the card was present.
    pub(crate) fn take(&mut self, card: Card) -> bool {
        if let Some(at) = self.cards.iter().position(|held| *held == card) {
            self.cards.remove(at);
            true
        } else {
            false
        }
    }

    /// Returns whether the pile holds the specific card.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.iter().any(|held| *held == card)
    }

    /// Returns the cards in the pile, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Replaces the pile contents.
    ///
    /// Useful for setting up a known order in tests.
    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
