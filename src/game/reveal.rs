use crate::card::Card;
use crate::error::RevealError;
use crate::trio::Trio;

use super::{Game, Phase};

/// Where a revealed card currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOrigin {
    /// The hand of the actor at this index.
    Hand(usize),
    /// The center pile.
    Center,
}

/// A card revealed this turn, with its origin.
///
/// Revealing records the card without moving it; only a completed trio
/// relocates cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealedCard {
    /// The revealed card.
    pub card: Card,
    /// Where the card sits.
    pub origin: CardOrigin,
}

#[derive(Clone, Copy)]
enum HandEnd {
    Smallest,
    Largest,
}

impl Game {
    /// Returns whether the current turn can reveal another card.
    ///
    /// True while the game is in the playing phase, fewer than three
    /// cards are revealed, and all revealed cards share one denomination.
    #[must_use]
    pub fn can_reveal_card(&self) -> bool {
        self.started
            && self.phase == Phase::Playing
            && self.revealed.len() < 3
            && self.revealed_uniform()
    }

    /// Reveals the lowest card of the named actor's hand.
    ///
    /// If this is the third card of one denomination, the trio resolves
    /// immediately: the cards leave their origins and are credited to the
    /// actor whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the playing phase, the
    /// reveal window is complete, the actor does not exist, the hand is
    /// empty, or the card is already revealed.
    pub fn reveal_smallest_from_actor(&mut self, actor: usize) -> Result<Card, RevealError> {
        self.reveal_hand_card(actor, HandEnd::Smallest)
    }

    /// Reveals the highest card of the named actor's hand.
    ///
    /// # Errors
    ///
    /// Same as [`reveal_smallest_from_actor`](Game::reveal_smallest_from_actor).
    pub fn reveal_largest_from_actor(&mut self, actor: usize) -> Result<Card, RevealError> {
        self.reveal_hand_card(actor, HandEnd::Largest)
    }

    /// Reveals a specific face-down card from the center.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the playing phase, the
    /// reveal window is complete, the card is not in the center, or the
    /// card is already revealed.
    pub fn reveal_from_center(&mut self, card: Card) -> Result<Card, RevealError> {
        self.ensure_can_reveal()?;
        // Work with the stored card: equality is by id only, so the
        // caller's copy may carry a stale denomination.
        let stored = self
            .center
            .cards()
            .iter()
            .find(|held| **held == card)
            .copied()
            .ok_or(RevealError::CardNotInCenter)?;
        if self.already_revealed(stored) {
            return Err(RevealError::AlreadyRevealed);
        }

        self.revealed.push(RevealedCard {
            card: stored,
            origin: CardOrigin::Center,
        });
        self.resolve_if_trio();
        Ok(stored)
    }

    fn reveal_hand_card(&mut self, actor: usize, end: HandEnd) -> Result<Card, RevealError> {
        self.ensure_can_reveal()?;
        let hand = &self
            .actors
            .get(actor)
            .ok_or(RevealError::ActorNotFound)?
            .hand;
        let card = match end {
            HandEnd::Smallest => hand.smallest(),
            HandEnd::Largest => hand.largest(),
        }
        .map_err(|_| RevealError::EmptyHand)?;
        if self.already_revealed(card) {
            return Err(RevealError::AlreadyRevealed);
        }

        self.revealed.push(RevealedCard {
            card,
            origin: CardOrigin::Hand(actor),
        });
        self.resolve_if_trio();
        Ok(card)
    }

    fn ensure_can_reveal(&self) -> Result<(), RevealError> {
        if !self.started || self.phase != Phase::Playing {
            return Err(RevealError::InvalidState);
        }
        if self.revealed.len() >= 3 || !self.revealed_uniform() {
            return Err(RevealError::TurnComplete);
        }
        Ok(())
    }

    fn already_revealed(&self, card: Card) -> bool {
        self.revealed.iter().any(|revealed| revealed.card == card)
    }

    /// Whether all revealed cards share one denomination. An empty
    /// revealed set counts as uniform.
    fn revealed_uniform(&self) -> bool {
        self.revealed
            .windows(2)
            .all(|pair| pair[0].card.denomination == pair[1].card.denomination)
    }

    /// Moves a matched triple out of its origins and credits it to the
    /// actor whose turn it is.
    fn resolve_if_trio(&mut self) {
        if self.revealed.len() != 3 || !self.revealed_uniform() {
            return;
        }

        for revealed in &self.revealed {
            match revealed.origin {
                CardOrigin::Hand(actor) => {
                    self.actors[actor].hand.remove_card(revealed.card);
                }
                CardOrigin::Center => {
                    self.center.take(revealed.card);
                }
            }
        }

        let cards = [
            self.revealed[0].card,
            self.revealed[1].card,
            self.revealed[2].card,
        ];
        let trio = Trio::new(cards).expect("uniform denomination was checked above");
        let denomination = trio.denomination();
        self.ledger.add(self.current, trio);
        self.trio_formed = true;
        self.check_victory(self.current, denomination);
    }
}
