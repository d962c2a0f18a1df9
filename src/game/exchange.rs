use crate::card::Card;
use crate::error::ExchangeError;

use super::{Game, Phase};

impl Game {
    /// Swaps one card each way between the initiator and their teammate.
    ///
    /// `given` leaves the initiator's hand, `received` leaves the
    /// teammate's. The swap is atomic: both membership checks run before
    /// any card moves, and a failed exchange leaves both hands untouched.
    /// Both teammates are then marked as having exchanged for the phase;
    /// once every required team has exchanged, play resumes.
    ///
    /// # Errors
    ///
    /// Returns an error if no exchange phase is active, the initiator
    /// does not exist, the initiator's team has already exchanged, or
    /// either card is not in the expected hand.
    pub fn exchange_cards(
        &mut self,
        initiator: usize,
        given: Card,
        received: Card,
    ) -> Result<(), ExchangeError> {
        match self.phase {
            Phase::InitialExchange | Phase::PostTrioExchange => {}
            Phase::Playing | Phase::Ended => return Err(ExchangeError::InvalidState),
        }
        if initiator >= self.actors.len() {
            return Err(ExchangeError::ActorNotFound);
        }
        // Exchange phases only exist in team mode, so the pairing is total.
        let mate = (initiator + self.actors.len() / 2) % self.actors.len();

        if self.exchanged[initiator] {
            return Err(ExchangeError::AlreadyExchanged);
        }
        // Work with the stored cards: equality is by id only, so the
        // caller's copies may carry stale denominations.
        let given = self
            .actors[initiator]
            .hand
            .cards()
            .iter()
            .find(|held| **held == given)
            .copied()
            .ok_or(ExchangeError::CardNotInHand)?;
        let received = self
            .actors[mate]
            .hand
            .cards()
            .iter()
            .find(|held| **held == received)
            .copied()
            .ok_or(ExchangeError::CardNotInHand)?;

        self.actors[initiator].hand.remove_card(given);
        self.actors[mate].hand.remove_card(received);
        self.actors[initiator].hand.add_card(received);
        self.actors[mate].hand.add_card(given);

        self.exchanged[initiator] = true;
        self.exchanged[mate] = true;

        if self.exchanged.iter().all(|done| *done) {
            self.phase = Phase::Playing;
        }
        Ok(())
    }

    /// Opens the post-trio exchange phase for the completing team only.
    pub(super) fn begin_post_trio_exchange(&mut self) {
        let mate = (self.current + self.actors.len() / 2) % self.actors.len();
        for (actor, done) in self.exchanged.iter_mut().enumerate() {
            *done = actor != self.current && actor != mate;
        }
        self.phase = Phase::PostTrioExchange;
    }
}
