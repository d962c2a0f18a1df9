use crate::error::StartError;
use crate::hand::Hand;

use super::Game;

impl Game {
    /// Deals the opening hands and marks the game as started.
    ///
    /// Each actor receives the hand size fixed by the actor count and
    /// mode; the undealt remainder stays in the center.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already started.
    #[expect(
        clippy::missing_panics_doc,
        reason = "actor count and deck size are validated at construction"
    )]
    pub fn start_game(&mut self) -> Result<(), StartError> {
        if self.started {
            return Err(StartError::AlreadyStarted);
        }

        let hands = self
            .center
            .deal_hands(self.actors.len(), self.options.team_mode)
            .expect("actor count was validated at construction");

        for (actor, cards) in self.actors.iter_mut().zip(hands) {
            actor.hand = Hand::new(cards);
        }

        self.started = true;
        Ok(())
    }
}
