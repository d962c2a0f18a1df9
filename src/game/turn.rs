extern crate alloc;

use alloc::vec::Vec;

use crate::error::TurnError;
use crate::trio::Trio;

use super::{Game, Phase, Victory};

/// A trio of this denomination wins on the spot.
const INSTANT_WIN_DENOMINATION: u8 = 7;

impl Game {
    /// Ends the current turn and reports whether it formed a trio.
    ///
    /// After a trio in solo mode the actor keeps the turn; in team mode
    /// the completing team must exchange before play resumes. Without a
    /// trio the turn passes to the next actor. The revealed cards are
    /// cleared either way.
    ///
    /// # Errors
    ///
    /// Returns an error if an exchange is pending or the game has ended.
    pub fn next_turn(&mut self) -> Result<bool, TurnError> {
        match self.phase {
            Phase::Ended => return Err(TurnError::GameEnded),
            Phase::InitialExchange | Phase::PostTrioExchange => {
                return Err(TurnError::InvalidState);
            }
            Phase::Playing => {}
        }

        let formed = self.trio_formed;
        self.turns_played += 1;

        if self.options.turn_limit > 0
            && self.turns_played >= self.options.turn_limit
            && self.winner.is_none()
        {
            // Draw: the game ends with no winner.
            self.phase = Phase::Ended;
        } else if formed {
            if self.options.team_mode {
                self.begin_post_trio_exchange();
            }
            // The completing actor keeps the turn.
        } else {
            self.current = (self.current + 1) % self.actors.len();
        }

        self.revealed.clear();
        self.trio_formed = false;
        Ok(formed)
    }

    /// Runs the win check after a trio is credited to `actor`.
    pub(super) fn check_victory(&mut self, actor: usize, denomination: u8) {
        let won = if denomination == INSTANT_WIN_DENOMINATION {
            Some(Victory::SevenTrio)
        } else if self.team_trio_count(actor) >= 3 {
            Some(Victory::ThreeTrios)
        } else if self.options.piquant && self.has_linked_trios(actor) {
            Some(Victory::LinkedTrios)
        } else {
            None
        };

        if let Some(victory) = won {
            self.winner = Some(actor);
            self.victory = Some(victory);
            self.phase = Phase::Ended;
        }
    }

    /// Whether the actor's side holds two trios of neighboring
    /// denominations.
    fn has_linked_trios(&self, actor: usize) -> bool {
        let mut denominations = self
            .ledger
            .trios_for(actor)
            .iter()
            .map(Trio::denomination)
            .collect::<Vec<_>>();
        if let Some(mate) = self.teammate_of(actor) {
            denominations.extend(self.ledger.trios_for(mate).iter().map(Trio::denomination));
        }

        for (at, &a) in denominations.iter().enumerate() {
            for &b in &denominations[at + 1..] {
                if self.options.neighbors.are_neighbors(a, b) {
                    return true;
                }
            }
        }
        false
    }
}
