//! Game engine and state management.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::center::{Center, hand_size};
use crate::error::ConfigError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::trio::{Trio, TrioLedger};

mod deal;
mod exchange;
mod reveal;
pub mod state;
mod turn;

pub use reveal::{CardOrigin, RevealedCard};
pub use state::{Phase, Victory};

/// A named participant and their hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// Display name, unique per game by convention but not enforced.
    pub name: String,
    /// The actor's current hand.
    pub hand: Hand,
}

/// A Trio game engine that manages the center, hands, and turn flow.
///
/// The game owns all card state. Use [`GameOptions`] to configure team
/// play, the piquant rule, and the turn limit. All presentation is left
/// to the driver; the engine communicates through return values only.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The actors, in seating order.
    pub actors: Vec<Actor>,
    /// The face-down center pile.
    pub center: Center,
    /// Completed trios per actor.
    ledger: TrioLedger,
    /// Current game phase.
    phase: Phase,
    /// Index of the actor whose turn it is.
    current: usize,
    /// Cards revealed so far this turn.
    revealed: Vec<RevealedCard>,
    /// Whether the current turn has completed a trio.
    trio_formed: bool,
    /// Whether hands have been dealt.
    started: bool,
    /// Number of completed turns.
    turns_played: u32,
    /// The winning actor, once the game is decided.
    winner: Option<usize>,
    /// How the game was won.
    victory: Option<Victory>,
    /// Per-actor exchange bookkeeping for the current exchange phase.
    exchanged: Vec<bool>,
}

impl Game {
    /// Creates a new game with the given actors, options, and seed.
    ///
    /// The deck is shuffled here; hands are dealt by
    /// [`start_game`](Game::start_game). The same seed always produces the
    /// same shuffle.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor list is empty, an actor name is
    /// empty, or the actor count is not supported for the mode (solo
    /// supports 3 to 6 actors, team mode 4 or 6).
    ///
    /// # Example
    ///
    /// ```
    /// use triors::{Game, GameOptions};
    ///
    /// let game = Game::new(&["Ana", "Bo", "Cy"], GameOptions::default(), 42)?;
    /// assert_eq!(game.actor_count(), 3);
    /// # Ok::<(), triors::ConfigError>(())
    /// ```
    pub fn new(names: &[&str], options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        if names.is_empty() {
            return Err(ConfigError::NoActors);
        }
        if names.iter().any(|name| name.is_empty()) {
            return Err(ConfigError::EmptyName);
        }
        if hand_size(names.len(), options.team_mode).is_none() {
            return Err(if options.team_mode {
                ConfigError::UnsupportedTeamCount(names.len())
            } else {
                ConfigError::UnsupportedSoloCount(names.len())
            });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let center = Center::new(&mut rng);

        let actors = names
            .iter()
            .map(|name| Actor {
                name: (*name).to_string(),
                hand: Hand::default(),
            })
            .collect::<Vec<_>>();

        let phase = if options.team_mode {
            Phase::InitialExchange
        } else {
            Phase::Playing
        };
        let exchanged = if options.team_mode {
            vec![false; names.len()]
        } else {
            vec![true; names.len()]
        };

        Ok(Self {
            options,
            ledger: TrioLedger::new(names.len()),
            actors,
            center,
            phase,
            current: 0,
            revealed: Vec::new(),
            trio_formed: false,
            started: false,
            turns_played: 0,
            winner: None,
            victory: None,
            exchanged,
        })
    }

    /// Returns the current game phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the index of the actor whose turn it is.
    #[must_use]
    pub const fn current_actor(&self) -> usize {
        self.current
    }

    /// Returns the number of actors.
    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Returns the cards revealed so far this turn, in reveal order.
    #[must_use]
    pub fn revealed_cards(&self) -> &[RevealedCard] {
        &self.revealed
    }

    /// Returns whether the game has started (hands have been dealt).
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.started
    }

    /// Returns whether the game is over.
    #[must_use]
    pub fn is_game_ended(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Returns the winning actor, or `None` while undecided or on a draw.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Returns how the game was won, or `None` while undecided or on a draw.
    #[must_use]
    pub const fn victory(&self) -> Option<Victory> {
        self.victory
    }

    /// Returns the trios credited to an actor, in completion order.
    #[must_use]
    pub fn trios_for(&self, actor: usize) -> &[Trio] {
        self.ledger.trios_for(actor)
    }

    /// Returns the number of trios credited to an actor.
    #[must_use]
    pub fn trio_count(&self, actor: usize) -> usize {
        self.ledger.count_for(actor)
    }

    /// Returns the combined trio count of an actor and their teammate.
    ///
    /// In solo mode this is the actor's own count.
    #[must_use]
    pub fn team_trio_count(&self, actor: usize) -> usize {
        let own = self.ledger.count_for(actor);
        match self.teammate_of(actor) {
            Some(mate) => own + self.ledger.count_for(mate),
            None => own,
        }
    }

    /// Returns the actor's teammate in team mode.
    ///
    /// Actor `i` pairs with the actor half the table away. Returns `None`
    /// in solo mode or for out-of-range indices.
    #[must_use]
    pub fn teammate_of(&self, actor: usize) -> Option<usize> {
        if !self.options.team_mode || actor >= self.actors.len() {
            return None;
        }
        Some((actor + self.actors.len() / 2) % self.actors.len())
    }

    /// Returns the number of completed turns.
    #[must_use]
    pub const fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// Returns the actors still owing an exchange, in ascending index order.
    ///
    /// Empty outside exchange phases.
    #[must_use]
    pub fn awaiting_exchange(&self) -> Vec<usize> {
        match self.phase {
            Phase::InitialExchange | Phase::PostTrioExchange => self
                .exchanged
                .iter()
                .enumerate()
                .filter(|(_, done)| !**done)
                .map(|(actor, _)| actor)
                .collect(),
            Phase::Playing | Phase::Ended => Vec::new(),
        }
    }

    /// Returns the cards dealt to an actor, or an empty slice for
    /// out-of-range indices.
    #[must_use]
    pub fn hand_of(&self, actor: usize) -> &[Card] {
        self.actors.get(actor).map_or(&[], |a| a.hand.cards())
    }
}
