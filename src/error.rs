//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while constructing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The actor list is empty.
    #[error("the actor list is empty")]
    NoActors,
    /// An actor name is empty.
    #[error("an actor name is empty")]
    EmptyName,
    /// Unsupported actor count for solo mode.
    #[error("unsupported actor count for solo mode: {0}")]
    UnsupportedSoloCount(usize),
    /// Unsupported actor count for team mode.
    #[error("unsupported actor count for team mode: {0}")]
    UnsupportedTeamCount(usize),
    /// The pile holds fewer cards than the deal requires.
    #[error("not enough cards to deal")]
    NotEnoughCards,
}

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The game has already started.
    #[error("the game has already started")]
    AlreadyStarted,
}

/// Errors that can occur when querying a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand has no cards.
    #[error("the hand has no cards")]
    Empty,
}

/// Errors that can occur when revealing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RevealError {
    /// Invalid game state for revealing.
    #[error("invalid game state for revealing")]
    InvalidState,
    /// The turn's reveal window is already complete.
    #[error("the turn's reveal window is already complete")]
    TurnComplete,
    /// Actor not found.
    #[error("actor not found")]
    ActorNotFound,
    /// The actor's hand is empty.
    #[error("the actor's hand is empty")]
    EmptyHand,
    /// The card is not in the center.
    #[error("the card is not in the center")]
    CardNotInCenter,
    /// The card has already been revealed this turn.
    #[error("the card has already been revealed this turn")]
    AlreadyRevealed,
}

/// Errors that can occur when exchanging cards between teammates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExchangeError {
    /// Invalid game state for exchanging.
    #[error("invalid game state for exchanging")]
    InvalidState,
    /// Actor not found.
    #[error("actor not found")]
    ActorNotFound,
    /// The actor has already exchanged this phase.
    #[error("the actor has already exchanged this phase")]
    AlreadyExchanged,
    /// A named card is not in the expected hand.
    #[error("a named card is not in the expected hand")]
    CardNotInHand,
}

/// Errors that can occur when ending a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Invalid game state for ending a turn.
    #[error("invalid game state for ending a turn")]
    InvalidState,
    /// The game has ended.
    #[error("the game has ended")]
    GameEnded,
}

/// Errors that can occur when building a trio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrioError {
    /// The cards do not share one denomination.
    #[error("the cards do not share one denomination")]
    MixedDenominations,
}
