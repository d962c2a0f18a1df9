//! A Trio card-matching game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full game flow:
//! dealing, the reveal protocol, trio resolution, team exchanges, and win
//! detection. The engine is a pure command/query object; all presentation
//! is left to the driver.
//!
//! # Example
//!
//! ```
//! use triors::{Game, GameOptions};
//!
//! let mut game = Game::new(&["Ana", "Bo", "Cy"], GameOptions::default(), 42)?;
//! game.start_game()?;
//! assert_eq!(game.hand_of(0).len(), 9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod center;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod trio;

// Re-export main types
pub use card::{COPIES_PER_DENOMINATION, Card, DECK_SIZE, DENOMINATION_COUNT, NeighborTable};
pub use center::Center;
pub use error::{
    ConfigError, ExchangeError, HandError, RevealError, StartError, TrioError, TurnError,
};
pub use game::{Actor, CardOrigin, Game, Phase, RevealedCard, Victory};
pub use hand::Hand;
pub use options::GameOptions;
pub use trio::{Trio, TrioLedger};
