//! Game configuration options.

use crate::card::NeighborTable;

/// Configuration options for a Trio game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use triors::GameOptions;
///
/// let options = GameOptions::default()
///     .with_team_mode(true)
///     .with_piquant(true)
///     .with_turn_limit(200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether actors play in fixed teams of two.
    pub team_mode: bool,
    /// Whether the linked-trios ("piquant") win rule is active.
    pub piquant: bool,
    /// Turn count after which an undecided game ends in a draw (0 = no limit).
    pub turn_limit: u32,
    /// Denomination adjacency for the linked-trios rule.
    pub neighbors: NeighborTable,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            team_mode: false,
            piquant: false,
            turn_limit: 0,
            neighbors: NeighborTable::consecutive(),
        }
    }
}

impl GameOptions {
    /// Sets whether actors play in fixed teams of two.
    ///
    /// ```
    /// use triors::GameOptions;
    ///
    /// let options = GameOptions::default().with_team_mode(true);
    /// assert!(options.team_mode);
    /// ```
    #[must_use]
    pub const fn with_team_mode(mut self, team_mode: bool) -> Self {
        self.team_mode = team_mode;
        self
    }

    /// Sets whether the linked-trios win rule is active.
    ///
    /// ```
    /// use triors::GameOptions;
    ///
    /// let options = GameOptions::default().with_piquant(true);
    /// assert!(options.piquant);
    /// ```
    #[must_use]
    pub const fn with_piquant(mut self, piquant: bool) -> Self {
        self.piquant = piquant;
        self
    }

    /// Sets the turn count after which an undecided game ends in a draw.
    ///
    /// A limit of 0 disables the bound.
    ///
    /// ```
    /// use triors::GameOptions;
    ///
    /// let options = GameOptions::default().with_turn_limit(100);
    /// assert_eq!(options.turn_limit, 100);
    /// ```
    #[must_use]
    pub const fn with_turn_limit(mut self, turn_limit: u32) -> Self {
        self.turn_limit = turn_limit;
        self
    }

    /// Sets the denomination adjacency used by the linked-trios rule.
    ///
    /// ```
    /// use triors::{GameOptions, NeighborTable};
    ///
    /// let options =
    ///     GameOptions::default().with_neighbors(NeighborTable::from_pairs(&[(1, 12)]));
    /// assert!(options.neighbors.are_neighbors(1, 12));
    /// ```
    #[must_use]
    pub const fn with_neighbors(mut self, neighbors: NeighborTable) -> Self {
        self.neighbors = neighbors;
        self
    }
}
