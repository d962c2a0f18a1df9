//! Game state types.

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Teams exchange one card each way before play begins.
    InitialExchange,
    /// Normal turn play.
    Playing,
    /// The trio-completing team exchanges before play resumes.
    PostTrioExchange,
    /// The game is over.
    Ended,
}

/// How a game was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Victory {
    /// Three completed trios.
    ThreeTrios,
    /// Two trios of neighboring denominations (piquant rule).
    LinkedTrios,
    /// A trio of denomination 7, an instant win.
    SevenTrio,
}
