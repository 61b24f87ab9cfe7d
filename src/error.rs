use crate::cards::Card;

/// Errors raised while parsing notation, simulating, or reading tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A range token matched none of the known shapes.
    MalformedRangeToken(String),
    /// Board notation whose length is not 0, 2, 4, 6, 8 or 10.
    InvalidBoardLength(usize),
    /// A rank or suit character outside the short deck.
    InvalidCard(String),
    /// The same card appears twice in one set.
    DuplicateCard(Card),
    /// Known board size disagrees with the board, or exceeds five cards.
    InvalidBoardSize { board: usize, known: usize },
    /// A simulation needs at least one player.
    NoPlayers,
    /// No card-disjoint hand per player exists for these ranges and board.
    InfeasibleAssignment,
    /// A key absent from a table that must be total over its domain.
    LookupMiss(u64),
    /// A persisted table record that does not parse as `<key>,<value>`.
    TableFileCorruption { line: usize, record: String },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedRangeToken(s) => write!(f, "malformed range token: {}", s),
            Self::InvalidBoardLength(n) => write!(f, "invalid board length: {}", n),
            Self::InvalidCard(s) => write!(f, "invalid card: {}", s),
            Self::DuplicateCard(c) => write!(f, "duplicate card: {}", c),
            Self::InvalidBoardSize { board, known } => {
                write!(f, "board has {} cards, expected {}", board, known)
            }
            Self::NoPlayers => write!(f, "no player ranges"),
            Self::InfeasibleAssignment => write!(f, "no disjoint hand assignment exists"),
            Self::LookupMiss(key) => write!(f, "lookup table has no entry for {:#x}", key),
            Self::TableFileCorruption { line, record } => {
                write!(f, "corrupt table record on line {}: {:?}", line, record)
            }
        }
    }
}

impl std::error::Error for Error {}
