use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading one of the data sources
    #[error("Data source could not be read")]
    Io(#[from] std::io::Error),

    /// The language code is not in the language table
    #[error("Unsupported language: {0}")]
    UnknownLanguage(String),

    /// A board must have 16, 25 or 36 cells
    #[error("Invalid board size {0} (expect 16, 25 or 36)")]
    InvalidBoardSize(usize),

    /// The minimum word length must be at least 1
    #[error("Invalid minimum word length {0} (expect at least 1)")]
    InvalidMinWordLength(usize),

    /// Cell index outside the grid
    #[error("Cell index {index} out of bounds for a grid of {cells} cells")]
    InvalidCellIndex { index: usize, cells: usize },

    /// A letter appears on more than one line of the letter distribution
    #[error("Letter distribution line {line}: duplicate letter \"{letter}\"")]
    DuplicateLetter { line: usize, letter: String },

    /// A letter in the letter distribution has no ranks
    #[error("Letter distribution line {line}: no ranks for letter \"{letter}\"")]
    MissingRanks { line: usize, letter: String },

    /// A rank is not a positive integer
    #[error("Letter distribution line {line}: invalid rank \"{rank}\"")]
    InvalidRank { line: usize, rank: String },

    /// The letter distribution has no letters
    #[error("Letter distribution is empty")]
    EmptyDistribution,

    /// The letter distribution ran out of weight before the grid was full
    #[error("Letter distribution exhausted after {drawn} of {requested} letters")]
    DistributionExhausted { drawn: usize, requested: usize },

    /// The binary dictionary could not be decoded
    #[error("Dictionary is corrupt: {0}")]
    CorruptDictionary(String),

    /// A codec has room for at most 63 tiles, one bit each in a `LabelSet`
    #[error("Too many tiles: {0} (at most 63)")]
    TooManyTiles(usize),

    /// Token can not be encoded
    #[error("Encoder: invalid token '{0}'")]
    EncodeInvalidToken(String),

    /// Error (de)serializing a bincoded trie snapshot
    #[cfg(all(feature = "serde", feature = "bincode"))]
    #[error("Trie snapshot could not be (de)serialized: {0}")]
    SnapshotError(String),
}
