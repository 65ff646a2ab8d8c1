use crate::codec::Matching;
use crate::grid::{GridSize, LetterGrid};
use crate::solver::{MinLength, Solution, Solutions, Solver};
use crate::{Error, Trie};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt;

/// The rules of a game: the size of the board, the shortest word that counts,
/// and how letters with diacritics are matched.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameMode {
    size: GridSize,
    min_word_length: usize,
    matching: Matching,
}

impl Default for GameMode {
    /// A 4x4 board with words of at least 3 letters
    fn default() -> Self {
        GameMode {
            size: GridSize::FourByFour,
            min_word_length: 3,
            matching: Matching::default(),
        }
    }
}

impl GameMode {
    /// Create a game mode for boards with `board_size` cells.
    /// ## Errors
    /// - If `board_size` is not 16, 25 or 36
    /// - If `min_word_length` is 0
    /// ## Examples
    /// ```
    /// # use lexica_solver::{GameMode, Error};
    /// let mode = GameMode::new(25, 4)?;
    /// assert_eq!(mode.size().width(), 5);
    /// assert!(GameMode::new(20, 4).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(board_size: usize, min_word_length: usize) -> Result<GameMode, Error> {
        let size = GridSize::try_from(board_size)?;
        if min_word_length == 0 {
            return Err(Error::InvalidMinWordLength(min_word_length));
        }
        Ok(GameMode {
            size,
            min_word_length,
            matching: Matching::default(),
        })
    }

    /// The same mode, matching letters with `matching`.
    pub fn with_matching(self, matching: Matching) -> GameMode {
        GameMode { matching, ..self }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn board_size(&self) -> usize {
        self.size.cells()
    }

    pub fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    pub fn matching(&self) -> Matching {
        self.matching
    }

    /// The word filter for this mode.
    pub fn filter(&self) -> MinLength {
        MinLength(self.min_word_length)
    }
}

/// A letter grid together with all words that can be found on it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    grid: LetterGrid,
    solutions: Solutions,
    word_counts: BTreeMap<usize, usize>,
}

/// Display the grid, followed by the number of words.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.grid)?;
        write!(f, "{} words", self.word_count())
    }
}

impl Board {
    /// Assemble a board from a grid and its solutions.
    pub fn new(grid: LetterGrid, solutions: Solutions) -> Board {
        let mut word_counts = BTreeMap::new();
        for word in solutions.keys() {
            *word_counts.entry(word.chars().count()).or_insert(0) += 1;
        }
        Board {
            grid,
            solutions,
            word_counts,
        }
    }

    /// Solve `grid` with the words of `trie` and the rules of `mode`.
    /// ## Examples
    /// ```
    /// # use lexica_solver::{Board, GameMode, Language, LetterGrid, Trie, Error};
    /// let trie = Trie::from_words(&["rust", "rut", "us"], Language::from_code("en_US")?)?;
    /// let grid = LetterGrid::from_strings(&["r u s t", "x x x x", "x x x x", "x x x x"])?;
    /// let board = Board::solve(grid, &trie, &GameMode::default());
    /// assert_eq!(board.word_count(), 1);
    /// assert!(board.has_word("rust"));
    /// assert!(!board.has_word("us"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn solve(grid: LetterGrid, trie: &Trie, mode: &GameMode) -> Board {
        let solutions =
            Solver::with_matching(trie, mode.matching()).solve(&grid, &mode.filter());
        log::debug!("Solved board: {} words", solutions.len());
        Board::new(grid, solutions)
    }

    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    pub fn solutions(&self) -> &Solutions {
        &self.solutions
    }

    /// The words on the board, in alphabetical order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.solutions.keys().map(String::as_str)
    }

    /// The number of distinct words
    pub fn word_count(&self) -> usize {
        self.solutions.len()
    }

    /// The number of distinct words with `length` characters.
    pub fn count_for_length(&self, length: usize) -> usize {
        self.word_counts.get(&length).copied().unwrap_or(0)
    }

    /// The number of words per length, for all lengths with at least one word.
    pub fn word_counts(&self) -> &BTreeMap<usize, usize> {
        &self.word_counts
    }

    pub fn has_word(&self, word: &str) -> bool {
        self.solutions.contains_key(word)
    }

    /// All paths that spell `word`, empty if the word is not on the board.
    pub fn paths_for(&self, word: &str) -> &[Solution] {
        self.solutions.get(word).map(Vec::as_slice).unwrap_or(&[])
    }
}
