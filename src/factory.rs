use crate::board::{Board, GameMode};
use crate::distribution::LetterDistribution;
use crate::generator::BoardGenerator;
use crate::grid::LetterGrid;
use crate::source::ByteSource;
use crate::{Error, Language, Trie};
use rand::{rngs::StdRng, Rng, SeedableRng};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::sync::Arc;

/// Creates solved boards for one language.
///
/// The factory holds the letter distribution and the dictionary of the
/// language. Both are loaded once and shared by all boards. The dictionary
/// trie is reference counted, so factories for different game modes can share it.
#[derive(Debug, Clone)]
pub struct BoardFactory {
    language: &'static Language,
    distribution: LetterDistribution,
    trie: Arc<Trie>,
}

impl BoardFactory {
    pub fn new(
        language: &'static Language,
        distribution: LetterDistribution,
        trie: Arc<Trie>,
    ) -> BoardFactory {
        BoardFactory {
            language,
            distribution,
            trie,
        }
    }

    /// Load the letter distribution and dictionary of `language`.
    /// ## Errors
    /// - If one of the sources can not be read
    /// - If the letter distribution or the dictionary is invalid
    /// ## Examples
    /// ```
    /// # use lexica_solver::{BoardFactory, GameMode, Language, Trie, Error};
    /// let language = Language::from_code("en_US")?;
    /// let mut dictionary = Vec::new();
    /// Trie::from_words(&["tea", "eat", "ate"], language)?.write(&mut dictionary)?;
    /// let letters = "a 9 8 7 6 5 4 3 2\ne 9 8 7 6 5 4 3 2\nt 9 8 7 6 5 4 3 2";
    /// let factory = BoardFactory::load(language, letters, &dictionary)?;
    /// let board = factory.create_board(&GameMode::default())?;
    /// assert!(board.words().all(|word| ["tea", "eat", "ate"].contains(&word)));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn load<L, D>(
        language: &'static Language,
        letters: &L,
        dictionary: &D,
    ) -> Result<BoardFactory, Error>
    where
        L: ByteSource + ?Sized,
        D: ByteSource + ?Sized,
    {
        let distribution = LetterDistribution::from_reader(letters.open()?, language)?;
        let trie = Trie::deserialize(dictionary.open()?, language)?;
        log::info!(
            "Loaded {}: {} letters, {} words",
            language.name(),
            distribution.len(),
            trie.word_count()
        );
        Ok(BoardFactory::new(language, distribution, Arc::new(trie)))
    }

    pub fn language(&self) -> &'static Language {
        self.language
    }

    pub fn distribution(&self) -> &LetterDistribution {
        &self.distribution
    }

    pub fn trie(&self) -> &Arc<Trie> {
        &self.trie
    }

    pub fn generator(&self) -> BoardGenerator {
        BoardGenerator::new(&self.distribution)
    }

    /// Generate a random grid for `mode` and solve it.
    /// ## Errors
    /// If the letter distribution is exhausted before the grid is filled.
    pub fn create_board(&self, mode: &GameMode) -> Result<Board, Error> {
        self.create_board_with_rng(mode, &mut rand::thread_rng())
    }

    /// Generate a grid for `mode` with `rng` and solve it.
    /// ## Errors
    /// If the letter distribution is exhausted before the grid is filled.
    pub fn create_board_with_rng<R: Rng + ?Sized>(
        &self,
        mode: &GameMode,
        rng: &mut R,
    ) -> Result<Board, Error> {
        let grid = self.generator().generate_with_rng(mode.size(), rng)?;
        Ok(Board::solve(grid, &self.trie, mode))
    }

    /// Solve a board with known letters, row by row.
    /// ## Errors
    /// If the number of letters does not match the board size of `mode`.
    pub fn create_board_from_letters<S: AsRef<str>>(
        &self,
        letters: &[S],
        mode: &GameMode,
    ) -> Result<Board, Error> {
        if letters.len() != mode.board_size() {
            return Err(Error::InvalidBoardSize(letters.len()));
        }
        let grid = LetterGrid::from_letters(letters)?;
        Ok(Board::solve(grid, &self.trie, mode))
    }

    /// Create `n` independent random boards.
    /// With the `rayon` feature the boards are created in parallel.
    /// ## Errors
    /// If the letter distribution is exhausted before a grid is filled.
    pub fn create_candidates(&self, mode: &GameMode, n: usize) -> Result<Vec<Board>, Error> {
        let create = |_: usize| self.create_board(mode);
        #[cfg(feature = "rayon")]
        let boards = (0..n).into_par_iter().map(create).collect();
        #[cfg(not(feature = "rayon"))]
        let boards = (0..n).map(create).collect();
        boards
    }

    /// Create `n` boards, where board `i` is generated with a generator seeded
    /// from `seed + i`. The result is the same with or without `rayon`.
    /// ## Errors
    /// If the letter distribution is exhausted before a grid is filled.
    pub fn create_seeded_candidates(
        &self,
        mode: &GameMode,
        n: usize,
        seed: u64,
    ) -> Result<Vec<Board>, Error> {
        let create = |i: usize| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            self.create_board_with_rng(mode, &mut rng)
        };
        #[cfg(feature = "rayon")]
        let boards = (0..n).into_par_iter().map(create).collect();
        #[cfg(not(feature = "rayon"))]
        let boards = (0..n).map(create).collect();
        boards
    }

    /// Create `n` random boards and return the one with the highest `score`.
    /// At least one board is created. On a tie the first board wins.
    /// ## Errors
    /// If the letter distribution is exhausted before a grid is filled.
    /// ## Examples
    /// ```no_run
    /// # use lexica_solver::{Board, BoardFactory, GameMode, Language, Error};
    /// # fn example(factory: &BoardFactory) -> Result<(), Error> {
    /// // the board with the most long words
    /// let board = factory.best_candidate(&GameMode::default(), 20, |board: &Board| {
    ///     board.count_for_length(5) + board.count_for_length(6)
    /// })?;
    /// println!("{}", board);
    /// # Ok(())
    /// # }
    /// ```
    pub fn best_candidate<F, K>(&self, mode: &GameMode, n: usize, score: F) -> Result<Board, Error>
    where
        F: Fn(&Board) -> K,
        K: Ord,
    {
        let mut best = self.create_board(mode)?;
        let mut best_score = score(&best);
        for board in self.create_candidates(mode, n.saturating_sub(1))? {
            let board_score = score(&board);
            if board_score > best_score {
                best = board;
                best_score = board_score;
            }
        }
        Ok(best)
    }
}

/// Solve one known grid, reading only the part of the dictionary that can
/// occur on it. This avoids keeping a full dictionary in memory when only a
/// single board is needed.
/// ## Errors
/// - If the dictionary can not be read or is corrupt
/// - If the size of `grid` does not match `mode`
/// ## Examples
/// ```
/// # use lexica_solver::{create_board_streaming, GameMode, Language, LetterGrid, Trie, Error};
/// let language = Language::from_code("en_US")?;
/// let mut dictionary = Vec::new();
/// Trie::from_words(&["quit", "quiz", "it"], language)?.write(&mut dictionary)?;
/// let grid = LetterGrid::from_strings(&["qu i t x", "x x x x", "x x x x", "x x x x"])?;
/// let board = create_board_streaming(language, &dictionary, grid, &GameMode::default())?;
/// assert_eq!(board.words().collect::<Vec<_>>(), vec!["quit"]);
/// # Ok::<(), Error>(())
/// ```
pub fn create_board_streaming<D: ByteSource + ?Sized>(
    language: &Language,
    dictionary: &D,
    grid: LetterGrid,
    mode: &GameMode,
) -> Result<Board, Error> {
    if grid.size() != mode.size() {
        return Err(Error::InvalidBoardSize(grid.len()));
    }
    let trie =
        Trie::deserialize_for_grid(dictionary.open()?, language, &grid, mode.matching())?;
    Ok(Board::solve(grid, &trie, mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{dictionary_bytes, english, test_grid, TEST_DISTRIBUTION, WORDS};

    fn factory() -> BoardFactory {
        let dictionary = dictionary_bytes(WORDS).unwrap();
        BoardFactory::load(english(), TEST_DISTRIBUTION, &dictionary).unwrap()
    }

    #[test]
    fn test_load() {
        let factory = factory();
        assert_eq!(factory.language().code(), "en_US");
        assert_eq!(factory.distribution().len(), 5);
        assert_eq!(factory.trie().word_count(), WORDS.len());
    }

    #[test]
    fn test_load_errors() {
        let dictionary = dictionary_bytes(WORDS).unwrap();
        let result = BoardFactory::load(english(), "a 1 x", &dictionary);
        assert!(matches!(result, Err(Error::InvalidRank { line: 1, .. })));
        let result = BoardFactory::load(english(), TEST_DISTRIBUTION, &dictionary[..5]);
        assert!(matches!(result, Err(Error::CorruptDictionary(_))));
        let missing = std::path::PathBuf::from("/nonexistent/lexica/letters.txt");
        let result = BoardFactory::load(english(), &missing, &dictionary);
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_create_board() {
        let factory = factory();
        let board = factory.create_board(&GameMode::default()).unwrap();
        assert_eq!(board.grid().len(), 16);
        for word in board.words() {
            assert!(factory.trie().is_word(word));
            assert!(word.chars().count() >= 3);
        }
        // the test distribution has room for exactly one 4x4 grid
        let result = factory.create_board(&GameMode::new(25, 3).unwrap());
        assert!(matches!(result, Err(Error::DistributionExhausted { .. })));
    }

    #[test]
    fn test_create_board_from_letters() {
        let factory = factory();
        let mode = GameMode::default();
        let board = factory
            .create_board_from_letters(test_grid().letters(), &mode)
            .unwrap();
        assert_eq!(board.word_count(), 11);
        let result = factory.create_board_from_letters(&["a"; 25], &mode);
        assert!(matches!(result, Err(Error::InvalidBoardSize(25))));
    }

    #[test]
    fn test_seeded_candidates() {
        let factory = factory();
        let mode = GameMode::default();
        let first = factory.create_seeded_candidates(&mode, 8, 123).unwrap();
        let second = factory.create_seeded_candidates(&mode, 8, 123).unwrap();
        assert_eq!(first.len(), 8);
        assert_eq!(first, second);
    }

    #[test]
    fn test_best_candidate() {
        let factory = factory();
        let mode = GameMode::new(16, 1).unwrap();
        assert_eq!(factory.create_candidates(&mode, 5).unwrap().len(), 5);
        let board = factory
            .best_candidate(&mode, 5, |board: &Board| board.word_count())
            .unwrap();
        assert_eq!(board.grid().len(), 16);
        let board = factory.best_candidate(&mode, 0, |_: &Board| 0).unwrap();
        assert_eq!(board.grid().len(), 16);
    }

    #[test]
    fn test_streaming() {
        let dictionary = dictionary_bytes(WORDS).unwrap();
        let mode = GameMode::default();
        let board = create_board_streaming(english(), &dictionary, test_grid(), &mode).unwrap();
        let expect = factory()
            .create_board_from_letters(test_grid().letters(), &mode)
            .unwrap();
        assert_eq!(board, expect);
        let mode = GameMode::new(25, 3).unwrap();
        let result = create_board_streaming(english(), &dictionary, test_grid(), &mode);
        assert!(matches!(result, Err(Error::InvalidBoardSize(16))));
    }
}
