use crate::codec::Matching;
use crate::grid::Neighbors;
use crate::labelset::{Label, LabelSet};
use crate::{LetterGrid, Trie};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The solutions on a board: each word with all paths that spell it
pub type Solutions = BTreeMap<String, Vec<Solution>>;

/// Decides if a word found on the grid counts as a solution.
pub trait WordFilter: Sync {
    fn accepts(&self, word: &str) -> bool;
}

/// Accept words with at least this number of characters.
/// A multi-character tile counts with all its characters, so `quit` has length 4.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MinLength(pub usize);

impl WordFilter for MinLength {
    fn accepts(&self, word: &str) -> bool {
        word.chars().count() >= self.0
    }
}

impl<F> WordFilter for F
where
    F: Fn(&str) -> bool + Sync,
{
    fn accepts(&self, word: &str) -> bool {
        self(word)
    }
}

/// A word found on the grid, with the cells that spell it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    word: String,
    positions: Vec<usize>,
}

impl Solution {
    pub fn new(word: String, positions: Vec<usize>) -> Solution {
        Solution { word, positions }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// The cell indices of the path, in order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}

/// State of the search, local to one call of [`Solver::solve`].
struct Walk<'g, F: ?Sized> {
    /// The labels each cell matches
    cells: Vec<LabelSet>,
    adjacency: Vec<Neighbors>,
    visited: u64,
    path: Vec<usize>,
    labels: Vec<Label>,
    filter: &'g F,
    solutions: Solutions,
}

/// Finds all words of a [`Trie`] on a [`LetterGrid`].
///
/// The search starts at every cell, and walks to neighboring cells that were
/// not yet visited on the current path, as long as the letters so far are a
/// prefix of a word in the trie.
///
/// By default letters are matched after normalization, so an `e` on the
/// grid also follows the `é` of a word. The word is reported as it is spelled
/// in the trie.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    trie: &'a Trie,
    matching: Matching,
}

impl<'a> Solver<'a> {
    pub fn new(trie: &'a Trie) -> Solver<'a> {
        Solver::with_matching(trie, Matching::default())
    }

    pub fn with_matching(trie: &'a Trie, matching: Matching) -> Solver<'a> {
        Solver { trie, matching }
    }

    pub fn matching(&self) -> Matching {
        self.matching
    }

    /// Return all words on `grid` that are accepted by `filter`, each with all
    /// paths that spell it.
    /// Letters on the grid that are not a tile of the trie's language are
    /// never part of a word.
    /// ## Examples
    /// ```
    /// # use lexica_solver::{Language, LetterGrid, MinLength, Solver, Trie, Error};
    /// let trie = Trie::from_words(&["tea", "eat", "tee"], Language::from_code("en_GB")?)?;
    /// let grid = LetterGrid::from_strings(&["t e x x", "a x x x", "x x x x", "x x x x"])?;
    /// let solutions = Solver::new(&trie).solve(&grid, &MinLength(3));
    /// assert_eq!(solutions.keys().collect::<Vec<_>>(), vec!["eat", "tea"]);
    /// assert_eq!(solutions["tea"][0].positions(), &[0, 1, 4]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn solve<F: WordFilter + ?Sized>(&self, grid: &LetterGrid, filter: &F) -> Solutions {
        let codec = self.trie.codec();
        let mut walk = Walk {
            cells: grid
                .iter()
                .map(|letter| codec.matching_labels(letter, self.matching))
                .collect(),
            adjacency: (0..grid.len()).map(|i| grid.neighbors_unchecked(i)).collect(),
            visited: 0,
            path: Vec::with_capacity(grid.len()),
            labels: Vec::with_capacity(grid.len()),
            filter,
            solutions: Solutions::new(),
        };
        let root = self.trie.root();
        for pos in 0..grid.len() {
            self.step(&mut walk, pos, root);
        }
        walk.solutions
    }

    /// Continue the path from `node` to cell `pos`, once for every label of
    /// the cell that is a child of `node`.
    fn step<F: WordFilter + ?Sized>(&self, walk: &mut Walk<F>, pos: usize, node: usize) {
        for label in walk.cells[pos].iter() {
            if let Some(child) = self.trie.get(node, label) {
                walk.path.push(pos);
                walk.labels.push(label);
                self.walk(walk, pos, child);
                walk.path.pop();
                walk.labels.pop();
            }
        }
    }

    fn walk<F: WordFilter + ?Sized>(&self, walk: &mut Walk<F>, pos: usize, node: usize) {
        if self.trie.is_terminal(node) {
            let word = self.trie.codec().decode(&walk.labels);
            if walk.filter.accepts(&word) {
                let solution = Solution::new(word.clone(), walk.path.clone());
                walk.solutions.entry(word).or_default().push(solution);
            }
        }
        if self.trie.is_tail(node) {
            return;
        }
        walk.visited |= 1 << pos;
        for k in 0..walk.adjacency[pos].len() {
            let next = walk.adjacency[pos][k];
            if walk.visited & (1 << next) == 0 {
                self.step(walk, next, node);
            }
        }
        walk.visited &= !(1 << pos);
    }
}
