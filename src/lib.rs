//! A word grid library for Rust.
//! <br>
//! This crate generates boards for a Lexica style word game, and finds all
//! words on them. A board is a square grid of 4x4, 5x5 or 6x6 letters.
//! Words are formed by paths of adjacent cells, horizontally, vertically or
//! diagonally, where each cell can be used only once.
//! It can use the `rayon` crate to create candidate boards in parallel.
//!
//! # How to use `lexica_solver`
//! A language needs two data files:
//! - A letter distribution: one letter per line, followed by its ranks.
//!   The ranks are the weights of the letter the first, second, ... time it is
//!   drawn for a board. It can be measured from a list of words with
//!   [`LetterFrequency`], see the `build_distribution` demo.
//! - A dictionary in a compact binary trie format. It can be created from a
//!   list of words with [`Trie::from_words`] and [`Trie::write`], see the
//!   `build_trie` demo.
//!
//! Load both with [`BoardFactory::load`], then create as many boards as
//! needed. The data is passed as a [`ByteSource`]: an in-memory buffer, or a
//! path that is already resolved by the caller.
//!
//! # Basic usage
//! ```
//! use lexica_solver::{BoardFactory, GameMode, Language, Trie};
//!
//! let language = Language::from_code("en_US")?;
//! let mut dictionary = Vec::new();
//! Trie::from_words(&["rust", "rest", "tree", "user"], language)?.write(&mut dictionary)?;
//! let letters = "e 10 9 8 7\nr 8 7 6\ns 8 7 6\nt 8 7 6\nu 5 4 3";
//!
//! let factory = BoardFactory::load(language, letters, &dictionary)?;
//! let board = factory.create_board(&GameMode::new(16, 4)?)?;
//! println!("{}", board.grid());
//! for (word, paths) in board.solutions() {
//!     println!("{} {:?}", word, paths[0].positions());
//! }
//! # Ok::<(), lexica_solver::Error>(())
//! ```
//!
//! # About implementation
//! The dictionary is stored as a trie in one vector of nodes, in breadth first
//! order. Each node has a 64 bit set with the labels of its children, so the
//! index of a child is found with a popcount. The solver walks all paths on
//! the grid together with the trie, and stops as soon as the letters on the
//! path are not a prefix of any word.
//! When only one board is needed, [`create_board_streaming`] reads just the
//! part of the dictionary that can be found on that board.
//!
//! Dictionary words may contain letters with diacritics that are not tiles of
//! the language, like the `é` in French. Such a letter gets its own label, as a
//! variant of the tile it normalizes to. With [`Matching::Normalized`] an `e`
//! on the board matches both.
mod board;
mod codec;
mod distribution;
mod error;
mod factory;
mod frequency;
mod generator;
mod grid;
mod labelset;
mod language;
mod solver;
mod source;
mod trie;

#[cfg(test)]
mod test_utils;

pub use board::{Board, GameMode};
pub use codec::{Codec, Matching};
pub use distribution::{LetterDistribution, ProbabilityQueue};
pub use error::Error;
pub use factory::{create_board_streaming, BoardFactory};
pub use frequency::LetterFrequency;
pub use generator::BoardGenerator;
pub use grid::{GridSize, LetterGrid, Neighbors};
pub use labelset::{Label, LabelSet};
pub use language::Language;
pub use solver::{MinLength, Solution, Solutions, Solver, WordFilter};
pub use source::ByteSource;
pub use trie::Trie;
