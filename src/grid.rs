use crate::Error;
use std::collections::BTreeSet;
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;
use tinyvec::ArrayVec;

/// The neighbors of a cell, at most 8
pub type Neighbors = ArrayVec<[usize; 8]>;

/// The supported board sizes
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridSize {
    /// 4x4, 16 cells
    FourByFour,
    /// 5x5, 25 cells
    FiveByFive,
    /// 6x6, 36 cells
    SixBySix,
}

use GridSize::{FiveByFive, FourByFour, SixBySix};

impl GridSize {
    /// The number of cells in a row or column
    pub fn width(self) -> usize {
        match self {
            FourByFour => 4,
            FiveByFive => 5,
            SixBySix => 6,
        }
    }

    /// The total number of cells
    pub fn cells(self) -> usize {
        self.width() * self.width()
    }
}

impl TryFrom<usize> for GridSize {
    type Error = Error;

    /// Get the grid size for a number of cells.
    fn try_from(cells: usize) -> Result<Self, Self::Error> {
        match cells {
            16 => Ok(FourByFour),
            25 => Ok(FiveByFive),
            36 => Ok(SixBySix),
            _ => Err(Error::InvalidBoardSize(cells)),
        }
    }
}

/// A square grid of letters, with 4x4, 5x5 or 6x6 cells.
///
/// Cells are indexed row by row, starting at 0 in the top left corner.
/// Two cells are neighbors if they touch horizontally, vertically or
/// diagonally. There is no wraparound at the edges.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LetterGrid {
    size: GridSize,
    letters: Vec<String>,
}

impl Deref for LetterGrid {
    type Target = [String];
    fn deref(&self) -> &Self::Target {
        &self.letters
    }
}

impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl LetterGrid {
    /// Create a grid from a list of 16, 25 or 36 letters, row by row.
    /// Letters are converted to lower case.
    /// ## Errors
    /// If the number of letters is not a supported grid size.
    /// ## Examples
    /// ```
    /// # use lexica_solver::{LetterGrid, Error};
    /// let letters = ["a"; 25];
    /// let grid = LetterGrid::from_letters(&letters)?;
    /// assert_eq!(grid.width(), 5);
    /// assert_eq!(grid.neighbors(0)?.len(), 3);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_letters<S: AsRef<str>>(letters: &[S]) -> Result<LetterGrid, Error> {
        let size = GridSize::try_from(letters.len())?;
        let letters = letters
            .iter()
            .map(|letter| letter.as_ref().to_lowercase())
            .collect();
        Ok(LetterGrid { size, letters })
    }

    /// Create a grid from rows of letters separated by spaces.
    /// ## Errors
    /// If the total number of letters is not a supported grid size,
    /// or the rows do not form a square.
    /// ## Examples
    /// ```
    /// # use lexica_solver::{LetterGrid, Error};
    /// let grid = LetterGrid::from_strings(&["a b c d", "e f g h", "i j k l", "m n o qu"])?;
    /// assert_eq!(grid.letter(15), Some("qu"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<LetterGrid, Error> {
        let letters: Vec<&str> = rows
            .iter()
            .flat_map(|row| row.as_ref().split_whitespace())
            .collect();
        let grid = LetterGrid::from_letters(&letters)?;
        if rows.len() != grid.width() {
            return Err(Error::InvalidBoardSize(letters.len()));
        }
        Ok(grid)
    }

    pub(crate) fn from_parts(size: GridSize, letters: Vec<String>) -> LetterGrid {
        debug_assert_eq!(size.cells(), letters.len());
        LetterGrid { size, letters }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.width()
    }

    /// The letter at `index`, or None if outside the grid.
    pub fn letter(&self, index: usize) -> Option<&str> {
        self.letters.get(index).map(String::as_str)
    }

    /// All letters, row by row
    pub fn letters(&self) -> &[String] {
        &self.letters
    }

    /// The distinct letters on the grid
    pub fn letter_set(&self) -> BTreeSet<&str> {
        self.letters.iter().map(String::as_str).collect()
    }

    /// Check if a path can step from cell `from` to cell `to`.
    pub fn can_transition(&self, from: usize, to: usize) -> bool {
        let n = self.size.cells();
        if from >= n || to >= n || from == to {
            return false;
        }
        let w = self.width();
        let (fy, fx) = (from / w, from % w);
        let (ty, tx) = (to / w, to % w);
        fy.max(ty) - fy.min(ty) <= 1 && fx.max(tx) - fx.min(tx) <= 1
    }

    /// The neighbors of cell `index`, in row order.
    /// ## Errors
    /// If `index` is outside the grid.
    pub fn neighbors(&self, index: usize) -> Result<Neighbors, Error> {
        let cells = self.size.cells();
        if index >= cells {
            return Err(Error::InvalidCellIndex { index, cells });
        }
        Ok(self.neighbors_unchecked(index))
    }

    pub(crate) fn neighbors_unchecked(&self, index: usize) -> Neighbors {
        let w = self.width() as isize;
        let (y, x) = (index as isize / w, index as isize % w);
        let mut neighbors = Neighbors::new();
        for dy in -1..=1 {
            for dx in -1..=1 {
                let (ny, nx) = (y + dy, x + dx);
                if (dy, dx) == (0, 0) || ny < 0 || nx < 0 || ny >= w || nx >= w {
                    continue;
                }
                neighbors.push((ny * w + nx) as usize);
            }
        }
        neighbors
    }

    /// Get grid rows as a vec of strings with the letters joined by spaces
    pub fn to_strings(&self) -> Vec<String> {
        self.letters
            .chunks(self.width())
            .map(|row| row.join(" "))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet_grid(cells: usize) -> LetterGrid {
        let letters: Vec<String> = (0..cells)
            .map(|i| ((b'A' + (i % 26) as u8) as char).to_string())
            .collect();
        LetterGrid::from_letters(&letters).unwrap()
    }

    fn neighbor_letters(grid: &LetterGrid, letter: &str) -> Vec<String> {
        let index = grid.iter().position(|l| l == letter).unwrap();
        let mut letters: Vec<String> = grid
            .neighbors(index)
            .unwrap()
            .iter()
            .map(|&i| grid[i].clone())
            .collect();
        letters.sort();
        letters
    }

    #[test]
    fn test_grid_sizes() {
        for &(cells, width) in &[(16, 4), (25, 5), (36, 6)] {
            let grid = alphabet_grid(cells);
            assert_eq!(grid.width(), width);
            assert_eq!(grid.len(), cells);
        }
    }

    #[test]
    #[should_panic(expected = "InvalidBoardSize(20)")]
    fn test_invalid_size() {
        alphabet_grid(20);
    }

    #[test]
    fn test_four_by_four() {
        let grid = alphabet_grid(16);
        assert_eq!(neighbor_letters(&grid, "a"), vec!["b", "e", "f"]);
        assert_eq!(neighbor_letters(&grid, "b"), vec!["a", "c", "e", "f", "g"]);
        assert_eq!(neighbor_letters(&grid, "d"), vec!["c", "g", "h"]);
        assert_eq!(
            neighbor_letters(&grid, "f"),
            vec!["a", "b", "c", "e", "g", "i", "j", "k"]
        );
        assert_eq!(neighbor_letters(&grid, "p"), vec!["k", "l", "o"]);
    }

    #[test]
    fn test_five_by_five() {
        let grid = alphabet_grid(25);
        assert_eq!(neighbor_letters(&grid, "a"), vec!["b", "f", "g"]);
        assert_eq!(neighbor_letters(&grid, "c"), vec!["b", "d", "g", "h", "i"]);
        assert!(!grid.can_transition(4, 5)); // no wraparound
    }

    #[test]
    fn test_neighbors_symmetric() {
        for &cells in &[16, 25, 36] {
            let grid = alphabet_grid(cells);
            for i in 0..cells {
                let neighbors = grid.neighbors(i).unwrap();
                assert!(neighbors.len() <= 8);
                assert!(!neighbors.contains(&i));
                for &j in &neighbors {
                    assert!(grid.neighbors(j).unwrap().contains(&i));
                    assert!(grid.can_transition(i, j));
                }
            }
        }
    }

    #[test]
    fn test_neighbors_out_of_bounds() {
        let grid = alphabet_grid(16);
        assert!(matches!(
            grid.neighbors(16),
            Err(Error::InvalidCellIndex { index: 16, cells: 16 })
        ));
    }

    #[test]
    fn test_grid_from_strings() -> Result<(), Error> {
        let rows = &["c a t s", "h o e d", "qu i x n", "b u g s"];
        let grid = LetterGrid::from_strings(rows)?;
        assert_eq!(grid.to_strings(), rows);
        assert_eq!(LetterGrid::from_letters(grid.letters())?, grid);
        assert_eq!(grid.letter_set().len(), 15);
        println!("{}", grid);
        Ok(())
    }

    #[test]
    fn test_not_square() {
        let rows = &["a b c d e f g h", "i j k l m n o p"];
        assert!(LetterGrid::from_strings(rows).is_err());
    }
}
