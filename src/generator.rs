use crate::distribution::LetterDistribution;
use crate::grid::{GridSize, LetterGrid};
use crate::Error;
use rand::seq::SliceRandom;
use rand::Rng;

/// Draws the letters of a new grid from a [`LetterDistribution`].
///
/// Every draw is a weighted choice between all letters, where the weight of a
/// letter is its next rank. Drawing a letter moves on to its following rank,
/// so letters get less likely the more often they were drawn, and can not be
/// drawn at all once their ranks are used up. After all cells are drawn the
/// letters are shuffled over the grid.
#[derive(Debug, Clone, Copy)]
pub struct BoardGenerator<'a> {
    distribution: &'a LetterDistribution,
}

impl<'a> BoardGenerator<'a> {
    pub fn new(distribution: &'a LetterDistribution) -> BoardGenerator<'a> {
        BoardGenerator { distribution }
    }

    pub fn distribution(&self) -> &'a LetterDistribution {
        self.distribution
    }

    /// Generate a grid with the thread local random generator.
    /// ## Errors
    /// If the distribution runs out of letters before the grid is filled.
    pub fn generate(&self, size: GridSize) -> Result<LetterGrid, Error> {
        self.generate_with_rng(size, &mut rand::thread_rng())
    }

    /// Generate a grid using `rng`.
    /// The same seeded generator gives the same grid.
    /// ## Errors
    /// If the distribution runs out of letters before the grid is filled.
    /// ## Examples
    /// ```
    /// # use lexica_solver::{BoardGenerator, GridSize, Language, LetterDistribution, Error};
    /// use rand::{rngs::StdRng, SeedableRng};
    /// let language = Language::from_code("en_US")?;
    /// let source = "e 9 8 7 6 5 4 3 2 1\nt 9 8 7 6 5 4 3 2 1\n";
    /// let distribution = LetterDistribution::from_reader(source.as_bytes(), language)?;
    /// let generator = BoardGenerator::new(&distribution);
    /// let grid = generator.generate_with_rng(GridSize::FourByFour, &mut StdRng::seed_from_u64(7))?;
    /// assert_eq!(grid.len(), 16);
    /// assert!(grid.iter().all(|letter| letter == "e" || letter == "t"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        size: GridSize,
        rng: &mut R,
    ) -> Result<LetterGrid, Error> {
        let requested = size.cells();
        let mut queues = self.distribution.queues();
        let mut total: u64 = queues.iter().map(|queue| u64::from(queue.peek())).sum();
        let mut letters = Vec::with_capacity(requested);
        for drawn in 0..requested {
            let exhausted = || Error::DistributionExhausted { drawn, requested };
            if total == 0 {
                return Err(exhausted());
            }
            let mut remaining = rng.gen_range(0..total) as i64;
            let chosen = queues.iter().position(|queue| {
                let rank = queue.peek();
                remaining -= i64::from(rank);
                rank > 0 && remaining <= 0
            });
            let queue = match chosen {
                Some(i) => &mut queues[i],
                None => return Err(exhausted()),
            };
            letters.push(String::from(queue.letter()));
            total -= u64::from(queue.consume());
            total += u64::from(queue.peek());
        }
        letters.shuffle(rng);
        log::trace!("Generated {} letters: {:?}", requested, letters);
        Ok(LetterGrid::from_parts(size, letters))
    }
}
