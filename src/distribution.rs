use crate::error::Error;
use crate::language::Language;
use std::io::{BufRead, BufReader, Read, Write};

/// The letter frequencies of a language.
///
/// Each letter has an ordered list of ranks. The first rank is the weight with
/// which the letter is drawn the first time, the second rank is the weight for
/// the second time, and so on. A letter can not be drawn more often than it
/// has ranks.
///
/// The source format has one letter per line, followed by its ranks:
/// ```text
/// # letter rank1 rank2 ...
/// e 100 20 1
/// q 3
/// ```
/// Empty lines and lines starting with `#` are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LetterDistribution {
    letters: Vec<(String, Vec<u32>)>,
}

impl LetterDistribution {
    /// Parse a letter distribution for `language` from `source`.
    ///
    /// Letters are converted to lower case, and the mandatory suffix of the
    /// language is applied (an English `q` becomes `qu`).
    /// ## Errors
    /// - If `source` can not be read
    /// - If a letter has no ranks, or a rank is not a positive integer
    /// - If a letter is present on more than one line
    /// - If there are no letters at all
    /// ## Examples
    /// ```
    /// # use lexica_solver::{Language, LetterDistribution, Error};
    /// let language = Language::from_code("en_US")?;
    /// let distribution = LetterDistribution::from_reader("e 10 5\nq 2\n".as_bytes(), language)?;
    /// assert_eq!(distribution.ranks("qu"), Some(&[2][..]));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_reader<R: Read>(source: R, language: &Language) -> Result<LetterDistribution, Error> {
        let mut letters: Vec<(String, Vec<u32>)> = Vec::new();
        for (i, line) in BufReader::new(source).lines().enumerate() {
            let line = line?;
            let lineno = i + 1;
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let mut chunks = line.split_whitespace();
            let letter = match chunks.next() {
                Some(letter) => language.apply_mandatory_suffix(&letter.to_lowercase()),
                None => continue,
            };
            let ranks = chunks
                .map(|chunk| match chunk.parse::<u32>() {
                    Ok(rank) if rank > 0 => Ok(rank),
                    _ => Err(Error::InvalidRank {
                        line: lineno,
                        rank: String::from(chunk),
                    }),
                })
                .collect::<Result<Vec<u32>, Error>>()?;
            if ranks.is_empty() {
                return Err(Error::MissingRanks {
                    line: lineno,
                    letter,
                });
            }
            if letters.iter().any(|(seen, _)| *seen == letter) {
                return Err(Error::DuplicateLetter {
                    line: lineno,
                    letter,
                });
            }
            letters.push((letter, ranks));
        }
        if letters.is_empty() {
            return Err(Error::EmptyDistribution);
        }
        log::debug!(
            "Letter distribution for {}: {} letters",
            language,
            letters.len()
        );
        Ok(LetterDistribution { letters })
    }

    /// A distribution with the given letters and ranks.
    pub(crate) fn from_letters(
        letters: Vec<(String, Vec<u32>)>,
    ) -> Result<LetterDistribution, Error> {
        if letters.is_empty() {
            return Err(Error::EmptyDistribution);
        }
        Ok(LetterDistribution { letters })
    }

    /// Write the distribution in the format read by
    /// [`from_reader`](LetterDistribution::from_reader).
    /// ## Errors
    /// If writing fails.
    pub fn write<W: Write>(&self, mut output: W) -> Result<(), Error> {
        for (letter, ranks) in &self.letters {
            let ranks: Vec<String> = ranks.iter().map(u32::to_string).collect();
            writeln!(output, "{} {}", letter, ranks.join(" "))?;
        }
        Ok(())
    }

    /// The letters, in the order of the source
    pub fn alphabet(&self) -> impl Iterator<Item = &str> {
        self.letters.iter().map(|(letter, _)| letter.as_str())
    }

    /// The ranks of `letter`, if present
    pub fn ranks(&self, letter: &str) -> Option<&[u32]> {
        self.letters
            .iter()
            .find(|(l, _)| l == letter)
            .map(|(_, ranks)| ranks.as_slice())
    }

    /// Iterate over (letter, ranks) in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.letters
            .iter()
            .map(|(letter, ranks)| (letter.as_str(), ranks.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The total number of letters that can be drawn before the distribution
    /// is exhausted.
    pub fn capacity(&self) -> usize {
        self.letters.iter().map(|(_, ranks)| ranks.len()).sum()
    }

    /// Return a fresh queue for every letter, in source order.
    pub fn queues(&self) -> Vec<ProbabilityQueue> {
        self.letters
            .iter()
            .map(|(letter, ranks)| ProbabilityQueue::new(letter, ranks))
            .collect()
    }
}

/// The ranks of one letter, with a read cursor.
///
/// Consuming a rank only moves the cursor, the ranks are borrowed from the
/// [`LetterDistribution`] and never change. A queue can be reset and
/// reused any number of times.
///
/// Ranks are expected to be positive. A rank of 0 ends the queue: it is never
/// consumed, and the ranks after it are never reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbabilityQueue<'a> {
    letter: &'a str,
    ranks: &'a [u32],
    index: usize,
}

impl<'a> ProbabilityQueue<'a> {
    pub fn new(letter: &'a str, ranks: &'a [u32]) -> ProbabilityQueue<'a> {
        ProbabilityQueue {
            letter,
            ranks,
            index: 0,
        }
    }

    pub fn letter(&self) -> &'a str {
        self.letter
    }

    /// The rank at the cursor, or 0 if exhausted
    pub fn peek(&self) -> u32 {
        self.ranks.get(self.index).copied().unwrap_or(0)
    }

    /// Return the rank at the cursor and advance. Returns 0 once exhausted.
    /// ## Examples
    /// ```
    /// use lexica_solver::ProbabilityQueue;
    /// let mut queue = ProbabilityQueue::new("a", &[100, 20]);
    /// assert_eq!(queue.consume(), 100);
    /// assert_eq!(queue.consume(), 20);
    /// assert_eq!(queue.consume(), 0);
    /// queue.reset();
    /// assert_eq!(queue.consume(), 100);
    /// ```
    pub fn consume(&mut self) -> u32 {
        let rank = self.peek();
        if rank > 0 {
            self.index += 1;
        }
        rank
    }

    /// Rewind the cursor to the first rank.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// True if there is no rank left to consume.
    pub fn is_exhausted(&self) -> bool {
        self.peek() == 0
    }
}
