use crate::distribution::LetterDistribution;
use crate::error::Error;
use crate::language::Language;
use std::collections::BTreeMap;

/// Measures how often the tiles of a language occur within the words of a
/// word list, to build a [`LetterDistribution`] for the language.
///
/// For every tile, `counts[k]` is the number of words that contain the tile
/// exactly `k + 1` times. Letters that are not a tile of the language are not
/// counted. Neither is a letter with a mandatory suffix that is not followed
/// by it, like an English `q` without `u`.
#[derive(Debug, Clone)]
pub struct LetterFrequency {
    language: &'static Language,
    counts: BTreeMap<String, Vec<u32>>,
    word_count: usize,
}

impl LetterFrequency {
    pub fn new(language: &'static Language) -> LetterFrequency {
        LetterFrequency {
            language,
            counts: BTreeMap::new(),
            word_count: 0,
        }
    }

    pub fn language(&self) -> &'static Language {
        self.language
    }

    /// The number of words added
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Count the tiles of `word`, after conversion to lower case.
    pub fn add_word(&mut self, word: &str) {
        for (tile, n) in self.tiles_in(&word.to_lowercase()) {
            let counts = self.counts.entry(tile).or_default();
            if counts.len() < n {
                counts.resize(n, 0);
            }
            counts[n - 1] += 1;
        }
        self.word_count += 1;
    }

    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref());
        }
    }

    /// The number of times each tile occurs in `word`.
    fn tiles_in(&self, word: &str) -> BTreeMap<String, usize> {
        let mut tiles = BTreeMap::new();
        let mut rest = word;
        while let Some(c) = rest.chars().next() {
            let letter = &rest[..c.len_utf8()];
            let tile = self.language.apply_mandatory_suffix(letter);
            if !rest.starts_with(tile.as_str()) {
                rest = &rest[letter.len()..];
                continue;
            }
            rest = &rest[tile.len()..];
            if self.language.contains_tile(&tile) {
                *tiles.entry(tile).or_insert(0) += 1;
            }
        }
        tiles
    }

    /// The counts of `tile`, if it occurs in any word.
    pub fn counts(&self, tile: &str) -> Option<&[u32]> {
        self.counts.get(tile).map(Vec::as_slice)
    }

    /// Iterate over (tile, counts) in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.counts
            .iter()
            .map(|(tile, counts)| (tile.as_str(), counts.as_slice()))
    }

    /// The most times any tile occurs in a single word
    pub fn max_count(&self) -> usize {
        self.counts.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Build a letter distribution from the counts.
    ///
    /// The rank of a tile for its `k`-th draw is the number of words that
    /// contain the tile at least `k` times. So the ranks of a tile never
    /// increase, and a tile can be drawn as often as it occurs in one word.
    /// ## Errors
    /// If no tile was counted.
    /// ## Examples
    /// ```
    /// # use lexica_solver::{Language, LetterFrequency, Error};
    /// let mut frequency = LetterFrequency::new(Language::from_code("en_US")?);
    /// frequency.add_words(&["tree", "bee", "queen", "qat"]);
    /// let distribution = frequency.to_distribution()?;
    /// assert_eq!(distribution.ranks("e"), Some(&[3, 3][..]));
    /// assert_eq!(distribution.ranks("t"), Some(&[2][..]));
    /// assert_eq!(distribution.ranks("qu"), Some(&[1][..]));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn to_distribution(&self) -> Result<LetterDistribution, Error> {
        let letters = self
            .counts
            .iter()
            .map(|(tile, counts)| {
                let mut ranks = counts.clone();
                for k in (1..ranks.len()).rev() {
                    ranks[k - 1] += ranks[k];
                }
                (tile.clone(), ranks)
            })
            .collect();
        let distribution = LetterDistribution::from_letters(letters)?;
        log::debug!(
            "Letter distribution for {} from {} words: {} letters",
            self.language,
            self.word_count,
            distribution.len()
        );
        Ok(distribution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::english;

    fn frequency(words: &[&str]) -> LetterFrequency {
        let mut frequency = LetterFrequency::new(english());
        frequency.add_words(words);
        frequency
    }

    #[test]
    fn test_counts() {
        let frequency = frequency(&["queen", "seen", "bee", "tree", "eve"]);
        assert_eq!(frequency.word_count(), 5);
        assert_eq!(frequency.counts("e"), Some(&[0, 5][..]));
        assert_eq!(frequency.counts("n"), Some(&[2][..]));
        assert_eq!(frequency.counts("v"), Some(&[1][..]));
        assert_eq!(frequency.counts("qu"), Some(&[1][..]));
        assert_eq!(frequency.counts("u"), None);
        assert_eq!(frequency.counts("x"), None);
        assert_eq!(frequency.max_count(), 2);
    }

    #[test]
    fn test_q_without_u() {
        let frequency = frequency(&["qat", "qi", "aqua"]);
        assert_eq!(frequency.counts("qu"), Some(&[1][..]));
        assert_eq!(frequency.counts("q"), None);
        // the letter after a bare `q` is still counted
        assert_eq!(frequency.counts("a"), Some(&[1, 1][..]));
        assert_eq!(frequency.counts("i"), Some(&[1][..]));
        assert_eq!(frequency.counts("u"), None);
    }

    #[test]
    fn test_q_tile() -> Result<(), Error> {
        let mut frequency = LetterFrequency::new(Language::from_code("nl")?);
        frequency.add_words(&["qat", "quiz"]);
        assert_eq!(frequency.counts("q"), Some(&[2][..]));
        assert_eq!(frequency.counts("u"), Some(&[1][..]));
        Ok(())
    }

    #[test]
    fn test_other_letters() {
        let frequency = frequency(&["Naïve", "café"]);
        assert_eq!(frequency.counts("n"), Some(&[1][..]));
        assert_eq!(frequency.counts("a"), Some(&[2][..]));
        assert_eq!(frequency.counts("ï"), None);
        assert_eq!(frequency.counts("é"), None);
    }

    #[test]
    fn test_to_distribution() -> Result<(), Error> {
        let frequency = frequency(&["queen", "seen", "bee", "tree", "eve", "eerie"]);
        let distribution = frequency.to_distribution()?;
        // 5 words with two `e`s and one with three
        assert_eq!(distribution.ranks("e"), Some(&[6, 6, 1][..]));
        assert!(distribution.iter().all(|(_, ranks)| ranks.iter().all(|&rank| rank > 0)));
        let mut bytes = Vec::new();
        distribution.write(&mut bytes)?;
        let parsed = LetterDistribution::from_reader(bytes.as_slice(), english())?;
        assert_eq!(parsed, distribution);
        Ok(())
    }

    #[test]
    fn test_empty() {
        let frequency = frequency(&["", "123"]);
        assert_eq!(frequency.word_count(), 2);
        assert!(matches!(
            frequency.to_distribution(),
            Err(Error::EmptyDistribution)
        ));
    }
}
