use crate::error::Error;
use crate::labelset::{Label, LabelSet};
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

/// String corresponding to a label
pub type Token = String;

/// Label of the trie root, never used for a tile
pub(crate) const ROOT: Label = 0;

/// Labels must fit in the 64 bits of a `LabelSet`
pub(crate) const MAX_LABELS: usize = 64;

/// How a letter on the board is matched against the letters of the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Matching {
    /// Letters must be equal, an `e` does not match an `é`.
    Strict,
    /// A letter also matches the letters with diacritics that normalize to
    /// it, so an `e` matches `é`, `è` and `ê`. The tiles of a language are
    /// never normalized: the Swedish `å` does not match `a`.
    Normalized,
}

impl Default for Matching {
    fn default() -> Self {
        Matching::Normalized
    }
}

/// The first character of the compatibility decomposition of `c`.
fn base_char(c: char) -> char {
    std::iter::once(c).nfkd().next().unwrap_or(c)
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Translate from string to tile labels and vice versa.
/// Each tile of a language is translated to a label:
/// - 0: Not a tile (used for the root of the trie)
/// - 1 ..: the tiles of the language, in the order they are given
/// - then the variants: letters with diacritics found in the dictionary,
///   that normalize to one of the tiles
///
/// A tile can have more than one character, for example the English `qu`.
pub struct Codec {
    encoder: HashMap<Token, Label>,
    decoder: Vec<Token>,
    /// For every label the tile it normalizes to, a tile is its own base
    base: Vec<Label>,
    max_tile_chars: usize,
}

impl Default for Codec {
    fn default() -> Codec {
        Codec::new(&[])
    }
}

impl Codec {
    /// Return a new `Codec` for `tiles`.
    /// ## Panics
    /// If there are more than 63 distinct tiles, see [`try_new`](Codec::try_new).
    /// ## Examples
    /// ```
    /// use lexica_solver::Codec;
    /// let codec = Codec::new(&["a", "b", "qu"]);
    /// assert_eq!(codec.len(), 3);
    /// ```
    pub fn new(tiles: &[&str]) -> Codec {
        match Codec::try_new(tiles) {
            Ok(codec) => codec,
            Err(e) => panic!("{}", e),
        }
    }

    /// Return a new `Codec` for `tiles`.
    /// ## Errors
    /// If there are more than 63 distinct tiles: label 0 is reserved for the
    /// root, and a node can have at most 64 labels.
    pub fn try_new(tiles: &[&str]) -> Result<Codec, Error> {
        let mut codec = Codec {
            encoder: HashMap::new(),
            decoder: vec![String::new()],
            base: vec![ROOT],
            max_tile_chars: 1,
        };
        for tile in tiles {
            if codec.encoder.contains_key(*tile) {
                continue;
            }
            if codec.decoder.len() == MAX_LABELS {
                return Err(Error::TooManyTiles(tiles.len()));
            }
            codec.push(tile, None);
        }
        codec.max_tile_chars = tiles
            .iter()
            .map(|tile| tile.chars().count())
            .max()
            .unwrap_or(1);
        Ok(codec)
    }

    fn push(&mut self, token: &str, base: Option<Label>) -> Label {
        let label = self.decoder.len() as Label;
        self.encoder.insert(String::from(token), label);
        self.decoder.push(String::from(token));
        self.base.push(base.unwrap_or(label));
        label
    }

    /// The number of labels in the codec: the tiles and their variants
    pub fn len(&self) -> usize {
        self.decoder.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the label for a single tile, if it is part of the codec.
    pub fn label(&self, tile: &str) -> Option<Label> {
        self.encoder.get(tile).copied()
    }

    /// Get the tile for a label.
    pub fn tile(&self, label: Label) -> &str {
        self.decoder
            .get(label as usize)
            .map_or("", |token| token.as_str())
    }

    /// The label of the tile that `label` normalizes to.
    pub fn base(&self, label: Label) -> Label {
        self.base.get(label as usize).copied().unwrap_or(ROOT)
    }

    /// Add `token` as a variant of a tile, if it is a single letter with
    /// diacritics that normalizes to a tile. Returns the new label.
    pub(crate) fn add_variant(&mut self, token: &str) -> Option<Label> {
        let mut chars = token.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(letter), None) => letter,
            _ => return None,
        };
        if self.encoder.contains_key(token) {
            return None;
        }
        let normalized = base_char(letter);
        if normalized == letter {
            return None;
        }
        let mut buf = [0u8; 4];
        let base = self.label(normalized.encode_utf8(&mut buf))?;
        if self.decoder.len() == MAX_LABELS {
            log::warn!("No label left for variant '{}' of '{}'", token, normalized);
            return None;
        }
        log::trace!("Variant '{}' of '{}'", token, normalized);
        Some(self.push(token, Some(base)))
    }

    /// Replace every letter of `word` that has no label by the letter it
    /// normalizes to, so `déjà` becomes `deja` for a codec without `é` and `à`.
    pub fn normalize(&self, word: &str) -> String {
        let mut buf = [0u8; 4];
        word.chars()
            .map(|c| {
                if self.encoder.contains_key(c.encode_utf8(&mut buf) as &str) {
                    c
                } else {
                    base_char(c)
                }
            })
            .collect()
    }

    /// The labels that a board cell with `tile` matches.
    /// ## Examples
    /// ```
    /// use lexica_solver::{Codec, Matching};
    /// let codec = Codec::new(&["a", "e", "é"]);
    /// assert_eq!(codec.matching_labels("e", Matching::Strict).len(), 1);
    /// assert_eq!(codec.matching_labels("x", Matching::Normalized).len(), 0);
    /// ```
    pub fn matching_labels(&self, tile: &str, matching: Matching) -> LabelSet {
        match matching {
            Matching::Strict => self.label(tile).into_iter().collect(),
            Matching::Normalized => match self.base_label(tile) {
                Some(base) => (1..self.decoder.len())
                    .map(|label| label as Label)
                    .filter(|&label| self.base(label) == base)
                    .collect(),
                None => LabelSet::new(),
            },
        }
    }

    /// The label of the tile that `tile` normalizes to, if any.
    pub(crate) fn base_label(&self, tile: &str) -> Option<Label> {
        self.label(tile)
            .or_else(|| self.label(&self.normalize(tile)))
            .map(|label| self.base(label))
    }

    /// Split a word in tiles, preferring the longest tile at each position.
    fn tokenize(&self, word: &str) -> Result<Vec<Label>, Error> {
        let chars: Vec<(usize, char)> = word.char_indices().collect();
        let mut labels = Vec::with_capacity(chars.len());
        let mut i = 0;
        while i < chars.len() {
            let start = chars[i].0;
            let longest = self.max_tile_chars.min(chars.len() - i);
            let found = (1..=longest).rev().find_map(|n| {
                let end = chars.get(i + n).map_or(word.len(), |&(pos, _)| pos);
                self.label(&word[start..end]).map(|label| (label, n))
            });
            match found {
                Some((label, n)) => {
                    labels.push(label);
                    i += n;
                }
                None => return Err(Error::EncodeInvalidToken(chars[i].1.to_string())),
            }
        }
        Ok(labels)
    }

    /// Encode string, and return a list of labels.
    /// ## Errors
    /// An error is returned if the string can not be split in tiles of the codec.
    /// ## Examples
    /// ```
    /// use lexica_solver::{Codec, Error};
    /// let codec = Codec::new(&["a", "i", "qu", "t"]);
    /// let labels = codec.encode("quit")?;
    /// assert_eq!(labels, vec![3, 2, 4]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn encode(&self, word: &str) -> Result<Vec<Label>, Error> {
        self.tokenize(word)
    }

    /// Encode `word`, and add the letters with diacritics that are not yet
    /// known as variants of the tiles they normalize to.
    /// ## Errors
    /// If a letter is neither a tile nor a variant of a tile.
    pub(crate) fn encode_with_variants(&mut self, word: &str) -> Result<Vec<Label>, Error> {
        loop {
            match self.tokenize(word) {
                Err(Error::EncodeInvalidToken(token)) => {
                    if self.add_variant(&token).is_none() {
                        return Err(Error::EncodeInvalidToken(token));
                    }
                }
                result => return result,
            }
        }
    }

    /// Encode the normalized `word` to the labels of the base tiles.
    /// ## Errors
    /// If the normalized word can not be split in tiles of the codec.
    /// ## Examples
    /// ```
    /// use lexica_solver::{Codec, Error};
    /// let codec = Codec::new(&["a", "d", "e", "j"]);
    /// assert_eq!(codec.encode_normalized("déjà")?, codec.encode("deja")?);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn encode_normalized(&self, word: &str) -> Result<Vec<Label>, Error> {
        let labels = self.tokenize(&self.normalize(word))?;
        Ok(labels.into_iter().map(|label| self.base(label)).collect())
    }

    /// Decode labels, and return the tiles joined as a string.
    /// ## Examples
    /// ```
    /// use lexica_solver::Codec;
    /// let codec = Codec::new(&["a", "i", "qu", "t"]);
    /// assert_eq!(codec.decode(&[3, 2, 4]), "quit");
    /// ```
    pub fn decode(&self, labels: &[Label]) -> String {
        labels.iter().map(|&label| self.tile(label)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Language;

    #[test]
    fn test_tokenize() {
        let codec = Language::from_code("en_US").unwrap().codec();
        let labels = codec.tokenize("aqua").unwrap();
        assert_eq!(labels.len(), 3);
        assert_eq!(codec.tile(labels[1]), "qu");
    }

    #[test]
    fn test_encode_multibyte() {
        let codec = Language::from_code("sv").unwrap().codec();
        let labels = codec.encode("äta").unwrap();
        assert_eq!(codec.decode(&labels), "äta");
        assert_eq!(labels.len(), 3);
    }

    #[test]
    fn test_root_label() {
        let codec = Codec::new(&["a"]);
        assert_eq!(codec.tile(ROOT), "");
        assert_eq!(codec.label("a"), Some(1));
    }

    #[test]
    #[should_panic(expected = "EncodeInvalidToken")]
    fn test_encode_error() {
        let codec = Language::from_code("en_GB").unwrap().codec();
        // no single `q` tile in English
        codec.encode("qat").unwrap();
    }

    #[test]
    fn test_variants() -> Result<(), Error> {
        let mut codec = Language::from_code("fr_FR")?.codec();
        assert!(matches!(codec.encode("déjà"), Err(Error::EncodeInvalidToken(ref t)) if t == "é"));
        let labels = codec.encode_with_variants("déjà")?;
        assert_eq!(codec.len(), 28);
        assert_eq!(codec.decode(&labels), "déjà");
        let e = codec.label("e").unwrap();
        let e_acute = codec.label("é").unwrap();
        assert_eq!(codec.base(e_acute), e);
        assert_eq!(codec.base(e), e);
        assert_eq!(codec.encode("déjà")?, labels);
        assert_eq!(codec.encode_normalized("déjà")?, codec.encode("deja")?);
        // `è` is not a label yet, but still normalizes to `e`
        assert_eq!(codec.normalize("père"), "pere");
        Ok(())
    }

    #[test]
    fn test_no_variant() -> Result<(), Error> {
        let mut codec = Language::from_code("fr_FR")?.codec();
        // `ß` has no decomposition, `ø` does not normalize to a tile
        assert!(codec.encode_with_variants("straße").is_err());
        assert!(codec.encode_with_variants("smørrebrød").is_err());
        assert_eq!(codec.add_variant("qu"), None);
        assert_eq!(codec.add_variant("e"), None);
        assert_eq!(codec.len(), 26);
        Ok(())
    }

    #[test]
    fn test_tiles_not_normalized() -> Result<(), Error> {
        let codec = Language::from_code("sv")?.codec();
        assert_eq!(codec.normalize("åtta"), "åtta");
        let a = codec.matching_labels("a", Matching::Normalized);
        assert_eq!(a.len(), 1);
        assert!(!a.contains(codec.label("å").unwrap()));
        Ok(())
    }

    #[test]
    fn test_matching_labels() -> Result<(), Error> {
        let mut codec = Language::from_code("fr_FR")?.codec();
        codec.encode_with_variants("élève")?;
        let e = codec.label("e").unwrap();
        let e_acute = codec.label("é").unwrap();
        let e_grave = codec.label("è").unwrap();
        let strict = codec.matching_labels("e", Matching::Strict);
        assert_eq!(strict.iter().collect::<Vec<_>>(), vec![e]);
        for letter in &["e", "é", "ê"] {
            let normalized = codec.matching_labels(letter, Matching::Normalized);
            assert_eq!(normalized.iter().collect::<Vec<_>>(), vec![e, e_acute, e_grave]);
        }
        assert!(codec.matching_labels("ê", Matching::Strict).is_empty());
        Ok(())
    }

    #[test]
    fn test_too_many_tiles() {
        let tiles: Vec<String> = (0..64).map(|i| format!("t{}", i)).collect();
        let tiles: Vec<&str> = tiles.iter().map(String::as_str).collect();
        assert_eq!(Codec::try_new(&tiles[..63]).unwrap().len(), 63);
        assert!(matches!(
            Codec::try_new(&tiles),
            Err(Error::TooManyTiles(64))
        ));
        // duplicates take no label
        let mut repeated = tiles[..63].to_vec();
        repeated.push("t0");
        assert_eq!(Codec::try_new(&repeated).unwrap().len(), 63);
    }

    #[test]
    #[should_panic(expected = "Too many tiles")]
    fn test_new_too_many_tiles() {
        let tiles: Vec<String> = (0..100).map(|i| format!("t{}", i)).collect();
        let tiles: Vec<&str> = tiles.iter().map(String::as_str).collect();
        Codec::new(&tiles);
    }
}
