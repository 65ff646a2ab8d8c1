use crate::codec::Codec;
use crate::error::Error;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;

const ASCII_LC: [&str; 26] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s",
    "t", "u", "v", "w", "x", "y", "z",
];

/// English has no single `q` tile, it is always played as `qu`.
const ENGLISH_TILES: [&str; 26] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "qu", "r",
    "s", "t", "u", "v", "w", "x", "y", "z",
];

const ENGLISH_SUFFIXES: &[(&str, &str)] = &[("q", "qu")];

const GERMAN_TILES: [&str; 29] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s",
    "t", "u", "v", "w", "x", "y", "z", "ä", "ö", "ü",
];

const SWEDISH_TILES: [&str; 31] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r", "s",
    "t", "u", "v", "w", "x", "y", "z", "å", "ä", "ö", "é", "-",
];

const SPANISH_TILES: [&str; 27] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "ñ", "o", "p", "q", "r",
    "s", "t", "u", "v", "w", "x", "y", "z",
];

/// The table of supported languages, one record per language.
const TABLE: &[Language] = &[
    Language::new("en_US", "English (US)", &ENGLISH_TILES, ENGLISH_SUFFIXES),
    Language::new("en_GB", "English (GB)", &ENGLISH_TILES, ENGLISH_SUFFIXES),
    Language::new("de_DE", "German", &GERMAN_TILES, &[]),
    Language::new("es", "Spanish", &SPANISH_TILES, &[]),
    Language::new("fr_FR", "French", &ASCII_LC, &[]),
    Language::new("it", "Italian", &ASCII_LC, &[]),
    Language::new("nl", "Dutch", &ASCII_LC, &[]),
    Language::new("sv", "Swedish", &SWEDISH_TILES, &[]),
];

lazy_static! {
    static ref LANGUAGES: HashMap<&'static str, &'static Language> =
        TABLE.iter().map(|language| (language.code, language)).collect();
}

/// A supported language: the tiles that can appear on a board, and the
/// suffixes that are always attached to some letters.
///
/// The data files for a language (dictionary and letter distribution) are not
/// part of the record, the host supplies them as [`ByteSource`](crate::ByteSource)s.
#[derive(Debug, PartialEq, Eq)]
pub struct Language {
    code: &'static str,
    name: &'static str,
    tiles: &'static [&'static str],
    suffixes: &'static [(&'static str, &'static str)],
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

impl Language {
    const fn new(
        code: &'static str,
        name: &'static str,
        tiles: &'static [&'static str],
        suffixes: &'static [(&'static str, &'static str)],
    ) -> Language {
        Language {
            code,
            name,
            tiles,
            suffixes,
        }
    }

    /// Look up a language by its code, for example `en_US` or `sv`.
    /// ## Errors
    /// If the language is not supported.
    /// ## Examples
    /// ```
    /// # use lexica_solver::{Language, Error};
    /// let language = Language::from_code("en_GB")?;
    /// assert!(language.contains_tile("qu"));
    /// assert!(!language.contains_tile("q"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_code(code: &str) -> Result<&'static Language, Error> {
        LANGUAGES
            .get(code)
            .copied()
            .ok_or_else(|| Error::UnknownLanguage(String::from(code)))
    }

    /// Iterate over all supported languages, in table order.
    pub fn all() -> impl Iterator<Item = &'static Language> {
        TABLE.iter()
    }

    /// The stable code of this language
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The tiles that can legally appear on a board in this language
    pub fn tiles(&self) -> &'static [&'static str] {
        self.tiles
    }

    /// Check if `tile` is a legal tile in this language.
    pub fn contains_tile(&self, tile: &str) -> bool {
        self.tiles.contains(&tile)
    }

    /// Replace a letter that never appears on its own by the tile it is always
    /// part of. In English a `q` becomes `qu`, other letters are unchanged.
    pub fn apply_mandatory_suffix(&self, letter: &str) -> String {
        self.suffixes
            .iter()
            .find(|(bare, _)| *bare == letter)
            .map_or_else(|| String::from(letter), |(_, tile)| String::from(*tile))
    }

    /// Return a new codec for the tiles of this language.
    pub fn codec(&self) -> Codec {
        Codec::new(self.tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() -> Result<(), Error> {
        let language = Language::from_code("sv")?;
        assert_eq!(language.code(), "sv");
        assert_eq!(language.tiles().len(), 31);
        assert!(language.contains_tile("å"));
        Ok(())
    }

    #[test]
    #[should_panic(expected = "UnknownLanguage")]
    fn test_unknown_language() {
        Language::from_code("tlh").unwrap();
    }

    #[test]
    fn test_mandatory_suffix() -> Result<(), Error> {
        let english = Language::from_code("en_US")?;
        assert_eq!(english.apply_mandatory_suffix("q"), "qu");
        assert_eq!(english.apply_mandatory_suffix("e"), "e");
        let dutch = Language::from_code("nl")?;
        assert_eq!(dutch.apply_mandatory_suffix("q"), "q");
        Ok(())
    }

    #[test]
    fn test_table() {
        for language in Language::all() {
            assert_eq!(Language::from_code(language.code()).unwrap(), language);
            assert!(Codec::try_new(language.tiles()).is_ok());
        }
    }
}
