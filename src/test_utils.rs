use crate::{Error, Language, LetterGrid, Trie};

pub(crate) const TEST_DISTRIBUTION: &str = "
a 100 20 1 1
b 4
c 2 1
d 5 4 3 2 1
e 1 1 1 1
";

pub(crate) const WORDS: &[&str] = &[
    "at", "ate", "bug", "bugs", "cat", "cats", "eat", "hoe", "quit", "set", "tea", "ten", "toe",
    "zebra", "aqua",
];

pub(crate) const TEST_GRID: &[&str] = &[
    "c a t s", //
    "h o e d", //
    "qu i x n", //
    "b u g s",
];

pub(crate) fn english() -> &'static Language {
    Language::from_code("en_US").unwrap()
}

pub(crate) fn test_grid() -> LetterGrid {
    LetterGrid::from_strings(TEST_GRID).unwrap()
}

/// The binary dictionary for `words`, as the trie builder writes it.
pub(crate) fn dictionary_bytes(words: &[&str]) -> Result<Vec<u8>, Error> {
    dictionary_bytes_for(words, english())
}

pub(crate) fn dictionary_bytes_for(words: &[&str], language: &Language) -> Result<Vec<u8>, Error> {
    let trie = Trie::from_words(words, language)?;
    let mut bytes = Vec::new();
    trie.write(&mut bytes)?;
    Ok(bytes)
}

pub(crate) fn test_trie() -> Trie {
    let bytes = dictionary_bytes(WORDS).unwrap();
    Trie::deserialize(bytes.as_slice(), english()).unwrap()
}
