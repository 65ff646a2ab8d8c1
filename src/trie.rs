mod format;
mod trievec;

use self::format::{Decoder, KeepFilter};
use self::trievec::TrieVec;
use crate::codec::{Matching, MAX_LABELS, ROOT};
use crate::labelset::{Label, LabelSet};
use crate::{Codec, Error, Language, LetterGrid};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::io::{Read, Write};

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A trie data structure that holds the words of a dictionary.
///
/// The nodes are stored in breadth first order in one vector, and refer to
/// their children by index. The children of a node are stored next to each
/// other, ordered by label. The trie is read-only after it is built, and can
/// be shared between threads.
pub struct Trie {
    /// List of nodes in trie. Each node is a tuple with the index of the first
    /// child node, and a `LabelSet` with the labels of all child nodes.
    nodes: Vec<(u32, LabelSet)>,
    /// List of labels.
    labels: Vec<Label>,
    /// List indicating terminal nodes
    terminal: Vec<bool>,
    /// The number of words in the trie
    word_count: usize,
    /// Code of the language of the words
    language: String,
    /// Encode words to/from labels
    codec: Codec,
}

impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Trie: {} words, {} nodes for '{}'>",
            self.word_count,
            self.node_count(),
            self.language
        )
    }
}

impl Trie {
    /// Lay out the nodes of `trie` in breadth first order.
    fn from_builder(trie: TrieVec<Label>) -> Trie {
        let mut nodes: Vec<(u32, LabelSet)> = Vec::new();
        let mut labels: Vec<Label> = Vec::new();
        let mut terminal: Vec<bool> = Vec::new();
        let mut word_count = 0;

        let mut queue = VecDeque::new();
        queue.push_back((&trie, 0, ROOT));
        while let Some((node, parent, label)) = queue.pop_front() {
            let i = nodes.len();
            let mut ls = LabelSet::new();
            for (child_label, t) in node.children() {
                ls.insert(*child_label);
                queue.push_back((t, i, *child_label));
            }
            if node.terminal() {
                word_count += 1;
            }
            nodes.push((0, ls));
            terminal.push(node.terminal());
            labels.push(label);
            // the first child of a parent is visited before its siblings
            if i > 0 && nodes[parent].0 == 0 {
                nodes[parent].0 = i as u32;
            }
        }
        Trie {
            nodes,
            labels,
            terminal,
            word_count,
            language: String::new(),
            codec: Codec::default(),
        }
    }
}

pub struct IteratorChildren<'a> {
    trie: &'a Trie,
    range: std::ops::Range<usize>,
}

impl<'a> Iterator for IteratorChildren<'a> {
    type Item = (Label, usize);
    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|i| (self.trie.labels[i], i))
    }
}

impl Trie {
    fn with_language(trie: TrieVec<Label>, language: &Language, codec: Codec) -> Trie {
        let mut trie = Trie::from_builder(trie);
        trie.language = String::from(language.code());
        trie.codec = codec;
        trie
    }

    /// Build a trie from a list of words. Words are converted to lower case
    /// and split in the tiles of `language`. Letters with diacritics that
    /// normalize to a tile are kept as they are, as variants of that tile.
    /// ## Errors
    /// If a word can not be split in tiles of the language and their variants.
    /// ## Examples
    /// ```
    /// # use lexica_solver::{Language, Matching, Trie, Error};
    /// let trie = Trie::from_words(&["quit", "aqua"], Language::from_code("en_US")?)?;
    /// assert!(trie.is_word("quit"));
    /// assert!(trie.has_prefix("aq"));
    /// assert!(!trie.is_word("aq"));
    ///
    /// let trie = Trie::from_words(&["déjà"], Language::from_code("fr_FR")?)?;
    /// assert!(trie.is_word("déjà"));
    /// assert!(trie.is_word_matching("deja", Matching::Normalized));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S], language: &Language) -> Result<Trie, Error> {
        let mut codec = language.codec();
        let mut builder = TrieVec::new();
        for word in words {
            builder.insert(codec.encode_with_variants(&word.as_ref().to_lowercase())?);
        }
        Ok(Trie::with_language(builder, language, codec))
    }

    /// Deserialize a binary dictionary for `language`.
    ///
    /// The tiles of the language are kept, and the letters with diacritics
    /// that normalize to a tile. Words that contain other characters are
    /// dropped while reading, without decoding them. So are words longer than
    /// the largest board.
    /// ## Errors
    /// - If `source` can not be read
    /// - If the data is truncated or corrupt
    pub fn deserialize<R: Read>(source: R, language: &Language) -> Result<Trie, Error> {
        Trie::decode(source, language, |_| KeepFilter::Language)
    }

    /// Deserialize a binary dictionary for `language`, keeping only the words
    /// that could possibly be found on `grid`.
    ///
    /// A word is kept if its first letter is on the grid, and each pair of
    /// consecutive letters is found in adjacent cells somewhere on the grid.
    /// With [`Matching::Normalized`] letters are compared after normalization,
    /// so an `e` on the grid keeps the words with `é`.
    /// The result is a much smaller trie, good for solving only this grid.
    /// ## Errors
    /// - If `source` can not be read
    /// - If the data is truncated or corrupt
    pub fn deserialize_for_grid<R: Read>(
        source: R,
        language: &Language,
        grid: &LetterGrid,
        matching: Matching,
    ) -> Result<Trie, Error> {
        Trie::decode(source, language, |codec| {
            for letter in grid.iter() {
                codec.add_variant(letter);
            }
            let cell_labels: Vec<Option<Label>> = grid
                .iter()
                .map(|letter| match matching {
                    Matching::Strict => codec.label(letter),
                    Matching::Normalized => codec.base_label(letter),
                })
                .collect();
            let mut on_grid = LabelSet::new();
            let mut transitions = vec![LabelSet::new(); MAX_LABELS];
            for (i, from) in cell_labels.iter().enumerate() {
                if let Some(from) = *from {
                    on_grid.insert(from);
                    for &j in &grid.neighbors_unchecked(i) {
                        if let Some(to) = cell_labels[j] {
                            transitions[from as usize].insert(to);
                        }
                    }
                }
            }
            KeepFilter::Grid {
                on_grid,
                transitions,
                matching,
            }
        })
    }

    fn decode<R: Read, F>(source: R, language: &Language, filter: F) -> Result<Trie, Error>
    where
        F: FnOnce(&mut Codec) -> KeepFilter,
    {
        let mut codec = language.codec();
        let mut builder = TrieVec::new();
        let filter = filter(&mut codec);
        Decoder::new(source, &mut codec, filter).decode(&mut builder)?;
        let trie = Trie::with_language(builder, language, codec);
        log::debug!("Loaded {}", trie);
        Ok(trie)
    }

    /// Write the trie in the binary dictionary format, that can be read back
    /// with [`deserialize`](Trie::deserialize).
    /// ## Errors
    /// If writing fails.
    pub fn write<W: Write>(&self, mut output: W) -> Result<(), Error> {
        let mut bytes = Vec::new();
        format::encode_node(self, 0, &mut bytes);
        output.write_all(&bytes)?;
        Ok(())
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Deserialize a trie from a bincoded snapshot made with
    /// [`serialize_snapshot`](Trie::serialize_snapshot).
    /// ## Errors
    /// If the snapshot can not be read or decoded.
    pub fn deserialize_snapshot<R: Read>(source: R) -> Result<Trie, Error> {
        bincode::deserialize_from(source).map_err(|e| Error::SnapshotError(e.to_string()))
    }

    #[cfg(all(feature = "serde", feature = "bincode"))]
    /// Write a bincoded snapshot of the trie, which loads faster than the
    /// binary dictionary format.
    /// ## Errors
    /// If the snapshot can not be written.
    pub fn serialize_snapshot<W: Write>(&self, output: W) -> Result<(), Error> {
        bincode::serialize_into(output, self).map_err(|e| Error::SnapshotError(e.to_string()))
    }

    /// The index of the root node
    pub fn root(&self) -> usize {
        0
    }

    /// The code of the language of the trie
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The codec to translate between tiles and labels
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// The number of words in the trie
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// The number of nodes in the trie, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Return true if a word ends at node `i`.
    pub fn is_terminal(&self, i: usize) -> bool {
        self.terminal[i]
    }

    /// Return true if node `i` has no children.
    pub fn is_tail(&self, i: usize) -> bool {
        self.nodes[i].1.is_empty()
    }

    /// Iterate over the (label, index) of the children of node `i`.
    pub fn iter_children(&self, i: usize) -> IteratorChildren {
        let (start, labels) = &self.nodes[i];
        let s = *start as usize;
        IteratorChildren {
            trie: self,
            range: s..s + labels.len(),
        }
    }

    /// Get the index of child with `label` for node `i` if present.
    #[inline]
    pub fn get(&self, i: usize, label: Label) -> Option<usize> {
        let (start, labels) = &self.nodes[i];
        labels.index_of(label).map(|index| *start as usize + index)
    }

    /// Follow `labels` from the root, and return the node reached.
    pub fn find<K: AsRef<[Label]>>(&self, labels: K) -> Option<usize> {
        labels
            .as_ref()
            .iter()
            .try_fold(self.root(), |i, &label| self.get(i, label))
    }

    /// Returns true if at least one word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.codec
            .encode(prefix)
            .ok()
            .and_then(|labels| self.find(labels))
            .is_some()
    }

    /// Returns true if `word` is in the trie, with exactly the same diacritics.
    pub fn is_word(&self, word: &str) -> bool {
        self.codec
            .encode(word)
            .ok()
            .and_then(|labels| self.find(labels))
            .map_or(false, |i| self.terminal[i])
    }

    /// Returns true if `word` is in the trie. With [`Matching::Normalized`]
    /// the letters of `word` and of the trie are compared after normalization,
    /// so `deja` and `déja` both match the word `déjà`.
    pub fn is_word_matching(&self, word: &str, matching: Matching) -> bool {
        match matching {
            Matching::Strict => self.is_word(word),
            Matching::Normalized => self
                .codec
                .encode_normalized(word)
                .map_or(false, |bases| self.has_normalized(self.root(), &bases)),
        }
    }

    fn has_normalized(&self, i: usize, bases: &[Label]) -> bool {
        match bases.split_first() {
            None => self.terminal[i],
            Some((&base, rest)) => self.iter_children(i).any(|(label, child)| {
                self.codec.base(label) == base && self.has_normalized(child, rest)
            }),
        }
    }

    /// All words in the trie, in alphabetical order of labels.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        let mut prefix = Vec::new();
        self.collect_words(self.root(), &mut prefix, &mut words);
        words
    }

    fn collect_words(&self, i: usize, prefix: &mut Vec<Label>, words: &mut Vec<String>) {
        if self.terminal[i] {
            words.push(self.codec.decode(prefix));
        }
        for (label, child) in self.iter_children(i) {
            prefix.push(label);
            self.collect_words(child, prefix, words);
            prefix.pop();
        }
    }
}
