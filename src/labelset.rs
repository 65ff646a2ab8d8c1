#[cfg(feature = "bitintr")]
use bitintr::{Bzhi, Popcnt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;

/// Code 1..63 for a tile of a language, see [`Codec`](crate::Codec)
pub type Label = u8;

#[cfg(feature = "bitintr")]
#[inline(always)]
fn count_ones(n: u64) -> u32 {
    n.popcnt() as u32
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn count_ones(n: u64) -> u32 {
    n.count_ones()
}

#[cfg(feature = "bitintr")]
#[inline(always)]
fn zero_highbits(n: u64, v: u32) -> u64 {
    n.bzhi(v)
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn zero_highbits(n: u64, v: u32) -> u64 {
    n & ((1 << v) - 1)
}

/// A bitset representing the labels of the children of a trie node
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelSet(u64);

impl LabelSet {
    pub fn new() -> LabelSet {
        LabelSet(0)
    }

    pub fn contains(&self, label: Label) -> bool {
        label < 64 && self.0 & (1 << label) != 0
    }

    pub fn insert(&mut self, label: Label) -> bool {
        assert!(label < 64);
        let r = (self.0 & (1 << label)) != 0;
        self.0 |= 1 << label;
        r
    }

    pub fn len(&self) -> usize {
        count_ones(self.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> IteratorLabelSet {
        IteratorLabelSet::new(self.0)
    }

    /// Return the rank of `label` among the labels present, if present.
    pub fn index_of(&self, label: Label) -> Option<usize> {
        if !self.contains(label) {
            return None;
        }
        Some(count_ones(zero_highbits(self.0, u32::from(label))) as usize)
    }
}

impl fmt::Debug for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = self
            .iter()
            .map(|label| format!("{}", label))
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{{{}}}", s)
    }
}

pub struct IteratorLabelSet {
    value: u64,
}

impl IteratorLabelSet {
    pub fn new(value: u64) -> IteratorLabelSet {
        IteratorLabelSet { value }
    }
}

impl Iterator for IteratorLabelSet {
    type Item = Label;
    fn next(&mut self) -> Option<Label> {
        if self.value == 0 {
            return None;
        }
        let i = self.value.trailing_zeros();
        self.value &= self.value - 1;
        Some(i as Label)
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut c = LabelSet::new();
        for i in iter {
            c.insert(i);
        }
        c
    }
}

impl From<Vec<Label>> for LabelSet {
    fn from(v: Vec<Label>) -> Self {
        v.into_iter().collect()
    }
}
