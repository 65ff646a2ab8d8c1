//! The binary dictionary format.
//!
//! A dictionary is one serialized trie node, the root. All integers are big-endian.
//! ```text
//! node      := size:u32 is_word:u8 count:u16 child_key{count} node{count}
//! child_key := len:u8 utf8[len]
//! ```
//! `size` is the number of bytes of the node after the size field, so a child
//! that is not wanted can be skipped without decoding it.
//! Words longer than [`MAX_DEPTH`] tiles can never be found on a board, so
//! their nodes are skipped. This also bounds the recursion of the decoder.
use super::trievec::TrieVec;
use crate::codec::{Matching, ROOT};
use crate::error::Error;
use crate::labelset::{Label, LabelSet};
use crate::Codec;
use std::io::{self, Read};

/// The longest word that fits on the largest board
pub(super) const MAX_DEPTH: usize = 36;

/// Decides which children of a node are kept while decoding.
pub(super) enum KeepFilter {
    /// Keep every tile of the language, and its variants
    Language,
    /// Keep first letters that are on the grid, and transitions between
    /// letters that are adjacent somewhere on the grid. With
    /// [`Matching::Normalized`] the labels are compared by their base tile.
    Grid {
        on_grid: LabelSet,
        transitions: Vec<LabelSet>,
        matching: Matching,
    },
}

impl KeepFilter {
    fn keeps(&self, codec: &Codec, parent: Label, label: Label) -> bool {
        match self {
            KeepFilter::Language => true,
            KeepFilter::Grid {
                on_grid,
                transitions,
                matching,
            } => {
                let (parent, label) = match matching {
                    Matching::Strict => (parent, label),
                    Matching::Normalized => (codec.base(parent), codec.base(label)),
                };
                if parent == ROOT {
                    on_grid.contains(label)
                } else {
                    transitions
                        .get(parent as usize)
                        .map_or(false, |next| next.contains(label))
                }
            }
        }
    }
}

fn corrupt(e: io::Error) -> Error {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        Error::CorruptDictionary(String::from("unexpected end of data"))
    } else {
        Error::Io(e)
    }
}

fn overrun(size: u64, consumed: u64) -> Error {
    Error::CorruptDictionary(format!(
        "node content ({} bytes) exceeds its size {}",
        consumed, size
    ))
}

pub(super) struct Decoder<'a, R: Read> {
    input: R,
    codec: &'a mut Codec,
    filter: KeepFilter,
}

impl<'a, R: Read> Decoder<'a, R> {
    pub(super) fn new(input: R, codec: &'a mut Codec, filter: KeepFilter) -> Self {
        Decoder {
            input,
            codec,
            filter,
        }
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        let mut buf = [0u8; N];
        self.input.read_exact(&mut buf).map_err(corrupt)?;
        Ok(buf)
    }

    fn read_u32(&mut self) -> Result<u32, Error> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    fn read_u16(&mut self) -> Result<u16, Error> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    fn read_u8(&mut self) -> Result<u8, Error> {
        Ok(self.read_array::<1>()?[0])
    }

    fn skip(&mut self, size: u32) -> Result<(), Error> {
        let skipped = io::copy(&mut (&mut self.input).take(u64::from(size)), &mut io::sink())?;
        if skipped < u64::from(size) {
            return Err(corrupt(io::ErrorKind::UnexpectedEof.into()));
        }
        Ok(())
    }

    /// Decode the root node into `root`. The root must be followed by the
    /// end of the data.
    pub(super) fn decode(mut self, root: &mut TrieVec<Label>) -> Result<(), Error> {
        let size = self.read_u32()?;
        self.read_node(size, ROOT, 0, root)?;
        let mut rest = [0u8; 1];
        if self.input.read(&mut rest)? > 0 {
            return Err(Error::CorruptDictionary(String::from(
                "unexpected data after the root node",
            )));
        }
        Ok(())
    }

    /// Read the body of a node of `size` bytes at `depth`, the size field is
    /// already read.
    fn read_node(
        &mut self,
        size: u32,
        label: Label,
        depth: usize,
        node: &mut TrieVec<Label>,
    ) -> Result<(), Error> {
        let size = u64::from(size);
        let mut consumed: u64 = 3;
        if consumed > size {
            return Err(overrun(size, consumed));
        }
        node.set_terminal(node.terminal() || self.read_u8()? != 0);
        let count = self.read_u16()?;
        let mut keep = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let len = self.read_u8()?;
            consumed += 1 + u64::from(len);
            if consumed > size {
                return Err(overrun(size, consumed));
            }
            let mut bytes = vec![0u8; len as usize];
            self.input.read_exact(&mut bytes).map_err(corrupt)?;
            let key = String::from_utf8(bytes)
                .map_err(|e| Error::CorruptDictionary(format!("invalid child key: {}", e)))?;
            let child = match self.codec.label(&key) {
                Some(child) => Some(child),
                None => self.codec.add_variant(&key),
            };
            keep.push(child.filter(|&child| {
                depth < MAX_DEPTH && self.filter.keeps(&*self.codec, label, child)
            }));
        }
        for child in keep {
            let child_size = self.read_u32()?;
            consumed += 4 + u64::from(child_size);
            if consumed > size {
                return Err(overrun(size, consumed));
            }
            match child {
                Some(child) => {
                    self.read_node(child_size, child, depth + 1, node.child_mut(&child))?
                }
                None => self.skip(child_size)?,
            }
        }
        if consumed != size {
            return Err(Error::CorruptDictionary(format!(
                "node size {} does not match its content ({} bytes)",
                size, consumed
            )));
        }
        Ok(())
    }
}

/// Append node `node` of `trie` and all its children to `out`.
pub(super) fn encode_node(trie: &super::Trie, node: usize, out: &mut Vec<u8>) {
    let start = out.len();
    out.extend_from_slice(&[0; 4]);
    out.push(trie.is_terminal(node) as u8);
    let children: Vec<(Label, usize)> = trie.iter_children(node).collect();
    out.extend_from_slice(&(children.len() as u16).to_be_bytes());
    for &(label, _) in &children {
        let key = trie.codec().tile(label).as_bytes();
        out.push(key.len() as u8);
        out.extend_from_slice(key);
    }
    for &(_, child) in &children {
        encode_node(trie, child, out);
    }
    let size = (out.len() - start - 4) as u32;
    out[start..start + 4].copy_from_slice(&size.to_be_bytes());
}
