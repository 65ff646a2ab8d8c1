/// Naive trie supporting dynamic insertion, used to build a [`Trie`](crate::Trie).
///
/// Children are kept sorted by key, so the breadth first order of the nodes
/// matches the order of labels in a [`LabelSet`](crate::LabelSet).
/// The code for `TrieVec` is borrowed from the [`louds`](https://github.com/ajalab/louds) crate.
#[derive(Debug, Default)]
pub(crate) struct TrieVec<T> {
    children: Vec<(T, Box<TrieVec<T>>)>,
    terminal: bool,
}

impl<T> TrieVec<T> {
    pub fn new() -> TrieVec<T> {
        TrieVec {
            children: Vec::new(),
            terminal: false,
        }
    }
    pub fn children(&self) -> &Vec<(T, Box<Self>)> {
        &self.children
    }
    pub fn terminal(&self) -> bool {
        self.terminal
    }
    pub fn set_terminal(&mut self, terminal: bool) {
        self.terminal = terminal;
    }
}

impl<T: Ord + Clone> TrieVec<T> {
    /// Return the child with key `c`, inserting an empty child if not present.
    pub fn child_mut(&mut self, c: &T) -> &mut TrieVec<T> {
        let pos = match self.children.binary_search_by(|(c2, _)| c2.cmp(c)) {
            Ok(pos) => pos,
            Err(pos) => {
                self.children
                    .insert(pos, (c.clone(), Box::new(TrieVec::new())));
                pos
            }
        };
        &mut self.children[pos].1
    }

    pub fn insert<K: AsRef<[T]>>(&mut self, key: K) {
        let mut t = self;
        for c in key.as_ref() {
            t = t.child_mut(c);
        }
        t.terminal = true;
    }
}
