//! Compact node sets.
//!
//! [`NodeSet`] is a bit set over [`NodeId`]s backed by a vector of `u64` words.
//! It is used for adjacency rows, active-node marks, separators and atoms, so
//! membership tests are O(1) and iteration always yields nodes in increasing id
//! order.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::types::NodeId;

/// A set of nodes, one bit per arena slot.
///
/// The set grows automatically when a node beyond the current capacity is
/// inserted. Two sets compare equal when they contain the same nodes, regardless
/// of their capacities.
#[derive(Clone, Default)]
pub struct NodeSet {
    /// Storage: each u64 holds 64 nodes
    words: Vec<u64>,
    /// Number of members (cached for O(1) len())
    count: usize,
}

impl NodeSet {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates an empty set able to hold `capacity` nodes without growing.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(Self::BITS_PER_WORD)],
            count: 0,
        }
    }

    /// Creates an empty set with no pre-allocated capacity.
    pub fn empty() -> Self {
        Self {
            words: Vec::new(),
            count: 0,
        }
    }

    /// Returns the number of nodes in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the set has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    fn word_and_bit(node: NodeId) -> (usize, usize) {
        let index = node.index();
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    /// Returns true if `node` is a member.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(node);
        match self.words.get(word_idx) {
            Some(word) => (word >> bit_idx) & 1 != 0,
            None => false,
        }
    }

    /// Adds `node`. Returns true if it was not already present.
    #[inline]
    pub fn insert(&mut self, node: NodeId) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(node);
        if word_idx >= self.words.len() {
            self.words.resize(word_idx + 1, 0);
        }

        let mask = 1u64 << bit_idx;
        let was_clear = self.words[word_idx] & mask == 0;
        if was_clear {
            self.words[word_idx] |= mask;
            self.count += 1;
        }
        was_clear
    }

    /// Removes `node`. Returns true if it was present.
    #[inline]
    pub fn remove(&mut self, node: NodeId) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(node);
        let Some(word) = self.words.get_mut(word_idx) else {
            return false;
        };

        let mask = 1u64 << bit_idx;
        let was_set = *word & mask != 0;
        if was_set {
            *word &= !mask;
            self.count -= 1;
        }
        was_set
    }

    /// Returns the member with the smallest id.
    pub fn first(&self) -> Option<NodeId> {
        self.iter().next()
    }

    /// Returns the member with the largest id.
    pub fn last(&self) -> Option<NodeId> {
        self.words
            .iter()
            .enumerate()
            .rev()
            .find(|(_, &word)| word != 0)
            .map(|(word_idx, &word)| {
                let bit_idx = Self::BITS_PER_WORD - 1 - word.leading_zeros() as usize;
                NodeId::new(word_idx * Self::BITS_PER_WORD + bit_idx)
            })
    }

    /// Removes and returns the member with the smallest id.
    pub fn pop_first(&mut self) -> Option<NodeId> {
        let node = self.first()?;
        self.remove(node);
        Some(node)
    }

    /// Removes all members.
    pub fn clear(&mut self) {
        self.words.fill(0);
        self.count = 0;
    }

    /// Adds every member of `other`.
    pub fn union_with(&mut self, other: &NodeSet) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for (word, &theirs) in self.words.iter_mut().zip(other.words.iter()) {
            *word |= theirs;
        }
        self.recount();
    }

    /// Removes every member of `other`.
    pub fn difference_with(&mut self, other: &NodeSet) {
        for (word, &theirs) in self.words.iter_mut().zip(other.words.iter()) {
            *word &= !theirs;
        }
        self.recount();
    }

    /// Keeps only the members also present in `other`.
    pub fn intersect_with(&mut self, other: &NodeSet) {
        for (i, word) in self.words.iter_mut().enumerate() {
            *word &= other.words.get(i).copied().unwrap_or(0);
        }
        self.recount();
    }

    /// Returns true if every member of `self` is in `other`.
    pub fn is_subset(&self, other: &NodeSet) -> bool {
        self.words
            .iter()
            .enumerate()
            .all(|(i, &word)| word & !other.words.get(i).copied().unwrap_or(0) == 0)
    }

    /// Returns true if the two sets share no member.
    pub fn is_disjoint(&self, other: &NodeSet) -> bool {
        self.words.iter().zip(other.words.iter()).all(|(&a, &b)| a & b == 0)
    }

    /// Returns an iterator over the members in increasing id order.
    pub fn iter(&self) -> NodeSetIter<'_> {
        NodeSetIter {
            words: &self.words,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }

    fn recount(&mut self) {
        self.count = self.words.iter().map(|w| w.count_ones() as usize).sum();
    }

    /// Words up to (and including) the last non-zero one.
    fn significant_words(&self) -> &[u64] {
        let len = self.words.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
        &self.words[..len]
    }
}

impl PartialEq for NodeSet {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.significant_words() == other.significant_words()
    }
}

impl Eq for NodeSet {}

impl Hash for NodeSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_words().hash(state);
    }
}

impl fmt::Debug for NodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|n| n.index())).finish()
    }
}

impl FromIterator<NodeId> for NodeSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        let mut set = NodeSet::empty();
        set.extend(iter);
        set
    }
}

impl Extend<NodeId> for NodeSet {
    fn extend<I: IntoIterator<Item = NodeId>>(&mut self, iter: I) {
        for node in iter {
            self.insert(node);
        }
    }
}

impl<'a> IntoIterator for &'a NodeSet {
    type Item = NodeId;
    type IntoIter = NodeSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the members of a [`NodeSet`].
pub struct NodeSetIter<'a> {
    words: &'a [u64],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for NodeSetIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                return Some(NodeId::new(self.word_idx * NodeSet::BITS_PER_WORD + bit_idx));
            }

            self.word_idx += 1;
            if self.word_idx >= self.words.len() {
                return None;
            }
            self.current_word = self.words[self.word_idx];
        }
    }
}
