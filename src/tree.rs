// src/tree.rs
//! Encoding-tree construction via a min-priority merge.
//!
//! One leaf per frequency-table entry; repeatedly merge the two
//! lightest nodes (first popped → `zero` child, second → `one` child)
//! until one root remains. Ties break on insertion sequence, with the
//! leaves seeded in ascending symbol order so a build is reproducible.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::HuffError;
use crate::freq::FreqTable;
use crate::symbol::{Symbol, SYM_EOF};

#[derive(Debug, Clone)]
pub enum Node {
    Leaf {
        symbol: Symbol,
        weight: u64,
    },
    Internal {
        weight: u64,
        zero: Box<Node>,
        one: Box<Node>,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }
}

// Min-heap entry: lightest weight first, earliest insertion first on
// equal weights. BinaryHeap is a max-heap, so the ordering is reversed.
struct HeapItem {
    weight: u64,
    seq: usize,
    node: Node,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.weight, other.seq).cmp(&(self.weight, self.seq))
    }
}

/// Build the encoding tree for a frequency table.
///
/// The table must contain the end-of-stream marker (the counter and the
/// header reader both guarantee it). A single-entry table yields a lone
/// leaf root — valid, the empty codeword then denotes the marker.
pub fn build_tree(freq: &FreqTable) -> Result<Node, HuffError> {
    if !freq.contains_key(&SYM_EOF) {
        return Err(HuffError::MissingEof);
    }

    let mut entries: Vec<(Symbol, u64)> = freq.iter().map(|(&s, &w)| (s, w)).collect();
    entries.sort_by_key(|&(s, _)| s);

    let mut heap: BinaryHeap<HeapItem> = BinaryHeap::with_capacity(entries.len());
    let mut seq = 0usize;
    for (symbol, weight) in entries {
        heap.push(HeapItem {
            weight,
            seq,
            node: Node::Leaf { symbol, weight },
        });
        seq += 1;
    }

    while heap.len() > 1 {
        let zero = heap.pop().expect("heap len checked");
        let one = heap.pop().expect("heap len checked");
        let weight = zero.weight + one.weight;
        heap.push(HeapItem {
            weight,
            seq,
            node: Node::Internal {
                weight,
                zero: Box::new(zero.node),
                one: Box::new(one.node),
            },
        });
        seq += 1;
    }

    heap.pop().map(|item| item.node).ok_or(HuffError::MissingEof)
}
