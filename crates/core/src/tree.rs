//! Code tree construction by deterministic greedy merging.
//!
//! The builder turns a frequency table into a binary tree whose leaves are
//! exactly the symbols with nonzero count. At every step the two smallest
//! nodes under a total order are merged; because the order is total, the
//! merge sequence (and therefore the final tree shape) is fully determined
//! by the input.
//!
//! # Total Order
//!
//! Nodes compare by, in priority:
//! 1. lower weight first
//! 2. equal weight: a leaf sorts before an inner node
//! 3. both leaves: lower symbol first
//! 4. both inner: the node created earlier sorts first
//!
//! The same order decides both which pair to merge and which child goes
//! left (the smaller of the pair).
//!
//! # Invariants
//! - An inner node's weight equals the sum of its children's weights
//! - Creation-order numbers are unique across all nodes of one build
//! - The working set never exceeds 256 nodes, so memory is bounded
//!   regardless of input length

use crate::freq::FrequencyTable;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A node of the code tree.
///
/// Either a leaf carrying one symbol, or an inner node exclusively owning
/// its two children. `order` is the creation-order stamp: a counter shared
/// by leaves and inner nodes, assigned at the moment each node is created.
#[derive(Debug, Clone)]
pub enum Node {
    Leaf {
        symbol: u8,
        weight: u64,
        order: u32,
    },
    Inner {
        weight: u64,
        order: u32,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Occurrence count of this symbol (leaf) or of all symbols in the
    /// subtree (inner).
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Inner { weight, .. } => *weight,
        }
    }

    /// Creation-order stamp assigned when this node was made.
    pub fn order(&self) -> u32 {
        match self {
            Node::Leaf { order, .. } | Node::Inner { order, .. } => *order,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Inner { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Longest root-to-leaf edge count. A bare leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Inner { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight()
            .cmp(&other.weight())
            .then_with(|| match (self, other) {
                (Node::Leaf { .. }, Node::Inner { .. }) => Ordering::Less,
                (Node::Inner { .. }, Node::Leaf { .. }) => Ordering::Greater,
                (Node::Leaf { symbol: a, .. }, Node::Leaf { symbol: b, .. }) => a.cmp(b),
                (Node::Inner { order: a, .. }, Node::Inner { order: b, .. }) => a.cmp(b),
            })
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

/// Build the code tree for a frequency table.
///
/// Returns `None` for an all-zero table. A table with exactly one nonzero
/// symbol yields that bare leaf with no wrapping inner node. Otherwise the
/// two smallest nodes are merged repeatedly until one root remains; the
/// smaller of each merged pair becomes the left child.
///
/// Leaves are created in ascending symbol order with creation-order stamps
/// 0, 1, 2, ...; inner nodes continue the same counter as they are formed.
pub fn build_tree(table: &FrequencyTable) -> Option<Node> {
    let mut next_order: u32 = 0;

    let mut heap: BinaryHeap<Reverse<Node>> = table
        .nonzero()
        .map(|(symbol, weight)| {
            let leaf = Node::Leaf {
                symbol,
                weight,
                order: next_order,
            };
            next_order += 1;
            Reverse(leaf)
        })
        .collect();

    while heap.len() > 1 {
        let Some(Reverse(left)) = heap.pop() else {
            break;
        };
        let Some(Reverse(right)) = heap.pop() else {
            break;
        };

        let inner = Node::Inner {
            weight: left.weight() + right.weight(),
            order: next_order,
            left: Box::new(left),
            right: Box::new(right),
        };
        next_order += 1;
        heap.push(Reverse(inner));
    }

    heap.pop().map(|Reverse(root)| root)
}
