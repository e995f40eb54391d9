//! Huffman tree construction, postorder numbering, and shape-preserving
//! optimization.
//!
//! Nodes live in a growable arena owned by the tree; children are arena
//! indices rather than boxed pointers, so every traversal can run on an
//! explicit stack and a maximally skewed 256-symbol tree stays well clear of
//! call-depth limits.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::freq::FrequencyTable;

/// Index of a node inside its tree's arena.
pub type NodeId = usize;

/// Node in a Huffman tree.
///
/// A node is a leaf iff it has no children; internal nodes always have
/// exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// Terminal node holding one input symbol.
    Leaf {
        /// The byte this leaf encodes.
        symbol: u8,
    },
    /// Interior node with exactly two children.
    Internal {
        /// Subtree reached on a 0 bit.
        left: NodeId,
        /// Subtree reached on a 1 bit.
        right: NodeId,
    },
}

/// Postorder numbers for the internal nodes of one tree.
///
/// Kept as a side table parallel to the arena instead of inside the nodes;
/// leaves are never numbered. The wire format caps internal nodes at 255, so
/// `u8` is enough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numbering {
    numbers: Vec<Option<u8>>,
}

impl Numbering {
    /// Postorder number of `id`, `None` for leaves.
    pub fn of(&self, id: NodeId) -> Option<u8> {
        self.numbers.get(id).copied().flatten()
    }

    /// How many internal nodes received a number.
    pub fn internal_count(&self) -> usize {
        self.numbers.iter().filter(|n| n.is_some()).count()
    }
}

/// Heap entry during greedy construction.
///
/// Ordered by weight first, then by an insertion sequence number, so equal
/// weights merge in a deterministic order: leaves in ascending symbol order,
/// merged subtrees in creation order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Pending {
    weight: u64,
    seq: u32,
    node: NodeId,
}

/// A binary prefix-code tree over byte symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build the prefix tree minimizing weighted path length for `freq` by
    /// repeatedly merging the two lightest pending subtrees.
    ///
    /// A table with exactly one distinct symbol yields a tree that is itself
    /// a single leaf; code generation gives that symbol the one-bit code 0.
    ///
    /// # Errors
    /// [`Error::EmptyInput`] if the table holds no symbols.
    pub fn from_frequencies(freq: &FrequencyTable) -> Result<Self> {
        if freq.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut nodes = Vec::with_capacity(freq.len() * 2 - 1);
        let mut heap = BinaryHeap::with_capacity(freq.len());
        let mut seq = 0u32;

        for (symbol, count) in freq.iter() {
            nodes.push(Node::Leaf { symbol });
            heap.push(Reverse(Pending {
                weight: count,
                seq,
                node: nodes.len() - 1,
            }));
            seq += 1;
        }

        while heap.len() > 1 {
            let Reverse(first) = heap.pop().unwrap();
            let Reverse(second) = heap.pop().unwrap();
            nodes.push(Node::Internal {
                left: first.node,
                right: second.node,
            });
            heap.push(Reverse(Pending {
                weight: first.weight + second.weight,
                seq,
                node: nodes.len() - 1,
            }));
            seq += 1;
        }

        match heap.pop() {
            Some(Reverse(last)) => Ok(Self {
                nodes,
                root: last.node,
            }),
            None => Err(Error::EmptyInput),
        }
    }

    /// Assemble a tree from a prebuilt arena. Used by the wire-format
    /// reconstruction paths.
    pub(crate) fn from_arena(nodes: Vec<Node>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    /// Arena index of the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The node stored at `id`.
    ///
    /// # Panics
    /// If `id` is outside the arena.
    pub fn node(&self, id: NodeId) -> Node {
        self.nodes[id]
    }

    /// Total number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the arena holds no nodes. Never the case for a built tree.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Assign postorder numbers to internal nodes, starting at 0.
    ///
    /// Leaves are skipped; the root always receives the highest number.
    pub fn number_nodes(&self) -> Numbering {
        let mut numbers = vec![None; self.nodes.len()];
        let mut next = 0u8;
        let mut stack = vec![(self.root, false)];
        while let Some((id, children_done)) = stack.pop() {
            if let Node::Internal { left, right } = self.nodes[id] {
                if children_done {
                    numbers[id] = Some(next);
                    next += 1;
                } else {
                    stack.push((id, true));
                    stack.push((right, false));
                    stack.push((left, false));
                }
            }
        }
        Numbering { numbers }
    }

    /// Depth of every leaf, as `(leaf id, depth)` pairs in traversal order.
    fn leaf_depths(&self) -> Vec<(NodeId, usize)> {
        let mut depths = Vec::new();
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            match self.nodes[id] {
                Node::Leaf { .. } => depths.push((id, depth)),
                Node::Internal { left, right } => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
            }
        }
        depths
    }

    /// Expected code length in bits per symbol under `freq`.
    ///
    /// A single-leaf tree still costs one bit per symbol, matching the
    /// one-bit code its symbol is assigned. A table summing to zero yields
    /// 0.0.
    pub fn avg_length(&self, freq: &FrequencyTable) -> f64 {
        let total = freq.total();
        if total == 0 {
            return 0.0;
        }
        let weighted: u64 = self
            .leaf_depths()
            .iter()
            .map(|&(id, depth)| {
                let Node::Leaf { symbol } = self.nodes[id] else {
                    unreachable!()
                };
                depth.max(1) as u64 * freq.get(symbol)
            })
            .sum();
        weighted as f64 / total as f64
    }

    /// Re-seat symbols on the existing leaves so the rarest symbol sits on
    /// the deepest leaf, leaving the tree shape untouched.
    ///
    /// Useful when the shape is pinned by an existing compressed stream but
    /// the observed frequencies differ from the ones the tree was built
    /// with. Never increases [`HuffmanTree::avg_length`] under `freq`.
    pub fn improve(&mut self, freq: &FrequencyTable) {
        let mut slots = self.leaf_depths();
        // Deepest slot first; stable sort keeps ties in traversal order.
        slots.sort_by(|a, b| b.1.cmp(&a.1));

        let mut symbols: Vec<u8> = slots
            .iter()
            .map(|&(id, _)| {
                let Node::Leaf { symbol } = self.nodes[id] else {
                    unreachable!()
                };
                symbol
            })
            .collect();
        // Rarest first; ties broken by symbol value for determinism.
        symbols.sort_by_key(|&symbol| (freq.get(symbol), symbol));

        for (&(id, _), &symbol) in slots.iter().zip(symbols.iter()) {
            self.nodes[id] = Node::Leaf { symbol };
        }
    }
}
