//! # Huffman coding
//!
//! *Lossless byte-stream compression with optimal prefix codes.*
//!
//! ## Intuition First
//!
//! Imagine abbreviating words by how often you use them: "the" earns a
//! one-letter shorthand, "sesquipedalian" keeps its full spelling. Huffman
//! coding does exactly this with bits. Frequent bytes get short bit strings,
//! rare bytes get long ones, and because every code sits at a leaf of one
//! binary tree, no code is a prefix of another — the decoder never needs a
//! separator to know where one symbol ends and the next begins.
//!
//! ## The Problem
//!
//! Fixed-width encodings spend 8 bits on every byte regardless of how
//! lopsided the input distribution is. An optimal prefix code spends close
//! to the entropy instead, and Huffman's greedy construction — merge the two
//! lightest subtrees until one remains — provably minimizes the expected
//! code length among all binary prefix codes.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon   Entropy as the fundamental limit
//! 1949  Fano      Top-down splitting: close, but not optimal
//! 1952  Huffman   Bottom-up merging: optimal, a term paper at MIT
//! 1976  Rissanen  Arithmetic coding: optimal rate, slower
//! 2007  Duda      ANS: arithmetic-rate at Huffman speed
//! ```
//!
//! ## Implementation Notes
//!
//! This crate is a complete round-trip codec, not just the tree:
//!
//! - [`FrequencyTable`]: one-pass symbol counting.
//! - [`HuffmanTree`]: arena-allocated tree with deterministic tie-breaking,
//!   postorder numbering, and a shape-preserving improvement pass.
//! - [`CodeTable`]: prefix-free code assignments from tree paths.
//! - [`wire`]: a compact binary tree description — 4 bytes per internal
//!   node — with two independent reconstruction algorithms.
//! - [`stream`]: bit packing with right zero-padding, and count-bounded
//!   unpacking that never misreads padding as data.
//! - [`compress`] / [`decompress`]: the whole pipeline over a
//!   self-describing buffer.
//!
//! ## Failure Modes
//!
//! 1. **Header lies**: node counts or size fields inconsistent with the
//!    buffer are explicit decode errors, never partial output.
//! 2. **Mismatched reconstruction**: the postorder rebuild has no index
//!    field to cross-check, so a non-postorder node list silently produces
//!    a wrong tree. Callers pick the algorithm that matches their data.
//!
//! ## References
//!
//! - Huffman, D. (1952). "A Method for the Construction of
//!   Minimum-Redundancy Codes."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod code;
pub mod codec;
pub mod error;
pub mod freq;
pub mod stream;
pub mod tree;
pub mod wire;

pub use code::CodeTable;
pub use codec::{compress, decompress};
pub use error::{Error, Result};
pub use freq::FrequencyTable;
pub use tree::{HuffmanTree, Node, Numbering};
pub use wire::ReadNode;
