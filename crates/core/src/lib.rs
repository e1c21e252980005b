//! treedump-core: deterministic Huffman-style code tree construction.
//!
//! This library provides the core components for a tool that:
//! - Counts byte frequencies over a streaming input in a single pass
//! - Builds a binary code tree by greedy merging with fully deterministic
//!   tie-breaking
//! - Serializes the tree to a compact single-line textual dump
//!
//! # Architecture
//!
//! The pipeline is three stages, consumed in strict order:
//! - `freq`: byte-frequency table (256 counts, one per byte value)
//! - `tree`: greedy merge of the two smallest nodes under a total order
//! - `dump`: pre-order textual serialization of the finished tree
//!
//! # Design Principles
//!
//! - **No panics**: the only fallible operation is reading the input stream
//! - **Bounded memory**: counting is O(1) in input length; the builder's
//!   working set never exceeds 256 nodes
//! - **Deterministic**: the node ordering is total, so two runs over the
//!   same input produce byte-identical output

pub mod dump;
pub mod error;
pub mod freq;
pub mod tree;

// Re-export commonly used types
pub use dump::{dump_tree, write_tree};
pub use error::{Error, Result};
pub use freq::FrequencyTable;
pub use tree::{build_tree, Node};
