//! Pre-order textual serialization of the code tree.
//!
//! The format is a byte-exact compatibility contract:
//! - a leaf prints as `*<symbol>:<weight>`, both fields decimal
//! - an inner node prints as `<weight> <left> <right>` with single spaces
//! - the whole tree is one line with no trailing newline
//!
//! A bare leaf as root prints exactly as a leaf, e.g. `*65:6`.

use crate::error::Result;
use crate::tree::Node;
use std::fmt;
use std::io::Write;

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf { symbol, weight, .. } => write!(f, "*{}:{}", symbol, weight),
            Node::Inner {
                weight,
                left,
                right,
                ..
            } => write!(f, "{} {} {}", weight, left, right),
        }
    }
}

/// Write the pre-order dump of `root` to `out`.
///
/// Emits no trailing newline; flushing is the caller's concern.
pub fn write_tree<W: Write>(root: &Node, out: &mut W) -> Result<()> {
    write!(out, "{}", root)?;
    Ok(())
}

/// Render the pre-order dump of `root` as a string.
pub fn dump_tree(root: &Node) -> String {
    root.to_string()
}
