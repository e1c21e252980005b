//! Byte-frequency counting over a streaming input.
//!
//! `FrequencyTable` holds one occurrence count per possible byte value
//! (256 entries). Counting is a single forward pass through the input with
//! a fixed-size scratch buffer, so memory use does not depend on input
//! length.
//!
//! # Invariants
//! - The sum of all counts equals the number of bytes consumed
//! - A count of zero means the symbol never occurred and must not produce
//!   a leaf downstream
//!
//! # Failure Semantics
//! Any read error aborts the whole count. A partially filled table is
//! never returned as if it were complete.

use crate::error::Result;
use std::io::{self, Read};

/// Number of distinct byte values a table tracks.
pub const SYMBOL_COUNT: usize = 256;

/// Scratch buffer size for the streaming pass.
const READ_BUF_SIZE: usize = 8 * 1024;

/// Occurrence counts for every possible byte value, indexed 0..=255.
///
/// Counts are `u64` so arbitrarily long inputs (including a single symbol
/// repeated without bound) cannot overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; SYMBOL_COUNT],
}

impl FrequencyTable {
    /// Create an empty table (all counts zero).
    pub fn new() -> Self {
        Self {
            counts: [0; SYMBOL_COUNT],
        }
    }

    /// Count every byte of `reader` in a single streaming pass.
    ///
    /// `Ok(0)` from the reader is the end-of-stream marker, distinct from
    /// every valid byte value. The pass uses a fixed scratch buffer, so
    /// auxiliary memory is constant regardless of input size.
    ///
    /// # Errors
    /// Propagates any read failure. No table is returned in that case.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut table = Self::new();
        let mut buf = [0u8; READ_BUF_SIZE];

        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            for &byte in &buf[..n] {
                table.counts[byte as usize] += 1;
            }
        }

        Ok(table)
    }

    /// Count an in-memory byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in bytes {
            table.counts[byte as usize] += 1;
        }
        table
    }

    /// Record one occurrence of `symbol`.
    ///
    /// Lets callers feed bytes from a producer that is not an `io::Read`.
    pub fn increment(&mut self, symbol: u8) {
        self.counts[symbol as usize] += 1;
    }

    /// Occurrence count for `symbol`.
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Total bytes counted (sum over all symbols).
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of symbols with a nonzero count.
    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Iterate `(symbol, count)` pairs with nonzero count, in ascending
    /// symbol order.
    pub fn nonzero(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_empty_input() {
        let table = FrequencyTable::from_bytes(b"");
        assert_eq!(table.total(), 0);
        assert_eq!(table.distinct_symbols(), 0);
        assert_eq!(table.nonzero().count(), 0);
    }

    #[test]
    fn test_counts_per_symbol() {
        let table = FrequencyTable::from_bytes(b"BBBA");
        assert_eq!(table.count(b'A'), 1);
        assert_eq!(table.count(b'B'), 3);
        assert_eq!(table.count(b'C'), 0);
        assert_eq!(table.total(), 4);
        assert_eq!(table.distinct_symbols(), 2);
    }

    #[test]
    fn test_total_equals_bytes_consumed() {
        let data: Vec<u8> = (0..10_000).map(|i| (i % 7) as u8).collect();
        let table = FrequencyTable::from_bytes(&data);
        assert_eq!(table.total(), data.len() as u64);
    }

    #[test]
    fn test_reader_matches_slice() {
        let data = b"the quick brown fox jumps over the lazy dog".to_vec();
        let from_reader = FrequencyTable::from_reader(Cursor::new(data.clone())).unwrap();
        let from_bytes = FrequencyTable::from_bytes(&data);
        assert_eq!(from_reader, from_bytes);
    }

    #[test]
    fn test_reader_spanning_multiple_buffers() {
        // Larger than the internal scratch buffer to force several reads
        let data = vec![b'x'; READ_BUF_SIZE * 3 + 17];
        let table = FrequencyTable::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(table.count(b'x'), (READ_BUF_SIZE * 3 + 17) as u64);
        assert_eq!(table.distinct_symbols(), 1);
    }

    #[test]
    fn test_read_failure_propagates() {
        struct FailingReader;

        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
            }
        }

        let result = FrequencyTable::from_reader(FailingReader);
        assert!(result.is_err());
    }

    #[test]
    fn test_failure_mid_stream_discards_partial_counts() {
        // Yields one full chunk, then fails: the partial table must not leak
        struct PartialReader {
            served: bool,
        }

        impl Read for PartialReader {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if self.served {
                    Err(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated"))
                } else {
                    self.served = true;
                    buf[0] = b'A';
                    Ok(1)
                }
            }
        }

        let result = FrequencyTable::from_reader(PartialReader { served: false });
        assert!(result.is_err());
    }

    #[test]
    fn test_nonzero_ascending_symbol_order() {
        let table = FrequencyTable::from_bytes(&[255, 0, 128, 0]);
        let pairs: Vec<(u8, u64)> = table.nonzero().collect();
        assert_eq!(pairs, vec![(0, 2), (128, 1), (255, 1)]);
    }

    #[test]
    fn test_increment() {
        let mut table = FrequencyTable::new();
        table.increment(42);
        table.increment(42);
        table.increment(7);
        assert_eq!(table.count(42), 2);
        assert_eq!(table.count(7), 1);
        assert_eq!(table.total(), 3);
    }
}
