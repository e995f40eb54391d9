//! Error types for the Huffman codec.

use thiserror::Error;

/// Error variants for compression and decompression.
#[derive(Debug, Error)]
pub enum Error {
    /// The input contained no symbols, so no tree can be built.
    #[error("empty input: a Huffman tree needs at least one symbol")]
    EmptyInput,

    /// The input is larger than the 32-bit size field can describe.
    #[error("input of {0} bytes exceeds the 4 GiB format limit")]
    InputTooLarge(usize),

    /// The compressed header is inconsistent with the buffer length.
    #[error("malformed header: {0}")]
    MalformedHeader(&'static str),

    /// A node record references an index outside the node list.
    #[error("dangling node reference {index} (list holds {count} nodes)")]
    DanglingReference {
        /// The out-of-range index found in the record.
        index: usize,
        /// Number of nodes actually present.
        count: usize,
    },

    /// The packed payload ran out of bits before the declared symbol count.
    #[error("truncated payload: decoded {decoded} of {expected} symbols")]
    TruncatedPayload {
        /// Symbols successfully decoded.
        decoded: usize,
        /// Symbols the header promised.
        expected: usize,
    },

    /// A symbol in the input has no entry in the code table.
    #[error("symbol {0:#04x} has no code in the table")]
    MissingCode(u8),

    /// An I/O error occurred while reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
