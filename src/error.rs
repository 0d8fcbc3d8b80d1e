//! Error types for prefix-sum tables.

use thiserror::Error;

/// Error variants for prefix-sum table operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An index was provided that is out of the table's bounds.
    #[error("index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// A text symbol mapped to an ordinal outside the alphabet.
    #[error("symbol ordinal {ordinal} outside alphabet of size {sigma}")]
    SymbolOutsideAlphabet {
        /// The offending ordinal.
        ordinal: usize,
        /// Size of the alphabet the text was counted against.
        sigma: usize,
    },

    /// A cumulative count does not fit the table's entry type.
    #[error("prefix sum overflows the entry type")]
    Overflow,

    /// Bytes or entries do not describe a valid prefix-sum sequence.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// An I/O error occurred during serialization or deserialization.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for prefix-sum table operations.
pub type Result<T> = std::result::Result<T, Error>;
