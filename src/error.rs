use std::io;

use thiserror::Error;

/// Error variants for Huffman encode/decode operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A bit value other than 0 or 1 was handed to the bit writer.
    #[error("invalid bit value {0}, must be 0 or 1")]
    InvalidBit(u8),

    /// An I/O error from the underlying byte sink or source.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The persisted code table could not be read back.
    #[error("malformed code table: {0}")]
    Table(String),

    /// The packed payload walked off the code tree or ended mid-symbol.
    #[error("corrupt payload: bit walk left the code tree")]
    CorruptPayload,
}

impl From<Error> for io::Error {
    fn from(e: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, e)
    }
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
