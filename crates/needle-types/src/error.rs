use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("offset {0} is not a multiple of the needle padding size")]
    MisalignedOffset(u64),

    #[error("offset {offset} exceeds the maximum volume size {max}")]
    OffsetOutOfRange { offset: u64, max: u64 },
}
