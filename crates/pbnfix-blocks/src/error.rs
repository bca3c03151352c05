//! Error types for pbnfix-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("Line pattern must contain at least one position")]
    EmptyPattern,

    #[error("Line positions are 1-based; 0 is not a valid position")]
    ZeroPosition,

    #[error("Block size must be at least 1")]
    ZeroBlockSize,

    #[error("Position {position} exceeds block size {block_size}")]
    PositionOutOfRange { position: usize, block_size: usize },

    #[error("Invalid pattern entry '{token}': expected a positive line number")]
    PatternParse { token: String },
}
