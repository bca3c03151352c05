//! Error types for pbnfix-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Invalid line pattern
    #[error(transparent)]
    Pattern(#[from] pbnfix_blocks::Error),

    /// Error reading the input or writing the output
    #[error(transparent)]
    Fs(#[from] pbnfix_fs::Error),
}
