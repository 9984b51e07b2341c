//! Error types for the file cipher.

use thiserror::Error;

/// Result type alias for file cipher operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in file cipher operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication failed during decryption. Raised for a wrong password,
    /// tampered or truncated ciphertext, or input not produced by `encrypt`.
    /// The message is deliberately generic; the cases are indistinguishable.
    #[error("Integrity check failed: wrong password or corrupted data")]
    Integrity,

    /// Encryption error from the AEAD backend.
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Caller supplied an invalid argument.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
