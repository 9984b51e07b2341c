//! Password-based file encryption.
//!
//! A small utility library that reversibly transforms arbitrary byte payloads
//! with a user-supplied password.
//!
//! # Features
//!
//! - **AES-256-GCM Encryption**: Authenticated encryption, so decryption with
//!   a wrong password or over tampered data fails cleanly instead of
//!   returning garbage
//! - **SHA-256 Key Derivation**: A password deterministically maps to a
//!   256-bit key, keeping previously encrypted files decryptable
//! - **Password Generator**: Random passwords from letters, digits, and
//!   punctuation
//! - **CLI Interface**: Encrypt and decrypt files from the command line
//!
//! # Security
//!
//! Key derivation is a single unsalted SHA-256 with no work factor. This is
//! fast by design and therefore weak against offline password guessing; see
//! [`crypto::derive_key`].
//!
//! # Example
//!
//! ```rust
//! use filecipher::crypto::{decrypt, encrypt};
//!
//! let payload = b"file contents";
//! let encrypted = encrypt(payload, "hunter2").unwrap();
//!
//! // Only the same password gets the bytes back
//! assert_eq!(decrypt(&encrypted, "hunter2").unwrap(), payload);
//! assert!(decrypt(&encrypted, "wrong").is_err());
//! ```

pub mod config;
pub mod crypto;
pub mod error;
pub mod password;

pub use error::{Error, Result};
