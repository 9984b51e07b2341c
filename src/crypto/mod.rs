//! Cryptographic operations for the file cipher.
//!
//! This module provides:
//! - AES-256-GCM authenticated encryption
//! - SHA-256 password-based key derivation

mod cipher;
mod kdf;

pub use cipher::{decrypt, decrypt_with_key, encrypt, encrypt_with_key, Cipher};
pub use kdf::derive_key;
