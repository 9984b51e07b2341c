//! SHA-256 key derivation for password-based encryption.

use crate::config::cipher_params::KEY_LENGTH;
use sha2::{Digest, Sha256};

/// Derive a 256-bit key from a password.
///
/// A single unsalted SHA-256 of the UTF-8 password bytes, used directly as
/// the AES-256 key. The same password always yields the same key, so
/// previously encrypted data stays decryptable.
///
/// # Security
///
/// This is a fast hash with no salt and no work factor, which makes it weak
/// against offline password guessing. Hardening it (per-file salt plus an
/// iterated KDF) would break compatibility with existing ciphertexts, so the
/// weakness is documented here instead of fixed.
pub fn derive_key(password: &str) -> [u8; KEY_LENGTH] {
    let digest = Sha256::digest(password.as_bytes());
    let mut key = [0u8; KEY_LENGTH];
    key.copy_from_slice(&digest);
    key
}
