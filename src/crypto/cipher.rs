//! AES-256-GCM authenticated encryption.

use crate::config::cipher_params::{KEY_LENGTH, MIN_CIPHERTEXT_LENGTH, NONCE_LENGTH};
use crate::crypto::kdf::derive_key;
use crate::error::{Error, Result};
use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use rand::RngCore;

/// AES-256-GCM cipher wrapper around a derived key.
pub struct Cipher {
    cipher: Aes256Gcm,
}

impl Cipher {
    /// Create a new cipher from a 256-bit key.
    pub fn new(key: [u8; KEY_LENGTH]) -> Self {
        let cipher = Aes256Gcm::new_from_slice(&key).expect("Invalid key length");
        Self { cipher }
    }

    /// Encrypt data with a fresh random nonce.
    ///
    /// Returns: nonce (12 bytes) || ciphertext || tag (16 bytes)
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut nonce_bytes = [0u8; NONCE_LENGTH];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| Error::Encryption(e.to_string()))?;

        // Prepend nonce so the output is self-describing
        let mut result = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
        result.extend_from_slice(&nonce_bytes);
        result.extend_from_slice(&ciphertext);

        Ok(result)
    }

    /// Decrypt data that was encrypted with `encrypt`.
    ///
    /// Expects: nonce (12 bytes) || ciphertext || tag (16 bytes)
    ///
    /// Returns the exact original plaintext, or [`Error::Integrity`] when the
    /// key is wrong or the input was tampered with. There is no partial
    /// output on failure.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() < MIN_CIPHERTEXT_LENGTH {
            return Err(Error::Integrity);
        }

        let (nonce_bytes, ciphertext) = ciphertext.split_at(NONCE_LENGTH);
        let nonce = Nonce::from_slice(nonce_bytes);

        self.cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| Error::Integrity)
    }
}

/// Encrypt a payload with a password.
///
/// Derives the key with an unsalted SHA-256 of the password and encrypts with
/// AES-256-GCM. Both the payload and the password may be empty. Each call
/// generates a fresh nonce, so two encryptions of the same input produce
/// different bytes that decrypt to the same payload.
pub fn encrypt(plaintext: &[u8], password: &str) -> Result<Vec<u8>> {
    let key = derive_key(password);
    Cipher::new(key).encrypt(plaintext)
}

/// Decrypt a payload previously produced by [`encrypt`].
///
/// Fails with [`Error::Integrity`] when the password is wrong, the
/// ciphertext was corrupted or truncated, or the input was not produced by
/// this scheme.
pub fn decrypt(ciphertext: &[u8], password: &str) -> Result<Vec<u8>> {
    let key = derive_key(password);
    Cipher::new(key).decrypt(ciphertext)
}

/// Encrypt with a pre-derived key, skipping key derivation.
pub fn encrypt_with_key(plaintext: &[u8], key: &[u8; KEY_LENGTH]) -> Result<Vec<u8>> {
    Cipher::new(*key).encrypt(plaintext)
}

/// Decrypt with a pre-derived key.
pub fn decrypt_with_key(ciphertext: &[u8], key: &[u8; KEY_LENGTH]) -> Result<Vec<u8>> {
    Cipher::new(*key).decrypt(ciphertext)
}
