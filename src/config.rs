//! Configuration constants for the file cipher.

/// AES-GCM cipher parameters.
pub mod cipher_params {
    /// Key length in bytes (256 bits).
    pub const KEY_LENGTH: usize = 32;

    /// Nonce length in bytes (96 bits, AES-GCM standard).
    pub const NONCE_LENGTH: usize = 12;

    /// Authentication tag length in bytes (128 bits).
    pub const TAG_LENGTH: usize = 16;

    /// Smallest valid ciphertext: a nonce plus the tag of an empty payload.
    pub const MIN_CIPHERTEXT_LENGTH: usize = NONCE_LENGTH + TAG_LENGTH;
}

/// Random password generator parameters.
pub mod password_params {
    /// Default generated password length.
    pub const DEFAULT_LENGTH: usize = 12;

    /// Alphabet: ASCII letters, digits, and punctuation.
    pub const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
abcdefghijklmnopqrstuvwxyz\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
}
