//! Random password generation.
//!
//! Unrelated to key derivation; the cipher accepts any password, including
//! ones not produced here.

use crate::config::password_params::{CHARSET, DEFAULT_LENGTH};
use crate::error::{Error, Result};
use rand::Rng;

/// Generate a random password of the given length.
///
/// Characters are drawn uniformly from ASCII letters, digits, and
/// punctuation. Fails with [`Error::InvalidInput`] for a zero length.
pub fn generate(length: usize) -> Result<String> {
    if length == 0 {
        return Err(Error::InvalidInput(
            "password length must be at least 1".to_string(),
        ));
    }

    let mut rng = rand::thread_rng();
    let password = (0..length)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();

    Ok(password)
}

/// Generate a random password of the default length (12 characters).
pub fn generate_default() -> String {
    generate(DEFAULT_LENGTH).expect("default length is non-zero")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_length() {
        for length in [1, 8, 12, 64] {
            assert_eq!(generate(length).unwrap().len(), length);
        }
    }

    #[test]
    fn test_default_length() {
        assert_eq!(generate_default().len(), DEFAULT_LENGTH);
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(matches!(generate(0), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_charset_membership() {
        let password = generate(256).unwrap();
        for c in password.bytes() {
            assert!(CHARSET.contains(&c), "unexpected character {:?}", c as char);
        }
    }

    #[test]
    fn test_successive_passwords_differ() {
        // 16 chars over a ~94-symbol alphabet; a collision would indicate a
        // broken RNG, not bad luck.
        assert_ne!(generate(16).unwrap(), generate(16).unwrap());
    }
}
