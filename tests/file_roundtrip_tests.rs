//! File-level round-trip tests mirroring how the CLI drives the library.

use filecipher::crypto::{decrypt, encrypt};
use filecipher::Error;
use std::fs;
use tempfile::TempDir;

/// Helper to create a file with the given contents and return its path.
fn write_input(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to create input file");
    path
}

#[test]
fn test_file_encrypt_then_decrypt() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let contents = b"Document body with some\x00binary\xFFbytes inside";
    let input = write_input(&temp_dir, "report.docx", contents);
    let password = "file test password";

    // Encrypt: read, transform, write alongside
    let payload = fs::read(&input).unwrap();
    let encrypted = encrypt(&payload, password).expect("Failed to encrypt");
    let enc_path = temp_dir.path().join("report.docx.enc");
    fs::write(&enc_path, &encrypted).unwrap();

    // Decrypt from the written file
    let ciphertext = fs::read(&enc_path).unwrap();
    let decrypted = decrypt(&ciphertext, password).expect("Failed to decrypt");

    assert_eq!(decrypted, contents);
}

#[test]
fn test_encrypted_file_differs_from_original() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let contents = vec![0x41u8; 2048];
    let input = write_input(&temp_dir, "plain.bin", &contents);

    let payload = fs::read(&input).unwrap();
    let encrypted = encrypt(&payload, "pw").expect("Failed to encrypt");

    // Nonce + tag overhead, and no plaintext window leaks through
    assert_eq!(encrypted.len(), contents.len() + 28);
    assert!(!encrypted.windows(64).any(|w| w.iter().all(|&b| b == 0x41)));
}

#[test]
fn test_corrupted_file_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&temp_dir, "secret.txt", b"secret contents");
    let password = "pw";

    let payload = fs::read(&input).unwrap();
    let encrypted = encrypt(&payload, password).expect("Failed to encrypt");
    let enc_path = temp_dir.path().join("secret.txt.enc");
    fs::write(&enc_path, &encrypted).unwrap();

    // Simulate on-disk corruption of a single byte in the middle
    let mut corrupted = fs::read(&enc_path).unwrap();
    let mid = corrupted.len() / 2;
    corrupted[mid] ^= 0x01;
    fs::write(&enc_path, &corrupted).unwrap();

    let ciphertext = fs::read(&enc_path).unwrap();
    let result = decrypt(&ciphertext, password);
    assert!(matches!(result, Err(Error::Integrity)));
}

#[test]
fn test_decrypting_unencrypted_file_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_input(&temp_dir, "notes.md", b"# Notes\n\nPlain markdown, never encrypted.");

    let contents = fs::read(&input).unwrap();
    let result = decrypt(&contents, "any password");
    assert!(matches!(result, Err(Error::Integrity)));
}
