//! filecipher - password-based file encryption CLI.
//!
//! Encrypts and decrypts files with AES-256-GCM using a key derived from a
//! password, and generates random passwords.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use filecipher::config::password_params::DEFAULT_LENGTH;
use filecipher::{crypto, password};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "filecipher")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Password-based file encryption",
    long_about = "Encrypts and decrypts files with AES-256-GCM using a key derived from a password."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file
    Encrypt {
        /// File to encrypt
        input: PathBuf,

        /// Output file (default: <input>.enc)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Decrypt a previously encrypted file
    Decrypt {
        /// File to decrypt
        input: PathBuf,

        /// Output file (default: <input> without its .enc suffix)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Generate a random password
    Genpass {
        /// Password length
        #[arg(long, default_value_t = DEFAULT_LENGTH)]
        length: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Encrypt {
            input,
            output,
            password,
        } => cmd_encrypt(&input, output, password),

        Commands::Decrypt {
            input,
            output,
            password,
        } => cmd_decrypt(&input, output, password),

        Commands::Genpass { length } => cmd_genpass(length),
    }
}

fn prompt_password(prompt: &str) -> String {
    rpassword::prompt_password(prompt).unwrap_or_else(|_| {
        eprint!("{}", prompt);
        io::stderr().flush().unwrap();
        let mut password = String::new();
        io::stdin().read_line(&mut password).unwrap();
        password.trim().to_string()
    })
}

fn cmd_encrypt(input: &Path, output: Option<PathBuf>, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => {
            let password = prompt_password("Enter password: ");
            let confirm = prompt_password("Confirm password: ");

            if password != confirm {
                eprintln!("Passwords do not match");
                std::process::exit(1);
            }
            password
        }
    };

    let payload = std::fs::read(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let encrypted = crypto::encrypt(&payload, &password)?;

    let output = output.unwrap_or_else(|| {
        let mut name = input.as_os_str().to_owned();
        name.push(".enc");
        PathBuf::from(name)
    });
    std::fs::write(&output, &encrypted)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("Wrote {} bytes to {}", encrypted.len(), output.display());

    Ok(())
}

fn cmd_decrypt(input: &Path, output: Option<PathBuf>, password: Option<String>) -> Result<()> {
    let password = password.unwrap_or_else(|| prompt_password("Password: "));

    let ciphertext = std::fs::read(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let payload = crypto::decrypt(&ciphertext, &password)?;

    let output = output.unwrap_or_else(|| default_decrypt_output(input));
    std::fs::write(&output, &payload)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("Wrote {} bytes to {}", payload.len(), output.display());

    Ok(())
}

/// Strip a trailing `.enc`, falling back to a `.dec` suffix so the
/// ciphertext is never overwritten.
fn default_decrypt_output(input: &Path) -> PathBuf {
    if input.extension().is_some_and(|ext| ext == "enc") {
        input.with_extension("")
    } else {
        let mut name = input.as_os_str().to_owned();
        name.push(".dec");
        PathBuf::from(name)
    }
}

fn cmd_genpass(length: usize) -> Result<()> {
    let generated = password::generate(length)?;
    println!("{}", generated);

    Ok(())
}
