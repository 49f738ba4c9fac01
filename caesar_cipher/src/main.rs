mod cli;
mod files;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Task};

/// Result of running a task, before it is written out.
#[derive(Debug)]
struct Outcome {
    content: String,
    tag: String,
    /// Set only by brute force.
    recovered_key: Option<i64>,
}

fn main() -> Result<()> {
    let cli: Cli = Cli::parse();
    init_logging(cli.verbose);

    let task = match cli.mode {
        Some(mode) => cli.task(mode)?,
        None => {
            cli.ensure_interactive()?;
            cli::prompt_task(&mut io::stdin().lock(), &mut io::stdout())?
        }
    };

    let outcome = run(&task)?;

    let output_path: PathBuf = cli
        .output
        .clone()
        .unwrap_or_else(|| files::tagged_path(task.file(), &outcome.tag));
    files::write_text(&output_path, &outcome.content)?;

    if let Some(key) = outcome.recovered_key {
        println!("Detected cipher key: {}", key);
    }
    match task {
        Task::Encrypt { .. } => {
            println!("File encrypted successfully. Encrypted file saved at: {}", output_path.display())
        }
        Task::Decrypt { .. } => {
            println!("File decrypted successfully. Decrypted file saved at: {}", output_path.display())
        }
        Task::BruteForce { .. } => {
            println!("File decrypted with brute force. Decrypted file saved at: {}", output_path.display())
        }
    }

    Ok(())
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run(task: &Task) -> Result<Outcome> {
    let content = files::read_text(task.file())?;
    tracing::debug!("Read {} characters from {}", content.chars().count(), task.file().display());

    match task {
        Task::Encrypt { file, key } => Ok(Outcome {
            content: caesar_core::encrypt(&content, *key)
                .with_context(|| format!("Cannot encrypt {}", file.display()))?,
            tag: "ENCRYPTED".to_string(),
            recovered_key: None,
        }),
        Task::Decrypt { file, key } => Ok(Outcome {
            content: caesar_core::decrypt(&content, *key)
                .with_context(|| format!("Cannot decrypt {}", file.display()))?,
            tag: "DECRYPTED".to_string(),
            recovered_key: None,
        }),
        Task::BruteForce { file, reference } => {
            let result = match reference {
                Some(reference_path) => {
                    let reference_text = files::read_text(reference_path)?;
                    caesar_core::recover_key_with_reference(&content, &reference_text)
                }
                None => caesar_core::recover_key(&content),
            }
            .with_context(|| format!("Cannot brute-force {}", file.display()))?;

            let (plaintext, key) = result.into_parts();
            Ok(Outcome {
                content: plaintext,
                tag: format!("BRUTEFORCE={key}"),
                recovered_key: Some(key),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_encrypt_then_brute_force() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.txt");
        std::fs::write(&plain, "the quick brown fox jumps over the lazy dog").unwrap();

        let encrypted = run(&Task::Encrypt { file: plain.clone(), key: 3 }).unwrap();
        assert_eq!(encrypted.tag, "ENCRYPTED");
        assert_eq!(encrypted.recovered_key, None);

        let cipher_path = files::tagged_path(&plain, &encrypted.tag);
        files::write_text(&cipher_path, &encrypted.content).unwrap();
        assert!(dir.path().join("plain[ENCRYPTED].txt").is_file());

        let recovered = run(&Task::BruteForce { file: cipher_path, reference: None }).unwrap();
        assert_eq!(recovered.recovered_key, Some(3));
        assert_eq!(recovered.tag, "BRUTEFORCE=3");
        assert_eq!(recovered.content, "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn test_run_decrypt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secret.txt");
        std::fs::write(&path, "Khoor").unwrap();

        let outcome = run(&Task::Decrypt { file: path, key: 3 }).unwrap();
        assert_eq!(outcome.content, "Hello");
        assert_eq!(outcome.tag, "DECRYPTED");
        assert_eq!(outcome.recovered_key, None);
    }

    #[test]
    fn test_run_reports_unsupported_language() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("digits.txt");
        std::fs::write(&path, "0123456789").unwrap();

        let error = run(&Task::Encrypt { file: path, key: 1 }).unwrap_err();
        assert!(error.to_string().starts_with("Cannot encrypt"));
        assert!(error.root_cause().to_string().contains("Unsupported language"));
    }
}
