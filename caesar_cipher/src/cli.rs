use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

/// Command-line arguments for the Caesar cipher program.
#[derive(Parser, Debug)]
#[command(
    name = "caesar_cipher",
    version,
    about = "Encrypt, decrypt or brute-force Caesar-shifted text files (English or Ukrainian)"
)]
pub struct Cli {
    /// Mode of operation; without it an interactive session starts
    #[arg(short, long, value_enum, help = "Mode of operation (encrypt/decrypt/brute-force)")]
    pub mode: Option<OperationMode>,

    #[arg(short, long, help = "Path to the input file")]
    pub file: Option<PathBuf>,

    #[arg(short, long, allow_negative_numbers = true, help = "Key for the cipher")]
    pub key: Option<i64>,

    #[arg(short, long, help = "Reference text for frequency analysis (brute-force only)")]
    pub reference: Option<PathBuf>,

    /// Defaults to the input path tagged with the operation, e.g. `notes[ENCRYPTED].txt`
    #[arg(short, long, help = "Path to the output file")]
    pub output: Option<PathBuf>,

    #[arg(short, long, help = "Log every candidate key during brute force")]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OperationMode {
    Encrypt,
    Decrypt,
    BruteForce,
}

/// A fully validated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Encrypt { file: PathBuf, key: i64 },
    Decrypt { file: PathBuf, key: i64 },
    BruteForce { file: PathBuf, reference: Option<PathBuf> },
}

impl Task {
    pub fn file(&self) -> &Path {
        match self {
            Task::Encrypt { file, .. } | Task::Decrypt { file, .. } | Task::BruteForce { file, .. } => file,
        }
    }
}

impl Cli {
    /// Validates the argument combination for `mode`.
    pub fn task(&self, mode: OperationMode) -> Result<Task> {
        let Some(file) = self.file.clone() else {
            bail!("--file is required for {mode:?}");
        };
        if !file.is_file() {
            bail!("Input file not found: {}", file.display());
        }

        match mode {
            OperationMode::Encrypt | OperationMode::Decrypt => {
                if self.reference.is_some() {
                    bail!("--reference is only used in brute-force mode");
                }
                let Some(key) = self.key else {
                    bail!("--key is required for {mode:?}");
                };
                Ok(if mode == OperationMode::Encrypt {
                    Task::Encrypt { file, key }
                } else {
                    Task::Decrypt { file, key }
                })
            }
            OperationMode::BruteForce => {
                if let Some(reference) = &self.reference {
                    if !reference.is_file() {
                        bail!("Reference file not found: {}", reference.display());
                    }
                }
                Ok(Task::BruteForce {
                    file,
                    reference: self.reference.clone(),
                })
            }
        }
    }

    /// Fails when task flags were given without `--mode`; the interactive
    /// session would otherwise drop them.
    pub fn ensure_interactive(&self) -> Result<()> {
        let given: Vec<&str> = [
            ("--file", self.file.is_some()),
            ("--key", self.key.is_some()),
            ("--reference", self.reference.is_some()),
        ]
        .into_iter()
        .filter_map(|(flag, present)| present.then_some(flag))
        .collect();

        if !given.is_empty() {
            bail!("{} given without --mode", given.join(", "));
        }
        Ok(())
    }
}

/// Asks for a task on `input`, writing prompts to `output`.
///
/// File paths and keys are asked again until valid. The session fails only
/// on an unknown command or when input ends.
pub fn prompt_task<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Task> {
    let command = ask(input, output, "Enter command (ENCRYPT, DECRYPT, BRUTE_FORCE):")?;
    let mode = match command.to_uppercase().as_str() {
        "ENCRYPT" => OperationMode::Encrypt,
        "DECRYPT" => OperationMode::Decrypt,
        "BRUTE_FORCE" => OperationMode::BruteForce,
        _ => bail!("Invalid command: {command}"),
    };

    let file = ask_file(input, output, "Enter the path to the file you want to work with:")?;

    match mode {
        OperationMode::Encrypt => Ok(Task::Encrypt { key: ask_key(input, output)?, file }),
        OperationMode::Decrypt => Ok(Task::Decrypt { key: ask_key(input, output)?, file }),
        OperationMode::BruteForce => {
            let reference = loop {
                let answer = ask(input, output, "Do you want to provide a reference file for frequency analysis? Yes/No")?;
                match answer.to_lowercase().as_str() {
                    "yes" | "y" => break Some(ask_file(input, output, "Enter the reference file path:")?),
                    "no" | "n" => break None,
                    _ => continue,
                }
            };
            Ok(Task::BruteForce { file, reference })
        }
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    writeln!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Input ended before the session was complete");
    }
    Ok(line.trim().to_string())
}

fn ask_file<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<PathBuf> {
    loop {
        let path = PathBuf::from(ask(input, output, prompt)?);
        if path.is_file() {
            return Ok(path);
        }
        writeln!(output, "File not found: {}", path.display())?;
    }
}

fn ask_key<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<i64> {
    loop {
        let answer = ask(input, output, "Enter key:")?;
        match answer.parse() {
            Ok(key) => return Ok(key),
            Err(_) => writeln!(output, "The key must be a whole number")?,
        }
    }
}
