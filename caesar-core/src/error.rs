//! Error types for cipher and key recovery operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaesarError {
    /// The text has no letter from any supported alphabet.
    #[error("Unsupported language in the text")]
    UnsupportedLanguage,
}

pub type Result<T> = std::result::Result<T, CaesarError>;
