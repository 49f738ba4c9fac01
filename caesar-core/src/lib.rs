//! # Caesar Core
//!
//! Caesar shift cipher over Latin and Ukrainian text, with key recovery by
//! letter-frequency analysis.
//!
//! ## Alphabets
//!
//! - **Latin** - 26 letters, scored against English frequencies
//! - **Ukrainian** - 33 letters, scored against Ukrainian frequencies
//!
//! Both alphabets are followed by twelve shared symbols (`. « » , " : ! ?`,
//! space, `/ \ '`) which rotate together with the letters. The shift modulus is
//! therefore 38 for Latin text and 45 for Ukrainian text.
//!
//! ## Usage
//!
//! ```rust
//! use caesar_core::{decrypt, encrypt, recover_key};
//!
//! let ciphertext = encrypt("the quick brown fox jumps over the lazy dog", 3)?;
//! assert_eq!(decrypt(&ciphertext, 3)?, "the quick brown fox jumps over the lazy dog");
//!
//! let result = recover_key(&ciphertext)?;
//! assert_eq!(result.key(), 3);
//! assert_eq!(result.plaintext(), "the quick brown fox jumps over the lazy dog");
//! # Ok::<(), caesar_core::CaesarError>(())
//! ```
//!
//! Key recovery can also be calibrated against a reference corpus with
//! [`recover_key_with_reference`].

pub mod alphabet;
pub mod brute;
pub mod cipher;
pub mod error;
pub mod frequency;

pub use alphabet::Alphabet;
pub use brute::{recover_key, recover_key_with_reference, BruteForceResult};
pub use cipher::{decrypt, encrypt};
pub use error::{CaesarError, Result};
pub use frequency::FrequencyDistribution;
