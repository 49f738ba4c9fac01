//! Key recovery by exhaustive search
//!
//! Every candidate key from 1 to the number of letters in the ciphertext's
//! alphabet is tried. Each decryption is scored by the squared distance between
//! its rounded letter percentages and an expected distribution, and the lowest
//! score wins. Key 0 is never a candidate.

use crate::alphabet::Alphabet;
use crate::cipher::decrypt_with;
use crate::error::Result;
use crate::frequency::FrequencyDistribution;

/// Outcome of a key search.
#[derive(Debug, Clone, PartialEq)]
pub struct BruteForceResult {
    plaintext: String,
    key: i64,
    score: f64,
}

impl BruteForceResult {
    pub fn plaintext(&self) -> &str {
        &self.plaintext
    }

    pub fn key(&self) -> i64 {
        self.key
    }

    /// Distance of the winning candidate; lower is closer to the expected language.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn into_parts(self) -> (String, i64) {
        (self.plaintext, self.key)
    }
}

/// Recovers the key using the built-in frequency table of the ciphertext's alphabet.
///
/// # Errors
///
/// [`CaesarError::UnsupportedLanguage`](crate::CaesarError::UnsupportedLanguage)
/// if the ciphertext has no recognizable letters.
pub fn recover_key(ciphertext: &str) -> Result<BruteForceResult> {
    let alphabet = Alphabet::detect(ciphertext)?;
    let expected = FrequencyDistribution::builtin(alphabet);
    Ok(search(ciphertext, alphabet, &expected))
}

/// Recovers the key using letter frequencies measured on `reference`.
///
/// An empty reference is accepted. Its distribution is all zero, which favors
/// the candidate with the flattest letter distribution.
pub fn recover_key_with_reference(ciphertext: &str, reference: &str) -> Result<BruteForceResult> {
    let alphabet = Alphabet::detect(ciphertext)?;
    let expected = FrequencyDistribution::from_reference(reference);
    Ok(search(ciphertext, alphabet, &expected))
}

/// Sum of squared differences between the rounded letter percentages of
/// `candidate` and `expected`, over the letters of `alphabet`.
pub fn score(candidate: &str, alphabet: Alphabet, expected: &FrequencyDistribution) -> f64 {
    let observed = FrequencyDistribution::observed(candidate, alphabet);

    alphabet
        .letters()
        .iter()
        .map(|&letter| (observed.get(letter) - expected.get(letter)).powi(2))
        .sum()
}

fn search(ciphertext: &str, alphabet: Alphabet, expected: &FrequencyDistribution) -> BruteForceResult {
    tracing::debug!("Searching {} keys over the {} alphabet", alphabet.letter_count(), alphabet);

    let mut best = BruteForceResult {
        plaintext: String::new(),
        key: 0,
        score: f64::INFINITY,
    };

    for key in 1..=alphabet.letter_count() as i64 {
        let candidate = decrypt_with(ciphertext, alphabet, key);
        let distance = score(&candidate, alphabet, expected);
        tracing::debug!(key, distance, "Scored candidate");

        // strict comparison keeps the lowest key on ties
        if distance < best.score {
            best = BruteForceResult {
                plaintext: candidate,
                key,
                score: distance,
            };
        }
    }

    tracing::info!(key = best.key, score = best.score, "Recovered key");
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::encrypt;
    use crate::error::CaesarError;

    const PANGRAM: &str = "the quick brown fox jumps over the lazy dog";

    #[test]
    fn test_recover_pangram() {
        let ciphertext = encrypt(PANGRAM, 3).unwrap();
        let result = recover_key(&ciphertext).unwrap();
        assert_eq!(result.key(), 3);
        assert_eq!(result.plaintext(), PANGRAM);
    }

    #[test]
    fn test_recover_unsupported_language() {
        assert!(matches!(
            recover_key("1234 5678"),
            Err(CaesarError::UnsupportedLanguage)
        ));
        assert!(matches!(
            recover_key_with_reference("", "some reference"),
            Err(CaesarError::UnsupportedLanguage)
        ));
    }

    #[test]
    fn test_score_of_perfect_match_is_zero() {
        let expected = FrequencyDistribution::measure("aabb", Alphabet::Latin);
        assert_eq!(score("abab", Alphabet::Latin, &expected), 0.0);
        assert_eq!(score("ab", Alphabet::Latin, &expected), 0.0);
    }

    #[test]
    fn test_score_uses_rounded_observation() {
        let expected = FrequencyDistribution::default();
        // 33^2 + 67^2
        assert_eq!(score("abb", Alphabet::Latin, &expected), 5578.0);
    }

    #[test]
    fn test_ties_keep_lowest_key() {
        // keys 1 through 12 all rotate the single letter onto a shared symbol,
        // leaving no letters and identical scores
        let result = recover_key("a").unwrap();
        assert_eq!(result.key(), 1);
        assert_eq!(result.plaintext(), "'");

        let result = recover_key_with_reference("a", "").unwrap();
        assert_eq!(result.key(), 1);
        assert_eq!(result.score(), 0.0);
    }

    #[test]
    fn test_key_is_never_zero() {
        // plaintext that already matches best is still reported under a
        // non-zero key
        let result = recover_key(PANGRAM).unwrap();
        assert!((1..=26).contains(&result.key()));
    }

    #[test]
    fn test_into_parts() {
        let ciphertext = encrypt(PANGRAM, 3).unwrap();
        let (plaintext, key) = recover_key(&ciphertext).unwrap().into_parts();
        assert_eq!((plaintext.as_str(), key), (PANGRAM, 3));
    }
}
