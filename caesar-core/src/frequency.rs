//! Letter frequency distributions
//!
//! Distributions map lower-case letters to their share of all letter
//! occurrences, in percent. Letters that never occur read as 0.

use std::collections::HashMap;

use crate::alphabet::{fold_case, Alphabet};

/// English letter frequencies in percent, a to z
const ENGLISH_PERCENTAGES: [f64; 26] = [
    8.17, 1.49, 2.78, 4.25, 12.70, 2.23, 2.02, 6.09, 6.97, 0.15, 0.77, 4.03, 2.41,
    6.75, 7.51, 1.93, 0.10, 5.99, 6.33, 9.06, 2.76, 0.98, 2.36, 0.15, 1.97, 0.07,
];

/// Ukrainian letter frequencies in percent, in alphabet order
const UKRAINIAN_PERCENTAGES: [f64; 33] = [
    7.2, 1.7, 5.2, 1.6, 0.01, 3.5, 1.7, 0.8, 0.9, 2.3, 6.1, 5.7, 0.6, 0.8, 3.5, 3.6, 3.1,
    6.5, 9.4, 2.9, 4.7, 4.1, 5.5, 4.0, 0.1, 1.2, 0.6, 1.8, 1.2, 0.1, 2.9, 0.4, 2.9,
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyDistribution {
    percentages: HashMap<char, f64>,
}

impl FrequencyDistribution {
    /// Exact letter percentages of `text` over the letters of `alphabet`.
    ///
    /// Shared symbols and foreign characters are not counted. A text without
    /// any letter gives 0 for every letter.
    pub fn measure(text: &str, alphabet: Alphabet) -> Self {
        let letters = alphabet.letters();
        let counts = count_letters(text, alphabet);
        let total: usize = counts.iter().sum();

        let percentages = letters
            .iter()
            .zip(counts)
            .map(|(&letter, count)| {
                let percentage = if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64 * 100.0
                };
                (letter, percentage)
            })
            .collect();

        Self { percentages }
    }

    /// Like [`measure`](Self::measure), rounded to whole percents.
    ///
    /// Used for candidate decryptions during key recovery.
    pub fn observed(text: &str, alphabet: Alphabet) -> Self {
        let mut distribution = Self::measure(text, alphabet);
        for percentage in distribution.percentages.values_mut() {
            *percentage = percentage.round();
        }
        distribution
    }

    /// Published natural-language frequencies for `alphabet`.
    pub fn builtin(alphabet: Alphabet) -> Self {
        let table: &[f64] = match alphabet {
            Alphabet::Latin => &ENGLISH_PERCENTAGES,
            Alphabet::Ukrainian => &UKRAINIAN_PERCENTAGES,
        };

        Self {
            percentages: alphabet.letters().iter().copied().zip(table.iter().copied()).collect(),
        }
    }

    /// Exact frequencies of a reference corpus in whatever alphabet it uses.
    ///
    /// A reference without recognizable letters yields an empty distribution,
    /// where every letter reads as 0.
    pub fn from_reference(text: &str) -> Self {
        match Alphabet::detect(text) {
            Ok(alphabet) => {
                tracing::debug!("Reference text detected as {}", alphabet);
                Self::measure(text, alphabet)
            }
            Err(_) => {
                tracing::warn!("Reference text has no recognizable letters; using an all-zero distribution");
                Self::default()
            }
        }
    }

    /// Percentage for `letter`, case-insensitive; 0 when absent.
    pub fn get(&self, letter: char) -> f64 {
        self.percentages
            .get(&fold_case(letter))
            .copied()
            .unwrap_or(0.0)
    }

    /// Sum of all percentages. 100 (within rounding) for any text with letters.
    pub fn total(&self) -> f64 {
        self.percentages.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.percentages.values().all(|&p| p == 0.0)
    }
}

fn count_letters(text: &str, alphabet: Alphabet) -> Vec<usize> {
    let mut counts = vec![0usize; alphabet.letter_count()];
    for c in text.chars() {
        if let Some(position) = alphabet.letter_position(c) {
            counts[position] += 1;
        }
    }
    counts
}
