//! Supported alphabets and language detection
//!
//! Each alphabet is an ordered list of lower-case letters followed by a set of
//! symbols shared by every alphabet. Shift positions index into that combined
//! sequence, so the shared symbols take part in the rotation too.

use crate::error::{CaesarError, Result};

/// Symbols appended after the letters of every alphabet.
pub const SHARED_SYMBOLS: [char; 12] = ['.', '«', '»', ',', '"', ':', '!', '?', ' ', '/', '\\', '\''];

const LATIN_LETTERS: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const UKRAINIAN_LETTERS: [char; 33] = [
    'а', 'б', 'в', 'г', 'ґ', 'д', 'е', 'є', 'ж', 'з', 'и', 'і', 'ї', 'й', 'к', 'л', 'м',
    'н', 'о', 'п', 'р', 'с', 'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ь', 'ю', 'я',
];

/// The alphabet a text is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// English, 26 letters
    Latin,
    /// Ukrainian, 33 letters
    Ukrainian,
}

impl Alphabet {
    /// Detects the alphabet of `text`.
    ///
    /// Any ASCII letter makes the text Latin, even when Cyrillic letters are
    /// present as well. Otherwise any letter from the basic Cyrillic block or
    /// one of `ґ є і ї` makes it Ukrainian.
    ///
    /// # Errors
    ///
    /// Returns [`CaesarError::UnsupportedLanguage`] when neither check matches.
    pub fn detect(text: &str) -> Result<Self> {
        if text.chars().any(|c| c.is_ascii_alphabetic()) {
            Ok(Alphabet::Latin)
        } else if text.chars().any(is_ukrainian_letter) {
            Ok(Alphabet::Ukrainian)
        } else {
            Err(CaesarError::UnsupportedLanguage)
        }
    }

    /// Lower-case letters in alphabetical order.
    pub fn letters(self) -> &'static [char] {
        match self {
            Alphabet::Latin => &LATIN_LETTERS,
            Alphabet::Ukrainian => &UKRAINIAN_LETTERS,
        }
    }

    pub fn letter_count(self) -> usize {
        self.letters().len()
    }

    /// Letters plus shared symbols. This is the modulus of the shift.
    pub fn symbol_count(self) -> usize {
        self.letter_count() + SHARED_SYMBOLS.len()
    }

    /// Symbol at `position` of the combined sequence, if in range.
    pub fn symbol_at(self, position: usize) -> Option<char> {
        let letters = self.letters();
        if position < letters.len() {
            Some(letters[position])
        } else {
            SHARED_SYMBOLS.get(position - letters.len()).copied()
        }
    }

    /// Position of the case-folded `c` among letters and shared symbols.
    pub fn position_of(self, c: char) -> Option<usize> {
        let folded = fold_case(c);
        self.letter_position(folded).or_else(|| {
            SHARED_SYMBOLS
                .iter()
                .position(|&s| s == folded)
                .map(|p| p + self.letter_count())
        })
    }

    /// Position of the case-folded `c` among the letters only.
    pub fn letter_position(self, c: char) -> Option<usize> {
        let folded = fold_case(c);
        match self {
            Alphabet::Latin if folded.is_ascii_lowercase() => Some((folded as u8 - b'a') as usize),
            Alphabet::Latin => None,
            Alphabet::Ukrainian => UKRAINIAN_LETTERS.iter().position(|&l| l == folded),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Alphabet::Latin => "Latin",
            Alphabet::Ukrainian => "Ukrainian",
        }
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lower-cases `c` only when the mapping is a single character that maps
/// back to `c`. Compatibility forms such as `İ` or the Kelvin sign `K` stay
/// as they are, so they never match an alphabet letter.
pub(crate) fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) if folded == c || folded.to_uppercase().eq(std::iter::once(c)) => folded,
        _ => c,
    }
}

fn is_ukrainian_letter(c: char) -> bool {
    matches!(c, 'а'..='я' | 'А'..='Я' | 'ґ' | 'Ґ' | 'є' | 'Є' | 'і' | 'І' | 'ї' | 'Ї')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_latin() {
        assert_eq!(Alphabet::detect("Hello").unwrap(), Alphabet::Latin);
    }

    #[test]
    fn test_detect_ukrainian() {
        assert_eq!(Alphabet::detect("Привіт").unwrap(), Alphabet::Ukrainian);
        assert_eq!(Alphabet::detect("ЇЖАК").unwrap(), Alphabet::Ukrainian);
        assert_eq!(Alphabet::detect("ґ").unwrap(), Alphabet::Ukrainian);
    }

    #[test]
    fn test_detect_unsupported() {
        assert!(matches!(
            Alphabet::detect("12345!!!"),
            Err(CaesarError::UnsupportedLanguage)
        ));
        assert!(matches!(
            Alphabet::detect(""),
            Err(CaesarError::UnsupportedLanguage)
        ));
    }

    #[test]
    fn test_mixed_text_resolves_to_latin() {
        assert_eq!(Alphabet::detect("Привіт, world").unwrap(), Alphabet::Latin);
    }

    #[test]
    fn test_counts() {
        assert_eq!(Alphabet::Latin.letter_count(), 26);
        assert_eq!(Alphabet::Latin.symbol_count(), 38);
        assert_eq!(Alphabet::Ukrainian.letter_count(), 33);
        assert_eq!(Alphabet::Ukrainian.symbol_count(), 45);
    }

    #[test]
    fn test_positions_are_case_insensitive() {
        assert_eq!(Alphabet::Latin.position_of('a'), Some(0));
        assert_eq!(Alphabet::Latin.position_of('Z'), Some(25));
        assert_eq!(Alphabet::Latin.position_of('.'), Some(26));
        assert_eq!(Alphabet::Latin.position_of('\''), Some(37));
        assert_eq!(Alphabet::Latin.position_of('7'), None);
        assert_eq!(Alphabet::Ukrainian.position_of('Ґ'), Some(4));
        assert_eq!(Alphabet::Ukrainian.position_of('я'), Some(32));
        assert_eq!(Alphabet::Ukrainian.position_of(' '), Some(41));
    }

    #[test]
    fn test_letter_position_ignores_shared_symbols() {
        assert_eq!(Alphabet::Latin.letter_position('q'), Some(16));
        assert_eq!(Alphabet::Latin.letter_position(','), None);
        assert_eq!(Alphabet::Latin.letter_position('ж'), None);
        assert_eq!(Alphabet::Ukrainian.letter_position('Ж'), Some(8));
        assert_eq!(Alphabet::Ukrainian.letter_position('ы'), None);
    }

    #[test]
    fn test_compatibility_letters_are_not_folded() {
        // dotted capital I and the Kelvin sign lower-case to Latin letters
        assert_eq!(Alphabet::Latin.position_of('\u{130}'), None);
        assert_eq!(Alphabet::Latin.letter_position('\u{212A}'), None);
        assert_eq!(fold_case('\u{212A}'), '\u{212A}');
        assert_eq!(fold_case('K'), 'k');
        assert_eq!(fold_case('Ї'), 'ї');
    }

    #[test]
    fn test_symbol_at_round_trips_position() {
        for alphabet in [Alphabet::Latin, Alphabet::Ukrainian] {
            for position in 0..alphabet.symbol_count() {
                let symbol = alphabet.symbol_at(position).unwrap();
                assert_eq!(alphabet.position_of(symbol), Some(position));
            }
            assert_eq!(alphabet.symbol_at(alphabet.symbol_count()), None);
        }
    }
}
