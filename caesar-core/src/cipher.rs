//! Caesar shift over a detected alphabet

use crate::alphabet::Alphabet;
use crate::error::Result;

/// Encrypts `text`, detecting its alphabet first.
///
/// Any integer key is accepted; it is reduced modulo the alphabet's symbol count.
pub fn encrypt(text: &str, key: i64) -> Result<String> {
    let alphabet = Alphabet::detect(text)?;
    Ok(encrypt_with(text, alphabet, key))
}

/// Decrypts `text`, detecting its alphabet first.
pub fn decrypt(text: &str, key: i64) -> Result<String> {
    let alphabet = Alphabet::detect(text)?;
    Ok(decrypt_with(text, alphabet, key))
}

/// Shifts every symbol of `alphabet` found in `text` forward by `key` positions.
///
/// The rotation runs over letters and shared symbols together, so a letter
/// near the end of the alphabet can become punctuation and vice versa.
/// Characters outside the alphabet are copied unchanged. Upper-case input
/// produces upper-case output where the target symbol has a case.
pub fn encrypt_with(text: &str, alphabet: Alphabet, key: i64) -> String {
    let modulus = alphabet.symbol_count();
    let offset = key.rem_euclid(modulus as i64) as usize;

    text.chars()
        .map(|c| shift_char(c, alphabet, offset))
        .collect()
}

/// Reverses [`encrypt_with`]: encryption with the negated key.
pub fn decrypt_with(text: &str, alphabet: Alphabet, key: i64) -> String {
    let modulus = alphabet.symbol_count() as i64;
    // reduce before negating so i64::MIN cannot overflow
    encrypt_with(text, alphabet, -key.rem_euclid(modulus))
}

fn shift_char(c: char, alphabet: Alphabet, offset: usize) -> char {
    let Some(position) = alphabet.position_of(c) else {
        return c;
    };

    let target = (position + offset) % alphabet.symbol_count();
    match alphabet.symbol_at(target) {
        Some(shifted) if c.is_uppercase() => shifted.to_uppercase().next().unwrap_or(shifted),
        Some(shifted) => shifted,
        None => c,
    }
}
