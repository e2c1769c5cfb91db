//! Text normalizer and Morse encoder.

use alloc::string::String;

use crate::table::{lookup, LETTER_GAP};

/// Uppercase the input. Nothing else is changed.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_uppercase()
}

/// Encode text as a Morse sequence.
///
/// Symbols are joined with a single space; a space in the input becomes
/// the `/` word-gap token. Characters missing from the table are dropped
/// without leaving a gap.
#[must_use]
pub fn encode(text: &str) -> String {
    let mut morse = String::with_capacity(text.len() * 5);

    for code in normalize(text).chars().filter_map(|ch| lookup(ch).map(|e| e.code)) {
        if !morse.is_empty() {
            morse.push(LETTER_GAP);
        }
        morse.push_str(code);
    }

    morse
}
