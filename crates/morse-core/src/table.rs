//! Morse lookup table.
//!
//! International Morse for A-Z, 0-9 and a small punctuation set.
//! Space is mapped to the word-gap marker `/`.

/// Letter-gap marker between symbols in a Morse sequence.
pub const LETTER_GAP: char = ' ';

/// Word-gap marker standing in for a space character.
pub const WORD_GAP: char = '/';

/// Morse lookup table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MorseEntry {
    /// Character (uppercase)
    pub ch: char,
    /// Dot/dash code, or `/` for space
    pub code: &'static str,
}

const fn entry(ch: char, code: &'static str) -> MorseEntry {
    MorseEntry { ch, code }
}

/// Morse table.
pub static MORSE_TABLE: &[MorseEntry] = &[
    entry('A', ".-"),
    entry('B', "-..."),
    entry('C', "-.-."),
    entry('D', "-.."),
    entry('E', "."),
    entry('F', "..-."),
    entry('G', "--."),
    entry('H', "...."),
    entry('I', ".."),
    entry('J', ".---"),
    entry('K', "-.-"),
    entry('L', ".-.."),
    entry('M', "--"),
    entry('N', "-."),
    entry('O', "---"),
    entry('P', ".--."),
    entry('Q', "--.-"),
    entry('R', ".-."),
    entry('S', "..."),
    entry('T', "-"),
    entry('U', "..-"),
    entry('V', "...-"),
    entry('W', ".--"),
    entry('X', "-..-"),
    entry('Y', "-.--"),
    entry('Z', "--.."),
    entry('1', ".----"),
    entry('2', "..---"),
    entry('3', "...--"),
    entry('4', "....-"),
    entry('5', "....."),
    entry('6', "-...."),
    entry('7', "--..."),
    entry('8', "---.."),
    entry('9', "----."),
    entry('0', "-----"),
    entry(' ', "/"),
    entry('.', ".-.-.-"),
    entry(',', "--..--"),
    entry('?', "..--.."),
    entry('!', "-.-.--"),
];

/// Find the table entry for an already-uppercased character.
pub fn lookup(ch: char) -> Option<&'static MorseEntry> {
    MORSE_TABLE.iter().find(|e| e.ch == ch)
}

/// Morse code for a character, case-insensitive.
pub fn symbol(ch: char) -> Option<&'static str> {
    lookup(ch.to_ascii_uppercase()).map(|e| e.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_letters_and_digits() {
        assert_eq!(lookup('S').map(|e| e.code), Some("..."));
        assert_eq!(lookup('0').map(|e| e.code), Some("-----"));
        assert!(lookup('s').is_none());
    }

    #[test]
    fn test_symbol_is_case_insensitive() {
        assert_eq!(symbol('q'), Some("--.-"));
        assert_eq!(symbol('Q'), Some("--.-"));
    }

    #[test]
    fn test_space_maps_to_word_gap() {
        assert_eq!(symbol(' '), Some("/"));
    }

    #[test]
    fn test_unmapped_characters() {
        assert!(symbol('@').is_none());
        assert!(symbol('é').is_none());
        assert!(symbol('\n').is_none());
    }

    #[test]
    fn test_table_codes_use_only_dots_and_dashes() {
        for e in MORSE_TABLE.iter().filter(|e| e.ch != ' ') {
            assert!(!e.code.is_empty());
            assert!(e.code.chars().all(|c| c == '.' || c == '-'), "bad code for {}", e.ch);
        }
    }

    #[test]
    fn test_table_has_no_duplicate_characters() {
        for (i, a) in MORSE_TABLE.iter().enumerate() {
            for b in &MORSE_TABLE[i + 1..] {
                assert_ne!(a.ch, b.ch);
            }
        }
    }
}
