//! Tests for the text encoding pipeline
//!
//! Covers the Morse encoder, pulse generator and binary framer.

use morse_core::binary::{END_MARKER, START_MARKER};
use morse_core::{
    encode, frame, frame_bytes, framed, normalize, pulse_units, to_binary, to_pulse,
    try_to_binary, ByteRole, EncodedMessage, FrameError,
};

// ============================================================================
// Morse Encoder Tests
// ============================================================================

#[test]
fn test_encode_sos() {
    assert_eq!(encode("SOS"), "... --- ...");
}

#[test]
fn test_encode_is_case_insensitive() {
    assert_eq!(encode("Hello"), encode("HELLO"));
    assert_eq!(normalize("Hello"), "HELLO");
}

#[test]
fn test_encode_empty_input() {
    assert_eq!(encode(""), "");
}

#[test]
fn test_encode_all_unmapped() {
    assert_eq!(encode("@@@"), "");
    assert_eq!(encode("#$%^&*"), "");
}

#[test]
fn test_encode_hello_world_has_one_word_token() {
    let morse = encode("HELLO WORLD");
    let tokens: Vec<&str> = morse.split(' ').collect();

    assert_eq!(tokens.iter().filter(|t| **t == "/").count(), 1);
    // five letters of HELLO come first
    assert_eq!(tokens[5], "/");
    assert_eq!(morse, ".... . .-.. .-.. --- / .-- --- .-. .-.. -..");
}

#[test]
fn test_encode_digits() {
    assert_eq!(encode("1234567890"), ".---- ..--- ...-- ....- ..... -.... --... ---.. ----. -----");
}

#[test]
fn test_encode_drops_unmapped_between_letters() {
    assert_eq!(encode("S#O#S"), encode("SOS"));
}

// ============================================================================
// Pulse Generator Tests
// ============================================================================

#[test]
fn test_pulse_sos_regression() {
    assert_eq!(to_pulse(&encode("SOS")), "101010001110111011100010101");
}

#[test]
fn test_pulse_word_gap() {
    // E / T
    assert_eq!(to_pulse(&encode("E T")), "10000000000000111");
}

#[test]
fn test_pulse_has_no_trailing_gap() {
    let pulse = to_pulse(&encode("PARIS"));
    assert!(pulse.starts_with('1'));
    assert!(pulse.ends_with('1'));
}

#[test]
fn test_pulse_alphabet_only_binary_digits() {
    let pulse = to_pulse(&encode("The quick brown fox, 42!"));
    assert!(pulse.chars().all(|c| c == '0' || c == '1'));
    assert_eq!(pulse.len(), pulse_units(&encode("The quick brown fox, 42!")));
}

#[test]
fn test_pulse_paris_letter_and_word_spacing() {
    // letter gap, word gap, letter gap between the two words
    assert_eq!(pulse_units(&encode("PARIS")), 43);
    assert_eq!(pulse_units(&encode("PARIS PARIS")), 43 + 3 + 7 + 3 + 43);
}

// ============================================================================
// Binary Framer Tests
// ============================================================================

#[test]
fn test_binary_length_property() {
    for text in ["a", "Hi", "Hello, World!", "0123456789", "ÿþý"] {
        let n = text.chars().count();
        assert_eq!(to_binary(text).len(), 8 * n + (n - 1), "text {:?}", text);
    }
}

#[test]
fn test_binary_length_with_wide_characters() {
    let text = "naïve – ✓";
    let n = text.chars().count();
    assert_eq!(to_binary(text).len(), 8 * n + (n - 1));
}

#[test]
fn test_frame_markers() {
    for text in ["", "x", "SOS", "hello world"] {
        let framed = framed(text);
        assert!(framed.starts_with("11111111 "), "{:?}", framed);
        assert!(framed.ends_with(" 00000000"), "{:?}", framed);
    }
}

#[test]
fn test_frame_empty_exact() {
    assert_eq!(frame(&to_binary("")), "11111111  00000000");
}

#[test]
fn test_frame_is_plain_concatenation() {
    assert_eq!(frame("abc"), format!("{} abc {}", START_MARKER, END_MARKER));
}

#[test]
fn test_binary_preserves_case() {
    assert_eq!(to_binary("a"), "01100001");
    assert_eq!(to_binary("A"), "01000001");
}

#[test]
fn test_binary_boundary_policy() {
    // U+00FF is the last code point that fits.
    assert_eq!(to_binary("ÿ"), "11111111");
    // U+0100 is substituted with '?'.
    assert_eq!(to_binary("Ā"), "00111111");
    assert_eq!(
        try_to_binary("AĀ"),
        Err(FrameError::Unrepresentable { ch: 'Ā', position: 1 })
    );
}

#[test]
fn test_frame_bytes_marks_sentinels() {
    let framed = framed("OK");
    let roles: Vec<ByteRole> = frame_bytes(&framed).map(|(_, role)| role).collect();
    assert_eq!(roles, [ByteRole::Start, ByteRole::Data, ByteRole::Data, ByteRole::End]);
}

// ============================================================================
// Determinism Tests
// ============================================================================

#[test]
fn test_transforms_are_repeatable() {
    let text = "CQ CQ DE N0CALL?";
    let first = EncodedMessage::new(text);
    for _ in 0..10 {
        assert_eq!(EncodedMessage::new(text), first);
        assert_eq!(encode(text), first.morse);
        assert_eq!(to_pulse(&first.morse), first.pulse);
        assert_eq!(to_binary(text), first.binary);
    }
}
