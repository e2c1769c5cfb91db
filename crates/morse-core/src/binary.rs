//! 8-bit binary framer.
//!
//! Each character becomes its code point in base 2, zero-padded to eight
//! digits. The framed form wraps the bytes in `11111111` / `00000000`
//! sentinels.
//!
//! Code points above `0xFF` do not fit in a byte. [`to_binary`] replaces
//! them with `?` so every byte stays eight digits wide; [`try_to_binary`]
//! reports them instead.

use alloc::string::String;
use core::fmt::Write;

use thiserror::Error;

/// Start sentinel byte.
pub const START_MARKER: &str = "11111111";

/// End sentinel byte.
pub const END_MARKER: &str = "00000000";

/// Stand-in for characters outside `0..=0xFF`.
pub const SUBSTITUTE: char = '?';

const BYTE_WIDTH: usize = 8;

/// Binary framing error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FrameError {
    /// Character code does not fit in eight bits
    #[error("character {ch:?} at position {position} does not fit in 8 bits")]
    Unrepresentable {
        /// Offending character
        ch: char,
        /// Character index in the input
        position: usize,
    },
}

/// Role of a byte inside a framed message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteRole {
    /// Leading sentinel
    Start,
    /// Payload byte
    Data,
    /// Trailing sentinel
    End,
}

fn byte_of(ch: char) -> Option<u8> {
    u8::try_from(u32::from(ch)).ok()
}

fn push_byte(out: &mut String, code: u8) {
    let mut byte: heapless::String<BYTE_WIDTH> = heapless::String::new();
    // Eight binary digits always fit.
    let _ = write!(byte, "{code:08b}");
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(&byte);
}

/// Convert text to space-separated 8-bit bytes.
///
/// No case folding is applied. Characters above `0xFF` are encoded as `?`.
#[must_use]
pub fn to_binary(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * (BYTE_WIDTH + 1));
    for (position, ch) in text.chars().enumerate() {
        let code = byte_of(ch).unwrap_or_else(|| {
            log::debug!("binary: substituting {ch:?} at {position}");
            SUBSTITUTE as u8
        });
        push_byte(&mut out, code);
    }
    out
}

/// Convert text to space-separated 8-bit bytes, rejecting wide characters.
///
/// # Errors
/// Returns [`FrameError::Unrepresentable`] for the first character whose
/// code point is above `0xFF`.
pub fn try_to_binary(text: &str) -> Result<String, FrameError> {
    let mut out = String::with_capacity(text.len() * (BYTE_WIDTH + 1));
    for (position, ch) in text.chars().enumerate() {
        let code = byte_of(ch).ok_or(FrameError::Unrepresentable { ch, position })?;
        push_byte(&mut out, code);
    }
    Ok(out)
}

/// Wrap a binary string with the start and end sentinels.
#[must_use]
pub fn frame(binary: &str) -> String {
    let mut out = String::with_capacity(binary.len() + 2 * (BYTE_WIDTH + 1));
    out.push_str(START_MARKER);
    out.push(' ');
    out.push_str(binary);
    out.push(' ');
    out.push_str(END_MARKER);
    out
}

/// `frame(to_binary(text))`.
#[must_use]
pub fn framed(text: &str) -> String {
    frame(&to_binary(text))
}

/// Split a framed string into bytes tagged with their role.
///
/// Empty fields (the empty-payload frame has two adjacent spaces) are
/// skipped. The first byte is the start sentinel and the last is the end
/// sentinel.
pub fn frame_bytes(framed: &str) -> impl Iterator<Item = (&str, ByteRole)> {
    let count = framed.split(' ').filter(|b| !b.is_empty()).count();
    framed
        .split(' ')
        .filter(|b| !b.is_empty())
        .enumerate()
        .map(move |(i, byte)| {
            let role = if i == 0 {
                ByteRole::Start
            } else if i + 1 == count {
                ByteRole::End
            } else {
                ByteRole::Data
            };
            (byte, role)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_ascii_bytes() {
        assert_eq!(to_binary("A"), "01000001");
        assert_eq!(to_binary("Hi"), "01001000 01101001");
    }

    #[test]
    fn test_no_case_folding() {
        assert_ne!(to_binary("a"), to_binary("A"));
    }

    #[test]
    fn test_empty_frame_spacing() {
        assert_eq!(to_binary(""), "");
        assert_eq!(framed(""), "11111111  00000000");
    }

    #[test]
    fn test_latin1_upper_bound() {
        assert_eq!(to_binary("\u{ff}"), "11111111");
        assert_eq!(try_to_binary("\u{ff}"), Ok(String::from("11111111")));
    }

    #[test]
    fn test_wide_character_substituted() {
        assert_eq!(to_binary("\u{100}"), "00111111");
        assert_eq!(to_binary("a€"), "01100001 00111111");
    }

    #[test]
    fn test_wide_character_rejected() {
        assert_eq!(
            try_to_binary("ok€"),
            Err(FrameError::Unrepresentable { ch: '€', position: 2 })
        );
    }

    #[test]
    fn test_frame_bytes_roles() {
        let framed_a = framed("A");
        let bytes: Vec<_> = frame_bytes(&framed_a).collect();
        assert_eq!(
            bytes,
            [
                ("11111111", ByteRole::Start),
                ("01000001", ByteRole::Data),
                ("00000000", ByteRole::End),
            ]
        );
    }

    #[test]
    fn test_frame_bytes_empty_payload() {
        let roles: Vec<_> = frame_bytes(&framed("")).map(|(_, r)| r).collect();
        assert_eq!(roles, [ByteRole::Start, ByteRole::End]);
    }
}
