//! Every derived output for one message, recomputed from the text.

use alloc::string::String;

use crate::binary::{frame, to_binary};
use crate::encoder::encode;
use crate::pulse::to_pulse;

/// Morse, pulse and binary forms of a message.
///
/// The Morse/pulse branch and the binary branch only share the input
/// text. Build a new value whenever the text changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodedMessage {
    /// Source text, as entered
    pub text: String,
    /// Morse sequence
    pub morse: String,
    /// Pulse timeline derived from `morse`
    pub pulse: String,
    /// Unframed binary of `text`
    pub binary: String,
    /// `binary` with start/end sentinels
    pub framed: String,
}

impl EncodedMessage {
    /// Encode `text` through both branches.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let morse = encode(text);
        let pulse = to_pulse(&morse);
        let binary = to_binary(text);
        let framed = frame(&binary);

        Self {
            text: String::from(text),
            morse,
            pulse,
            binary,
            framed,
        }
    }

    /// Whether there is anything to play.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        !self.morse.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_branches() {
        let msg = EncodedMessage::new("Hi");
        assert_eq!(msg.morse, ".... ..");
        assert_eq!(msg.pulse, "1010101000101");
        assert_eq!(msg.binary, "01001000 01101001");
        assert_eq!(msg.framed, "11111111 01001000 01101001 00000000");
        assert!(msg.is_playable());
    }

    #[test]
    fn test_unmapped_text_still_has_binary() {
        let msg = EncodedMessage::new("@");
        assert!(msg.morse.is_empty());
        assert!(msg.pulse.is_empty());
        assert_eq!(msg.binary, "01000000");
        assert!(!msg.is_playable());
    }
}
