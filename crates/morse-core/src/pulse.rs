//! Pulse timeline generator.
//!
//! Expands a Morse sequence into one `'0'`/`'1'` character per time unit.
//!
//! | element            | timeline  |
//! |--------------------|-----------|
//! | dot                | `1`       |
//! | dash               | `111`     |
//! | gap inside letter  | `0`       |
//! | gap between letters| `000`     |
//! | word token `/`     | `0000000` |

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::{
    DASH_UNITS, DOT_UNITS, ELEMENT_GAP_UNITS, LETTER_GAP_UNITS, WORD_GAP_UNITS,
};
use crate::table::{LETTER_GAP, WORD_GAP};

/// One character of a Morse sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element {
    /// Dot (1 unit on)
    Dot,
    /// Dash (3 units on)
    Dash,
    /// Letter separator (3 units off)
    LetterGap,
    /// Word separator (7 units off)
    WordGap,
}

impl Element {
    /// Classify a Morse character.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Dot),
            '-' => Some(Self::Dash),
            LETTER_GAP => Some(Self::LetterGap),
            WORD_GAP => Some(Self::WordGap),
            _ => None,
        }
    }

    /// Length in units, excluding any trailing gap.
    #[must_use]
    pub const fn units(&self) -> u32 {
        match self {
            Self::Dot => DOT_UNITS,
            Self::Dash => DASH_UNITS,
            Self::LetterGap => LETTER_GAP_UNITS,
            Self::WordGap => WORD_GAP_UNITS,
        }
    }

    /// Check if this element produces a tone.
    #[must_use]
    pub const fn is_tone(&self) -> bool {
        matches!(self, Self::Dot | Self::Dash)
    }
}

/// Walk the timeline as runs of `(energized, units)`.
fn for_each_run(morse: &str, mut emit: impl FnMut(bool, u32)) {
    let mut tokens = morse.split(LETTER_GAP).peekable();

    while let Some(token) = tokens.next() {
        if token.len() == 1 && token.starts_with(WORD_GAP) {
            emit(false, WORD_GAP_UNITS);
        } else {
            let mut parts = token.chars().peekable();
            while let Some(part) = parts.next() {
                if let Some(element @ (Element::Dot | Element::Dash)) = Element::from_char(part) {
                    emit(true, element.units());
                }
                if parts.peek().is_some() {
                    emit(false, ELEMENT_GAP_UNITS);
                }
            }
        }

        if tokens.peek().is_some() {
            emit(false, LETTER_GAP_UNITS);
        }
    }
}

/// Build the pulse timeline string for a Morse sequence.
#[must_use]
pub fn to_pulse(morse: &str) -> String {
    let mut pulse = String::with_capacity(pulse_units(morse));
    for_each_run(morse, |on, units| {
        let ch = if on { '1' } else { '0' };
        pulse.extend(core::iter::repeat(ch).take(units as usize));
    });
    pulse
}

/// Length of the pulse timeline in units.
#[must_use]
pub fn pulse_units(morse: &str) -> usize {
    let mut total = 0usize;
    for_each_run(morse, |_, units| total += units as usize);
    total
}

/// Pulse timeline as booleans (`true` = energized).
#[must_use]
pub fn to_pulse_levels(morse: &str) -> Vec<bool> {
    let mut levels = Vec::with_capacity(pulse_units(morse));
    for_each_run(morse, |on, units| {
        levels.extend(core::iter::repeat(on).take(units as usize));
    });
    levels
}
