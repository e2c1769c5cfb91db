//! Morse Signal Core
//!
//! Deterministic text encoding pipeline for the Morse front end.
//! This crate is `no_std` (with `alloc`) so the same code runs natively
//! in tests and inside the WASM bindings.
//!
//! # Modules
//!
//! - [`table`] - Morse lookup table
//! - [`encoder`] - Text normalizer and Morse encoder
//! - [`pulse`] - Pulse timeline generator
//! - [`binary`] - 8-bit binary framer
//! - [`tone`] - Tone events and gain envelopes
//! - [`scheduler`] - Audio scheduler, output/timer traits, playback gate
//! - [`synth`] - Offline PCM rendering of scheduled tones
//! - [`numeric`] - Fibonacci and prime-factor encodings
//! - [`message`] - All derived outputs for one message

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod binary;
pub mod config;
pub mod encoder;
pub mod message;
pub mod numeric;
pub mod pulse;
pub mod scheduler;
pub mod synth;
pub mod table;
pub mod tone;

pub use binary::{frame, frame_bytes, framed, to_binary, try_to_binary, ByteRole, FrameError};
pub use config::ScheduleConfig;
pub use encoder::{encode, normalize};
pub use message::EncodedMessage;
pub use pulse::{pulse_units, to_pulse, to_pulse_levels, Element};
pub use scheduler::{
    plan, total_units, AudioOutput, CompletionTimer, Detune, FixedDetune, ManualClock,
    ManualTimer, NoDetune, PlaybackGate, PlaybackToken, RandomDetune, RecordingOutput, Schedule,
    ScheduleError, Scheduler, TransmitError, Transmitter,
};
pub use synth::{Synthesizer, ToneOscillator};
pub use table::{lookup, symbol, MorseEntry, MORSE_TABLE};
pub use tone::{Envelope, ToneEvent, Waveform};
