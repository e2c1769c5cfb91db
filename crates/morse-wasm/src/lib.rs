//! WASM bindings for the Morse encoder.
//!
//! Exposes the text transforms to JavaScript and plays Morse through the
//! Web Audio API.
//!
//! ```js
//! import init, { encode, framedBinary, MorsePlayer } from "./morse_wasm.js";
//! await init();
//! const player = new MorsePlayer();
//! const seconds = await player.play(encode("SOS"), () => console.log("done"), false);
//! ```

mod audio;
mod logging;
mod player;
mod timer;

pub use audio::WebAudioOutput;
pub use player::MorsePlayer;
pub use timer::WindowTimer;

use morse_core::EncodedMessage;
use wasm_bindgen::prelude::*;

/// Encode text as a Morse sequence.
#[wasm_bindgen]
pub fn encode(text: &str) -> String {
    morse_core::encode(text)
}

/// Pulse timeline (`1` on, `0` off) for a Morse sequence.
#[wasm_bindgen(js_name = toPulse)]
pub fn to_pulse(morse: &str) -> String {
    morse_core::to_pulse(morse)
}

/// Unframed 8-bit binary of the text.
#[wasm_bindgen(js_name = toBinary)]
pub fn to_binary(text: &str) -> String {
    morse_core::to_binary(text)
}

/// Wrap a binary string in start/end markers.
#[wasm_bindgen]
pub fn frame(binary: &str) -> String {
    morse_core::frame(binary)
}

/// Framed 8-bit binary of the text.
#[wasm_bindgen(js_name = framedBinary)]
pub fn framed_binary(text: &str) -> String {
    morse_core::framed(text)
}

/// First `length` Fibonacci numbers.
#[wasm_bindgen]
pub fn fibonacci(length: usize) -> Vec<u64> {
    morse_core::numeric::fibonacci(length)
}

/// Prime factors of `num`, ascending.
#[wasm_bindgen(js_name = primeFactors)]
pub fn prime_factors(num: u32) -> Vec<u32> {
    morse_core::numeric::prime_factors(num)
}

/// Install the console logger at `level` (`error` .. `trace`, or `off`).
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) {
    logging::init(logging::parse_level(level));
}

/// All derived forms of one message.
#[wasm_bindgen]
pub struct EncodedMessageWasm {
    inner: EncodedMessage,
}

#[wasm_bindgen]
impl EncodedMessageWasm {
    /// Encode `text`.
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str) -> Self {
        Self {
            inner: EncodedMessage::new(text),
        }
    }

    /// Source text.
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.inner.text.clone()
    }

    /// Morse sequence.
    #[wasm_bindgen(getter)]
    pub fn morse(&self) -> String {
        self.inner.morse.clone()
    }

    /// Pulse timeline.
    #[wasm_bindgen(getter)]
    pub fn pulse(&self) -> String {
        self.inner.pulse.clone()
    }

    /// Unframed binary.
    #[wasm_bindgen(getter)]
    pub fn binary(&self) -> String {
        self.inner.binary.clone()
    }

    /// Framed binary.
    #[wasm_bindgen(getter)]
    pub fn framed(&self) -> String {
        self.inner.framed.clone()
    }

    /// Whether the Morse sequence has anything to play.
    #[wasm_bindgen(getter)]
    pub fn playable(&self) -> bool {
        self.inner.is_playable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exports_match_core() {
        assert_eq!(encode("sos"), "... --- ...");
        assert_eq!(to_pulse("..."), "10101");
        assert_eq!(framed_binary("A"), "11111111 01000001 00000000");
        assert_eq!(frame(&to_binary("")), "11111111  00000000");
        assert_eq!(prime_factors(12), [2, 2, 3]);
        assert_eq!(fibonacci(5), [1, 1, 2, 3, 5]);
    }

    #[test]
    fn test_message_getters() {
        let msg = EncodedMessageWasm::new("E E");
        assert_eq!(msg.morse(), ". / .");
        assert_eq!(msg.pulse(), "100000000000001");
        assert!(msg.playable());
        assert_eq!(msg.text(), "E E");
    }
}
