//! Web Audio API output.
//!
//! Each tone is one `OscillatorNode -> GainNode -> destination` chain,
//! started and stopped on the `AudioContext` clock. The context is created
//! on first use so it is born inside a user gesture.
//!
//! Tones are only accepted while the context is running. Callers await
//! [`WebAudioOutput::resume`] first; a suspended clock stands still and
//! would put the completion timer ahead of the audio.

use morse_core::{AudioOutput, ToneEvent, Waveform};
use wasm_bindgen::prelude::*;
use web_sys::{AudioContext, AudioContextState, AudioScheduledSourceNode, OscillatorType};

/// Audio output backed by a browser `AudioContext`.
#[derive(Default)]
pub struct WebAudioOutput {
    ctx: Option<AudioContext>,
}

impl WebAudioOutput {
    /// Output with no context yet.
    pub fn new() -> Self {
        Self { ctx: None }
    }

    /// Whether the context has been created.
    pub fn is_open(&self) -> bool {
        self.ctx.is_some()
    }

    /// Create the context if needed and ask it to resume.
    ///
    /// Returns the resume promise when the context was suspended.
    pub fn resume(&mut self) -> Result<Option<js_sys::Promise>, JsValue> {
        let ctx = self.context()?;
        if ctx.state() == AudioContextState::Suspended {
            return ctx.resume().map(Some);
        }
        Ok(None)
    }

    /// Close the context. The next activation opens a fresh one.
    pub fn close(&mut self) {
        if let Some(ctx) = self.ctx.take() {
            if let Err(e) = ctx.close() {
                log::warn!("audio context close failed: {:?}", e);
            }
        }
    }

    fn context(&mut self) -> Result<&AudioContext, JsValue> {
        if self.ctx.is_none() {
            let ctx = AudioContext::new()?;
            log::info!("audio context opened at {} Hz", ctx.sample_rate());
            self.ctx = Some(ctx);
        }
        self.ctx.as_ref().ok_or_else(|| JsValue::from_str("no audio context"))
    }
}

/// Whether a context in `state` can take tones now.
pub(crate) fn accepts_tones(state: AudioContextState) -> bool {
    state == AudioContextState::Running
}

fn oscillator_type(waveform: Waveform) -> OscillatorType {
    match waveform {
        Waveform::Sine => OscillatorType::Sine,
        Waveform::Sawtooth => OscillatorType::Sawtooth,
    }
}

impl AudioOutput for WebAudioOutput {
    type Error = JsValue;

    fn current_time(&self) -> f64 {
        self.ctx.as_ref().map_or(0.0, |ctx| ctx.current_time())
    }

    fn ensure_active(&mut self) -> Result<(), JsValue> {
        let state = self.context()?.state();
        if accepts_tones(state) {
            Ok(())
        } else {
            Err(JsValue::from_str(&format!(
                "audio context is {:?}; await ensureActive() before playing",
                state
            )))
        }
    }

    fn play_tone(&mut self, tone: &ToneEvent) -> Result<(), JsValue> {
        let ctx = self
            .ctx
            .as_ref()
            .ok_or_else(|| JsValue::from_str("audio output not active"))?;

        let osc = ctx.create_oscillator()?;
        osc.set_type(oscillator_type(tone.waveform));
        osc.frequency().set_value(tone.frequency_hz);

        let gain = ctx.create_gain()?;
        let param = gain.gain();
        let [attack_start, attack_end, release_start, release_end] = tone.envelope.points();
        param.set_value_at_time(attack_start.1, attack_start.0)?;
        param.linear_ramp_to_value_at_time(attack_end.1, attack_end.0)?;
        param.set_value_at_time(release_start.1, release_start.0)?;
        param.linear_ramp_to_value_at_time(release_end.1, release_end.0)?;

        // Connect: oscillator -> gain -> destination
        osc.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&ctx.destination())?;

        let source: &AudioScheduledSourceNode = &osc;
        source.start_with_when(tone.start_time)?;
        source.stop_with_when(tone.end_time())?;

        log::trace!(
            "{} tone {:.1} Hz at {:.3}s for {:.3}s",
            tone.waveform.as_str(),
            tone.frequency_hz,
            tone.start_time,
            tone.duration
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_running_context_accepts_tones() {
        assert!(accepts_tones(AudioContextState::Running));
        assert!(!accepts_tones(AudioContextState::Suspended));
        assert!(!accepts_tones(AudioContextState::Closed));
    }

    #[test]
    fn test_waveform_maps_to_oscillator_type() {
        assert_eq!(oscillator_type(Waveform::Sine), OscillatorType::Sine);
        assert_eq!(oscillator_type(Waveform::Sawtooth), OscillatorType::Sawtooth);
    }
}
