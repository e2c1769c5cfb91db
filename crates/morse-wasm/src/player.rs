//! Browser playback facade.

use std::cell::RefCell;
use std::rc::Rc;

use morse_core::{RandomDetune, Scheduler, Transmitter};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

use crate::audio::WebAudioOutput;
use crate::timer::WindowTimer;

type BrowserTransmitter = Transmitter<WebAudioOutput, WindowTimer, RandomDetune<SmallRng>>;

/// Plays Morse sequences through Web Audio, one at a time.
#[wasm_bindgen]
pub struct MorsePlayer {
    tx: Rc<RefCell<BrowserTransmitter>>,
}

#[wasm_bindgen]
impl MorsePlayer {
    /// Create a player. No audio context is opened until the first play.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let seed = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
        let detune = RandomDetune::new(SmallRng::seed_from_u64(seed));
        let scheduler = Scheduler::with_detune(WebAudioOutput::new(), WindowTimer, detune);

        Self {
            tx: Rc::new(RefCell::new(Transmitter::new(scheduler))),
        }
    }

    /// Schedule `morse` and call `on_complete` once it has finished.
    ///
    /// The returned promise waits for the audio context to run, then
    /// resolves with the playback length in seconds (lead-in included). It
    /// rejects when `morse` is empty, when a previous sequence is still
    /// playing, or when audio cannot be started.
    #[wasm_bindgen]
    pub fn play(
        &self,
        morse: String,
        on_complete: js_sys::Function,
        interference: bool,
    ) -> js_sys::Promise {
        let tx = Rc::clone(&self.tx);
        future_to_promise(async move {
            let resume = tx.borrow_mut().scheduler_mut().output_mut().resume()?;
            if let Some(promise) = resume {
                JsFuture::from(promise).await?;
            }

            let schedule = tx
                .borrow_mut()
                .transmit(&morse, interference, move || {
                    if let Err(e) = on_complete.call0(&JsValue::NULL) {
                        log::error!("completion callback threw: {:?}", e);
                    }
                })
                .map_err(|e| {
                    log::warn!("play refused: {}", e);
                    JsValue::from_str(&e.to_string())
                })?;

            log::info!(
                "playing {} tones for {:.2}s",
                schedule.tone_count(),
                schedule.elapsed_seconds()
            );
            Ok(JsValue::from_f64(schedule.elapsed_seconds()))
        })
    }

    /// Whether a sequence is currently playing.
    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.tx.borrow().is_playing()
    }

    /// Open (or resume) the audio context ahead of the first play.
    ///
    /// Call from a user gesture. The promise settles once the context runs.
    #[wasm_bindgen(js_name = ensureActive)]
    pub fn ensure_active(&self) -> js_sys::Promise {
        let tx = Rc::clone(&self.tx);
        future_to_promise(async move {
            let resume = tx.borrow_mut().scheduler_mut().output_mut().resume()?;
            if let Some(promise) = resume {
                JsFuture::from(promise).await?;
            }
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Close the audio context. A later play opens a new one.
    #[wasm_bindgen]
    pub fn close(&self) {
        self.tx.borrow_mut().scheduler_mut().output_mut().close();
    }
}

impl Default for MorsePlayer {
    fn default() -> Self {
        Self::new()
    }
}
