//! `window.setTimeout` completion timer.

use morse_core::CompletionTimer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// One-shot timer on the browser event loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowTimer;

impl CompletionTimer for WindowTimer {
    fn arm(&mut self, delay_ms: f64, on_complete: Box<dyn FnOnce()>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window; completion callback dropped");
            return;
        };

        let callback = Closure::once_into_js(move || on_complete());
        let timeout = delay_ms.max(0.0).ceil() as i32;
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            timeout,
        ) {
            log::error!("setTimeout failed: {:?}", e);
        }
    }
}
