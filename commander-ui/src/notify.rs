//! Browser alerts.

use commander_randomizer::Notifier;
use wasm_bindgen::JsValue;

/// Modal `window.alert`, mirrored to the console
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        web_sys::console::error_1(&JsValue::from_str(message));

        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
