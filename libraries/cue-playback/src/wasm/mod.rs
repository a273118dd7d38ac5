//! WASM bindings for cue-playback
//!
//! Binds the platform-agnostic player to the browser: an `<audio>` element
//! as the media handle, `window.localStorage` as the key-value store, and
//! the page's named elements as the presentation surface.

pub mod media;
pub mod player;
pub mod storage;
pub mod surface;

pub use media::HtmlAudioMedia;
pub use player::WebPlayer;
pub use storage::LocalStorage;
pub use surface::DomSurface;

use wasm_bindgen::JsValue;

/// Log an error to the browser console
pub(crate) fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

/// Render a JS exception for logs and error values
pub(crate) fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
