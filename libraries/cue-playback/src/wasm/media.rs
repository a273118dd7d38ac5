//! `<audio>` element as a `MediaHandle`

use cue_core::{known_time, MediaHandle};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlAudioElement};

use super::{console_error, describe};

/// Media handle backed by a detached `<audio>` element
pub struct HtmlAudioMedia {
    audio: HtmlAudioElement,
    on_play_rejected: Closure<dyn FnMut(JsValue)>,
}

impl HtmlAudioMedia {
    /// Create a new, unattached audio element
    pub fn create(document: &Document) -> Result<Self, JsValue> {
        let audio: HtmlAudioElement = document.create_element("audio")?.dyn_into()?;
        audio.set_attribute("preload", "metadata")?;
        let on_play_rejected = Closure::wrap(Box::new(|reason: JsValue| {
            console_error(&format!("play() rejected: {}", describe(&reason)));
        }) as Box<dyn FnMut(JsValue)>);
        Ok(Self {
            audio,
            on_play_rejected,
        })
    }

    /// The element (for registering notification listeners)
    pub fn element(&self) -> &HtmlAudioElement {
        &self.audio
    }
}

impl MediaHandle for HtmlAudioMedia {
    fn set_source(&mut self, url: &str) {
        self.audio.set_src(url);
    }

    fn play(&mut self) {
        // The promise rejects when autoplay is blocked; the element then
        // raises `pause` on its own.
        match self.audio.play() {
            Ok(promise) => {
                let _ = promise.catch(&self.on_play_rejected);
            }
            Err(e) => console_error(&format!("play() failed: {}", describe(&e))),
        }
    }

    fn pause(&mut self) {
        if let Err(e) = self.audio.pause() {
            console_error(&format!("pause() failed: {}", describe(&e)));
        }
    }

    fn current_time(&self) -> Option<f64> {
        known_time(self.audio.current_time())
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn duration(&self) -> Option<f64> {
        known_time(self.audio.duration())
    }
}
