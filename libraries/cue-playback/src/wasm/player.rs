//! WASM-compatible player entry point

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use cue_core::TrackDescriptor;
use wasm_bindgen::{closure::Closure, prelude::*, JsCast};
use web_sys::{Document, MouseEvent};

use super::{
    console_error,
    media::HtmlAudioMedia,
    storage::LocalStorage,
    surface::{element, Dispatch, DomSurface},
};
use crate::{
    config::PlayerConfig,
    controller::{Controller, UiAction},
    events::MediaEvent,
    fraction_from_pointer,
    player::Player,
    view::PlayerView,
};

type App = Controller<HtmlAudioMedia, LocalStorage, DomSurface>;

/// Browser player
///
/// Mounts onto the page's elements (`playPauseBtn`, `cueBtn`, `progressBar`,
/// `progress`, `currentTime`, `duration`, `trackList`, `cueList`,
/// `currentTrackName`) and persists to `localStorage`. Keep the returned
/// object alive; dropping it detaches the listeners.
#[wasm_bindgen]
pub struct WebPlayer {
    app: Rc<RefCell<App>>,
    _listeners: Vec<Closure<dyn FnMut()>>,
    _seek_listener: Closure<dyn FnMut(MouseEvent)>,
}

#[wasm_bindgen]
impl WebPlayer {
    /// Mount with the built-in playlist
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebPlayer, JsValue> {
        Self::mount(PlayerConfig::default())
    }

    /// Mount with a playlist of `{ url, name }` objects
    #[wasm_bindgen(js_name = withPlaylist)]
    pub fn with_playlist(tracks: JsValue) -> Result<WebPlayer, JsValue> {
        let playlist: Vec<TrackDescriptor> = serde_wasm_bindgen::from_value(tracks)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse tracks: {}", e)))?;
        Self::mount(PlayerConfig {
            playlist,
            ..PlayerConfig::default()
        })
    }

    /// Start or pause playback
    #[wasm_bindgen(js_name = togglePlayPause)]
    pub fn toggle_play_pause(&self) -> Result<(), JsValue> {
        self.run(UiAction::TogglePlayPause)
    }

    /// Load a track by playlist index
    #[wasm_bindgen(js_name = loadTrack)]
    pub fn load_track(&self, index: usize) -> Result<(), JsValue> {
        self.run(UiAction::SelectTrack(index))
    }

    /// Mark a cue at the current time
    #[wasm_bindgen(js_name = addCue)]
    pub fn add_cue(&self) -> Result<(), JsValue> {
        self.run(UiAction::AddCue)
    }

    /// Current state as a plain object
    pub fn view(&self) -> JsValue {
        let Ok(app) = self.app.try_borrow() else {
            return JsValue::NULL;
        };
        serde_wasm_bindgen::to_value(&PlayerView::project(app.player())).unwrap_or(JsValue::NULL)
    }
}

impl WebPlayer {
    fn mount(config: PlayerConfig) -> Result<WebPlayer, JsValue> {
        console_error_panic_hook::set_once();

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let media = HtmlAudioMedia::create(&document)?;
        let audio = media.element().clone();
        let store = LocalStorage::open().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let player = Player::from_config(&config, media, store)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let app = build_app(document.clone(), player)?;
        let mut listeners = Vec::new();

        // Media notifications
        for event in MediaEvent::ALL {
            let weak = Rc::downgrade(&app);
            let handler = Closure::wrap(Box::new(move || {
                with_app(&weak, |app| {
                    if let Err(e) = app.media_event(event) {
                        console_error(&e.to_string());
                    }
                });
            }) as Box<dyn FnMut()>);
            audio.add_event_listener_with_callback(
                event.dom_type(),
                handler.as_ref().unchecked_ref(),
            )?;
            listeners.push(handler);
        }

        // Buttons
        for (id, action) in [
            ("playPauseBtn", UiAction::TogglePlayPause),
            ("cueBtn", UiAction::AddCue),
        ] {
            let weak = Rc::downgrade(&app);
            let handler = Closure::wrap(Box::new(move || {
                with_app(&weak, |app| report(app.dispatch(action)));
            }) as Box<dyn FnMut()>);
            element(&document, id)?
                .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
            listeners.push(handler);
        }

        // Progress bar
        let bar = element(&document, "progressBar")?;
        let seek_listener = {
            let weak = Rc::downgrade(&app);
            let bar = bar.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let rect = bar.get_bounding_client_rect();
                let Some(fraction) =
                    fraction_from_pointer(f64::from(event.client_x()), rect.left(), rect.width())
                else {
                    return;
                };
                with_app(&weak, |app| report(app.dispatch(UiAction::SeekFraction(fraction))));
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        bar.add_event_listener_with_callback("click", seek_listener.as_ref().unchecked_ref())?;

        Ok(WebPlayer {
            app,
            _listeners: listeners,
            _seek_listener: seek_listener,
        })
    }

    fn run(&self, action: UiAction) -> Result<(), JsValue> {
        let mut app = self
            .app
            .try_borrow_mut()
            .map_err(|_| JsValue::from_str("player is busy"))?;
        app.dispatch(action)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Build the controller with a surface whose row handlers point back at it
fn build_app(
    document: Document,
    player: Player<HtmlAudioMedia, LocalStorage>,
) -> Result<Rc<RefCell<App>>, JsValue> {
    let slot: Rc<RefCell<Option<Weak<RefCell<App>>>>> = Rc::new(RefCell::new(None));

    let dispatch: Dispatch = {
        let slot = Rc::clone(&slot);
        Rc::new(move |action: UiAction| {
            if let Some(weak) = slot.borrow().as_ref() {
                with_app(weak, |app| report(app.dispatch(action)));
            }
        })
    };

    let surface = DomSurface::new(document, dispatch)?;
    let app = Rc::new(RefCell::new(Controller::new(player, surface)));
    *slot.borrow_mut() = Some(Rc::downgrade(&app));
    Ok(app)
}

/// Run `f` against the app unless it is gone or already borrowed
fn with_app(weak: &Weak<RefCell<App>>, f: impl FnOnce(&mut App)) {
    let Some(app) = weak.upgrade() else {
        return;
    };
    match app.try_borrow_mut() {
        Ok(mut app) => f(&mut *app),
        Err(_) => console_error("player is busy; event dropped"),
    };
}

fn report(result: crate::Result<()>) {
    if let Err(e) = result {
        console_error(&e.to_string());
    }
}
