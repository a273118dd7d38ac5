//! Page DOM as a `Surface`
//!
//! Expects these element ids: `trackList`, `cueList`, `currentTrackName`,
//! `playPauseBtn`, `progress`, `currentTime`, `duration`.

use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use super::console_error;
use crate::{
    binder::Surface,
    controller::UiAction,
    cues::CueList,
    view::{ProgressView, TrackRow},
};

/// Callback that feeds a row interaction back into the controller
pub type Dispatch = Rc<dyn Fn(UiAction)>;

/// Click handlers attached to one list's rows
///
/// A render can run from inside one of these handlers, so the previous
/// generation is parked instead of dropped until the next render.
#[derive(Default)]
struct RowHandlers {
    live: Vec<Closure<dyn FnMut()>>,
    retired: Vec<Closure<dyn FnMut()>>,
}

impl RowHandlers {
    fn rotate(&mut self) {
        self.retired = std::mem::take(&mut self.live);
    }
}

/// Renders into the page's named elements
pub struct DomSurface {
    document: Document,
    track_list: Element,
    cue_list: Element,
    track_name: Element,
    play_button: Element,
    progress: HtmlElement,
    current_time: Element,
    duration: Element,
    dispatch: Dispatch,
    track_handlers: RowHandlers,
    cue_handlers: RowHandlers,
}

impl DomSurface {
    /// Look up all regions by id
    ///
    /// # Errors
    /// Fails if an element is missing from the page.
    pub fn new(document: Document, dispatch: Dispatch) -> Result<Self, JsValue> {
        Ok(Self {
            track_list: element(&document, "trackList")?,
            cue_list: element(&document, "cueList")?,
            track_name: element(&document, "currentTrackName")?,
            play_button: element(&document, "playPauseBtn")?,
            progress: element(&document, "progress")?.dyn_into()?,
            current_time: element(&document, "currentTime")?,
            duration: element(&document, "duration")?,
            document,
            dispatch,
            track_handlers: RowHandlers::default(),
            cue_handlers: RowHandlers::default(),
        })
    }

    fn create(&self, tag: &str, class: &str) -> Result<Element, JsValue> {
        let el = self.document.create_element(tag)?;
        el.set_class_name(class);
        Ok(el)
    }

    fn on_click(&self, el: &Element, action: UiAction) -> Result<Closure<dyn FnMut()>, JsValue> {
        let dispatch = Rc::clone(&self.dispatch);
        let handler = Closure::wrap(Box::new(move || dispatch(action)) as Box<dyn FnMut()>);
        el.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        Ok(handler)
    }

    fn fill_track_list(&mut self, rows: &[TrackRow]) -> Result<(), JsValue> {
        self.track_handlers.rotate();
        self.track_list.set_inner_html("");

        for row in rows {
            let class = if row.active {
                "track-item active"
            } else {
                "track-item"
            };
            let item = self.create("div", class)?;
            let name = self.create("div", "track-name")?;
            name.set_text_content(Some(&row.name));
            item.append_child(&name)?;

            let handler = self.on_click(&item, UiAction::SelectTrack(row.index))?;
            self.track_handlers.live.push(handler);
            self.track_list.append_child(&item)?;
        }
        Ok(())
    }

    fn fill_cue_list(&mut self, cues: &CueList, placeholder: &str) -> Result<(), JsValue> {
        self.cue_handlers.rotate();
        self.cue_list.set_inner_html("");

        let rows = match cues {
            CueList::Empty => {
                let empty = self.create("span", "no-cues")?;
                empty.set_text_content(Some(placeholder));
                self.cue_list.append_child(&empty)?;
                return Ok(());
            }
            CueList::Entries(rows) => rows,
        };

        for row in rows {
            let item = self.create("div", "cue-item")?;

            let time = self.create("span", "cue-time")?;
            time.set_text_content(Some(&row.label));
            let jump = self.on_click(&time, UiAction::JumpToCue(row.ordinal))?;

            let remove = self.create("button", "cue-delete")?;
            remove.set_text_content(Some("×"));
            let delete = self.on_click(&remove, UiAction::DeleteCue(row.ordinal))?;

            item.append_child(&time)?;
            item.append_child(&remove)?;
            self.cue_list.append_child(&item)?;
            self.cue_handlers.live.push(jump);
            self.cue_handlers.live.push(delete);
        }
        Ok(())
    }
}

impl Surface for DomSurface {
    fn render_track_list(&mut self, rows: &[TrackRow]) {
        if let Err(e) = self.fill_track_list(rows) {
            console_error(&format!("track list render failed: {e:?}"));
        }
    }

    fn render_cue_list(&mut self, cues: &CueList, placeholder: &str) {
        if let Err(e) = self.fill_cue_list(cues, placeholder) {
            console_error(&format!("cue list render failed: {e:?}"));
        }
    }

    fn render_track_name(&mut self, name: &str) {
        self.track_name.set_text_content(Some(name));
    }

    fn render_play_label(&mut self, label: &str) {
        self.play_button.set_text_content(Some(label));
    }

    fn render_progress(&mut self, progress: &ProgressView) {
        if let Err(e) = self.progress.style().set_property("width", &progress.percent()) {
            console_error(&format!("progress render failed: {e:?}"));
        }
        self.current_time.set_text_content(Some(&progress.elapsed));
    }

    fn render_duration(&mut self, label: &str) {
        self.duration.set_text_content(Some(label));
    }
}

/// Find a required element by id
pub(crate) fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}
