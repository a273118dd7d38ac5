//! Cue Player - Playback Management
//!
//! Platform-agnostic playlist playback with resume positions and cue points.
//!
//! This crate provides:
//! - Playlist registry (fixed, index-addressed tracks)
//! - Playback session (load, play/pause, seek, end-of-track handling)
//! - Per-track resume positions, saved on switch, pause, and end
//! - Cue points (add at the current time, delete, jump)
//! - UI binder projecting state onto a presentation surface
//! - Browser bindings behind the `wasm` feature
//!
//! # Architecture
//!
//! `cue-playback` has no browser dependency of its own. The host supplies:
//! - a `MediaHandle` (an `<audio>` element in the browser)
//! - a `KeyValueStore` (`localStorage` in the browser)
//! - a `Surface` to render into
//!
//! Media notifications enter via `Player::handle_media_event`; user
//! interactions via `Controller::dispatch`.
//!
//! # Example
//!
//! ```rust
//! use cue_core::MediaHandle;
//! use cue_playback::{MediaEvent, Player, Playlist, PlaybackState};
//! use cue_storage::{MemoryStore, PlayerStore};
//!
//! # #[derive(Default)]
//! # struct Clock { time: Option<f64>, duration: Option<f64> }
//! # impl MediaHandle for Clock {
//! #     fn set_source(&mut self, _url: &str) { self.time = Some(0.0); }
//! #     fn play(&mut self) {}
//! #     fn pause(&mut self) {}
//! #     fn current_time(&self) -> Option<f64> { self.time }
//! #     fn set_current_time(&mut self, s: f64) { self.time = Some(s); }
//! #     fn duration(&self) -> Option<f64> { self.duration }
//! # }
//! let mut player = Player::new(
//!     Playlist::default(),
//!     Clock::default(),
//!     PlayerStore::new(MemoryStore::new()),
//! );
//!
//! // First toggle loads track 0 and starts playing
//! player.toggle_play_pause().unwrap();
//! assert_eq!(player.state(), PlaybackState::Playing);
//!
//! // Mark a cue at the current time
//! player.media_mut().set_current_time(12.0);
//! player.add_cue().unwrap();
//! assert_eq!(player.cue_list().labels(), vec!["0:12"]);
//!
//! // The host reports that playback paused; the position is saved
//! player.handle_media_event(MediaEvent::Paused).unwrap();
//! assert_eq!(player.saved_position(0), Some(12.0));
//! ```

mod binder;
pub mod config;
mod controller;
mod cues;
mod error;
mod events;
mod player;
mod registry;
pub mod types;
pub mod view;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use binder::{Regions, Surface, UiBinder};
pub use config::PlayerConfig;
pub use controller::{Controller, UiAction};
pub use cues::{CueBook, CueList, CueRow};
pub use error::{PlaybackError, Result};
pub use events::{MediaEvent, PlayerEvent};
pub use player::{fraction_from_pointer, Player};
pub use registry::{default_tracks, Playlist};
pub use types::{Labels, PlayLabel, PlaybackState};
pub use view::{PlayerView, ProgressView, TrackRow};
