//! Controller
//!
//! Owns the player and its UI binder and routes every input (user actions
//! and media notifications) through one place, re-rendering afterwards.

use cue_core::{KeyValueStore, MediaHandle};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    binder::{Surface, UiBinder},
    error::Result,
    events::MediaEvent,
    player::Player,
};

/// A user interaction on the presentation surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UiAction {
    /// Play/pause control clicked
    TogglePlayPause,
    /// Cue-add control clicked
    AddCue,
    /// Track list row clicked
    SelectTrack(usize),
    /// Cue entry clicked
    JumpToCue(usize),
    /// Cue entry's remove control clicked
    DeleteCue(usize),
    /// Progress bar clicked at a fraction of its width
    SeekFraction(f64),
}

/// Single owner of the session
pub struct Controller<M, S, U> {
    player: Player<M, S>,
    binder: UiBinder<U>,
}

impl<M: MediaHandle, S: KeyValueStore, U: Surface> Controller<M, S, U> {
    /// Take ownership of a player and surface, rendering the initial state
    pub fn new(mut player: Player<M, S>, surface: U) -> Self {
        let mut binder = UiBinder::new(surface);
        player.drain_events();
        binder.render_all(&player);
        Self { player, binder }
    }

    /// Perform a user action and re-render what changed
    ///
    /// The surface is updated even when the action fails part-way, so it
    /// reflects whatever state the player ended in.
    ///
    /// # Errors
    /// Returns the player's error (out-of-range track, storage failure).
    pub fn dispatch(&mut self, action: UiAction) -> Result<()> {
        let result = match action {
            UiAction::TogglePlayPause => self.player.toggle_play_pause(),
            UiAction::AddCue => self.player.add_cue().map(drop),
            UiAction::SelectTrack(index) => self.player.load_track(index),
            UiAction::JumpToCue(ordinal) => self.player.jump_to_cue(ordinal).map(drop),
            UiAction::DeleteCue(ordinal) => self.player.delete_cue(ordinal).map(drop),
            UiAction::SeekFraction(fraction) => {
                self.player.seek_to_fraction(fraction);
                Ok(())
            }
        };
        if let Err(e) = &result {
            warn!(?action, error = %e, "Action failed");
        }
        self.sync();
        result
    }

    /// Forward a media notification and re-render what changed
    ///
    /// # Errors
    /// Returns a storage error if a position write fails.
    pub fn media_event(&mut self, event: MediaEvent) -> Result<()> {
        let result = self.player.handle_media_event(event);
        if let Err(e) = &result {
            warn!(?event, error = %e, "Media notification handling failed");
        }
        self.sync();
        result
    }

    /// The player
    pub fn player(&self) -> &Player<M, S> {
        &self.player
    }

    /// The player, mutably
    pub fn player_mut(&mut self) -> &mut Player<M, S> {
        &mut self.player
    }

    /// The presentation surface
    pub fn surface(&self) -> &U {
        self.binder.surface()
    }

    fn sync(&mut self) {
        let events = self.player.drain_events();
        self.binder.apply(&self.player, &events);
    }
}
