//! Player - core orchestration
//!
//! Owns the single media handle, the loaded track, the intended play state,
//! and the in-memory copies of both persisted records. Every mutation of
//! positions or cues is written through to the store before the operation
//! returns.

use cue_core::{KeyValueStore, MediaHandle, TrackDescriptor};
use cue_storage::{PlayerStore, TrackPositions};
use tracing::{debug, info, warn};

use crate::{
    config::PlayerConfig,
    cues::{CueBook, CueList},
    error::Result,
    events::{MediaEvent, PlayerEvent},
    registry::Playlist,
    types::{Labels, PlayLabel, PlaybackState},
};

/// Central playback controller
///
/// One instance per page. Construct it once at startup; it loads the saved
/// cue points and positions immediately.
pub struct Player<M, S> {
    // Collaborators
    playlist: Playlist,
    media: M,
    store: PlayerStore<S>,
    labels: Labels,

    // Session state
    current_track: Option<usize>,
    is_playing: bool,

    // Persisted records
    cues: CueBook,
    positions: TrackPositions,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl<M: MediaHandle, S: KeyValueStore> Player<M, S> {
    /// Create a player and load its saved state
    ///
    /// Saved entries for track indices the playlist doesn't have are kept in
    /// the store untouched; lookups skip them.
    pub fn new(playlist: Playlist, media: M, store: PlayerStore<S>) -> Self {
        let saved = store.load();

        let cues = CueBook::from_points(saved.cue_points);
        let positions = saved.positions;
        let len = playlist.len();

        let foreign_cues = cues.tracks_beyond(len);
        let foreign_positions = positions.range(len..).count();
        if foreign_cues + foreign_positions > 0 {
            warn!(
                foreign_cues,
                foreign_positions, "Saved entries beyond the playlist will be ignored"
            );
        }

        info!(
            tracks = len,
            cue_tracks = cues.track_count(),
            positions = positions.len(),
            "Player initialized"
        );

        Self {
            playlist,
            media,
            store,
            labels: Labels::default(),
            current_track: None,
            is_playing: false,
            cues,
            positions,
            pending_events: Vec::new(),
        }
    }

    /// Create a player from configuration
    ///
    /// # Errors
    /// Returns an error if the configuration fails validation.
    pub fn from_config(config: &PlayerConfig, media: M, backend: S) -> Result<Self> {
        config.validate()?;
        let playlist = Playlist::new(config.playlist.clone())?;
        let store = PlayerStore::with_keys(backend, config.store_keys.clone());
        Ok(Self::new(playlist, media, store).with_labels(config.labels.clone()))
    }

    /// Replace the user-visible texts
    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    // ===== Playback Control =====

    /// Load the track at `index`
    ///
    /// Saves the outgoing track's offset, binds the media element to the new
    /// URL, seeks to the new track's saved offset (if non-zero), and starts
    /// playing when the player was already playing.
    ///
    /// # Errors
    /// `TrackOutOfRange` if `index` is not in the playlist (nothing changes),
    /// or a storage error if saving the outgoing offset fails.
    pub fn load_track(&mut self, index: usize) -> Result<()> {
        let url = self.playlist.check(index)?.url.clone();

        let previous = self.current_track;
        if previous.is_some() && self.remember_position().is_some() {
            self.persist()?;
        }

        self.current_track = Some(index);
        self.media.set_source(&url);

        if let Some(saved) = self.saved_position(index) {
            if saved > 0.0 {
                self.media.set_current_time(saved);
            }
        }

        if self.is_playing {
            self.media.play();
        }

        debug!(index, ?previous, playing = self.is_playing, "Loaded track");
        self.pending_events
            .push(PlayerEvent::TrackChanged { index, previous });
        self.pending_events
            .push(PlayerEvent::CuesChanged { track: index });
        Ok(())
    }

    /// Flip between playing and paused
    ///
    /// From the unloaded state this first loads the first track.
    ///
    /// # Errors
    /// Propagates a storage error from the implicit `load_track`.
    pub fn toggle_play_pause(&mut self) -> Result<()> {
        if self.current_track.is_none() {
            self.load_track(0)?;
        }

        if self.is_playing {
            self.media.pause();
        } else {
            self.media.play();
        }
        self.is_playing = !self.is_playing;

        debug!(playing = self.is_playing, "Toggled playback");
        self.pending_events.push(PlayerEvent::PlayStateChanged {
            playing: self.is_playing,
        });
        Ok(())
    }

    /// Seek to a fraction (0.0 - 1.0) of the track
    ///
    /// No-op while the duration is unknown. Returns the target offset.
    pub fn seek_to_fraction(&mut self, fraction: f64) -> Option<f64> {
        if !fraction.is_finite() {
            return None;
        }
        let duration = self.media.duration()?;
        let target = fraction.clamp(0.0, 1.0) * duration;
        self.media.set_current_time(target);
        debug!(fraction, target, "Seeked");
        Some(target)
    }

    // ===== Media Notifications =====

    /// React to a notification from the media element
    ///
    /// # Errors
    /// Returns a storage error if a position write fails.
    pub fn handle_media_event(&mut self, event: MediaEvent) -> Result<()> {
        match event {
            MediaEvent::TimeUpdate => {
                if let (Some(elapsed_secs), Some(fraction)) =
                    (self.media.current_time(), self.progress_fraction())
                {
                    self.pending_events.push(PlayerEvent::Progress {
                        fraction,
                        elapsed_secs,
                    });
                }
            }
            MediaEvent::MetadataLoaded => {
                self.pending_events.push(PlayerEvent::DurationChanged {
                    duration_secs: self.media.duration(),
                });
            }
            MediaEvent::Paused => {
                if self.remember_position().is_some() {
                    self.persist()?;
                }
            }
            MediaEvent::Ended => {
                self.is_playing = false;
                self.pending_events
                    .push(PlayerEvent::PlayStateChanged { playing: false });

                if let Some(track) = self.current_track {
                    self.positions.insert(track, 0.0);
                    self.pending_events.push(PlayerEvent::PositionSaved {
                        track,
                        position_secs: 0.0,
                    });
                    self.persist()?;
                }
                debug!(track = ?self.current_track, "Track ended");
            }
        }
        Ok(())
    }

    // ===== Cue Points =====

    /// Mark the current playback offset on the loaded track
    ///
    /// No-op (returns `None`) when nothing is loaded or the time is unknown.
    ///
    /// # Errors
    /// Returns a storage error if persisting fails.
    pub fn add_cue(&mut self) -> Result<Option<f64>> {
        let Some(track) = self.current_track else {
            return Ok(None);
        };
        let Some(seconds) = self.media.current_time() else {
            return Ok(None);
        };

        self.cues.insert(track, seconds);
        self.persist()?;

        debug!(track, seconds, "Added cue");
        self.pending_events.push(PlayerEvent::CuesChanged { track });
        Ok(Some(seconds))
    }

    /// Remove the loaded track's cue at `ordinal` (ascending order)
    ///
    /// Out-of-range ordinals are ignored and return `None`.
    ///
    /// # Errors
    /// Returns a storage error if persisting fails.
    pub fn delete_cue(&mut self, ordinal: usize) -> Result<Option<f64>> {
        let Some(track) = self.current_track else {
            return Ok(None);
        };
        let Some(removed) = self.cues.remove(track, ordinal) else {
            return Ok(None);
        };

        self.persist()?;

        debug!(track, ordinal, removed, "Deleted cue");
        self.pending_events.push(PlayerEvent::CuesChanged { track });
        Ok(Some(removed))
    }

    /// Seek to the loaded track's cue at `ordinal`, starting playback if paused
    ///
    /// Returns `false` when there is no such cue.
    ///
    /// # Errors
    /// Propagates errors from `toggle_play_pause`.
    pub fn jump_to_cue(&mut self, ordinal: usize) -> Result<bool> {
        let Some(track) = self.current_track else {
            return Ok(false);
        };
        let Some(seconds) = self.cues.get(track, ordinal) else {
            return Ok(false);
        };

        self.media.set_current_time(seconds);
        if !self.is_playing {
            self.toggle_play_pause()?;
        }

        debug!(track, ordinal, seconds, "Jumped to cue");
        Ok(true)
    }

    // ===== State Queries =====

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        match (self.current_track, self.is_playing) {
            (None, _) => PlaybackState::Unloaded,
            (Some(_), true) => PlaybackState::Playing,
            (Some(_), false) => PlaybackState::Paused,
        }
    }

    /// Index of the loaded track
    pub fn current_track(&self) -> Option<usize> {
        self.current_track
    }

    /// Descriptor of the loaded track
    pub fn current_descriptor(&self) -> Option<&TrackDescriptor> {
        self.current_track.and_then(|i| self.playlist.get(i))
    }

    /// Whether the player intends to be playing
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Affordance the play/pause control should show
    pub fn play_label(&self) -> PlayLabel {
        PlayLabel::for_playing(self.is_playing)
    }

    /// Current offset in seconds, if known
    pub fn current_time(&self) -> Option<f64> {
        self.media.current_time()
    }

    /// Track duration in seconds, if known
    pub fn duration(&self) -> Option<f64> {
        self.media.duration()
    }

    /// Elapsed fraction of the track, if the duration is known and non-zero
    pub fn progress_fraction(&self) -> Option<f64> {
        let duration = self.media.duration().filter(|d| *d > 0.0)?;
        let elapsed = self.media.current_time()?;
        Some((elapsed / duration).clamp(0.0, 1.0))
    }

    /// Saved resume offset for a playlist track
    ///
    /// `None` for indices outside the playlist and for unusable values.
    pub fn saved_position(&self, track: usize) -> Option<f64> {
        if !self.playlist.contains(track) {
            return None;
        }
        self.positions
            .get(&track)
            .copied()
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
    }

    /// All saved resume offsets, including entries beyond the playlist
    pub fn positions(&self) -> &TrackPositions {
        &self.positions
    }

    /// All cue points
    pub fn cue_book(&self) -> &CueBook {
        &self.cues
    }

    /// Cues of a playlist track, ascending (empty outside the playlist)
    pub fn cues(&self, track: usize) -> &[f64] {
        if self.playlist.contains(track) {
            self.cues.cues(track)
        } else {
            &[]
        }
    }

    /// Cues of the loaded track, ascending
    pub fn current_cues(&self) -> &[f64] {
        self.current_track
            .map(|t| self.cues.cues(t))
            .unwrap_or(&[])
    }

    /// Display projection of the loaded track's cues
    pub fn cue_list(&self) -> CueList {
        self.cues.list(self.current_track)
    }

    /// The playlist
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// User-visible texts
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// The media handle
    pub fn media(&self) -> &M {
        &self.media
    }

    /// The media handle, mutably (hosts and tests drive the clock through it)
    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    /// The persistent store
    pub fn store(&self) -> &PlayerStore<S> {
        &self.store
    }

    /// Take all queued events (oldest first)
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Internal =====

    /// Record the loaded track's offset in memory
    fn remember_position(&mut self) -> Option<f64> {
        let track = self.current_track?;
        let position_secs = self.media.current_time()?;
        self.positions.insert(track, position_secs);
        self.pending_events.push(PlayerEvent::PositionSaved {
            track,
            position_secs,
        });
        Some(position_secs)
    }

    fn persist(&mut self) -> Result<()> {
        self.store.save(self.cues.as_points(), &self.positions)?;
        Ok(())
    }
}

/// Fraction of a horizontal bar under a pointer
///
/// `pointer_x`, `left`, and `width` share a coordinate space (e.g. client
/// pixels). Returns `None` for a zero-width bar.
pub fn fraction_from_pointer(pointer_x: f64, left: f64, width: f64) -> Option<f64> {
    if width.is_nan() || width <= 0.0 || !pointer_x.is_finite() || !left.is_finite() {
        return None;
    }
    Some(((pointer_x - left) / width).clamp(0.0, 1.0))
}
