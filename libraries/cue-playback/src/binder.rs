//! UI binder
//!
//! Reflects player state onto a presentation surface. The binder holds no
//! state of its own: each render re-projects a region from the player.

use cue_core::{KeyValueStore, MediaHandle};

use crate::{
    cues::CueList,
    events::PlayerEvent,
    player::Player,
    view::{self, ProgressView, TrackRow},
};

/// A presentation surface with one method per named region
///
/// Implementations replace the region's content entirely on every call.
pub trait Surface {
    /// Track list (one clickable row per track)
    fn render_track_list(&mut self, rows: &[TrackRow]);

    /// Cue list; `placeholder` is shown when `cues` is empty
    fn render_cue_list(&mut self, cues: &CueList, placeholder: &str);

    /// Current track name label
    fn render_track_name(&mut self, name: &str);

    /// Play/pause control text
    fn render_play_label(&mut self, label: &str);

    /// Progress fill and elapsed-time label
    fn render_progress(&mut self, progress: &ProgressView);

    /// Duration label
    fn render_duration(&mut self, label: &str);
}

/// Regions touched by a batch of events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Regions {
    /// Track rows and their active highlight
    pub track_list: bool,
    /// Loaded track's name
    pub track_name: bool,
    /// Loaded track's cues or the placeholder
    pub cue_list: bool,
    /// Play/pause control text
    pub play_label: bool,
    /// Progress fill and elapsed time
    pub progress: bool,
    /// Duration label
    pub duration: bool,
}

impl Regions {
    /// Every region
    pub fn all() -> Self {
        Self {
            track_list: true,
            track_name: true,
            cue_list: true,
            play_label: true,
            progress: true,
            duration: true,
        }
    }

    /// Regions affected by `events`
    pub fn affected_by(events: &[PlayerEvent]) -> Self {
        let mut regions = Self::default();
        for event in events {
            match event {
                PlayerEvent::TrackChanged { .. } => {
                    regions.track_list = true;
                    regions.track_name = true;
                    regions.cue_list = true;
                }
                PlayerEvent::CuesChanged { .. } => regions.cue_list = true,
                PlayerEvent::PlayStateChanged { .. } => regions.play_label = true,
                PlayerEvent::Progress { .. } => regions.progress = true,
                PlayerEvent::DurationChanged { .. } => regions.duration = true,
                PlayerEvent::PositionSaved { .. } => {}
            }
        }
        regions
    }

    /// Whether nothing needs rendering
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Projects player state onto a `Surface`
pub struct UiBinder<U> {
    surface: U,
}

impl<U: Surface> UiBinder<U> {
    /// Wrap a surface
    pub fn new(surface: U) -> Self {
        Self { surface }
    }

    /// Render every region
    pub fn render_all<M: MediaHandle, S: KeyValueStore>(&mut self, player: &Player<M, S>) {
        self.render(player, Regions::all());
    }

    /// Re-render the regions affected by `events`
    pub fn apply<M: MediaHandle, S: KeyValueStore>(
        &mut self,
        player: &Player<M, S>,
        events: &[PlayerEvent],
    ) {
        let regions = Regions::affected_by(events);
        if !regions.is_empty() {
            self.render(player, regions);
        }
    }

    /// Render the given regions, each at most once
    pub fn render<M: MediaHandle, S: KeyValueStore>(
        &mut self,
        player: &Player<M, S>,
        regions: Regions,
    ) {
        if regions.track_list {
            self.surface.render_track_list(&view::track_rows(player));
        }
        if regions.track_name {
            self.surface.render_track_name(&view::track_name(player));
        }
        if regions.cue_list {
            self.surface
                .render_cue_list(&player.cue_list(), &player.labels().no_cues);
        }
        if regions.play_label {
            self.surface.render_play_label(&view::play_label(player));
        }
        if regions.progress {
            self.surface.render_progress(&view::progress(player));
        }
        if regions.duration {
            self.surface.render_duration(&view::duration(player));
        }
    }

    /// The surface
    pub fn surface(&self) -> &U {
        &self.surface
    }

    /// The surface, mutably
    pub fn surface_mut(&mut self) -> &mut U {
        &mut self.surface
    }

    /// Consume the binder, returning the surface
    pub fn into_inner(self) -> U {
        self.surface
    }
}
