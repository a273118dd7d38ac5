//! Playback session tests
//!
//! Track loading, play/pause transitions, and resume positions across track
//! switches and page reloads.

mod common;

use common::{init_logging, new_player, player_with, reload, test_playlist, FakeMedia, FullStore};
use cue_core::format_time;
use cue_playback::{
    fraction_from_pointer, MediaEvent, PlayLabel, PlaybackError, PlaybackState, Player,
    PlayerEvent,
};
use cue_storage::{MemoryStore, PlayerStore};

#[test]
fn load_without_saved_offset_starts_at_natural_start() {
    let mut player = new_player();

    player.load_track(3).unwrap();

    assert_eq!(player.current_track(), Some(3));
    assert_eq!(player.media().current_source(), Some("https://cdn.test/3.mp3"));
    assert_eq!(player.current_time(), Some(0.0));
    assert_eq!(player.state(), PlaybackState::Paused);
    assert_eq!(player.media().play_calls, 0);
}

#[test]
fn load_restores_saved_offset() {
    let backend = MemoryStore::new().with_record("trackPositions", r#"{"1":33.5}"#);
    let mut player = player_with(backend);

    player.load_track(1).unwrap();

    assert_eq!(player.current_time(), Some(33.5));
}

#[test]
fn switching_tracks_saves_and_restores_offset() {
    let mut player = new_player();

    player.load_track(0).unwrap();
    player.media_mut().advance_to(17.25);
    player.load_track(4).unwrap();

    assert_eq!(player.saved_position(0), Some(17.25));
    assert_eq!(reload(&player).saved_position(0), Some(17.25));

    player.media_mut().advance_to(3.0);
    player.load_track(0).unwrap();
    assert_eq!(player.current_time(), Some(17.25));
    assert_eq!(player.saved_position(4), Some(3.0));
}

#[test]
fn switching_with_unknown_time_saves_nothing() {
    let mut player = new_player();

    player.load_track(0).unwrap();
    player.media_mut().lose_time();
    player.load_track(1).unwrap();

    assert_eq!(player.saved_position(0), None);
    assert!(player.store().backend().is_empty());
}

#[test]
fn toggle_twice_from_unloaded() {
    let mut player = new_player();
    assert_eq!(player.state(), PlaybackState::Unloaded);

    player.toggle_play_pause().unwrap();
    assert_eq!(player.current_track(), Some(0));
    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.play_label(), PlayLabel::Pause);
    assert!(player.media().playing);

    player.toggle_play_pause().unwrap();
    assert_eq!(player.state(), PlaybackState::Paused);
    assert_eq!(player.play_label(), PlayLabel::Play);
    assert!(!player.media().playing);

    // Loaded once, not on every toggle
    assert_eq!(player.media().sources.len(), 1);
}

#[test]
fn switching_while_playing_keeps_playing() {
    let mut player = new_player();
    player.toggle_play_pause().unwrap();
    let plays_before = player.media().play_calls;

    player.load_track(2).unwrap();

    assert_eq!(player.state(), PlaybackState::Playing);
    assert_eq!(player.media().play_calls, plays_before + 1);
}

#[test]
fn midpoint_seek_survives_track_round_trip() {
    let mut player = new_player();

    player.load_track(2).unwrap();
    player.media_mut().load_metadata(90.0);

    // Click at the middle of a 200px bar starting at x=100
    let fraction = fraction_from_pointer(200.0, 100.0, 200.0).unwrap();
    assert_eq!(player.seek_to_fraction(fraction), Some(45.0));

    player.load_track(0).unwrap();
    player.load_track(2).unwrap();

    let restored = player.current_time().unwrap();
    assert!((restored - 45.0).abs() < 1e-9);
    assert_eq!(format_time(Some(restored)), "0:45");
}

#[test]
fn seek_fraction_is_clamped() {
    let mut player = new_player();
    player.load_track(0).unwrap();
    player.media_mut().load_metadata(100.0);

    assert_eq!(player.seek_to_fraction(1.7), Some(100.0));
    assert_eq!(player.seek_to_fraction(-0.2), Some(0.0));
    assert_eq!(player.seek_to_fraction(f64::NAN), None);
}

#[test]
fn pause_notification_persists_offset() {
    let mut player = new_player();
    player.toggle_play_pause().unwrap();
    player.media_mut().advance_to(61.0);

    player.handle_media_event(MediaEvent::Paused).unwrap();

    assert_eq!(player.saved_position(0), Some(61.0));
    let mut reloaded = reload(&player);
    reloaded.load_track(0).unwrap();
    assert_eq!(reloaded.current_time(), Some(61.0));
}

#[test]
fn ended_resets_position_and_label() {
    let mut player = new_player();
    player.toggle_play_pause().unwrap();
    player.media_mut().load_metadata(240.0);
    player.media_mut().advance_to(240.0);
    player.handle_media_event(MediaEvent::Paused).unwrap();
    player.drain_events();

    player.handle_media_event(MediaEvent::Ended).unwrap();

    assert!(!player.is_playing());
    assert_eq!(player.play_label(), PlayLabel::Play);
    assert_eq!(player.saved_position(0), Some(0.0));
    assert!(player
        .drain_events()
        .contains(&PlayerEvent::PlayStateChanged { playing: false }));

    // Replaying starts from the top
    let mut reloaded = reload(&player);
    reloaded.load_track(0).unwrap();
    assert_eq!(reloaded.current_time(), Some(0.0));
}

#[test]
fn next_toggle_after_end_plays_again() {
    let mut player = new_player();
    player.toggle_play_pause().unwrap();
    player.handle_media_event(MediaEvent::Ended).unwrap();

    player.toggle_play_pause().unwrap();

    assert_eq!(player.state(), PlaybackState::Playing);
    assert!(player.media().playing);
}

#[test]
fn metadata_reports_duration() {
    let mut player = new_player();
    player.load_track(0).unwrap();
    player.drain_events();
    player.media_mut().load_metadata(90.0);

    player.handle_media_event(MediaEvent::MetadataLoaded).unwrap();

    assert_eq!(
        player.drain_events(),
        vec![PlayerEvent::DurationChanged {
            duration_secs: Some(90.0)
        }]
    );
}

#[test]
fn out_of_range_track_is_rejected() {
    let mut player = new_player();
    player.load_track(1).unwrap();

    let err = player.load_track(5).unwrap_err();

    assert!(matches!(
        err,
        PlaybackError::TrackOutOfRange { index: 5, len: 5 }
    ));
    assert_eq!(player.current_track(), Some(1));
}

#[test]
fn malformed_records_start_empty() {
    let backend = MemoryStore::new()
        .with_record("cuePoints", r#"{"0": [1.0, 2.0"#)
        .with_record("trackPositions", "not json");

    let mut player = player_with(backend);

    assert_eq!(player.cue_book().track_count(), 0);
    assert!(player.positions().is_empty());
    player.toggle_play_pause().unwrap();
    assert_eq!(player.state(), PlaybackState::Playing);
}

#[test]
fn saved_entries_beyond_playlist_are_ignored() {
    let backend = MemoryStore::new()
        .with_record("cuePoints", r#"{"1":[4.0],"9":[1.0]}"#)
        .with_record("trackPositions", r#"{"2":12.0,"42":7.0}"#);

    let player = player_with(backend);

    assert_eq!(player.cues(1), &[4.0]);
    assert!(player.cues(9).is_empty());
    assert_eq!(player.saved_position(2), Some(12.0));
    assert_eq!(player.saved_position(42), None);
}

#[test]
fn saved_entries_beyond_playlist_survive_saves() {
    let backend = MemoryStore::new()
        .with_record("cuePoints", r#"{"9":[1.0]}"#)
        .with_record("trackPositions", r#"{"1":10.0,"42":7.0}"#);
    let mut player = player_with(backend);

    player.load_track(0).unwrap();
    player.media_mut().advance_to(3.0);
    player.load_track(1).unwrap();

    let store = player.store().backend();
    assert_eq!(
        store.get_raw("trackPositions"),
        Some(r#"{"0":3.0,"1":10.0,"42":7.0}"#)
    );
    assert_eq!(store.get_raw("cuePoints"), Some(r#"{"9":[1.0]}"#));
    assert_eq!(reload(&player).positions().get(&42), Some(&7.0));
}

#[test]
fn negative_saved_offset_is_not_applied_but_kept() {
    let backend = MemoryStore::new().with_record("trackPositions", r#"{"3":-5.0}"#);
    let mut player = player_with(backend);

    player.load_track(3).unwrap();
    assert_eq!(player.current_time(), Some(0.0));
    assert_eq!(player.saved_position(3), None);

    player.media_mut().advance_to(8.0);
    player.add_cue().unwrap();
    assert_eq!(
        player.store().backend().get_raw("trackPositions"),
        Some(r#"{"3":-5.0}"#)
    );
}

#[test]
fn storage_failure_surfaces_on_pause() {
    init_logging();
    let mut player = Player::new(test_playlist(), FakeMedia::new(), PlayerStore::new(FullStore));
    player.toggle_play_pause().unwrap();
    player.media_mut().advance_to(5.0);

    let err = player.handle_media_event(MediaEvent::Paused).unwrap_err();

    assert!(matches!(err, PlaybackError::Storage(_)));
}

#[test]
fn track_change_events_name_previous_track() {
    let mut player = new_player();
    player.load_track(1).unwrap();
    player.drain_events();

    player.load_track(3).unwrap();

    let events = player.drain_events();
    assert!(events.contains(&PlayerEvent::TrackChanged {
        index: 3,
        previous: Some(1)
    }));
    assert!(events.contains(&PlayerEvent::PositionSaved {
        track: 1,
        position_secs: 0.0
    }));
}
