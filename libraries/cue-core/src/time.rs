//! Playback time helpers
//!
//! Media elements report times as floating-point seconds that are NaN until
//! metadata has loaded. Everything above the host boundary works with
//! `Option<f64>` instead.

/// Filter a raw media time into a usable value
///
/// NaN and infinite readings (no metadata yet, live streams) become `None`.
pub fn known_time(seconds: f64) -> Option<f64> {
    seconds.is_finite().then_some(seconds)
}

/// Format seconds as `m:ss`
///
/// Minutes are not wrapped into hours. Unknown or negative times render as
/// `0:00`.
pub fn format_time(seconds: Option<f64>) -> String {
    let Some(seconds) = seconds.and_then(known_time) else {
        return "0:00".to_string();
    };
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(Some(0.0)), "0:00");
        assert_eq!(format_time(Some(5.0)), "0:05");
        assert_eq!(format_time(Some(45.7)), "0:45");
        assert_eq!(format_time(Some(60.0)), "1:00");
        assert_eq!(format_time(Some(3725.2)), "62:05");
    }

    #[test]
    fn unknown_times_render_as_zero() {
        assert_eq!(format_time(None), "0:00");
        assert_eq!(format_time(Some(f64::NAN)), "0:00");
        assert_eq!(format_time(Some(f64::INFINITY)), "0:00");
    }

    #[test]
    fn known_time_rejects_nan() {
        assert_eq!(known_time(f64::NAN), None);
        assert_eq!(known_time(12.5), Some(12.5));
    }
}
