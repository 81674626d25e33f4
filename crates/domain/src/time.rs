//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `last_seen` and similar wall-clock values.
pub type Timestamp = DateTime<Utc>;

/// Current time in milliseconds since the UNIX epoch, the unit samples are stamped with.
#[must_use]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert fractional UNIX seconds (as the backend reports `last_seen`) into a [`Timestamp`].
///
/// Returns `None` for non-finite or out-of-range values.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn from_unix_seconds(seconds: f64) -> Option<Timestamp> {
    if !seconds.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_stamp_current_time_in_millis() {
        let before = Utc::now().timestamp_millis();
        let stamp = now_millis();
        assert!(stamp >= before);
        assert!(stamp <= Utc::now().timestamp_millis());
    }

    #[test]
    fn should_convert_fractional_seconds() {
        let ts = from_unix_seconds(1_700_000_000.25).unwrap();
        assert_eq!(ts.timestamp_millis(), 1_700_000_000_250);
    }

    #[test]
    fn should_reject_non_finite_seconds() {
        assert!(from_unix_seconds(f64::NAN).is_none());
        assert!(from_unix_seconds(f64::INFINITY).is_none());
    }
}
