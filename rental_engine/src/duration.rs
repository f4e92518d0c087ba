//! Rental length in whole days.
use chrono::{DateTime, Utc};

/// Milliseconds in one calendar day.
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days between two instants, rounded up.
///
/// Argument order does not matter. A same-instant trip is 0 days; any started
/// day counts as a full one.
pub fn get_days(pick_up: DateTime<Utc>, drop_off: DateTime<Utc>) -> i64 {
    let ms = (drop_off - pick_up).num_milliseconds().abs();
    (ms + MS_PER_DAY - 1) / MS_PER_DAY
}
