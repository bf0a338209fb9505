//! Timestamp value generators.

use chrono::{DateTime, Duration, Months, Utc};
use rand::Rng;

/// Format used when handing timestamps to the content store.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Generate a random timestamp in the given range (inclusive, second precision).
///
/// If the range is empty or inverted the start is returned.
pub fn generate_timestamp_range<R: Rng + ?Sized>(
    rng: &mut R,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    let start_ts = start.timestamp();
    let end_ts = end.timestamp();

    if start_ts >= end_ts {
        return start;
    }

    let random_ts = rng.gen_range(start_ts..=end_ts);
    DateTime::from_timestamp(random_ts, 0).unwrap_or(start)
}

/// Generate a random timestamp between one year before `now` and `now`.
pub fn generate_past_year<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    let year_ago = now
        .checked_sub_months(Months::new(12))
        .unwrap_or_else(|| now - Duration::days(365));
    generate_timestamp_range(rng, year_ago, now)
}

/// Render a timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_for_storage(dt: &DateTime<Utc>) -> String {
    dt.format(STORAGE_FORMAT).to_string()
}
