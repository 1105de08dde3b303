//! Date and duration helpers shared by the timer, history and mood log.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, Utc};

/// Format seconds as `M:SS`, the clock shown under the progress bar.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    let minutes = seconds / 60;
    let rest = seconds % 60;
    format!("{minutes}:{rest:02}")
}

/// Format a number of seconds as a human-readable string.
#[must_use]
pub fn format_seconds(seconds: i64) -> String {
    if seconds < 60 {
        return format!("{} second{}", seconds, if seconds == 1 { "" } else { "s" });
    }

    let total_minutes = seconds / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        if minutes > 0 {
            format!(
                "{} hour{}, {} minute{}",
                hours,
                if hours == 1 { "" } else { "s" },
                minutes,
                if minutes == 1 { "" } else { "s" }
            )
        } else {
            format!("{} hour{}", hours, if hours == 1 { "" } else { "s" })
        }
    } else {
        format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    }
}

/// Today's calendar date in the local timezone.
#[must_use]
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Local midnight of `date`, expressed in UTC.
///
/// Falls back to treating the naive midnight as UTC when the local midnight
/// does not exist (DST gap).
#[must_use]
pub fn local_midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    naive
        .and_local_timezone(Local)
        .earliest()
        .map_or_else(|| naive.and_utc(), |t| t.with_timezone(&Utc))
}

/// UTC bounds `[start, end)` covering the local days `from..=to`.
#[must_use]
pub fn local_day_range(from: NaiveDate, to: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    (
        local_midnight_utc(from),
        local_midnight_utc(to + Duration::days(1)),
    )
}

/// The `days` calendar days ending at `today`, oldest first.
#[must_use]
pub fn trailing_days(today: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..i64::from(days))
        .rev()
        .map(|offset| today - Duration::days(offset))
        .collect()
}
