use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound, Utc};

/// Naive date-time formats accepted in addition to RFC 3339 (interpreted as UTC).
const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parse a finish date as found in exported files or form input.
///
/// Accepts RFC 3339 date-times (`2025-01-01T00:00:00.000Z`), naive
/// date-times taken as UTC, and plain `YYYY-MM-DD` dates at UTC midnight.
pub fn parse_finish_date(s: &str) -> Option<DateTime<Utc>> {
    parse_any(s.trim()).map(to_millis)
}

fn parse_any(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Format a finish date the way it is written to `projects.json`.
pub fn format_finish_date(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Drop precision below what `projects.json` stores, so exports re-import unchanged.
pub fn to_millis(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.trunc_subsecs(3)
}

/// UTC midnight of a calendar date, as produced by the date picker.
pub fn date_at_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
