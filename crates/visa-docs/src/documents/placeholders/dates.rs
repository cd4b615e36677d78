use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::SENTINEL;

/// Parses the date shapes the admin workflow stores: plain `YYYY-MM-DD`, RFC 3339
/// timestamps (reduced to their UTC calendar date) and naive ISO timestamps.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|stamp| stamp.date())
}

/// `DD.MM.YYYY.` with the trailing period Serbian legal text uses.
pub fn format_date_sr(value: Option<&str>) -> String {
    format_with(value, "%d.%m.%Y.")
}

/// `Month D, YYYY`.
pub fn format_date_en(value: Option<&str>) -> String {
    format_with(value, "%B %-d, %Y")
}

fn format_with(value: Option<&str>, pattern: &str) -> String {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return SENTINEL.to_string();
    };
    match parse_date(raw) {
        Some(date) => date.format(pattern).to_string(),
        None => raw.to_string(),
    }
}
