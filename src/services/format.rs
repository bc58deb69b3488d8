use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

pub const RECENT_LABEL: &str = "Recent";
pub const DATE_TBA_LABEL: &str = "Date TBA";

const WORDS_PER_MINUTE: usize = 200;

/// Parse the timestamps the backend emits: MySQL `DATETIME` strings,
/// RFC 3339, or a bare date.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }

    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for format in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Blog cards: `Oct 16`, or "Recent" when missing or unparseable.
pub fn blog_date_label(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.format("%b %-d").to_string())
        .unwrap_or_else(|| RECENT_LABEL.to_string())
}

/// Gallery cards: `16 Oct 2026`, or "Date TBA".
pub fn gallery_date_label(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.format("%-d %b %Y").to_string())
        .unwrap_or_else(|| DATE_TBA_LABEL.to_string())
}

/// Event pages: `Friday, October 16, 2026 at 02:30 PM`. An unparseable
/// value is shown as-is since organizers sometimes type free text.
pub fn event_date_label(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => DATE_TBA_LABEL.to_string(),
        Some(raw) => match parse_timestamp(raw) {
            Some(dt) => dt.format("%A, %B %-d, %Y at %I:%M %p").to_string(),
            None => raw.to_string(),
        },
    }
}

/// `max(1, ceil(words / 200))` minutes; "2 min" when there is no text.
pub fn read_time(text: &str) -> String {
    let words = text.split_whitespace().count();
    if words == 0 {
        return "2 min".to_string();
    }
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min", minutes)
}
