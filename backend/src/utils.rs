use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Ordering;

lazy_static! {
    static ref DURATION_PATTERN: Option<Regex> =
        Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").ok();
}

/// Parse ISO8601 date string to a UTC timestamp
pub fn parse_published_at(date_str: &str) -> Option<DateTime<Utc>> {
    if date_str.is_empty() {
        return None;
    }

    date_str.parse::<DateTime<Utc>>().ok()
}

/// Parse ISO8601 duration string (PT1H2M3S) to total seconds.
/// Anything without a `PT` designator yields 0.
pub fn parse_iso8601_duration_to_seconds(duration_str: &str) -> u64 {
    let Some(captures) = DURATION_PATTERN
        .as_ref()
        .and_then(|pattern| pattern.captures(duration_str))
    else {
        return 0;
    };

    let component = |index: usize| -> u64 {
        captures
            .get(index)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };

    component(1)
        .saturating_mul(3600)
        .saturating_add(component(2).saturating_mul(60))
        .saturating_add(component(3))
}

/// Leading-integer parse of a stringified count ("1234", " 12abc").
/// Returns 0 when there are no leading digits.
pub fn parse_count(raw: &str) -> u64 {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse::<u64>().unwrap_or(0)
}

pub fn youtube_watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

pub fn compare_desc_float(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
