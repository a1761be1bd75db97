//! Duration labels.
//!
//! A duration label is `<N>시간`, `<M>분`, or `<N>시간 <M>분`; the empty
//! string means zero/unknown. Labels are parsed into total minutes and
//! re-derived from a start/end time pair whenever either endpoint changes.

use std::sync::LazyLock;

use regex::Regex;

use crate::clock::label::parse_time_to_minutes;

static HOUR_SEGMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)시간").unwrap());
static MINUTE_SEGMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)분").unwrap());

/// Total minutes encoded in a duration label. An absent segment contributes
/// 0; the empty label is 0. No upper bound.
pub fn parse_duration_minutes(label: &str) -> u32 {
    let hours: u32 = HOUR_SEGMENT
        .captures(label)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(0);
    let minutes: u32 = MINUTE_SEGMENT
        .captures(label)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(0);
    hours * 60 + minutes
}

/// Format total minutes as a duration label. The hour segment appears only
/// when hours > 0, the minute segment only when minutes > 0; zero minutes
/// total is the empty label.
pub fn format_duration(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    match (hours, minutes) {
        (0, 0) => String::new(),
        (0, m) => format!("{}분", m),
        (h, 0) => format!("{}시간", h),
        (h, m) => format!("{}시간 {}분", h, m),
    }
}

/// Derive a duration label from a start/end time pair.
///
/// Both endpoints must parse and the end must be strictly later on the same
/// day (no midnight wraparound); anything else yields the empty label.
pub fn derive_duration(start: &str, end: &str) -> String {
    let (Some(s), Some(e)) = (parse_time_to_minutes(start), parse_time_to_minutes(end)) else {
        return String::new();
    };
    if e <= s {
        return String::new();
    }
    format_duration(e - s)
}

/// Render elapsed seconds as a zero-padded `MM분 SS초` readout
pub fn format_elapsed(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}분 {:02}초", minutes, seconds)
}
