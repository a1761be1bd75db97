//! Time-of-day labels.
//!
//! A label is either the sentinel [`TIME_UNSET`] or a localized 12-hour
//! string of the form `<period> <H>:<MM>`, e.g. `오전 11:15` / `오후 1:00`.
//! Parsing converts a label into a comparable minute-of-day value.

/// Sentinel meaning "time not set"
pub const TIME_UNSET: &str = "시간 미정";

/// Morning / afternoon period markers
pub const PERIOD_AM: &str = "오전";
pub const PERIOD_PM: &str = "오후";

/// Parse a time label into minutes since midnight.
///
/// Returns `None` for the sentinel, the empty string, or anything that does
/// not split into a period marker plus one `H:MM` token with numeric parts
/// (malformed input is folded into the "unscheduled" path rather than
/// surfaced as an error — labels are validated at the edit-form boundary).
///
/// The 12-hour rules are deliberately asymmetric: `오후` with an hour below
/// 12 shifts into the afternoon, and `오전 12:MM` wraps to the midnight
/// hour; `오후 12:MM` is already correct and gets no shift.
pub fn parse_time_to_minutes(label: &str) -> Option<u32> {
    if label.is_empty() || label == TIME_UNSET {
        return None;
    }
    let (period, clock) = label.split_once(' ')?;
    if clock.contains(' ') {
        return None;
    }
    let (h, m) = clock.split_once(':')?;
    let hours: u32 = h.parse().ok()?;
    let minutes: u32 = m.parse().ok()?;

    let mut total = hours * 60 + minutes;
    if period == PERIOD_PM && hours < 12 {
        total += 12 * 60;
    }
    if period == PERIOD_AM && hours == 12 {
        // 오전 12:MM is the midnight hour
        total -= 12 * 60;
    }
    Some(total)
}

/// Sort-key variant: unscheduled labels map to `u32::MAX` so they order last.
pub fn time_sort_key(label: &str) -> u32 {
    parse_time_to_minutes(label).unwrap_or(u32::MAX)
}

/// Render a minute-of-day value back into a `<period> <H>:<MM>` label.
/// Inverse of [`parse_time_to_minutes`] for well-formed input; used to
/// normalize labels accepted from the command line.
pub fn format_time_label(total_minutes: u32) -> String {
    let total = total_minutes % (24 * 60);
    let hours24 = total / 60;
    let minutes = total % 60;
    let period = if hours24 < 12 { PERIOD_AM } else { PERIOD_PM };
    let hours12 = match hours24 % 12 {
        0 => 12,
        h => h,
    };
    format!("{} {}:{:02}", period, hours12, minutes)
}
