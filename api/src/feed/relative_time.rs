//! Coarse relative timestamps ("3 hours ago")

/// Display unit for a relative time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeUnit {
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    fn singular(self) -> &'static str {
        match self {
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
        }
    }
}

/// Format an elapsed time in seconds as `"<n> <unit>(s) ago"`.
///
/// A unit is only promoted once the smaller one strictly exceeds its cap
/// (more than 59 minutes, more than 23 hours). Negative deltas read as zero.
pub fn format_relative(delta_secs: i64) -> String {
    let minutes = delta_secs.max(0) as f64 / 60.0;

    let (value, unit) = if minutes > 59.0 {
        let hours = minutes / 60.0;
        if hours > 23.0 {
            (hours / 24.0, TimeUnit::Day)
        } else {
            (hours, TimeUnit::Hour)
        }
    } else {
        (minutes, TimeUnit::Minute)
    };

    let count = value.trunc() as u64;
    let plural = if count == 1 { "" } else { "s" };
    format!("{} {}{} ago", count, unit.singular(), plural)
}

/// Relative time of `then` as seen at `now`, both in epoch seconds
pub fn format_since(then: i64, now: i64) -> String {
    format_relative(now.saturating_sub(then))
}
