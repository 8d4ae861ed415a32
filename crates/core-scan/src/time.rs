//! Relative-time rendering for the picker's metadata column.
//!
//! Ported from `format_relative_time` in
//! `examples/original_source/src/utils.c`.

use std::time::SystemTime;

/// Renders the age of `mtime` (relative to `now`) as `"just now"`, a minute
/// count, an hour count, or a day count, in that ascending order.
pub fn format_relative_time(mtime: SystemTime, now: SystemTime) -> String {
    let diff = now.duration_since(mtime).unwrap_or_default().as_secs_f64();

    if diff < 60.0 {
        "just now".to_string()
    } else if diff < 3600.0 {
        format!("{}m ago", (diff / 60.0) as i64)
    } else if diff < 86400.0 {
        format!("{}h ago", (diff / 3600.0) as i64)
    } else {
        format!("{}d ago", (diff / 86400.0) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn buckets_match_thresholds() {
        let now = SystemTime::now();
        assert_eq!(format_relative_time(now, now), "just now");
        assert_eq!(
            format_relative_time(now - Duration::from_secs(59), now),
            "just now"
        );
        assert_eq!(
            format_relative_time(now - Duration::from_secs(300), now),
            "5m ago"
        );
        assert_eq!(
            format_relative_time(now - Duration::from_secs(2 * 3600), now),
            "2h ago"
        );
        assert_eq!(
            format_relative_time(now - Duration::from_secs(3 * 86400), now),
            "3d ago"
        );
    }

    #[test]
    fn future_mtime_does_not_panic() {
        let now = SystemTime::now();
        let future = now + Duration::from_secs(3600);
        assert_eq!(format_relative_time(future, now), "just now");
    }
}
