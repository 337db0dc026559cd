use chrono::{DateTime, Duration, Utc};

/// The generation time window. `start` is inclusive; events land in
/// [start, end] with offsets measured in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Window of `days` width ending at `end`
    pub fn days_ending_at(end: DateTime<Utc>, days: i64) -> Self {
        TimeWindow {
            start: end - Duration::days(days),
            end,
        }
    }

    /// Whole seconds spanned by the window
    pub fn total_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_days_ending_at() {
        let end = Utc.with_ymd_and_hms(2024, 3, 8, 12, 0, 0).unwrap();
        let window = TimeWindow::days_ending_at(end, 7);
        assert_eq!(window.start, Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
        assert_eq!(window.total_seconds(), 7 * 86_400);
        assert!(window.contains(window.start));
        assert!(window.contains(window.end));
        assert!(!window.contains(window.end + Duration::seconds(1)));
    }
}
