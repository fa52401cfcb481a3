use chrono::{DateTime, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

/// Format a timestamp as a UTC day, for display purposes.
pub fn format_utc_day(timestamp: DateTime<Utc>) -> String {
    timestamp.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_day_only() {
        let ts = Utc.with_ymd_and_hms(2024, 7, 9, 16, 30, 0).unwrap();
        assert_eq!(format_utc_day(ts), "2024-07-09");
    }
}
