use chrono::NaiveDateTime;

/// Timestamp format used by the external activity logger (local wall-clock,
/// second precision, no timezone marker).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_timestamp_round_trip() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(21, 4, 9).unwrap());

        let formatted = format_timestamp(ts);
        assert_eq!(formatted, "2024-03-15 21:04:09");
        assert_eq!(parse_timestamp(&formatted), Some(ts));
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert_eq!(parse_timestamp("2024-03-15T21:04:09Z"), None);
        assert_eq!(parse_timestamp("not a timestamp"), None);
    }
}
