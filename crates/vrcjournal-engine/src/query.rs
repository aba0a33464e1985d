use chrono::{NaiveDate, NaiveTime};
use vrcjournal_types::{day_of_week_from_name, InstanceType, SearchFilter, SearchQuery};

/// Parse a free-text search query into keywords and a structured filter.
///
/// Tokens are split on whitespace. A token with a recognized prefix sets the
/// corresponding filter field; a token whose value is malformed is dropped
/// entirely (best-effort parse, not validation). Everything else is a keyword.
///
/// Recognized prefixes:
/// - `since:YYYY-MM-DD` / `until:YYYY-MM-DD` - calendar-day bounds
/// - `sinceTime:HH:MM` / `untilTime:HH:MM` - time-of-day bounds
/// - `dayOfWeek:monday` - lowercase English day name, Sunday = 0
/// - `instanceType:friend_plus` - one of the eight lowercase type names
pub fn parse_query(input: &str) -> SearchQuery {
    let mut keywords = Vec::new();
    let mut filter = SearchFilter::default();

    for token in input.split_whitespace() {
        if let Some(value) = token.strip_prefix("since:") {
            if let Some(date) = parse_date(value) {
                filter.from_date = Some(date);
            }
        } else if let Some(value) = token.strip_prefix("until:") {
            if let Some(date) = parse_date(value) {
                filter.to_date = Some(date);
            }
        } else if let Some(value) = token.strip_prefix("sinceTime:") {
            if let Some(time) = parse_time(value) {
                filter.from_time = Some(time);
            }
        } else if let Some(value) = token.strip_prefix("untilTime:") {
            if let Some(time) = parse_time(value) {
                filter.to_time = Some(time);
            }
        } else if let Some(value) = token.strip_prefix("dayOfWeek:") {
            if let Some(day) = day_of_week_from_name(value) {
                filter.day_of_week = Some(day);
            }
        } else if let Some(value) = token.strip_prefix("instanceType:") {
            if let Some(instance_type) = InstanceType::parse_name(value) {
                filter.instance_type = Some(instance_type);
            }
        } else {
            keywords.push(token.to_string());
        }
    }

    SearchQuery { keywords, filter }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_keywords() {
        let query = parse_query("pug museum");
        assert_eq!(query.keywords, vec!["pug", "museum"]);
        assert!(query.filter.is_empty());
    }

    #[test]
    fn test_date_range_and_instance_type() {
        let query = parse_query("worldA since:2024-01-01 until:2024-01-31 instanceType:public");

        assert_eq!(query.keywords, vec!["worldA"]);
        assert_eq!(
            query.filter.from_date,
            Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert_eq!(
            query.filter.to_date,
            Some(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
        );
        assert_eq!(query.filter.instance_type, Some(InstanceType::Public));
        assert_eq!(query.filter.from_time, None);
        assert_eq!(query.filter.day_of_week, None);
    }

    #[test]
    fn test_time_of_day_tokens() {
        let query = parse_query("sinceTime:09:00 untilTime:23:30");

        assert_eq!(
            query.filter.from_time,
            Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap())
        );
        assert_eq!(
            query.filter.to_time,
            Some(NaiveTime::from_hms_opt(23, 30, 0).unwrap())
        );
        assert!(query.keywords.is_empty());
    }

    #[test]
    fn test_day_of_week_token() {
        let query = parse_query("dayOfWeek:monday");
        assert_eq!(query.filter.day_of_week, Some(1));

        let query = parse_query("dayOfWeek:sunday");
        assert_eq!(query.filter.day_of_week, Some(0));
    }

    #[test]
    fn test_malformed_values_are_dropped_not_kept() {
        let query = parse_query("since:bad-date foo");
        assert_eq!(query.keywords, vec!["foo"]);
        assert!(query.filter.is_empty());

        let query = parse_query("untilTime:25:99 dayOfWeek:mon instanceType:FRIEND bar");
        assert_eq!(query.keywords, vec!["bar"]);
        assert!(query.filter.is_empty());
    }

    #[test]
    fn test_empty_prefix_value_is_dropped() {
        let query = parse_query("since: foo");
        assert_eq!(query.keywords, vec!["foo"]);
        assert!(query.filter.is_empty());
    }

    #[test]
    fn test_last_duplicate_wins() {
        let query = parse_query("since:2024-01-01 since:2024-06-01");
        assert_eq!(
            query.filter.from_date,
            Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        );
    }
}
