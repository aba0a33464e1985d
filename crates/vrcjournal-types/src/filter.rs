use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::instance::InstanceType;

/// Structured part of a search query.
///
/// Every field is optional; an empty filter matches everything. Date bounds
/// are calendar days (expanded to 00:00:00 / 23:59:59 when applied), time
/// bounds compare the timestamp's hour:minute with an inclusive lower and an
/// exclusive upper bound, and `day_of_week` uses 0..=6 with Sunday as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub from_time: Option<NaiveTime>,
    pub to_time: Option<NaiveTime>,
    pub day_of_week: Option<u8>,
    pub instance_type: Option<InstanceType>,
}

impl SearchFilter {
    pub fn is_empty(&self) -> bool {
        *self == SearchFilter::default()
    }
}

/// A parsed free-text query: plain keywords plus the structured filter.
/// Keywords are AND-combined substring matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub keywords: Vec<String>,
    pub filter: SearchFilter,
}

/// Map a lowercase English day name to the 0..=6 weekday number (Sunday = 0)
/// used by the filter language and by SQLite's `strftime('%w', ...)`.
pub fn day_of_week_from_name(name: &str) -> Option<u8> {
    match name {
        "sunday" => Some(0),
        "monday" => Some(1),
        "tuesday" => Some(2),
        "wednesday" => Some(3),
        "thursday" => Some(4),
        "friday" => Some(5),
        "saturday" => Some(6),
        _ => None,
    }
}

pub fn day_name(day: u8) -> &'static str {
    match day {
        0 => "Sunday",
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        _ => "Saturday",
    }
}
