pub mod config_cmd;
pub mod photos;
pub mod search;
pub mod sessions;
pub mod stats;
pub mod suggest;
pub mod users;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Turn optional `--since` / `--until` dates into inclusive window bounds.
/// Missing edges fall back to the epoch and to the current moment.
pub(crate) fn window_bounds(
    since: Option<&str>,
    until: Option<&str>,
) -> Result<(NaiveDateTime, NaiveDateTime)> {
    let from = match since {
        Some(s) => parse_date(s)?.and_time(NaiveTime::MIN),
        None => NaiveDate::from_ymd_opt(1970, 1, 1)
            .expect("valid epoch date")
            .and_time(NaiveTime::MIN),
    };

    let to = match until {
        Some(s) => parse_date(s)?
            .and_hms_opt(23, 59, 59)
            .expect("valid end of day"),
        None => Local::now().naive_local(),
    };

    Ok((from, to))
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{value}', expected YYYY-MM-DD"))
}
