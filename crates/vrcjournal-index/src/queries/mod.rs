mod stats;
mod suggest;
mod users;
mod visits;

use chrono::NaiveDateTime;
use vrcjournal_types::{parse_timestamp, ActivityKind};

pub(crate) const WORLD_JOIN: i64 = ActivityKind::WorldJoin.as_i64();
pub(crate) const USER_JOIN: i64 = ActivityKind::UserJoin.as_i64();

/// Shared self-join fragment: for every WorldJoin entry, the timestamp of the
/// next WorldJoin by id in the same (virtual) table. Entries with no later
/// WorldJoin fall out of the subquery and surface as NULL through the outer
/// join, which is what marks a visit as open.
pub(crate) fn next_join_subquery(table: &str) -> String {
    format!(
        "LEFT OUTER JOIN (SELECT a1.ID AS JoinId, a2.Timestamp AS LeftTimestamp \
         FROM {table} a1, {table} a2 \
         WHERE a1.ActivityType = {WORLD_JOIN} \
         AND a2.ID = (SELECT min(a3.ID) FROM {table} a3 WHERE a3.ID > a1.ID AND a3.ActivityType = {WORLD_JOIN})\
         ) next_join"
    )
}

pub(crate) fn like_params(keywords: &[String]) -> Vec<String> {
    keywords.iter().map(|k| format!("%{k}%")).collect()
}

pub(crate) fn timestamp_column(idx: usize, value: String) -> rusqlite::Result<NaiveDateTime> {
    parse_timestamp(&value).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            format!("invalid timestamp: {value}").into(),
        )
    })
}

pub(crate) fn optional_timestamp_column(
    idx: usize,
    value: Option<String>,
) -> rusqlite::Result<Option<NaiveDateTime>> {
    value.map(|v| timestamp_column(idx, v)).transpose()
}
