use chrono::NaiveDateTime;
use vrcjournal_types::{format_timestamp, UserJoinCount, WorldJoinCount};

use crate::error::Result;
use crate::queries::{timestamp_column, USER_JOIN, WORLD_JOIN};
use crate::store::ActivityStore;

impl ActivityStore {
    /// Join count per world inside the window.
    pub fn world_join_counts(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<WorldJoinCount>> {
        let table = self.table;
        let sql = format!(
            "SELECT WorldName, COUNT(*) \
             FROM {table} \
             WHERE ActivityType = {WORLD_JOIN} AND ?1 <= Timestamp AND Timestamp <= ?2 \
             GROUP BY WorldName"
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let counts = stmt
            .query_map([format_timestamp(from), format_timestamp(to)], |row| {
                Ok(WorldJoinCount {
                    world_name: row.get(0)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(counts)
    }

    /// Join count per user inside the window.
    pub fn user_join_counts(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<UserJoinCount>> {
        let table = self.table;
        let sql = format!(
            "SELECT UserName, COUNT(*) \
             FROM {table} \
             WHERE ActivityType = {USER_JOIN} AND ?1 <= Timestamp AND Timestamp <= ?2 \
             GROUP BY UserName"
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let counts = stmt
            .query_map([format_timestamp(from), format_timestamp(to)], |row| {
                Ok(UserJoinCount {
                    user_name: row.get(0)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(counts)
    }

    /// Every activity timestamp inside the window, ascending. Feeds the
    /// day-of-week/hour activity grid.
    pub fn activity_timestamps(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<NaiveDateTime>> {
        let table = self.table;
        let sql = format!(
            "SELECT Timestamp \
             FROM {table} \
             WHERE ?1 <= Timestamp AND Timestamp <= ?2 \
             ORDER BY Timestamp"
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let timestamps = stmt
            .query_map([format_timestamp(from), format_timestamp(to)], |row| {
                timestamp_column(0, row.get(0)?)
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(timestamps)
    }

    /// Distinct instance identifiers seen inside the window. Classification
    /// happens in the caller; this only narrows and dedups.
    pub fn world_ids_between(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<String>> {
        let table = self.table;
        let sql = format!(
            "SELECT DISTINCT WorldID \
             FROM {table} \
             WHERE ?1 <= Timestamp AND Timestamp <= ?2 AND WorldID IS NOT NULL"
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let ids = stmt
            .query_map([format_timestamp(from), format_timestamp(to)], |row| {
                row.get(0)
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ids)
    }
}
