use chrono::NaiveDateTime;
use vrcjournal_types::{format_timestamp, SearchFilter, UserEncounter, UserSighting, WorldVisit};

use crate::error::Result;
use crate::filter_sql::filter_clause;
use crate::queries::{
    like_params, next_join_subquery, optional_timestamp_column, timestamp_column, USER_JOIN,
    WORLD_JOIN,
};
use crate::store::ActivityStore;

impl ActivityStore {
    /// First sighting of every user inside the window, earliest first.
    pub fn users_between(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<UserSighting>> {
        let table = self.table;
        let sql = format!(
            "SELECT MIN(ID), UserName, MIN(Timestamp) \
             FROM {table} \
             WHERE ActivityType = {USER_JOIN} AND ?1 <= Timestamp AND Timestamp <= ?2 \
             GROUP BY UserName \
             ORDER BY MIN(Timestamp)"
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let sightings = stmt
            .query_map(
                [format_timestamp(from), format_timestamp(to)],
                |row| {
                    Ok(UserSighting {
                        log_id: row.get(0)?,
                        user_name: row.get(1)?,
                        first_seen_at: timestamp_column(2, row.get(2)?)?,
                    })
                },
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(sightings)
    }

    /// Encounters with users whose name matches every keyword, paired with
    /// the visit that was active at their first matching join.
    ///
    /// The enclosing visit is the WorldJoin with the greatest id below the
    /// UserJoin's id; user joins that precede any world join have no visit
    /// and are dropped. Results are grouped per enclosing visit and the
    /// filter narrows the visit row, not the user row.
    pub fn encounters_by_user_name(
        &self,
        keywords: &[String],
        filter: &SearchFilter,
    ) -> Result<Vec<UserEncounter>> {
        let table = self.table;

        let keyword_clause: String = (1..=keywords.len())
            .map(|n| format!(" AND log1.UserName LIKE ?{n}"))
            .collect();

        let sql = format!(
            "SELECT log1.UserName, min(log1.Timestamp), \
             log2.ID, log2.Timestamp, log2.WorldID, log2.WorldName, next_join.LeftTimestamp \
             FROM {table} log1, {table} log2 \
             {next_join} ON log2.ID = next_join.JoinId \
             WHERE log1.ActivityType = {USER_JOIN} \
             AND log2.ID = (SELECT max(a4.ID) FROM {table} a4 WHERE a4.ID < log1.ID AND a4.ActivityType = {WORLD_JOIN})\
             {keyword_clause}{filter} \
             GROUP BY log2.ID \
             ORDER BY log1.ID DESC",
            next_join = next_join_subquery(table),
            filter = filter_clause(filter, "log2"),
        );

        let params = like_params(keywords);
        let mut stmt = self.conn.prepare(&sql)?;
        let encounters = stmt
            .query_map(rusqlite::params_from_iter(params.iter()), |row| {
                Ok(UserEncounter {
                    user_name: row.get(0)?,
                    first_seen_at: timestamp_column(1, row.get(1)?)?,
                    visit: WorldVisit {
                        log_id: row.get(2)?,
                        joined_at: timestamp_column(3, row.get(3)?)?,
                        world_id: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                        world_name: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
                        left_at: optional_timestamp_column(6, row.get(6)?)?,
                    },
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(encounters)
    }
}
