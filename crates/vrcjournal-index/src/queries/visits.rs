use vrcjournal_types::{SearchFilter, WorldVisit};

use crate::error::Result;
use crate::filter_sql::filter_clause;
use crate::queries::{
    like_params, next_join_subquery, optional_timestamp_column, timestamp_column, WORLD_JOIN,
};
use crate::store::ActivityStore;

impl ActivityStore {
    /// Every WorldJoin entry as a reconstructed visit, most recent first.
    pub fn all_visits(&self) -> Result<Vec<WorldVisit>> {
        self.visits_by_world_name(&[], &SearchFilter::default())
    }

    /// Visits whose world name matches every keyword, narrowed by the filter.
    /// An empty keyword list matches all visits.
    pub fn visits_by_world_name(
        &self,
        keywords: &[String],
        filter: &SearchFilter,
    ) -> Result<Vec<WorldVisit>> {
        let table = self.table;

        let keyword_clause: String = (1..=keywords.len())
            .map(|n| format!(" AND log.WorldName LIKE ?{n}"))
            .collect();

        let sql = format!(
            "SELECT log.ID, log.Timestamp, log.WorldID, log.WorldName, next_join.LeftTimestamp \
             FROM {table} log \
             {next_join} ON log.ID = next_join.JoinId \
             WHERE log.ActivityType = {WORLD_JOIN}{keyword_clause}{filter} \
             ORDER BY log.ID DESC",
            next_join = next_join_subquery(table),
            filter = filter_clause(filter, "log"),
        );

        let params = like_params(keywords);
        let mut stmt = self.conn.prepare(&sql)?;
        let visits = stmt
            .query_map(rusqlite::params_from_iter(params.iter()), |row| {
                Ok(WorldVisit {
                    log_id: row.get(0)?,
                    joined_at: timestamp_column(1, row.get(1)?)?,
                    world_id: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                    world_name: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                    left_at: optional_timestamp_column(4, row.get(4)?)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(visits)
    }
}
