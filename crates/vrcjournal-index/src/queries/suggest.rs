use crate::error::Result;
use crate::store::ActivityStore;

/// Suggestion queries cap at 100 rows; anything narrower should come from a
/// longer prefix, not a bigger page.
const SUGGESTION_LIMIT: u32 = 100;

impl ActivityStore {
    pub fn world_suggestions(&self, keyword: &str) -> Result<Vec<String>> {
        self.suggestions("WorldName", keyword)
    }

    pub fn user_suggestions(&self, keyword: &str) -> Result<Vec<String>> {
        self.suggestions("UserName", keyword)
    }

    fn suggestions(&self, column: &str, keyword: &str) -> Result<Vec<String>> {
        let table = self.table;
        let sql = format!(
            "SELECT DISTINCT({column}) \
             FROM {table} \
             WHERE {column} LIKE ?1 \
             LIMIT {SUGGESTION_LIMIT}"
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let names = stmt
            .query_map([format!("%{keyword}%")], |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(names)
    }
}
