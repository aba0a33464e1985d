use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Read-only view over one or more activity-log databases.
///
/// With a single source, queries run directly against its `ActivityLogs`
/// table. With several, the remaining databases are attached and a temporary
/// union table is materialized so every query shape stays identical between
/// the single-source and federated paths. Ids are only unique within one
/// source, so federated `ORDER BY ID` is a chronological proxy, not a
/// guarantee, once sources interleave in time.
///
/// The store owns its connection; dropping it closes every source.
pub struct ActivityStore {
    pub(crate) conn: Connection,
    pub(crate) table: &'static str,
}

const MERGED_TABLE: &str = "merged_logs";

impl ActivityStore {
    /// Open the given source databases read-only.
    pub fn open(paths: &[PathBuf]) -> Result<Self> {
        let [first, rest @ ..] = paths else {
            return Err(Error::NoSources);
        };

        let conn = open_source_readonly(first)?;
        ensure_log_table(&conn, "main", first)?;

        if rest.is_empty() {
            return Ok(Self {
                conn,
                table: "ActivityLogs",
            });
        }

        let mut union_sql = format!(
            "CREATE TEMPORARY TABLE {MERGED_TABLE} AS SELECT * FROM main.ActivityLogs"
        );
        for (i, path) in rest.iter().enumerate() {
            let schema = format!("db{}", i + 1);
            attach_source(&conn, &schema, path)?;
            ensure_log_table(&conn, &schema, path)?;
            union_sql.push_str(&format!(" UNION ALL SELECT * FROM {schema}.ActivityLogs"));
        }

        conn.execute_batch(&union_sql)?;
        conn.execute_batch(&format!(
            "CREATE INDEX idx_{MERGED_TABLE}_id ON {MERGED_TABLE}(ID)"
        ))?;

        Ok(Self {
            conn,
            table: MERGED_TABLE,
        })
    }
}

fn open_source_readonly(path: &Path) -> Result<Connection> {
    Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|err| Error::SourceUnreadable {
        path: path.to_path_buf(),
        source: err,
    })
}

fn attach_source(conn: &Connection, schema: &str, path: &Path) -> Result<()> {
    let sql = format!("ATTACH DATABASE ?1 AS {schema}");
    conn.execute(&sql, [path.to_string_lossy()])
        .map_err(|err| match &err {
            rusqlite::Error::SqliteFailure(failure, _)
                if failure.code == rusqlite::ErrorCode::CannotOpen =>
            {
                Error::SourceUnreadable {
                    path: path.to_path_buf(),
                    source: err,
                }
            }
            _ => Error::Database(err),
        })?;
    Ok(())
}

/// A source qualifies as an activity log when its schema carries the
/// `ActivityLogs` table. Anything else, including files that are not SQLite
/// databases at all, is a format error rather than corruption.
fn ensure_log_table(conn: &Connection, schema: &str, path: &Path) -> Result<()> {
    let sql = format!(
        "SELECT COUNT(*) FROM {schema}.sqlite_master WHERE type = 'table' AND name = 'ActivityLogs'"
    );
    let count: std::result::Result<i64, rusqlite::Error> =
        conn.query_row(&sql, [], |row| row.get(0));

    match count {
        Ok(1) => Ok(()),
        Ok(_) => Err(Error::SourceFormatInvalid {
            path: path.to_path_buf(),
        }),
        Err(rusqlite::Error::SqliteFailure(failure, _))
            if failure.code == rusqlite::ErrorCode::NotADatabase =>
        {
            Err(Error::SourceFormatInvalid {
                path: path.to_path_buf(),
            })
        }
        Err(err) => Err(Error::Database(err)),
    }
}
