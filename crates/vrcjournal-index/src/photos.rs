use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use std::path::Path;

use vrcjournal_types::{format_timestamp, parse_timestamp, Photo};

use crate::error::Result;
use crate::queries::timestamp_column;

/// App-owned index of captured photos.
///
/// The photo files stay wherever the camera saved them; this database only
/// records path and capture time so visit windows can be joined by date
/// range. An external scanner maintains the rows through `insert_photos` /
/// `remove_photos`; the query side never touches the filesystem.
pub struct PhotoIndex {
    conn: Connection,
}

impl PhotoIndex {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        let index = Self { conn };
        index.init()?;
        Ok(index)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let index = Self { conn };
        index.init()?;
        Ok(index)
    }

    fn init(&self) -> Result<()> {
        // Durability tuned down: the index is a cache over files on disk and
        // can always be rebuilt by a rescan.
        self.conn.pragma_update(None, "journal_mode", "OFF")?;
        self.conn.pragma_update(None, "synchronous", "NORMAL")?;

        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS photos (
                path TEXT PRIMARY KEY,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_photos_created ON photos(created_at);
            "#,
        )?;

        Ok(())
    }

    /// Every indexed photo, newest first.
    pub fn all_photos(&self) -> Result<Vec<Photo>> {
        let mut stmt = self
            .conn
            .prepare("SELECT path, created_at FROM photos ORDER BY created_at DESC")?;

        let photos = stmt
            .query_map([], photo_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(photos)
    }

    /// Photos captured inside `[from, to)`, newest first. The exclusive upper
    /// bound matches the visit window convention: a photo taken at the exact
    /// moment of the next world join belongs to the next visit.
    pub fn photos_in_range(&self, from: NaiveDateTime, to: NaiveDateTime) -> Result<Vec<Photo>> {
        let mut stmt = self.conn.prepare(
            "SELECT path, created_at FROM photos \
             WHERE ?1 <= created_at AND created_at < ?2 \
             ORDER BY created_at DESC",
        )?;

        let photos = stmt
            .query_map([format_timestamp(from), format_timestamp(to)], photo_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(photos)
    }

    /// Capture timestamps inside the inclusive window, for the statistics
    /// views.
    pub fn photo_timestamps(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<NaiveDateTime>> {
        let mut stmt = self.conn.prepare(
            "SELECT created_at FROM photos \
             WHERE ?1 <= created_at AND created_at <= ?2 \
             ORDER BY created_at",
        )?;

        let timestamps = stmt
            .query_map([format_timestamp(from), format_timestamp(to)], |row| {
                timestamp_column(0, row.get(0)?)
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(timestamps)
    }

    pub fn count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM photos", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Insert or refresh a batch of photos in one transaction.
    pub fn insert_photos(&mut self, photos: &[Photo]) -> Result<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO photos (path, created_at) VALUES (?1, ?2) \
                 ON CONFLICT(path) DO UPDATE SET created_at = ?2",
            )?;
            for photo in photos {
                stmt.execute(params![&photo.path, format_timestamp(photo.created_at)])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    /// Drop index rows for files that disappeared from disk.
    pub fn remove_photos(&mut self, paths: &[String]) -> Result<()> {
        if paths.is_empty() {
            return Ok(());
        }

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare("DELETE FROM photos WHERE path = ?1")?;
            for path in paths {
                stmt.execute([path])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.conn.execute("DELETE FROM photos", [])?;
        Ok(())
    }
}

fn photo_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Photo> {
    let created_at: String = row.get(1)?;
    Ok(Photo {
        path: row.get(0)?,
        created_at: parse_timestamp(&created_at).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                1,
                rusqlite::types::Type::Text,
                format!("invalid timestamp: {created_at}").into(),
            )
        })?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 20)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn photo(path: &str, created_at: NaiveDateTime) -> Photo {
        Photo {
            path: path.to_string(),
            created_at,
        }
    }

    #[test]
    fn test_insert_and_list() {
        let mut index = PhotoIndex::open_in_memory().unwrap();
        index
            .insert_photos(&[
                photo("a.png", ts(10, 0, 0)),
                photo("b.png", ts(12, 0, 0)),
            ])
            .unwrap();

        let all = index.all_photos().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].path, "b.png");
        assert_eq!(index.count().unwrap(), 2);
    }

    #[test]
    fn test_range_upper_bound_is_exclusive() {
        let mut index = PhotoIndex::open_in_memory().unwrap();
        index
            .insert_photos(&[
                photo("before.png", ts(9, 59, 59)),
                photo("edge.png", ts(10, 30, 0)),
                photo("at-bound.png", ts(11, 0, 0)),
            ])
            .unwrap();

        let photos = index.photos_in_range(ts(10, 0, 0), ts(11, 0, 0)).unwrap();
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].path, "edge.png");
    }

    #[test]
    fn test_remove_and_clear() {
        let mut index = PhotoIndex::open_in_memory().unwrap();
        index
            .insert_photos(&[
                photo("a.png", ts(10, 0, 0)),
                photo("b.png", ts(11, 0, 0)),
            ])
            .unwrap();

        index.remove_photos(&["a.png".to_string()]).unwrap();
        assert_eq!(index.count().unwrap(), 1);

        index.clear().unwrap();
        assert_eq!(index.count().unwrap(), 0);
    }

    #[test]
    fn test_reinsert_updates_timestamp() {
        let mut index = PhotoIndex::open_in_memory().unwrap();
        index.insert_photos(&[photo("a.png", ts(10, 0, 0))]).unwrap();
        index.insert_photos(&[photo("a.png", ts(12, 0, 0))]).unwrap();

        let all = index.all_photos().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].created_at, ts(12, 0, 0));
    }
}
