//! Common test utilities shared across integration tests.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use rusqlite::params;
use std::path::PathBuf;
use tempfile::TempDir;

use vrcjournal_index::PhotoIndex;
use vrcjournal_types::Photo;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    log_db: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    /// Fixture with one seeded log source and a photo index at the default
    /// location inside the data directory. The log source is not yet
    /// configured; call `configure_log` first.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".vrcjournal");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        let log_db = temp_dir.path().join("activity.db");
        seed_log_db(&log_db);
        seed_photo_db(&data_dir.join("photos.db"));

        Self {
            _temp_dir: temp_dir,
            data_dir,
            log_db,
        }
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("vrcjournal").expect("Binary should build");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd.env_remove("VRCJOURNAL_PATH");
        cmd
    }

    pub fn configure_log(&self) {
        self.command()
            .arg("config")
            .arg("add-log")
            .arg(&self.log_db)
            .assert()
            .success();
    }

    pub fn log_db(&self) -> &PathBuf {
        &self.log_db
    }
}

fn seed_log_db(path: &std::path::Path) {
    let conn = rusqlite::Connection::open(path).expect("Failed to create log db");
    conn.execute_batch(
        "CREATE TABLE ActivityLogs (
            ID INTEGER PRIMARY KEY,
            ActivityType INTEGER NOT NULL,
            Timestamp TEXT NOT NULL,
            UserName TEXT,
            WorldID TEXT,
            WorldName TEXT
        )",
    )
    .expect("Failed to create schema");

    let rows: &[(i64, i64, &str, Option<&str>, Option<&str>, Option<&str>)] = &[
        (1, 0, "2024-03-01 10:00:00", None, Some("wrld_a:1"), Some("Pug Museum")),
        (2, 1, "2024-03-01 10:05:00", Some("alice"), None, None),
        (3, 0, "2024-03-01 11:00:00", None, Some("wrld_b:2~private(usr_x)"), Some("Sleep Lounge")),
        (4, 1, "2024-03-01 11:10:00", Some("bob"), None, None),
        (5, 0, "2024-03-02 20:00:00", None, Some("wrld_a:1"), Some("Pug Museum")),
    ];
    for (id, kind, ts, user_name, world_id, world_name) in rows {
        conn.execute(
            "INSERT INTO ActivityLogs (ID, ActivityType, Timestamp, UserName, WorldID, WorldName) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![id, kind, ts, user_name, world_id, world_name],
        )
        .expect("Failed to insert row");
    }
}

fn seed_photo_db(path: &std::path::Path) {
    let mut index = PhotoIndex::open(path).expect("Failed to create photo db");
    index
        .insert_photos(&[
            Photo {
                path: "museum.png".into(),
                created_at: vrcjournal_types::parse_timestamp("2024-03-01 10:30:00").unwrap(),
            },
            Photo {
                path: "lounge.png".into(),
                created_at: vrcjournal_types::parse_timestamp("2024-03-01 11:30:00").unwrap(),
            },
        ])
        .expect("Failed to seed photos");
}
