use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use vrcjournal_index::ActivityStore;
use vrcjournal_types::SearchFilter;

fn create_source(path: &Path, rows: &[(i64, i64, &str, Option<&str>, Option<&str>, Option<&str>)]) {
    let conn = Connection::open(path).expect("Failed to create source db");
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

    for (id, kind, ts, user_name, world_id, world_name) in rows {
        conn.execute(
            "INSERT INTO ActivityLogs (ID, ActivityType, Timestamp, UserName, WorldID, WorldName) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![id, kind, ts, user_name, world_id, world_name],
        )
        .expect("Failed to insert row");
    }
}

fn ts(s: &str) -> NaiveDateTime {
    vrcjournal_types::parse_timestamp(s).expect("valid test timestamp")
}

/// Two sources with disjoint id ranges and non-overlapping time ranges:
/// source A logged March, source B logged April.
fn two_sources(dir: &TempDir) -> (PathBuf, PathBuf) {
    let a = dir.path().join("march.db");
    let b = dir.path().join("april.db");

    create_source(
        &a,
        &[
            (1, 0, "2024-03-01 10:00:00", None, Some("wrld_a:1"), Some("Pug Museum")),
            (2, 1, "2024-03-01 10:05:00", Some("alice"), None, None),
            (3, 0, "2024-03-01 11:00:00", None, Some("wrld_b:2"), Some("Sleep Lounge")),
        ],
    );
    create_source(
        &b,
        &[
            (101, 0, "2024-04-01 10:00:00", None, Some("wrld_c:3"), Some("Midnight Rooftop")),
            (102, 1, "2024-04-01 10:05:00", Some("bob"), None, None),
            (103, 0, "2024-04-01 11:00:00", None, Some("wrld_a:1"), Some("Pug Museum")),
        ],
    );

    (a, b)
}

#[test]
fn test_single_and_federated_paths_share_semantics() {
    let dir = TempDir::new().unwrap();
    let (a, b) = two_sources(&dir);

    let store_a = ActivityStore::open(&[a.clone()]).unwrap();
    let solo = store_a
        .visits_by_world_name(&["pug".to_string()], &SearchFilter::default())
        .unwrap();
    assert_eq!(solo.len(), 1);

    let federated = ActivityStore::open(&[a, b]).unwrap();
    let both = federated
        .visits_by_world_name(&["pug".to_string()], &SearchFilter::default())
        .unwrap();
    assert_eq!(both.len(), 2);
    assert_eq!(both[0].log_id, 103);
    assert_eq!(both[1].log_id, 1);
}

#[test]
fn test_federated_visits_are_id_ordered_concatenation() {
    let dir = TempDir::new().unwrap();
    let (a, b) = two_sources(&dir);

    let store = ActivityStore::open(&[a, b]).unwrap();
    let visits = store.all_visits().unwrap();

    assert_eq!(
        visits.iter().map(|v| v.log_id).collect::<Vec<_>>(),
        vec![103, 101, 3, 1]
    );

    // Windows fully contained in one source match that source's own view
    assert_eq!(visits[3].left_at, Some(ts("2024-03-01 11:00:00")));
    assert_eq!(visits[1].left_at, Some(ts("2024-04-01 11:00:00")));

    // The globally last visit stays open
    assert!(visits[0].is_open());

    // The merged sequence is one virtual table for the nearest-neighbor
    // join, so the earlier source's trailing visit is bounded by the other
    // source's first join instead of staying open.
    assert_eq!(visits[2].left_at, Some(ts("2024-04-01 10:00:00")));
}

#[test]
fn test_federated_encounters_cross_both_sources() {
    let dir = TempDir::new().unwrap();
    let (a, b) = two_sources(&dir);

    let store = ActivityStore::open(&[a, b]).unwrap();

    let alice = store
        .encounters_by_user_name(&["alice".to_string()], &SearchFilter::default())
        .unwrap();
    assert_eq!(alice.len(), 1);
    assert_eq!(alice[0].visit.world_name, "Pug Museum");
    assert_eq!(alice[0].visit.log_id, 1);

    let bob = store
        .encounters_by_user_name(&["bob".to_string()], &SearchFilter::default())
        .unwrap();
    assert_eq!(bob.len(), 1);
    assert_eq!(bob[0].visit.world_name, "Midnight Rooftop");
    assert_eq!(bob[0].visit.log_id, 101);
}

#[test]
fn test_federated_suggestions_and_counts_merge() {
    let dir = TempDir::new().unwrap();
    let (a, b) = two_sources(&dir);

    let store = ActivityStore::open(&[a, b]).unwrap();

    let worlds = store.world_suggestions("").unwrap();
    assert_eq!(worlds.len(), 3);

    let counts = store
        .world_join_counts(ts("2024-03-01 00:00:00"), ts("2024-04-30 23:59:59"))
        .unwrap();
    let pug = counts
        .iter()
        .find(|c| c.world_name == "Pug Museum")
        .expect("Pug Museum counted");
    assert_eq!(pug.count, 2);

    let users = store
        .users_between(ts("2024-03-01 00:00:00"), ts("2024-04-30 23:59:59"))
        .unwrap();
    let names: Vec<String> = users.into_iter().map(|s| s.user_name).collect();
    assert_eq!(names, vec!["alice", "bob"]);
}

#[test]
fn test_federating_one_path_equals_single_source() {
    let dir = TempDir::new().unwrap();
    let (a, _) = two_sources(&dir);

    let direct = ActivityStore::open(&[a.clone()]).unwrap().all_visits().unwrap();
    let again = ActivityStore::open(&[a]).unwrap().all_visits().unwrap();
    assert_eq!(direct, again);
}
