use chrono::{Local, NaiveDateTime};
use vrcjournal_index::PhotoIndex;
use vrcjournal_types::{Photo, UserEncounter, WorldVisit};

use crate::Result;

/// Upper bound of a visit's photo window. An open visit has no recorded end,
/// so the wall clock stands in at the moment of the query; the visit itself
/// keeps its open marker.
pub fn visit_window_end(visit: &WorldVisit) -> NaiveDateTime {
    visit.left_at.unwrap_or_else(|| Local::now().naive_local())
}

/// Photos captured during a visit: `[joined_at, end)`, upper bound exclusive.
pub fn photos_in_visit(index: &PhotoIndex, visit: &WorldVisit) -> Result<Vec<Photo>> {
    Ok(index.photos_in_range(visit.joined_at, visit_window_end(visit))?)
}

/// Photos captured while a specific user was around: the window starts at the
/// user's first sighting rather than the world join.
pub fn photos_in_encounter(index: &PhotoIndex, encounter: &UserEncounter) -> Result<Vec<Photo>> {
    Ok(index.photos_in_range(encounter.first_seen_at, visit_window_end(&encounter.visit))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn seeded_index() -> PhotoIndex {
        let mut index = PhotoIndex::open_in_memory().unwrap();
        index
            .insert_photos(&[
                Photo {
                    path: "before.png".into(),
                    created_at: ts(1, 9, 59),
                },
                Photo {
                    path: "during.png".into(),
                    created_at: ts(1, 10, 30),
                },
                Photo {
                    path: "at-leave.png".into(),
                    created_at: ts(1, 11, 0),
                },
            ])
            .unwrap();
        index
    }

    fn visit(left_at: Option<NaiveDateTime>) -> WorldVisit {
        WorldVisit {
            log_id: 1,
            world_id: "wrld_a:1".into(),
            world_name: "Pug Museum".into(),
            joined_at: ts(1, 10, 0),
            left_at,
        }
    }

    #[test]
    fn test_window_is_half_open() {
        let index = seeded_index();
        let photos = photos_in_visit(&index, &visit(Some(ts(1, 11, 0)))).unwrap();

        // 09:59 precedes the join, 11:00 belongs to the next visit
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].path, "during.png");
    }

    #[test]
    fn test_open_visit_extends_to_now() {
        let index = seeded_index();
        let photos = photos_in_visit(&index, &visit(None)).unwrap();

        let paths: Vec<&str> = photos.iter().map(|p| p.path.as_str()).collect();
        assert!(paths.contains(&"during.png"));
        assert!(paths.contains(&"at-leave.png"));
        assert!(!paths.contains(&"before.png"));
    }

    #[test]
    fn test_encounter_window_starts_at_first_sighting() {
        let index = seeded_index();
        let encounter = UserEncounter {
            user_name: "alice".into(),
            first_seen_at: ts(1, 10, 45),
            visit: visit(Some(ts(1, 11, 0))),
        };

        // 10:30 precedes alice's arrival
        let photos = photos_in_encounter(&index, &encounter).unwrap();
        assert!(photos.is_empty());

        let encounter = UserEncounter {
            first_seen_at: ts(1, 10, 15),
            ..encounter
        };
        let photos = photos_in_encounter(&index, &encounter).unwrap();
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].path, "during.png");
    }
}
