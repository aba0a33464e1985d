use chrono::NaiveDateTime;
use std::path::PathBuf;

use vrcjournal_engine::parse_query;
use vrcjournal_index::{ActivityStore, PhotoIndex};
use vrcjournal_types::{PhotoLog, UserEncounter, UserSighting, WorldVisit};

use crate::correlate::{photos_in_encounter, photos_in_visit};
use crate::{Error, Result};

/// Query surface over the activity logs and the photo index.
///
/// Holds paths, not connections: every call opens its sources, runs one
/// query and drops the handles again. Photo joins run one visit at a time;
/// the result sets are small and the caller is interactive.
pub struct ActivityService {
    sources: Vec<PathBuf>,
    photo_db: PathBuf,
}

impl ActivityService {
    pub fn new(sources: Vec<PathBuf>, photo_db: PathBuf) -> Result<Self> {
        if sources.is_empty() {
            return Err(Error::SourceNotConfigured);
        }
        Ok(Self { sources, photo_db })
    }

    fn store(&self) -> Result<ActivityStore> {
        Ok(ActivityStore::open(&self.sources)?)
    }

    fn photo_index(&self) -> Result<PhotoIndex> {
        Ok(PhotoIndex::open(&self.photo_db)?)
    }

    /// Every reconstructed visit, most recent first.
    pub fn all_visits(&self) -> Result<Vec<WorldVisit>> {
        Ok(self.store()?.all_visits()?)
    }

    /// Visits matching a free-text query against the world name.
    pub fn sessions_by_world(&self, query: &str) -> Result<Vec<WorldVisit>> {
        let parsed = parse_query(query);
        Ok(self
            .store()?
            .visits_by_world_name(&parsed.keywords, &parsed.filter)?)
    }

    /// Encounters matching a free-text query against user names.
    pub fn sessions_by_user(&self, query: &str) -> Result<Vec<UserEncounter>> {
        let parsed = parse_query(query);
        Ok(self
            .store()?
            .encounters_by_user_name(&parsed.keywords, &parsed.filter)?)
    }

    /// First sighting of every user inside the window.
    pub fn users_between(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<UserSighting>> {
        Ok(self.store()?.users_between(from, to)?)
    }

    /// Every photo joined against the visit it was taken during.
    pub fn photo_logs(&self) -> Result<Vec<PhotoLog>> {
        let store = self.store()?;
        let photos = self.photo_index()?;

        let mut result = Vec::new();
        for visit in store.all_visits()? {
            for photo in photos_in_visit(&photos, &visit)? {
                result.push(PhotoLog::from_visit(photo, &visit));
            }
        }
        Ok(result)
    }

    /// Visits that produced at least one photo. Visits without photos stay
    /// out of the world gallery but remain visible in `all_visits`.
    pub fn visited_worlds(&self) -> Result<Vec<WorldVisit>> {
        let store = self.store()?;
        let photos = self.photo_index()?;

        let mut result = Vec::new();
        for visit in store.all_visits()? {
            if !photos_in_visit(&photos, &visit)?.is_empty() {
                result.push(visit);
            }
        }
        Ok(result)
    }

    /// Photos taken in worlds matching the query.
    pub fn search_photos_by_world(&self, query: &str) -> Result<Vec<PhotoLog>> {
        let parsed = parse_query(query);
        let store = self.store()?;
        let photos = self.photo_index()?;

        let mut result = Vec::new();
        for visit in store.visits_by_world_name(&parsed.keywords, &parsed.filter)? {
            for photo in photos_in_visit(&photos, &visit)? {
                result.push(PhotoLog::from_visit(photo, &visit));
            }
        }
        Ok(result)
    }

    /// Photos taken while a matching user was present: the window opens at
    /// the user's first sighting, not at the world join.
    pub fn search_photos_by_user(&self, query: &str) -> Result<Vec<PhotoLog>> {
        let parsed = parse_query(query);
        let store = self.store()?;
        let photos = self.photo_index()?;

        let mut result = Vec::new();
        for encounter in store.encounters_by_user_name(&parsed.keywords, &parsed.filter)? {
            for photo in photos_in_encounter(&photos, &encounter)? {
                result.push(PhotoLog::from_visit(photo, &encounter.visit));
            }
        }
        Ok(result)
    }

    /// Photo-producing visits whose world name matches the query.
    pub fn search_worlds_by_world(&self, query: &str) -> Result<Vec<WorldVisit>> {
        let parsed = parse_query(query);
        let store = self.store()?;
        let photos = self.photo_index()?;

        let mut result = Vec::new();
        for visit in store.visits_by_world_name(&parsed.keywords, &parsed.filter)? {
            if !photos_in_visit(&photos, &visit)?.is_empty() {
                result.push(visit);
            }
        }
        Ok(result)
    }

    /// Photo-producing visits during which a matching user was present.
    pub fn search_worlds_by_user(&self, query: &str) -> Result<Vec<WorldVisit>> {
        let parsed = parse_query(query);
        let store = self.store()?;
        let photos = self.photo_index()?;

        let mut result = Vec::new();
        for encounter in store.encounters_by_user_name(&parsed.keywords, &parsed.filter)? {
            if !photos_in_visit(&photos, &encounter.visit)?.is_empty() {
                result.push(encounter.visit);
            }
        }
        Ok(result)
    }

    pub fn world_suggestions(&self, keyword: &str) -> Result<Vec<String>> {
        Ok(self.store()?.world_suggestions(keyword)?)
    }

    pub fn user_suggestions(&self, keyword: &str) -> Result<Vec<String>> {
        Ok(self.store()?.user_suggestions(keyword)?)
    }
}
