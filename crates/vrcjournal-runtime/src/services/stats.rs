use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;
use std::path::PathBuf;

use vrcjournal_engine::classify_instance;
use vrcjournal_index::{ActivityStore, PhotoIndex};
use vrcjournal_types::{day_name, InstanceType, UserJoinCount, WorldJoinCount};

use crate::{Error, Result};

/// Visit count per instance access type inside a window. Every type is
/// present in the output, zero when absent.
#[derive(Debug, Clone, Serialize)]
pub struct InstanceTypeCount {
    pub instance_type: InstanceType,
    pub count: usize,
}

/// Log and photo activity for one hour of one weekday.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct HourActivity {
    pub logs: usize,
    pub photos: usize,
}

/// One weekday row of the activity grid: 24 hour buckets.
#[derive(Debug, Clone, Serialize)]
pub struct DayActivity {
    pub day_of_week: &'static str,
    pub hours: Vec<HourActivity>,
}

/// 7x24 heat map of activity, Sunday first.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityGrid {
    pub days: Vec<DayActivity>,
}

/// Aggregate views over the activity logs and the photo index.
pub struct StatisticsService {
    sources: Vec<PathBuf>,
    photo_db: PathBuf,
}

impl StatisticsService {
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

    /// Join count per world inside the window.
    pub fn world_joined_counts(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<WorldJoinCount>> {
        Ok(self.store()?.world_join_counts(from, to)?)
    }

    /// Join count per user inside the window.
    pub fn user_joined_counts(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<UserJoinCount>> {
        Ok(self.store()?.user_join_counts(from, to)?)
    }

    /// Distinct instances inside the window, classified and counted per
    /// access type.
    pub fn instance_type_counts(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<InstanceTypeCount>> {
        let world_ids = self.store()?.world_ids_between(from, to)?;

        let mut counts = [0usize; InstanceType::ALL.len()];
        for world_id in &world_ids {
            let classified = classify_instance(world_id);
            let slot = InstanceType::ALL
                .iter()
                .position(|t| *t == classified)
                .expect("every type is listed in ALL");
            counts[slot] += 1;
        }

        Ok(InstanceType::ALL
            .iter()
            .zip(counts)
            .map(|(instance_type, count)| InstanceTypeCount {
                instance_type: *instance_type,
                count,
            })
            .collect())
    }

    /// Raw activity timestamps inside the window, ascending.
    pub fn activity_timestamps(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<NaiveDateTime>> {
        Ok(self.store()?.activity_timestamps(from, to)?)
    }

    /// Weekday-by-hour activity heat map over log entries and photos.
    pub fn activity_grid(&self, from: NaiveDateTime, to: NaiveDateTime) -> Result<ActivityGrid> {
        let log_timestamps = self.store()?.activity_timestamps(from, to)?;
        let photo_timestamps = self.photo_index()?.photo_timestamps(from, to)?;

        let mut days: Vec<DayActivity> = (0..7)
            .map(|day| DayActivity {
                day_of_week: day_name(day),
                hours: vec![HourActivity::default(); 24],
            })
            .collect();

        for ts in &log_timestamps {
            let day = ts.weekday().num_days_from_sunday() as usize;
            days[day].hours[ts.hour() as usize].logs += 1;
        }
        for ts in &photo_timestamps {
            let day = ts.weekday().num_days_from_sunday() as usize;
            days[day].hours[ts.hour() as usize].photos += 1;
        }

        Ok(ActivityGrid { days })
    }

    /// Number of photos captured inside the window.
    pub fn photo_taken_count(&self, from: NaiveDateTime, to: NaiveDateTime) -> Result<usize> {
        Ok(self.photo_index()?.photo_timestamps(from, to)?.len())
    }
}
