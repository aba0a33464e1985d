use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A photo known to the app-owned index. The file itself stays on disk; the
/// index only records where it is and when it was taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub path: String,
    pub created_at: NaiveDateTime,
}

/// A photo joined against the world visit it was taken during.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoLog {
    pub path: String,
    pub created_at: NaiveDateTime,
    pub world_id: String,
    pub world_name: String,
    pub joined_at: NaiveDateTime,
    pub left_at: Option<NaiveDateTime>,
}

impl PhotoLog {
    pub fn from_visit(photo: Photo, visit: &crate::WorldVisit) -> Self {
        Self {
            path: photo.path,
            created_at: photo.created_at,
            world_id: visit.world_id.clone(),
            world_name: visit.world_name.clone(),
            joined_at: visit.joined_at,
            left_at: visit.left_at,
        }
    }
}
