use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Kind of a raw activity-log entry.
///
/// The external logging tool writes these as the integer `ActivityType`
/// column: 0 for a world join, 1 for a user join. The core only ever reads
/// these two kinds; other values the tool may emit are ignored by every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    WorldJoin,
    UserJoin,
}

impl ActivityKind {
    pub const fn as_i64(self) -> i64 {
        match self {
            ActivityKind::WorldJoin => 0,
            ActivityKind::UserJoin => 1,
        }
    }

    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            0 => Some(ActivityKind::WorldJoin),
            1 => Some(ActivityKind::UserJoin),
            _ => None,
        }
    }
}

/// One reconstructed stay in a world instance.
///
/// Derived from a WorldJoin entry: the visit starts at that entry's timestamp
/// and is bounded by the timestamp of the next WorldJoin entry (by id) in the
/// same source. A visit with no later WorldJoin is open: `left_at` is `None`
/// and callers that need a concrete upper bound substitute "now" at the point
/// of use, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldVisit {
    /// Id of the WorldJoin entry this visit was reconstructed from.
    pub log_id: i64,
    /// Encoded instance identifier (carries the access-policy markers).
    pub world_id: String,
    pub world_name: String,
    pub joined_at: NaiveDateTime,
    /// Timestamp of the next WorldJoin entry, or `None` for an open visit.
    pub left_at: Option<NaiveDateTime>,
}

impl WorldVisit {
    pub fn is_open(&self) -> bool {
        self.left_at.is_none()
    }
}

/// A user's join event paired with the visit that was active at that moment.
///
/// The enclosing visit is the WorldJoin entry with the greatest id strictly
/// less than the UserJoin entry's id. Encounters whose UserJoin precedes any
/// WorldJoin have no enclosing visit and are dropped by the queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEncounter {
    pub user_name: String,
    /// Earliest matching UserJoin timestamp inside the enclosing visit.
    pub first_seen_at: NaiveDateTime,
    pub visit: WorldVisit,
}

/// First sighting of a user inside a query window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSighting {
    pub log_id: i64,
    pub user_name: String,
    pub first_seen_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldJoinCount {
    pub world_name: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserJoinCount {
    pub user_name: String,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_kind_round_trip() {
        assert_eq!(ActivityKind::from_i64(0), Some(ActivityKind::WorldJoin));
        assert_eq!(ActivityKind::from_i64(1), Some(ActivityKind::UserJoin));
        assert_eq!(ActivityKind::from_i64(7), None);
        assert_eq!(ActivityKind::WorldJoin.as_i64(), 0);
        assert_eq!(ActivityKind::UserJoin.as_i64(), 1);
    }
}
