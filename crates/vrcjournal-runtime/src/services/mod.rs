mod activity;
mod stats;

pub use activity::ActivityService;
pub use stats::{ActivityGrid, DayActivity, HourActivity, InstanceTypeCount, StatisticsService};
