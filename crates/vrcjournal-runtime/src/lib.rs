pub mod config;
pub mod correlate;
pub mod error;
pub mod services;

pub use config::{resolve_data_dir, Config};
pub use error::{Error, Result};
pub use services::{ActivityService, StatisticsService};
