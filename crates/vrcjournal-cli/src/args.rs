use crate::output::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vrcjournal")]
#[command(about = "Browse VRChat activity logs and correlate them with your photos", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List reconstructed world visits
    Session {
        #[command(subcommand)]
        command: SessionCommand,
    },

    /// Search visits and photos with the filter language
    /// (e.g. "pug since:2024-01-01 dayOfWeek:saturday instanceType:friend_plus")
    Search {
        #[command(subcommand)]
        command: SearchCommand,
    },

    /// Users first seen inside a date window
    Users {
        #[arg(long, help = "Start date, YYYY-MM-DD (default: beginning of the logs)")]
        since: Option<String>,

        #[arg(long, help = "End date, YYYY-MM-DD (default: today)")]
        until: Option<String>,
    },

    /// Autocomplete world or user names
    Suggest {
        #[command(subcommand)]
        command: SuggestCommand,
    },

    /// Aggregate statistics over a date window
    Stats {
        #[command(subcommand)]
        command: StatsCommand,
    },

    /// Photo index status
    Photo {
        #[command(subcommand)]
        command: PhotoCommand,
    },

    /// Show or edit settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// All visits, most recent first (open visits have no end time)
    List,

    /// Visits that produced at least one photo
    Worlds,

    /// Every photo joined against the visit it was taken during
    Photos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchBy {
    /// Match keywords against world names
    World,
    /// Match keywords against user names
    User,
}

#[derive(Subcommand)]
pub enum SearchCommand {
    /// Matching visits, regardless of photos
    Sessions {
        /// Query string; prefix tokens (since:, untilTime:, ...) filter
        query: Vec<String>,

        #[arg(long, value_enum, default_value = "world")]
        by: SearchBy,
    },

    /// Matching visits that produced photos
    Worlds {
        query: Vec<String>,

        #[arg(long, value_enum, default_value = "world")]
        by: SearchBy,
    },

    /// Photos taken during matching visits
    Photos {
        query: Vec<String>,

        #[arg(long, value_enum, default_value = "world")]
        by: SearchBy,
    },
}

#[derive(Subcommand)]
pub enum SuggestCommand {
    /// World name candidates containing the given text (max 100)
    World { text: String },

    /// User name candidates containing the given text (max 100)
    User { text: String },
}

#[derive(Subcommand)]
pub enum StatsCommand {
    /// Visit count per world
    Worlds {
        #[arg(long)]
        since: Option<String>,

        #[arg(long)]
        until: Option<String>,
    },

    /// Encounter count per user
    Users {
        #[arg(long)]
        since: Option<String>,

        #[arg(long)]
        until: Option<String>,
    },

    /// Distinct instances per access type
    Instances {
        #[arg(long)]
        since: Option<String>,

        #[arg(long)]
        until: Option<String>,
    },

    /// Weekday-by-hour activity heat map
    Activity {
        #[arg(long)]
        since: Option<String>,

        #[arg(long)]
        until: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum PhotoCommand {
    /// Number of photos in the index
    Count,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the active configuration
    Show,

    /// Append an activity-log database to the federation list
    AddLog { path: PathBuf },

    /// Remove every configured activity-log database
    ClearLogs,

    /// Point the photo index at a different database file
    SetPhotoDb { path: PathBuf },
}
