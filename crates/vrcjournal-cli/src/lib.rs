mod args;
mod commands;
mod handlers;
mod output;

pub use args::{
    Cli, Commands, ConfigCommand, PhotoCommand, SearchBy, SearchCommand, SessionCommand,
    StatsCommand, SuggestCommand,
};
pub use commands::run;
pub use output::OutputFormat;
