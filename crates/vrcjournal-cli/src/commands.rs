use anyhow::Result;
use vrcjournal_runtime::{resolve_data_dir, ActivityService, Config, StatisticsService};

use crate::args::{Cli, Commands};
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config_path = Config::config_path(&data_dir);
    let config = Config::load_from(&config_path)?;
    let photo_db = config.photo_database_path(&data_dir);

    match cli.command {
        Commands::Config { command } => {
            handlers::config_cmd::handle(command, &config_path, config, cli.format)
        }

        Commands::Photo { command } => handlers::photos::handle(command, &photo_db, cli.format),

        Commands::Session { command } => {
            let service = ActivityService::new(config.log_databases.clone(), photo_db)?;
            handlers::sessions::handle(&service, command, cli.format)
        }

        Commands::Search { command } => {
            let service = ActivityService::new(config.log_databases.clone(), photo_db)?;
            handlers::search::handle(&service, command, cli.format)
        }

        Commands::Users { since, until } => {
            let service = ActivityService::new(config.log_databases.clone(), photo_db)?;
            handlers::users::handle(&service, since.as_deref(), until.as_deref(), cli.format)
        }

        Commands::Suggest { command } => {
            let service = ActivityService::new(config.log_databases.clone(), photo_db)?;
            handlers::suggest::handle(&service, command, cli.format)
        }

        Commands::Stats { command } => {
            let service = StatisticsService::new(config.log_databases.clone(), photo_db)?;
            handlers::stats::handle(&service, command, cli.format)
        }
    }
}
