use anyhow::Result;
use std::path::PathBuf;
use vrcjournal_runtime::Config;

use crate::args::ConfigCommand;
use crate::output::{print_json, OutputFormat};

pub fn handle(
    command: ConfigCommand,
    config_path: &PathBuf,
    mut config: Config,
    format: OutputFormat,
) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            if format == OutputFormat::Json {
                return print_json(&config);
            }

            if config.log_databases.is_empty() {
                println!("log databases: (none configured)");
            } else {
                println!("log databases:");
                for path in &config.log_databases {
                    println!("  {}", path.display());
                }
            }
            match &config.photo_database {
                Some(path) => println!("photo database: {}", path.display()),
                None => println!("photo database: (default)"),
            }
            Ok(())
        }

        ConfigCommand::AddLog { path } => {
            if !config.log_databases.contains(&path) {
                config.log_databases.push(path);
            }
            config.save_to(config_path)?;
            println!("{} log database(s) configured", config.log_databases.len());
            Ok(())
        }

        ConfigCommand::ClearLogs => {
            config.log_databases.clear();
            config.save_to(config_path)?;
            println!("Log database list cleared");
            Ok(())
        }

        ConfigCommand::SetPhotoDb { path } => {
            config.photo_database = Some(path);
            config.save_to(config_path)?;
            println!("Photo database updated");
            Ok(())
        }
    }
}
