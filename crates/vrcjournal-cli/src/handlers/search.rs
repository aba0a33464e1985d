use anyhow::Result;
use owo_colors::OwoColorize;
use vrcjournal_runtime::ActivityService;
use vrcjournal_types::UserEncounter;

use crate::args::{SearchBy, SearchCommand};
use crate::handlers::sessions::{print_photo_logs, print_visits};
use crate::output::{format_window, print_json, use_color, OutputFormat};

pub fn handle(
    service: &ActivityService,
    command: SearchCommand,
    format: OutputFormat,
) -> Result<()> {
    match command {
        SearchCommand::Sessions { query, by } => {
            let query = query.join(" ");
            match by {
                SearchBy::World => print_visits(&service.sessions_by_world(&query)?, format),
                SearchBy::User => print_encounters(&service.sessions_by_user(&query)?, format),
            }
        }

        SearchCommand::Worlds { query, by } => {
            let query = query.join(" ");
            let visits = match by {
                SearchBy::World => service.search_worlds_by_world(&query)?,
                SearchBy::User => service.search_worlds_by_user(&query)?,
            };
            print_visits(&visits, format)
        }

        SearchCommand::Photos { query, by } => {
            let query = query.join(" ");
            let logs = match by {
                SearchBy::World => service.search_photos_by_world(&query)?,
                SearchBy::User => service.search_photos_by_user(&query)?,
            };
            print_photo_logs(&logs, format)
        }
    }
}

fn print_encounters(encounters: &[UserEncounter], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&encounters);
    }

    let color = use_color();
    for encounter in encounters {
        let window = format_window(encounter.visit.joined_at, encounter.visit.left_at);
        if color {
            println!(
                "{}  {}  {}",
                window.dimmed(),
                encounter.user_name.green(),
                encounter.visit.world_name.cyan()
            );
        } else {
            println!(
                "{}  {}  {}",
                window, encounter.user_name, encounter.visit.world_name
            );
        }
    }
    println!("{} encounters", encounters.len());

    Ok(())
}
