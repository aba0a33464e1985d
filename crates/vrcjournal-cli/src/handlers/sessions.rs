use anyhow::Result;
use owo_colors::OwoColorize;
use vrcjournal_runtime::ActivityService;
use vrcjournal_types::{PhotoLog, WorldVisit};

use crate::args::SessionCommand;
use crate::output::{format_window, print_json, use_color, OutputFormat};

pub fn handle(
    service: &ActivityService,
    command: SessionCommand,
    format: OutputFormat,
) -> Result<()> {
    match command {
        SessionCommand::List => print_visits(&service.all_visits()?, format),
        SessionCommand::Worlds => print_visits(&service.visited_worlds()?, format),
        SessionCommand::Photos => print_photo_logs(&service.photo_logs()?, format),
    }
}

pub(crate) fn print_visits(visits: &[WorldVisit], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&visits);
    }

    let color = use_color();
    for visit in visits {
        let window = format_window(visit.joined_at, visit.left_at);
        if color {
            println!("{}  {}", window.dimmed(), visit.world_name.cyan());
        } else {
            println!("{}  {}", window, visit.world_name);
        }
    }
    println!("{} visits", visits.len());

    Ok(())
}

pub(crate) fn print_photo_logs(logs: &[PhotoLog], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&logs);
    }

    let color = use_color();
    for log in logs {
        let taken = vrcjournal_types::format_timestamp(log.created_at);
        if color {
            println!("{}  {}  {}", taken.dimmed(), log.world_name.cyan(), log.path);
        } else {
            println!("{}  {}  {}", taken, log.world_name, log.path);
        }
    }
    println!("{} photos", logs.len());

    Ok(())
}
