use anyhow::Result;
use owo_colors::OwoColorize;
use vrcjournal_runtime::ActivityService;

use crate::handlers::window_bounds;
use crate::output::{print_json, use_color, OutputFormat};

pub fn handle(
    service: &ActivityService,
    since: Option<&str>,
    until: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let (from, to) = window_bounds(since, until)?;
    let sightings = service.users_between(from, to)?;

    if format == OutputFormat::Json {
        return print_json(&sightings);
    }

    let color = use_color();
    for sighting in &sightings {
        let first_seen = vrcjournal_types::format_timestamp(sighting.first_seen_at);
        if color {
            println!("{}  {}", first_seen.dimmed(), sighting.user_name.green());
        } else {
            println!("{}  {}", first_seen, sighting.user_name);
        }
    }
    println!("{} users", sightings.len());

    Ok(())
}
