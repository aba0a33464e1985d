use anyhow::Result;
use owo_colors::OwoColorize;
use vrcjournal_runtime::StatisticsService;

use crate::args::StatsCommand;
use crate::handlers::window_bounds;
use crate::output::{print_json, use_color, OutputFormat};

pub fn handle(
    service: &StatisticsService,
    command: StatsCommand,
    format: OutputFormat,
) -> Result<()> {
    match command {
        StatsCommand::Worlds { since, until } => {
            let (from, to) = window_bounds(since.as_deref(), until.as_deref())?;
            let mut counts = service.world_joined_counts(from, to)?;
            counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.world_name.cmp(&b.world_name)));

            if format == OutputFormat::Json {
                return print_json(&counts);
            }
            for entry in &counts {
                println!("{:>6}  {}", entry.count, entry.world_name);
            }
            Ok(())
        }

        StatsCommand::Users { since, until } => {
            let (from, to) = window_bounds(since.as_deref(), until.as_deref())?;
            let mut counts = service.user_joined_counts(from, to)?;
            counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.user_name.cmp(&b.user_name)));

            if format == OutputFormat::Json {
                return print_json(&counts);
            }
            for entry in &counts {
                println!("{:>6}  {}", entry.count, entry.user_name);
            }
            Ok(())
        }

        StatsCommand::Instances { since, until } => {
            let (from, to) = window_bounds(since.as_deref(), until.as_deref())?;
            let counts = service.instance_type_counts(from, to)?;

            if format == OutputFormat::Json {
                return print_json(&counts);
            }
            for entry in &counts {
                println!("{:>6}  {}", entry.count, entry.instance_type);
            }
            Ok(())
        }

        StatsCommand::Activity { since, until } => {
            let (from, to) = window_bounds(since.as_deref(), until.as_deref())?;
            let grid = service.activity_grid(from, to)?;

            if format == OutputFormat::Json {
                return print_json(&grid);
            }

            let color = use_color();
            for day in &grid.days {
                if color {
                    println!("{}", day.day_of_week.bold());
                } else {
                    println!("{}", day.day_of_week);
                }
                for (hour, bucket) in day.hours.iter().enumerate() {
                    if bucket.logs == 0 && bucket.photos == 0 {
                        continue;
                    }
                    println!(
                        "  {:02}:00  logs {:>4}  photos {:>4}",
                        hour, bucket.logs, bucket.photos
                    );
                }
            }
            Ok(())
        }
    }
}
