use anyhow::Result;
use vrcjournal_runtime::ActivityService;

use crate::args::SuggestCommand;
use crate::output::{print_json, OutputFormat};

pub fn handle(
    service: &ActivityService,
    command: SuggestCommand,
    format: OutputFormat,
) -> Result<()> {
    let names = match command {
        SuggestCommand::World { text } => service.world_suggestions(&text)?,
        SuggestCommand::User { text } => service.user_suggestions(&text)?,
    };

    if format == OutputFormat::Json {
        return print_json(&names);
    }

    for name in names {
        println!("{}", name);
    }

    Ok(())
}
