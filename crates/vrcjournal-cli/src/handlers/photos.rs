use anyhow::Result;
use std::path::Path;
use vrcjournal_index::PhotoIndex;

use crate::args::PhotoCommand;
use crate::output::{print_json, OutputFormat};

pub fn handle(command: PhotoCommand, photo_db: &Path, format: OutputFormat) -> Result<()> {
    match command {
        PhotoCommand::Count => {
            let index = PhotoIndex::open(photo_db)?;
            let count = index.count()?;

            if format == OutputFormat::Json {
                return print_json(&serde_json::json!({ "count": count }));
            }
            println!("{} photos indexed", count);
            Ok(())
        }
    }
}
