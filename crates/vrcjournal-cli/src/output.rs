use anyhow::Result;
use chrono::NaiveDateTime;
use clap::ValueEnum;
use is_terminal::IsTerminal;
use serde::Serialize;
use vrcjournal_types::format_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Whether plain output may use color.
pub fn use_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Render a visit window for plain output. Open visits show their start only.
pub fn format_window(joined_at: NaiveDateTime, left_at: Option<NaiveDateTime>) -> String {
    match left_at {
        Some(end) => format!("{} .. {}", format_timestamp(joined_at), format_timestamp(end)),
        None => format!("{} .. (open)", format_timestamp(joined_at)),
    }
}
