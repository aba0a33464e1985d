use std::fmt;
use std::path::PathBuf;

/// Result type for vrcjournal-index operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the index layer
#[derive(Debug)]
pub enum Error {
    /// A log source file could not be opened (missing, locked, unreadable)
    SourceUnreadable {
        path: PathBuf,
        source: rusqlite::Error,
    },

    /// A file opened fine but is not an activity-log database
    SourceFormatInvalid { path: PathBuf },

    /// No log source paths were provided
    NoSources,

    /// Database operation failed
    Database(rusqlite::Error),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SourceUnreadable { path, source } => {
                write!(f, "Cannot open log source {}: {}", path.display(), source)
            }
            Error::SourceFormatInvalid { path } => {
                write!(
                    f,
                    "{} is not an activity-log database (no ActivityLogs table)",
                    path.display()
                )
            }
            Error::NoSources => write!(f, "No activity-log sources were provided"),
            Error::Database(err) => write!(f, "Database error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::SourceUnreadable { source, .. } => Some(source),
            Error::Database(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::SourceFormatInvalid { .. } | Error::NoSources => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
