// Engine module - pure query-language and identifier logic.
// No I/O here; the index crate turns these values into SQL.

pub mod instance;
pub mod query;

pub use instance::classify_instance;
pub use query::parse_query;
