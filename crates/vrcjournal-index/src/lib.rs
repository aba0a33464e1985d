// NOTE: Access-layer design rationale
//
// Why per-call connections (not a pooled/global handle)?
// - Log sources are owned and appended by the external logging tool; holding
//   a long-lived handle risks blocking its writes on some platforms
// - Sessions and encounters are derived per query anyway, nothing to cache
// - Drop-based close means every exit path, including errors, releases the file
//
// Why a temporary union table for federation (not query-time UNIONs)?
// - The reconstruction SQL self-joins the log table three deep; duplicating a
//   UNION ALL subquery at each of those depths is unreadable and slow
// - Materializing once per call keeps the single-source and federated SQL
//   byte-identical apart from the table name
// - An index on ID keeps the nearest-neighbor subqueries cheap

pub mod error;
pub mod photos;
pub mod store;

mod filter_sql;
mod queries;

pub use error::{Error, Result};
pub use photos::PhotoIndex;
pub use store::ActivityStore;
