//! Dashboard data layer: fetches from the stats API, normalizes field casing
//! into canonical records, aggregates the landing summary and tracks the
//! per-panel state of the league → team → player drill-down.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod normalize;
pub mod panel;
pub mod records;
pub mod summary;

pub use api::{ApiClient, StatsSource};
pub use error::ClientError;
