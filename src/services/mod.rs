//! Parameterized read queries over the warehouse views.
//!
//! Filtering, ordering and projection all happen in SQL; rows come back as
//! JSON objects keyed by the view's own column names.

pub mod goalkeeper;
pub mod league;
pub mod player;
pub mod summary;
pub mod team;

/// One warehouse row serialized with `to_jsonb`, column names untouched.
pub type ViewRow = serde_json::Value;
