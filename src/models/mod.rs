//! Typed projections and request parameters for the warehouse views.

pub mod goalkeeper;
pub mod team;
