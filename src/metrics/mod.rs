//! Aggregate statistics over a run's records
//!
//! [`Summary`] is computed in one pass and is independent of how it is rendered;
//! see [`crate::reports`] for the console form.

mod summary;

pub use summary::Summary;
