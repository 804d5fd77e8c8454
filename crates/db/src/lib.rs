//! Data layer for ecoreport.
//!
//! Reports and comments live in process memory behind a single [`Database`]
//! handle. [`ReportStore`] and [`CommentStore`] are the only way in; neither
//! exposes its rows, so the counter and referential invariants cannot be
//! bypassed:
//!
//! 1. a report's `comment_count` equals the number of its live comments;
//! 2. no comment outlives its report;
//! 3. counters never go negative;
//! 4. `last_updated_timestamp >= submission_timestamp`.

pub mod database;
pub mod entities;
pub mod events;
pub mod fixtures;
pub mod repositories;

pub use database::Database;
pub use events::CommentEvent;
pub use repositories::{CommentStore, ReportStore};
