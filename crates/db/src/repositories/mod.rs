//! Stores over the in-memory tables.

mod comment;
mod report;

pub use comment::CommentStore;
pub use report::ReportStore;

pub(crate) use comment::CommentTable;
pub(crate) use report::ReportTable;
