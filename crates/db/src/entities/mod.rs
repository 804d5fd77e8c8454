//! Entity definitions.

pub mod barangay;
pub mod comment;
pub mod report;

pub use barangay::Barangay;
pub use comment::Model as Comment;
pub use report::{IssueCategory, Model as Report, ReportImage, ReportStatus};
