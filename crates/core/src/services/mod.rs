//! Business logic services.

#![allow(missing_docs)]

pub mod admin_auth;
pub mod comment;
pub mod report;
pub mod verification;

pub use admin_auth::{AdminAuthService, AdminSession};
pub use comment::{CommentService, SubmitCommentInput};
pub use report::{
    ReportQuery, ReportService, ReportSort, ReportStats, StatusCount, SubmitReportInput,
};
pub use verification::{
    CodeChallenge, DEMO_CODE, SpentToken, VerificationService, VerificationToken,
};
